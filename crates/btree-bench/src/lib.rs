// File: crates/btree-bench/src/lib.rs
// Summary: B-tree insert/delete benchmark producing the timing CSVs the chart generator reads.

pub mod bench;
pub mod error;
pub mod tokenize;
pub mod tree;

pub use bench::{run, Config, Operation, Report, Sample};
pub use error::{BenchError, Result};
pub use tokenize::{tokenize, tokenize_file};
pub use tree::BTree;

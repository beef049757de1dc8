// File: crates/btree-bench/src/error.rs
// Summary: Failures reading the source text or writing the timing CSVs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("cannot read {}: {source}", path.display())]
    ReadText { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    WriteCsv { path: PathBuf, source: csv::Error },
}

pub type Result<T, E = BenchError> = std::result::Result<T, E>;

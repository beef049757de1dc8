// File: crates/btree-bench/src/bench.rs
// Summary: Times every insert and delete of the word keys and writes one CSV row per operation.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{BenchError, Result};
use crate::tokenize::tokenize_file;
use crate::tree::BTree;

pub const TEXT_INPUT: &str = "blivre.txt";
pub const INSERT_OUTPUT: &str = "insert_times.csv";
pub const DELETE_OUTPUT: &str = "delete_times.csv";

pub const CSV_HEADER: [&str; 3] = ["operation", "node_count", "time_us"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Delete => "delete",
        }
    }
}

/// One timed operation: tree size right after it and how long it took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub node_count: usize,
    pub time_us: u64,
}

/// Most operations finish in under a microsecond and read as 0. A zero reading is
/// reported as one more than the previous reported value; a non-zero reading
/// resets that baseline.
#[derive(Debug, Default)]
struct ZeroFill {
    last: u64,
}

impl ZeroFill {
    fn adjust(&mut self, time_us: u64) -> u64 {
        if time_us == 0 {
            self.last += 1;
        } else {
            self.last = time_us;
        }
        self.last
    }
}

fn elapsed_us(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX)
}

/// Insert every token in order, timing each insert.
pub fn time_inserts(tree: &mut BTree, tokens: &[String]) -> Vec<Sample> {
    let mut fill = ZeroFill::default();
    tokens
        .iter()
        .map(|token| {
            let started = Instant::now();
            tree.insert(token.as_str());
            let time_us = fill.adjust(elapsed_us(started));
            Sample { node_count: tree.node_count(), time_us }
        })
        .collect()
}

/// Remove `tokens[i]` for each `i` in `order`, timing each removal.
pub fn time_deletes(tree: &mut BTree, tokens: &[String], order: &[usize]) -> Vec<Sample> {
    let mut fill = ZeroFill::default();
    order
        .iter()
        .filter_map(|&i| tokens.get(i))
        .map(|token| {
            let started = Instant::now();
            tree.remove(token);
            let time_us = fill.adjust(elapsed_us(started));
            Sample { node_count: tree.node_count(), time_us }
        })
        .collect()
}

/// A shuffled permutation of `0..len`. The same seed always gives the same order.
pub fn delete_order(len: usize, seed: Option<u64>) -> Vec<usize> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(&mut rng);
    order
}

/// Write `operation,node_count,time_us` rows, overwriting `path`.
pub fn write_samples(path: impl AsRef<Path>, op: Operation, samples: &[Sample]) -> Result<()> {
    let path = path.as_ref();
    let wrap = |source: csv::Error| BenchError::WriteCsv { path: path.to_path_buf(), source };

    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    writer.write_record(CSV_HEADER).map_err(wrap)?;
    for s in samples {
        writer.serialize((op.as_str(), s.node_count, s.time_us)).map_err(wrap)?;
    }
    writer.flush().map_err(|e| wrap(e.into()))?;
    log::debug!("{}: {} {} rows", path.display(), samples.len(), op.as_str());
    Ok(())
}

/// Input text, output files and delete order of one benchmark run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub text_path: PathBuf,
    pub insert_out: PathBuf,
    pub delete_out: PathBuf,
    /// Seed for the delete order; a fresh random order when `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_path: PathBuf::from(TEXT_INPUT),
            insert_out: PathBuf::from(INSERT_OUTPUT),
            delete_out: PathBuf::from(DELETE_OUTPUT),
            seed: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Report {
    pub tokens: usize,
    pub inserts: Vec<Sample>,
    pub deletes: Vec<Sample>,
    /// Tree height after the last insert, when the tree is largest.
    pub height: usize,
    pub elapsed: Duration,
}

impl Report {
    pub fn summary_lines(&self, config: &Config) -> Vec<String> {
        let peak = self.inserts.last().map_or(1, |s| s.node_count);
        vec![
            format!("Tree after inserts: {peak} nodes, height {}", self.height),
            format!("{} insert timings written to {}", self.inserts.len(), config.insert_out.display()),
            format!("{} delete timings written to {}", self.deletes.len(), config.delete_out.display()),
            format!("Finished in {:.2} seconds", self.elapsed.as_secs_f64()),
        ]
    }
}

/// Tokenize the text, insert every token, then remove them all in shuffled order.
/// The insert CSV is written before deletion starts.
pub fn run(config: &Config) -> Result<Report> {
    let tokens = tokenize_file(&config.text_path)?;
    println!("Total tokens: {}", tokens.len());
    let started = Instant::now();

    let mut tree = BTree::new();
    let inserts = time_inserts(&mut tree, &tokens);
    let height = tree.height();
    log::info!("inserted {} keys into {} nodes, height {height}", tree.len(), tree.node_count());
    write_samples(&config.insert_out, Operation::Insert, &inserts)?;

    let order = delete_order(tokens.len(), config.seed);
    let deletes = time_deletes(&mut tree, &tokens, &order);
    if !tree.is_empty() {
        log::warn!("{} keys left after deleting every token", tree.len());
    }
    write_samples(&config.delete_out, Operation::Delete, &deletes)?;

    Ok(Report { tokens: tokens.len(), inserts, deletes, height, elapsed: started.elapsed() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{}", (i * 7) % 13)).collect()
    }

    #[test]
    fn zero_readings_climb_from_the_last_real_one() {
        let mut fill = ZeroFill::default();
        let got: Vec<u64> = [0, 0, 5, 0, 0, 2, 0].into_iter().map(|t| fill.adjust(t)).collect();
        assert_eq!(got, vec![1, 2, 5, 6, 7, 2, 3]);
    }

    #[test]
    fn one_sample_per_operation_with_positive_times() {
        let tokens = words(40);
        let mut tree = BTree::new();
        let inserts = time_inserts(&mut tree, &tokens);
        assert_eq!(inserts.len(), 40);
        assert!(inserts.iter().all(|s| s.time_us > 0));
        // node count never shrinks while inserting
        assert!(inserts.windows(2).all(|w| w[0].node_count <= w[1].node_count));
        assert_eq!(inserts.last().map(|s| s.node_count), Some(tree.node_count()));

        let order = delete_order(tokens.len(), Some(7));
        let deletes = time_deletes(&mut tree, &tokens, &order);
        assert_eq!(deletes.len(), 40);
        assert!(tree.is_empty());
        assert_eq!(deletes.last().map(|s| s.node_count), Some(1));
    }

    #[test]
    fn delete_order_is_a_seeded_permutation() {
        let a = delete_order(100, Some(42));
        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
        assert_eq!(a, delete_order(100, Some(42)));
        assert!(delete_order(0, None).is_empty());
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let dir = PathBuf::from("target/test_out/bench");
        std::fs::create_dir_all(&dir).expect("create test dir");
        let path = dir.join("rows.csv");
        let samples = [Sample { node_count: 1, time_us: 3 }, Sample { node_count: 3, time_us: 1 }];
        write_samples(&path, Operation::Delete, &samples).expect("write");

        let body = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(body, "operation,node_count,time_us\ndelete,1,3\ndelete,3,1\n");
    }

    #[test]
    fn unwritable_output_is_a_write_error() {
        let err = write_samples("target/test_out/bench/no/such/dir/x.csv", Operation::Insert, &[]).unwrap_err();
        assert!(matches!(err, BenchError::WriteCsv { .. }), "{err}");
    }
}

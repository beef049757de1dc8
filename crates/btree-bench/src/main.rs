// File: crates/btree-bench/src/main.rs
// Summary: CLI entry point; benchmarks the B-tree over a text file and writes the timing CSVs.

use std::path::PathBuf;
use std::process::ExitCode;

use btree_bench::bench::{self, Config, Report};
use clap::Parser;

/// Time every B-tree insert and delete of the words of a text file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Text whose words are inserted as keys.
    #[arg(long = "text", default_value = bench::TEXT_INPUT)]
    text_path: PathBuf,

    /// CSV receiving one row per insert.
    #[arg(long, default_value = bench::INSERT_OUTPUT)]
    insert_out: PathBuf,

    /// CSV receiving one row per delete.
    #[arg(long, default_value = bench::DELETE_OUTPUT)]
    delete_out: PathBuf,

    /// Seed for the delete order (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self { text_path: args.text_path, insert_out: args.insert_out, delete_out: args.delete_out, seed: args.seed }
    }
}

fn outcome(config: &Config, result: &btree_bench::Result<Report>) -> (Vec<String>, u8) {
    match result {
        Ok(report) => (report.summary_lines(config), 0),
        Err(e) => (vec![format!("Error: {e}")], 1),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from(Args::parse());
    log::debug!("{config:?}");

    let result = bench::run(&config);
    let (lines, code) = outcome(&config, &result);
    for line in lines {
        println!("{line}");
    }
    ExitCode::from(code)
}

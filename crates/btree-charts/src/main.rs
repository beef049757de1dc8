// File: crates/btree-charts/src/main.rs
// Summary: CLI entry point; renders the four benchmark charts and maps the outcome to an exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use btree_charts::pipeline::{self, Config, Report};
use chart_core::Theme;
use clap::Parser;

/// Render B-tree insertion/deletion benchmark charts.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV with insertion timings (`node_count`, `time_us` columns).
    #[arg(long = "insert", default_value = pipeline::INSERT_INPUT)]
    insert_path: PathBuf,

    /// CSV with deletion timings (`node_count`, `time_us` columns).
    #[arg(long = "delete", default_value = pipeline::DELETE_INPUT)]
    delete_path: PathBuf,

    /// Directory the PNG charts are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self { insert_path: args.insert_path, delete_path: args.delete_path, out_dir: args.out_dir }
    }
}

/// Console lines and process exit status for a finished run.
fn outcome(result: &btree_charts::Result<Report>) -> (Vec<String>, u8) {
    match result {
        Ok(report) => {
            let mut lines = vec![String::new()];
            lines.extend(report.summary_lines());
            (lines, 0)
        }
        Err(e) => (vec![format!("\nError during execution: {e}")], 1),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from(Args::parse());
    log::debug!("{config:?}");

    let result = pipeline::run(&config, &Theme::default());
    if let Err(e) = &result {
        log::debug!("{e:?}");
    }
    let (lines, code) = outcome(&result);
    for line in lines {
        println!("{line}");
    }
    ExitCode::from(code)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use btree_charts::{Error, LoadError};

    use super::*;

    #[test]
    fn failure_prints_one_error_line_and_exits_with_one() {
        let err = Error::DataUnavailable(LoadError::NotFound { path: PathBuf::from("insert_times.csv") });
        let (lines, code) = outcome(&Err(err));
        assert_eq!(code, 1);
        assert_eq!(lines, vec!["\nError during execution: data unavailable: data file not found: insert_times.csv"]);
    }

    #[test]
    fn success_prints_summary_and_exits_with_zero() {
        let report = Report { insert_rows: 0, delete_rows: 0, charts: Vec::new(), elapsed: Duration::from_millis(1500) };
        let (lines, code) = outcome(&Ok(report));
        assert_eq!(code, 0);
        assert_eq!(lines, vec!["", "Finished in 1.50 seconds", "Charts generated successfully:"]);
    }

    #[test]
    fn flags_default_to_fixed_paths() {
        let config = Config::from(Args::parse_from(["btree-charts"]));
        assert_eq!(config, Config::default());
    }
}

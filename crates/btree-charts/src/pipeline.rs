// File: crates/btree-charts/src/pipeline.rs
// Summary: Sequential driver: load both series, render the four charts, report timing and outputs.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chart_core::Theme;

use crate::error::Result;
use crate::load::load_series;
use crate::render::{
    render_comparison, render_cumulative, render_single, Rendered, COMPARISON_FILE, CUMULATIVE_FILE,
    DELETION_LABEL, INSERTION_LABEL,
};

pub const INSERT_INPUT: &str = "insert_times.csv";
pub const DELETE_INPUT: &str = "delete_times.csv";

pub const INSERTION_FILE: &str = "insertion_performance.png";
pub const DELETION_FILE: &str = "deletion_performance.png";

pub const INSERTION_TITLE: &str = "B-Tree Insertion Performance";
pub const DELETION_TITLE: &str = "B-Tree Deletion Performance";

/// Where the run reads its data and writes its charts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub insert_path: PathBuf,
    pub delete_path: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            insert_path: PathBuf::from(INSERT_INPUT),
            delete_path: PathBuf::from(DELETE_INPUT),
            out_dir: PathBuf::from("."),
        }
    }
}

/// A chart produced by a run plus a one-line description for the summary.
#[derive(Clone, Debug)]
pub struct ChartFile {
    pub rendered: Rendered,
    pub description: &'static str,
}

impl ChartFile {
    pub fn file_name(&self) -> String {
        self.rendered
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug)]
pub struct Report {
    pub insert_rows: usize,
    pub delete_rows: usize,
    pub charts: Vec<ChartFile>,
    pub elapsed: Duration,
}

impl Report {
    /// Summary lines printed after a successful run.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Finished in {:.2} seconds", self.elapsed.as_secs_f64()),
            "Charts generated successfully:".to_string(),
        ];
        lines.extend(self.charts.iter().map(|c| format!("- {} ({})", c.file_name(), c.description)));
        lines
    }
}

/// Run the whole pipeline. The first failure aborts the run; charts already
/// written stay on disk.
pub fn run(config: &Config, theme: &Theme) -> Result<Report> {
    println!("Starting chart generation...");
    let started = Instant::now();

    println!("Loading data...");
    let insert = load_series(&config.insert_path)?;
    let delete = load_series(&config.delete_path)?;
    println!("Data loaded - Insert: {} rows, Delete: {} rows", insert.len(), delete.len());

    let out = config.out_dir.as_path();
    let mut charts = Vec::with_capacity(4);
    let mut record = |rendered: Rendered, description: &'static str| {
        println!("{rendered}");
        charts.push(ChartFile { rendered, description });
    };

    record(
        render_single(&insert, INSERTION_TITLE, out.join(INSERTION_FILE), theme.insertion, INSERTION_LABEL, theme)?,
        "insertion time by number of nodes",
    );
    record(
        render_single(&delete, DELETION_TITLE, out.join(DELETION_FILE), theme.deletion, DELETION_LABEL, theme)?,
        "deletion time by number of nodes",
    );
    record(render_comparison(&insert, &delete, out, theme)?, "insertion vs. deletion");
    record(render_cumulative(&insert, &delete, out, theme)?, "cumulative time");

    let report = Report {
        insert_rows: insert.len(),
        delete_rows: delete.len(),
        charts,
        elapsed: started.elapsed(),
    };
    log::info!("rendered {} charts in {:?}", report.charts.len(), report.elapsed);
    Ok(report)
}

/// File names a successful run writes into `out_dir`, in order.
pub fn output_paths(out_dir: impl AsRef<Path>) -> [PathBuf; 4] {
    let out = out_dir.as_ref();
    [
        out.join(INSERTION_FILE),
        out.join(DELETION_FILE),
        out.join(COMPARISON_FILE),
        out.join(CUMULATIVE_FILE),
    ]
}

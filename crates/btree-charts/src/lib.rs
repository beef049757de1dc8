// File: crates/btree-charts/src/lib.rs
// Summary: Chart generator for B-tree insertion/deletion benchmarks.

pub mod error;
pub mod load;
pub mod measurement;
pub mod pipeline;
pub mod render;

pub use error::{Error, LoadError, Result};
pub use load::load_series;
pub use measurement::{CumulativeSeries, Measurement, MeasurementSeries};
pub use pipeline::{run, Config, Report};
pub use render::{
    comparison_chart, cumulative_chart, render_comparison, render_cumulative, render_single, single_chart, Rendered,
};

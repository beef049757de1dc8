// File: crates/btree-charts/src/load.rs
// Summary: CSV loader keeping only the `node_count` and `time_us` columns as 32-bit integers.

use std::path::Path;

use crate::error::LoadError;
use crate::measurement::{Measurement, MeasurementSeries};

pub const NODE_COUNT_COLUMN: &str = "node_count";
pub const TIME_US_COLUMN: &str = "time_us";

/// Load a benchmark CSV with a header row. Columns other than `node_count` and
/// `time_us` are ignored; row order is preserved.
pub fn load_series(path: impl AsRef<Path>) -> Result<MeasurementSeries, LoadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::NotFound { path: path.to_path_buf() });
    }

    let unreadable = |source| LoadError::Unreadable { path: path.to_path_buf(), source };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(unreadable)?;

    let headers = rdr
        .headers()
        .map_err(unreadable)?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("{} headers: {:?}", path.display(), headers);

    let idx = |want: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == want)
            .ok_or(LoadError::MissingColumn { path: path.to_path_buf(), column: want })
    };
    let i_nodes = idx(NODE_COUNT_COLUMN)?;
    let i_time = idx(TIME_US_COLUMN)?;

    let mut points = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(unreadable)?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let parse = |i: usize, column: &'static str| -> Result<i32, LoadError> {
            let raw = rec.get(i).unwrap_or("");
            raw.parse::<i32>().map_err(|_| LoadError::InvalidValue {
                path: path.to_path_buf(),
                line,
                column,
                value: raw.to_string(),
            })
        };
        points.push(Measurement {
            node_count: parse(i_nodes, NODE_COUNT_COLUMN)?,
            time_us: parse(i_time, TIME_US_COLUMN)?,
        });
    }

    log::info!("loaded {} rows from {}", points.len(), path.display());
    Ok(MeasurementSeries::new(path, points))
}

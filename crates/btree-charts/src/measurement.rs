// File: crates/btree-charts/src/measurement.rs
// Summary: Measurement series (node count vs. per-operation time) and its cumulative-time view.

use std::path::{Path, PathBuf};

/// One benchmark sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    pub node_count: i32,
    pub time_us: i32,
}

/// Samples in the order the benchmark produced them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasurementSeries {
    pub source: PathBuf,
    pub points: Vec<Measurement>,
}

impl MeasurementSeries {
    pub fn new(source: impl Into<PathBuf>, points: Vec<Measurement>) -> Self {
        Self { source: source.into(), points }
    }

    /// Build from `(node_count, time_us)` pairs.
    pub fn from_pairs(source: impl Into<PathBuf>, pairs: &[(i32, i32)]) -> Self {
        let points = pairs
            .iter()
            .map(|&(node_count, time_us)| Measurement { node_count, time_us })
            .collect();
        Self::new(source, points)
    }

    pub fn source(&self) -> &Path { &self.source }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// (node_count, time_us) as chart coordinates.
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|m| (m.node_count as f64, m.time_us as f64)).collect()
    }

    /// Running total of `time_us` at every sample.
    pub fn cumulative(&self) -> CumulativeSeries {
        let mut total = 0i64;
        let points = self
            .points
            .iter()
            .map(|m| {
                total += i64::from(m.time_us);
                (m.node_count, total)
            })
            .collect();
        CumulativeSeries { points }
    }
}

/// Node count paired with the time spent on all operations so far.
/// Totals are `i64` so long runs of `i32` samples cannot overflow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CumulativeSeries {
    pub points: Vec<(i32, i64)>,
}

impl CumulativeSeries {
    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Cumulative totals only, in sample order.
    pub fn totals(&self) -> Vec<i64> {
        self.points.iter().map(|&(_, t)| t).collect()
    }

    /// Total after the last sample (0 for an empty series).
    pub fn last_total(&self) -> i64 {
        self.points.last().map(|&(_, t)| t).unwrap_or(0)
    }

    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|&(n, t)| (n as f64, t as f64)).collect()
    }
}

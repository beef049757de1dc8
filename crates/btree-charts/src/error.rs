// File: crates/btree-charts/src/error.rs
// Summary: Typed failures for loading measurement files and rendering charts.

use std::path::PathBuf;

use chart_core::RenderError;
use thiserror::Error;

/// A measurement file could not be turned into a series ("data unavailable").
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("{} has no `{column}` column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}:{line}: `{column}` value {value:?} is not a 32-bit integer", path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("data unavailable: {0}")]
    DataUnavailable(#[from] LoadError),

    #[error("failed to render {}: {source}", path.display())]
    Render {
        path: PathBuf,
        source: RenderError,
    },
}

impl Error {
    /// True for every failure raised while loading input data.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Error::DataUnavailable(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

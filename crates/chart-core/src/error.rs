// File: crates/chart-core/src/error.rs
// Summary: Typed errors for loading, statistics and scale construction.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a delimited resource into a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed delimited data: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column `{0}` not found in header")]
    MissingColumn(&'static str),
    /// Likes must be a non-negative integer; never coerced to zero.
    #[error("line {line}: Likes value {value:?} is not a non-negative integer")]
    InvalidLikes { line: u64, value: String },
    #[error("line {line}: Date value {value:?} is not a recognised calendar date")]
    InvalidDate { line: u64, value: String },
}

/// Failure while deriving statistics or chart geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComputationError {
    #[error("statistic requested over an empty group")]
    EmptyGroup,
    #[error("non-finite value {0} in numeric input")]
    NonFinite(f64),
    #[error("chart `{0}` has no records to draw")]
    EmptyDataset(&'static str),
    #[error(transparent)]
    Scale(#[from] ScaleError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("ordinal scale needs at least one palette entry")]
    EmptyPalette,
}

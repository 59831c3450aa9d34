//! Structured error types for dataset loading
//!
//! All failures in this crate are load-time integrity errors: the aggregation
//! pipeline itself is total over a well-formed record store and raises no
//! domain errors of its own.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record on line {line}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("event {name:?} on line {line} has no sub-contests")]
    EmptyEvent { name: String, line: usize },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

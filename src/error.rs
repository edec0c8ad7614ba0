// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] ::csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("not a catalog identifier: {0:?}")]
    InvalidId(String),

    #[error("column {0:?} not found")]
    MissingColumn(&'static str),

    #[error("record {id}: malformed {column} value: {message}")]
    Encoding {
        id: String,
        column: &'static str,
        message: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

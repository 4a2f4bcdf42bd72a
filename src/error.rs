use std::io;
use std::path::PathBuf;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures while reading a word list from disk
#[derive(Error, Debug)]
pub enum WordStoreError {
    #[error("Cannot read word list {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed row in {path} at line {line}: expected {expected} fields, found {found}")]
    Malformed {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Unparseable row in {path} at line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

impl WordStoreError {
    pub fn file_access(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        WordStoreError::FileAccess { path: path.into(), source: source.into() }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlashcardError {
    #[error("Unrecognized flashcard mode: {0}")]
    InvalidMode(String),
}

/// Errors surfaced to HTTP clients
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown word list: {0}")]
    UnknownList(String),

    #[error("Invalid query: {0}")]
    BadQuery(String),

    #[error("No cards available")]
    NoCards,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownList(_) | AppError::BadQuery(_) => StatusCode::BAD_REQUEST,
            AppError::NoCards => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

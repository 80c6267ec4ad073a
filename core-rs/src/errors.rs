//! Error types for the dashboard core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ambiguous name: {0}")]
    Ambiguous(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Malformed template: {0}")]
    MalformedTemplate(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashError>;

// ABOUTME: Centralized error handling for the calculators' command-line layer
// The cost functions themselves are total and never fail

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostError {
    #[error("Usage error: {0}")]
    Usage(#[from] clap::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CostError>;

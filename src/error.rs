use crate::config::ConfigError;
use thiserror::Error;

/// Anything that can go wrong between building a request and printing its
/// result. All of it ends at the query boundary as one log line.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

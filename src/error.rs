use thiserror::Error;

/// Errors raised by a remote model client
#[derive(Error, Debug)]
pub enum ModelError {
    /// No endpoint URL was configured
    #[error("Model endpoint is not configured: {0}")]
    NotConfigured(String),

    /// Network failure, timeout, or an unreadable response body
    #[error("Model request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status
    #[error("Model endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// An extra header could not be turned into a valid HTTP header
    #[error("Invalid request header: {0}")]
    InvalidHeader(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Reasons the remote extraction path produced no usable ingredient list
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Model response contains no JSON array")]
    NoJsonArray,

    #[error("Model response array is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Model response JSON is not a list")]
    NotAList,
}

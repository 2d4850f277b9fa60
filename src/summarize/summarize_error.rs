use thiserror::Error;

/// Chat completion errors.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Connection failed, timeout
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response (quota, invalid key, unknown model)
    #[error("API error: {0}")]
    Api(String),

    /// Invalid JSON, no choices
    #[error("Parse error: {0}")]
    Parse(String),
}

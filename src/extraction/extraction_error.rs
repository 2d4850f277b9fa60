use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Extraction API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Extract job failed. Error: {0}")]
    JobFailed(String),

    #[error("Extract job still running after {polls} status checks")]
    TimedOut { polls: u32 },
}

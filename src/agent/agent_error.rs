use crate::domain::CityError;
use crate::extraction::ExtractionError;
use crate::summarize::SummarizeError;
use thiserror::Error;

/// Everything that can stop an agent operation. Never leaves the agent:
/// callers receive `user_message()` in place of results.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    City(#[from] CityError),

    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("summarization failed: {0}")]
    Summarize(#[from] SummarizeError),

    #[error("extraction returned no trend data")]
    NoTrendData,
}

impl AgentError {
    pub fn user_message(&self) -> String {
        match self {
            AgentError::City(e) => e.user_message().to_string(),
            AgentError::Extraction(e) if e.to_string().contains("No valid URLs found to scrape") => {
                "No valid property listings found for this city. Please check the city name or try a different one."
                    .to_string()
            }
            AgentError::Extraction(e) => format!("Error: {e}"),
            AgentError::Summarize(e) => format!("Error: {e}"),
            AgentError::NoTrendData => "No price trends data available".to_string(),
        }
    }
}

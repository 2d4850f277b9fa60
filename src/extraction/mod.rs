mod extraction_error;
mod firecrawl;
mod models;

pub use extraction_error::ExtractionError;
pub use firecrawl::FirecrawlClient;
pub use models::{ExtractRequest, ExtractResponse};

/// A hosted service that scrapes a set of URLs and returns data matching a schema.
pub trait Extractor {
    fn extract(&self, request: &ExtractRequest) -> Result<ExtractResponse, ExtractionError>;
}

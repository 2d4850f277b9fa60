// firecrawl.rs
use crate::extraction::{ExtractRequest, ExtractResponse, ExtractionError, Extractor};
use reqwest::blocking::{Client, Response};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Blocking client for the Firecrawl `extract` endpoint.
///
/// Extraction runs as a job: the initial POST usually returns only a job id,
/// which is then polled until it reaches a terminal status.
pub struct FirecrawlClient {
    client: Client,
    api_key: String,
    base_url: String,
    poll_interval: Duration,
    max_polls: u32,
}

impl FirecrawlClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ExtractionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExtractionError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            poll_interval: Duration::from_secs(2),
            max_polls: 60,
        })
    }

    pub fn with_polling(mut self, interval: Duration, max_polls: u32) -> Self {
        self.poll_interval = interval;
        self.max_polls = max_polls;
        self
    }

    fn start_job(&self, request: &ExtractRequest) -> Result<ExtractResponse, ExtractionError> {
        let resp = self
            .client
            .post(format!("{}/v1/extract", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|e| ExtractionError::Network(e.to_string()))?;

        Self::read_response(resp)
    }

    fn job_status(&self, id: &str) -> Result<ExtractResponse, ExtractionError> {
        let resp = self
            .client
            .get(format!("{}/v1/extract/{}", self.base_url, id))
            .bearer_auth(&self.api_key)
            .send()
            .map_err(|e| ExtractionError::Network(e.to_string()))?;

        Self::read_response(resp)
    }

    fn read_response(resp: Response) -> Result<ExtractResponse, ExtractionError> {
        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ExtractionError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ExtractionError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ExtractionError::JsonParse(e.to_string()))
    }
}

impl Extractor for FirecrawlClient {
    fn extract(&self, request: &ExtractRequest) -> Result<ExtractResponse, ExtractionError> {
        let start = Instant::now();
        info!(urls = request.urls.len(), "Starting extraction");

        let started = self.start_job(request)?;

        // Either rejected outright or answered synchronously.
        let id = match (&started.id, started.success, started.is_finished()) {
            (Some(id), true, false) => id.clone(),
            _ => {
                debug!(success = started.success, status = ?started.status, "Extraction answered without a job");
                return Ok(started);
            }
        };

        for poll in 1..=self.max_polls {
            std::thread::sleep(self.poll_interval);

            let current = self.job_status(&id)?;
            debug!(job = %id, poll, status = ?current.status, "Extraction job status");

            match current.status.as_deref() {
                Some("completed") => {
                    info!(job = %id, elapsed = ?start.elapsed(), "Extraction completed");
                    return Ok(current);
                }
                Some("failed") | Some("cancelled") => {
                    let reason = current
                        .error
                        .clone()
                        .or(current.status.clone())
                        .unwrap_or_default();
                    warn!(job = %id, %reason, "Extraction job did not complete");
                    return Err(ExtractionError::JobFailed(reason));
                }
                _ => {}
            }
        }

        warn!(job = %id, polls = self.max_polls, "Extraction job timed out");
        Err(ExtractionError::TimedOut {
            polls: self.max_polls,
        })
    }
}

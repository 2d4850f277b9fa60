use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::extraction::{Extractor, FirecrawlClient};
use crate::geocode::{Geocoder, NominatimClient};
use crate::session::SessionStore;
use crate::storage::SavedSearchLog;
use crate::summarize::{OpenAiClient, Summarizer};

/// Builds the remote-service clients. API keys come from the visitor's
/// session, so extraction and summarization clients are built per request.
pub trait Services: Send + Sync {
    fn extractor(&self, api_key: &str) -> Result<Box<dyn Extractor>, ServerError>;
    fn summarizer(&self, api_key: &str, model_id: &str)
        -> Result<Box<dyn Summarizer>, ServerError>;
    fn geocoder(&self) -> &dyn Geocoder;
}

/// Real HTTP clients configured from `AppConfig`.
pub struct LiveServices {
    config: AppConfig,
    geocoder: NominatimClient,
}

impl LiveServices {
    pub fn new(config: &AppConfig) -> Result<Self, ServerError> {
        let geocoder = NominatimClient::new(&config.nominatim_base_url, config.http_timeout)
            .map_err(|e| ServerError::Upstream(format!("geocoding client: {e}")))?;

        Ok(Self {
            config: config.clone(),
            geocoder,
        })
    }
}

impl Services for LiveServices {
    fn extractor(&self, api_key: &str) -> Result<Box<dyn Extractor>, ServerError> {
        let client = FirecrawlClient::new(
            api_key,
            &self.config.firecrawl_base_url,
            self.config.http_timeout,
        )
        .map_err(|e| ServerError::Upstream(format!("extraction client: {e}")))?
        .with_polling(
            self.config.extract_poll_interval,
            self.config.extract_max_polls,
        );

        Ok(Box::new(client))
    }

    fn summarizer(
        &self,
        api_key: &str,
        model_id: &str,
    ) -> Result<Box<dyn Summarizer>, ServerError> {
        let client = OpenAiClient::new(
            api_key,
            model_id,
            &self.config.openai_base_url,
            self.config.http_timeout,
        )
        .map_err(|e| ServerError::Upstream(format!("summarization client: {e}")))?;

        Ok(Box::new(client))
    }

    fn geocoder(&self) -> &dyn Geocoder {
        &self.geocoder
    }
}

/// Shared across all server workers.
pub struct AppState {
    pub config: AppConfig,
    pub sessions: SessionStore,
    pub saved_searches: SavedSearchLog,
    pub services: Box<dyn Services>,
}

impl AppState {
    pub fn new(config: AppConfig, services: Box<dyn Services>) -> Self {
        Self {
            sessions: SessionStore::new(config.session_ttl, &config.default_model),
            saved_searches: SavedSearchLog::new(&config.saved_searches_path),
            services,
            config,
        }
    }
}

// src/session/model.rs
use crate::agent::{PropertyReport, TrendReport};
use crate::domain::{AdvancedFilters, Favorite, SearchCriteria};
use crate::geocode::Coordinates;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A one-shot message shown on the next page render.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }
}

/// Everything produced by one search. Pins run parallel to the report rows.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub criteria: SearchCriteria,
    pub searched_at: DateTime<Utc>,
    pub properties: PropertyReport,
    pub trends: TrendReport,
    pub city_center: Option<Coordinates>,
    pub property_pins: Vec<Option<Coordinates>>,
    pub trend_pins: Vec<Option<Coordinates>>,
}

/// Per-visitor state. Never shared between visitors, never persisted.
#[derive(Debug, Clone)]
pub struct Session {
    pub firecrawl_key: Option<String>,
    pub openai_key: Option<String>,
    pub model_id: String,

    /// Last values submitted through the search form.
    pub criteria: SearchCriteria,
    pub alert_email: String,
    pub filters: AdvancedFilters,

    pub results: Option<SearchResults>,
    pub favorites: Vec<Favorite>,
    pub notices: Vec<Notice>,

    pub last_seen: DateTime<Utc>,
}

impl Session {
    pub fn new(model_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            firecrawl_key: None,
            openai_key: None,
            model_id: model_id.into(),
            criteria: SearchCriteria::default(),
            alert_email: String::new(),
            filters: AdvancedFilters::default(),
            results: None,
            favorites: Vec::new(),
            notices: Vec::new(),
            last_seen: now,
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Keys typed into the sidebar win over the environment. `Err` names
    /// the services still lacking a key.
    pub fn api_keys(
        &self,
        env_firecrawl: Option<&str>,
        env_openai: Option<&str>,
    ) -> Result<ApiKeys, Vec<&'static str>> {
        let firecrawl = pick_key(self.firecrawl_key.as_deref(), env_firecrawl);
        let openai = pick_key(self.openai_key.as_deref(), env_openai);

        match (firecrawl, openai) {
            (Some(firecrawl), Some(openai)) => Ok(ApiKeys {
                firecrawl: firecrawl.to_string(),
                openai: openai.to_string(),
            }),
            (firecrawl, openai) => {
                let mut missing = Vec::new();
                if firecrawl.is_none() {
                    missing.push("Firecrawl");
                }
                if openai.is_none() {
                    missing.push("OpenAI");
                }
                Err(missing)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeys {
    pub firecrawl: String,
    pub openai: String,
}

fn pick_key<'a>(typed: Option<&'a str>, env: Option<&'a str>) -> Option<&'a str> {
    typed
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .or_else(|| env.map(str::trim).filter(|k| !k.is_empty()))
}

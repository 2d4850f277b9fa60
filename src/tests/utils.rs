// src/tests/utils.rs

use crate::config::AppConfig;
use crate::extraction::ExtractResponse;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::fakes::{FakeExtractor, FakeGeocoder, FakeServices, FakeSummarizer};
use astra::{Body, Request, Response};
use http::Method;
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use tempfile::TempDir;

/// App state wired to fakes, with the saved-search file in a temp dir.
pub struct TestApp {
    pub state: AppState,
    pub services: FakeServices,
    pub saved_searches: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    /// Both API keys come from the environment config.
    pub fn new(services: FakeServices) -> Self {
        Self::with_config(services, |c| {
            c.firecrawl_api_key = Some("fc-env".into());
            c.openai_api_key = Some("sk-env".into());
        })
    }

    pub fn without_keys(services: FakeServices) -> Self {
        Self::with_config(services, |_| {})
    }

    fn with_config(services: FakeServices, tweak: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let saved_searches = dir.path().join("saved_searches.txt");
        let mut config = AppConfig {
            saved_searches_path: saved_searches.clone(),
            ..AppConfig::default()
        };
        tweak(&mut config);

        Self {
            state: AppState::new(config, Box::new(services.clone())),
            services,
            saved_searches,
            _dir: dir,
        }
    }

    /// Send a request and return the response, failing the test on `Err`.
    pub fn send(&self, req: Request) -> Response {
        handle(req, &self.state).expect("handler returned an error")
    }

    /// Open a session with a plain page view and return its cookie value.
    pub fn start_session(&self) -> String {
        let resp = self.send(get("/", None));
        session_cookie(&resp).expect("first visit sets a session cookie")
    }

    pub fn saved_lines(&self) -> Vec<String> {
        std::fs::read_to_string(&self.saved_searches)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Extraction reply carrying listings and locality trends, so one fake
/// serves both agent operations.
pub fn listings_reply() -> ExtractResponse {
    ExtractResponse::completed(json!({
        "properties": [
            {
                "Building_name": "Alpha Towers",
                "Property_type": "Flat",
                "location_address": "Koramangala",
                "Price": "1.2 Cr",
                "Description": "3 BHK near the park"
            }
        ],
        "locations": [
            {
                "location": "Whitefield",
                "price_per_sqft": 7200.0,
                "percent_increase": 8.5,
                "rental_yield": 3.2
            }
        ]
    }))
}

pub const PROPERTY_SUMMARY: &str = r#"{
  "summary": "**Top pick:** Alpha Towers offers the best value.",
  "properties": [
    {"name": "Alpha Towers", "location": "Koramangala", "price": "1.2 Cr"},
    {"name": "Brigade Meadows", "location": "Kanakapura Road", "price": "85 Lakh"}
  ]
}"#;

pub const TREND_SUMMARY: &str = r#"{
  "summary": "Whitefield keeps climbing.",
  "locations": [
    {"location": "Whitefield", "price_per_sqft": 7200, "percent_increase": 8.5, "rental_yield": 3.2}
  ]
}"#;

/// Fakes that answer a full Bangalore search.
pub fn happy_services() -> FakeServices {
    FakeServices::new(
        FakeExtractor::replying(listings_reply()),
        FakeSummarizer::replying_in_turn(&[PROPERTY_SUMMARY, TREND_SUMMARY]),
        FakeGeocoder::default()
            .with_place("Bangalore", 12.9716, 77.5946)
            .with_place("Koramangala", 12.9352, 77.6245)
            .with_place("Whitefield Bangalore", 12.9698, 77.7500),
    )
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = cookie {
        builder = builder.header("Cookie", format!("rs_session={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = cookie {
        builder = builder.header("Cookie", format!("rs_session={token}"));
    }
    builder.body(Body::from(body.as_bytes().to_vec())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub fn session_cookie(resp: &Response) -> Option<String> {
    let header = resp.headers().get("Set-Cookie")?.to_str().ok()?;
    header
        .split(';')
        .next()?
        .strip_prefix("rs_session=")
        .map(str::to_string)
}

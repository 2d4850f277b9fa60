use crate::geocode::{Coordinates, Geocoder};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

const USER_AGENT: &str = concat!("realty_scout/", env!("CARGO_PKG_VERSION"), " (property map)");

/// Nominatim API response for geocoding
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

/// Coordinates of the first place, if it has any that parse.
pub fn first_coordinates(places: &[NominatimPlace]) -> Option<Coordinates> {
    let place = places.first()?;
    Some(Coordinates {
        lat: place.lat.parse().ok()?,
        lon: place.lon.parse().ok()?,
    })
}

/// Geocoding against Nominatim (OpenStreetMap). One GET per call; no caching.
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self, address: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &format!("{}/search", self.base_url),
            &[("format", "json"), ("q", address)],
        )
    }

    fn search(&self, address: &str) -> Result<Vec<NominatimPlace>, String> {
        let url = self.search_url(address).map_err(|e| e.to_string())?;

        self.client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| e.to_string())?
            .json()
            .map_err(|e| format!("Failed to parse geocoding response: {e}"))
    }
}

impl Geocoder for NominatimClient {
    #[instrument(skip(self))]
    fn geocode(&self, address: &str) -> Option<Coordinates> {
        let places = match self.search(address) {
            Ok(places) => places,
            Err(e) => {
                warn!(error = %e, "Geocoding request failed");
                return None;
            }
        };

        let coords = first_coordinates(&places);
        match (&coords, places.first()) {
            (Some(c), Some(p)) => debug!(lat = c.lat, lon = c.lon, place = %p.display_name, "Geocoded"),
            _ => debug!("Location not found by geocoding API"),
        }
        coords
    }
}

mod nominatim;

pub use nominatim::NominatimClient;

use serde::Serialize;

/// Where maps are centred when the searched city cannot be resolved (India).
pub const FALLBACK_CENTER: Coordinates = Coordinates {
    lat: 20.5937,
    lon: 78.9629,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Resolves a free-text address. Failures of any kind come back as `None`.
pub trait Geocoder: Send + Sync {
    fn geocode(&self, address: &str) -> Option<Coordinates>;
}

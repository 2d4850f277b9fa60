// src/domain/trend.rs

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Schema for location price trends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LocationTrend {
    pub location: String,
    pub price_per_sqft: f64,
    pub percent_increase: f64,
    pub rental_yield: f64,
}

/// Schema for multiple locations response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LocationsResponse {
    /// List of location data points
    pub locations: Vec<LocationTrend>,
}

/// Display row for the trends heatmap. Same shape as `LocationTrend`, but
/// produced from the summary rather than the raw extraction payload.
pub type TrendRow = LocationTrend;

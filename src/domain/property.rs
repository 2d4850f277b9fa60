// src/domain/property.rs

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A listing as returned by the extraction service.
/// Field names follow the schema sent with the extraction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Property {
    /// Name of the building/property
    #[serde(rename = "Building_name")]
    pub building_name: String,
    /// Type of property (commercial, residential, etc)
    #[serde(rename = "Property_type")]
    pub property_type: String,
    /// Complete address of the property
    pub location_address: String,
    /// Price of the property
    #[serde(rename = "Price")]
    pub price: String,
    /// Detailed description of the property
    #[serde(rename = "Description")]
    pub description: String,
}

/// Schema for multiple properties response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PropertiesResponse {
    /// List of property details
    pub properties: Vec<Property>,
}

/// One recommendation row shown in tables, maps and the comparison dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRow {
    pub name: String,
    pub location: String,
    pub price: String,
}

impl PropertyRow {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            price: price.into(),
        }
    }

    /// "Name (Location)", the label used when picking rows to compare.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.location)
    }
}

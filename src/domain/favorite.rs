// src/domain/favorite.rs

use crate::domain::PropertyRow;

/// A shortlisted property. No identity: starring the same row twice
/// stores it twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub name: String,
    pub location: String,
    pub price: String,
}

impl Favorite {
    /// `name,location,price`, the shortlist export line.
    pub fn csv_line(&self) -> String {
        [&self.name, &self.location, &self.price]
            .iter()
            .map(|f| csv_field(f))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<&PropertyRow> for Favorite {
    fn from(row: &PropertyRow) -> Self {
        Self {
            name: row.name.clone(),
            location: row.location.clone(),
            price: row.price.clone(),
        }
    }
}

// Quote only when the value would otherwise split the line.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// src/domain/criteria.rs

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyCategory {
    #[default]
    Residential,
    Commercial,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 2] = [Self::Residential, Self::Commercial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s.trim())
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyType {
    #[default]
    Flat,
    IndividualHouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 2] = [Self::Flat, Self::IndividualHouse];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::IndividualHouse => "Individual House",
        }
    }

    /// Plural noun used in extraction prompts.
    pub fn prompt_noun(&self) -> &'static str {
        match self {
            Self::Flat => "Flats",
            Self::IndividualHouse => "Individual Houses",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s.trim())
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One search request. Max price is in crores.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub city: String,
    pub category: PropertyCategory,
    pub property_type: PropertyType,
    pub max_price: f64,
}

impl SearchCriteria {
    pub const MIN_BUDGET: f64 = 0.1;
    pub const MAX_BUDGET: f64 = 100.0;
    pub const DEFAULT_BUDGET: f64 = 5.0;

    pub fn new(
        city: impl Into<String>,
        category: PropertyCategory,
        property_type: PropertyType,
        max_price: f64,
    ) -> Self {
        Self {
            city: city.into(),
            category,
            property_type,
            max_price,
        }
    }

    pub fn budget_in_range(price: f64) -> bool {
        (Self::MIN_BUDGET..=Self::MAX_BUDGET).contains(&price)
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::new(
            "",
            PropertyCategory::default(),
            PropertyType::default(),
            Self::DEFAULT_BUDGET,
        )
    }
}

/// Why a city name cannot be used to build listing URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityError {
    Missing,
    NotAlphabetic,
}

impl CityError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CityError::Missing => "No valid city name provided. Please enter a valid city name.",
            CityError::NotAlphabetic => {
                "No valid property listing URLs found for this city. Please check the city name or try a different one."
            }
        }
    }
}

impl fmt::Display for CityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

impl std::error::Error for CityError {}

/// Trim + lowercase. The result is safe to splice into listing URL templates:
/// at least two characters, all alphabetic.
pub fn normalize_city(city: &str) -> Result<String, CityError> {
    let c = city.trim().to_lowercase();
    if c.chars().count() < 2 {
        return Err(CityError::Missing);
    }
    if !c.chars().all(char::is_alphabetic) {
        return Err(CityError::NotAlphabetic);
    }
    Ok(c)
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Option<String> {
    let e = email.trim().to_lowercase();
    if e.is_empty()
        || !e.contains('@')
        || e.starts_with('@')
        || e.ends_with('@')
        || e.contains(',')
        || e.contains(char::is_whitespace)
    {
        return None;
    }
    Some(e)
}

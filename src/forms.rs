// src/forms.rs
use crate::domain::{
    AdvancedFilters, Amenity, BuilderReputation, PropertyCategory, PropertyType, SearchCriteria,
    SortOrder,
};
use crate::errors::ServerError;
use astra::Request;
use std::io::Read;

const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Decoded `application/x-www-form-urlencoded` pairs, in submission order.
#[derive(Debug, Default, Clone)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn parse(bytes: &[u8]) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(bytes).into_owned().collect(),
        }
    }

    pub fn from_query(req: &Request) -> Self {
        Self::parse(req.uri().query().unwrap_or("").as_bytes())
    }

    pub fn from_body(req: &mut Request) -> Result<Self, ServerError> {
        let mut buf = Vec::new();
        req.body_mut()
            .reader()
            .take(MAX_FORM_BYTES)
            .read_to_end(&mut buf)
            .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
        Ok(Self::parse(&buf))
    }

    /// First value for `key`, trimmed.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
    }

    pub fn get_all<'a, 'k>(&'a self, key: &'k str) -> impl Iterator<Item = &'a str> + 'k
    where
        'a: 'k,
    {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.trim())
    }

    /// Search form fields. The city is kept as typed; callers validate it.
    pub fn criteria(&self) -> Result<SearchCriteria, String> {
        let max_price = match self.get("max_price") {
            None | Some("") => SearchCriteria::DEFAULT_BUDGET,
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|p| SearchCriteria::budget_in_range(*p))
                .ok_or_else(|| {
                    format!(
                        "Maximum price must be between {} and {} crores.",
                        SearchCriteria::MIN_BUDGET,
                        SearchCriteria::MAX_BUDGET
                    )
                })?,
        };

        Ok(SearchCriteria::new(
            self.get("city").unwrap_or(""),
            self.get("category")
                .and_then(PropertyCategory::parse)
                .unwrap_or_default(),
            self.get("property_type")
                .and_then(PropertyType::parse)
                .unwrap_or_default(),
            max_price,
        ))
    }

    /// Sidebar filters. Out-of-range numbers are clamped, unknown labels ignored.
    pub fn filters(&self) -> AdvancedFilters {
        let defaults = AdvancedFilters::default();

        AdvancedFilters {
            min_price: self
                .get("min_price")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .map(|v| v.clamp(0.0, AdvancedFilters::MIN_PRICE_LIMIT))
                .unwrap_or(defaults.min_price),
            max_age_years: self
                .get("max_age")
                .and_then(|v| v.parse::<u32>().ok())
                .map(|v| v.min(AdvancedFilters::MAX_AGE_LIMIT))
                .unwrap_or(defaults.max_age_years),
            amenities: self.get_all("amenities").filter_map(Amenity::parse).collect(),
            builder_reputation: self
                .get("builder_reputation")
                .and_then(BuilderReputation::parse)
                .unwrap_or(defaults.builder_reputation),
            sort_by: self
                .get("sort_by")
                .and_then(SortOrder::parse)
                .unwrap_or(defaults.sort_by),
        }
    }
}

/// Value of cookie `name` from the `Cookie` header.
pub fn cookie(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

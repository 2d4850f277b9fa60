use crate::domain::{PropertyRow, TrendRow};
use regex::Regex;
use std::sync::LazyLock;

static PROPERTY_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?\s*Name: ([^\n]+)\s*Location: ([^\n]+)\s*Price: ([^\n]+)")
        .expect("property row pattern compiles")
});

static TREND_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"-?\s*Location: ([^\n]+)\s*Price per sqft: ([\d.]+)\s*Percent increase: ([\d.]+)%\s*Rental yield: ([\d.]+)%",
    )
    .expect("trend row pattern compiles")
});

/// Every `Name:` / `Location:` / `Price:` triple in `text`, in order.
pub fn parse_property_rows(text: &str) -> Vec<PropertyRow> {
    PROPERTY_ROW
        .captures_iter(text)
        .map(|c| PropertyRow::new(c[1].trim(), c[2].trim(), c[3].trim()))
        .collect()
}

/// Every `Location:` / `Price per sqft:` / `Percent increase:` / `Rental yield:`
/// quadruple in `text`. A block whose numbers do not parse (e.g. `1.2.3`) is skipped.
pub fn parse_trend_rows(text: &str) -> Vec<TrendRow> {
    TREND_ROW
        .captures_iter(text)
        .filter_map(|c| {
            Some(TrendRow {
                location: c[1].trim().to_string(),
                price_per_sqft: c[2].parse().ok()?,
                percent_increase: c[3].parse().ok()?,
                rental_yield: c[4].parse().ok()?,
            })
        })
        .collect()
}

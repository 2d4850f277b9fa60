/// Listing pages searched for properties. `{city}` is the normalized city.
pub const LISTING_URL_TEMPLATES: [&str; 3] = [
    "https://www.squareyards.com/sale/property-for-sale-in-{city}/*",
    "https://www.99acres.com/property-in-{city}-ffid/*",
    "https://housing.com/in/buy/{city}/{city}",
];

pub const TRENDS_URL_TEMPLATE: &str =
    "https://www.99acres.com/property-rates-and-price-trends-in-{city}-prffid/*";

/// Callers pass a city that already went through `normalize_city`.
pub fn listing_urls(city: &str) -> Vec<String> {
    LISTING_URL_TEMPLATES
        .iter()
        .map(|t| t.replace("{city}", city))
        .collect()
}

pub fn trends_url(city: &str) -> String {
    TRENDS_URL_TEMPLATE.replace("{city}", city)
}

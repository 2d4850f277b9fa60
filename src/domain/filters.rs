// src/domain/filters.rs

use crate::domain::PropertyRow;
use crate::parser::parse_price_crores;
use std::cmp::Ordering;

macro_rules! labelled_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn parse(s: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.as_str() == s.trim())
            }
        }
    };
}

labelled_enum!(Amenity {
    Gym => "Gym",
    Pool => "Pool",
    Parking => "Parking",
    Security => "Security",
    Garden => "Garden",
    Lift => "Lift",
    Clubhouse => "Clubhouse",
});

labelled_enum!(BuilderReputation {
    Any => "Any",
    TopRated => "Top Rated",
    Established => "Established",
    Newcomer => "Newcomer",
});

labelled_enum!(SortOrder {
    PriceLowToHigh => "Price: Low to High",
    PriceHighToLow => "Price: High to Low",
    Newest => "Newest",
    BestAmenities => "Best Amenities",
});

/// Sidebar refinements. Prices are in crores.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedFilters {
    pub min_price: f64,
    pub max_age_years: u32,
    pub amenities: Vec<Amenity>,
    pub builder_reputation: BuilderReputation,
    pub sort_by: SortOrder,
}

impl Default for AdvancedFilters {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_age_years: Self::DEFAULT_MAX_AGE,
            amenities: Vec::new(),
            builder_reputation: BuilderReputation::Any,
            sort_by: SortOrder::PriceLowToHigh,
        }
    }
}

impl AdvancedFilters {
    pub const DEFAULT_MAX_AGE: u32 = 20;
    pub const MAX_AGE_LIMIT: u32 = 50;
    pub const MIN_PRICE_LIMIT: f64 = 100.0;

    /// Extra sentences for the extraction prompt, one per filter that
    /// differs from its default.
    pub fn prompt_constraints(&self) -> Vec<String> {
        let mut out = Vec::new();

        if self.min_price > 0.0 {
            out.push(format!("Only include properties priced above {} crores.", self.min_price));
        }
        if self.max_age_years != Self::DEFAULT_MAX_AGE {
            out.push(format!(
                "Only include properties at most {} years old.",
                self.max_age_years
            ));
        }
        if !self.amenities.is_empty() {
            let names: Vec<&str> = self.amenities.iter().map(Amenity::as_str).collect();
            out.push(format!("Prefer properties with: {}.", names.join(", ")));
        }
        if self.builder_reputation != BuilderReputation::Any {
            out.push(format!(
                "Prefer builders with a {} reputation.",
                self.builder_reputation.as_str().to_lowercase()
            ));
        }
        match self.sort_by {
            SortOrder::Newest => out.push("Prefer the newest properties.".to_string()),
            SortOrder::BestAmenities => {
                out.push("Prefer properties with the best amenities.".to_string())
            }
            SortOrder::PriceLowToHigh | SortOrder::PriceHighToLow => {}
        }

        out
    }

    /// Rows to display, paired with their index in `rows`.
    ///
    /// Rows whose price cannot be read are never dropped by the min-price
    /// filter and sort after every priced row.
    pub fn apply<'a>(&self, rows: &'a [PropertyRow]) -> Vec<(usize, &'a PropertyRow)> {
        let mut out: Vec<(usize, &PropertyRow, Option<f64>)> = rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r, parse_price_crores(&r.price)))
            .filter(|(_, _, price)| match price {
                Some(p) => *p >= self.min_price,
                None => true,
            })
            .collect();

        match self.sort_by {
            SortOrder::PriceLowToHigh => out.sort_by(|a, b| cmp_prices(a.2, b.2, false)),
            SortOrder::PriceHighToLow => out.sort_by(|a, b| cmp_prices(a.2, b.2, true)),
            // Nothing in a row tells age or amenities apart; the prompt asked for this order.
            SortOrder::Newest | SortOrder::BestAmenities => {}
        }

        out.into_iter().map(|(i, r, _)| (i, r)).collect()
    }
}

fn cmp_prices(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

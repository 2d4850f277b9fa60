//! Recovers display rows from free-text summaries.
//!
//! Nothing guarantees the summary follows the expected layout; when it does
//! not, the parsers return no rows rather than an error.

mod price;
mod rows;

pub use price::parse_price_crores;
pub use rows::{parse_property_rows, parse_trend_rows};

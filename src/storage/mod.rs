mod saved_searches;

pub use saved_searches::{SavedSearch, SavedSearchLog};

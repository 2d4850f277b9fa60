pub mod criteria;
pub mod favorite;
pub mod filters;
pub mod property;
pub mod trend;

pub use criteria::{
    normalize_city, normalize_email, CityError, PropertyCategory, PropertyType, SearchCriteria,
};
pub use favorite::Favorite;
pub use filters::{AdvancedFilters, Amenity, BuilderReputation, SortOrder};
pub use property::{PropertiesResponse, PropertyRow};
pub use trend::{LocationsResponse, TrendRow};

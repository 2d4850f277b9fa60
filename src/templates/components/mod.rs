pub mod card;
pub mod error;
pub mod map;
pub mod markdown;
pub mod notices;

pub use card::card;
pub use error::html_error_response;
pub use map::{map_widget, MapData, MapMarker};
pub use markdown::markdown;
pub use notices::{notice, notice_list};

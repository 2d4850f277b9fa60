pub mod csv;
pub mod html;
pub mod xlsx;

pub use crate::errors::ResultResp;

pub use csv::csv_response;
pub use html::{html_response, see_other, text_response};
pub use xlsx::xlsx_response;

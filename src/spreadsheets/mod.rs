pub mod shortlist_xlsx;

pub use shortlist_xlsx::shortlist_xlsx;

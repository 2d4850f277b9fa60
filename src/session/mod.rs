mod model;
mod store;
mod token;

pub use model::{Notice, NoticeLevel, SearchResults, Session};
pub use store::{SessionHandle, SessionStore, SESSION_COOKIE};

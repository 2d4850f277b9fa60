pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::html_error_response;
pub use layouts::desktop::desktop_layout;
pub use pages::{home_page, HomeVm};

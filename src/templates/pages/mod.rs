pub mod compare;
pub mod home;
pub mod results;
pub mod sidebar;

pub use compare::comparison_section;
pub use home::{home_page, HomeVm};
pub use results::results_section;
pub use sidebar::sidebar;

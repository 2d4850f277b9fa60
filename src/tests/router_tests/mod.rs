mod alert_tests;
mod favorites_tests;
mod page_tests;
mod search_tests;

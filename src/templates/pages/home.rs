// templates/pages/home.rs

use crate::config::AppConfig;
use crate::domain::{PropertyCategory, PropertyType};
use crate::session::{Notice, NoticeLevel, Session};
use crate::templates::{
    components::{notice, notice_list},
    desktop_layout,
    pages::{comparison_section, results_section, sidebar},
};
use maud::{html, Markup};

/// Everything the single page needs for one render.
pub struct HomeVm<'a> {
    pub session: &'a Session,
    pub notices: Vec<Notice>,
    pub env_firecrawl: bool,
    pub env_openai: bool,
    pub missing_keys: Vec<&'static str>,
    /// Row indices picked in the comparison dashboard.
    pub compare: Vec<usize>,
}

impl<'a> HomeVm<'a> {
    pub fn new(
        session: &'a Session,
        config: &AppConfig,
        notices: Vec<Notice>,
        compare: Vec<usize>,
    ) -> Self {
        let missing_keys = session
            .api_keys(
                config.firecrawl_api_key.as_deref(),
                config.openai_api_key.as_deref(),
            )
            .err()
            .unwrap_or_default();

        Self {
            session,
            notices,
            env_firecrawl: config.firecrawl_api_key.is_some(),
            env_openai: config.openai_api_key.is_some(),
            missing_keys,
            compare,
        }
    }
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "AI Real Estate Agent",
        sidebar(vm),
        html! {
            h1 { "🏠 AI Real Estate Agent" }
            p class="caption" { "Find your dream property with AI-powered market analysis." }

            (notice_list(&vm.notices))

            @if !vm.missing_keys.is_empty() {
                (notice(NoticeLevel::Warning, "⚠️ Please enter your API keys in the sidebar to continue."))
            }

            (search_form(vm.session))

            @match &vm.session.results {
                Some(results) => {
                    (results_section(results, &vm.session.filters))
                    (comparison_section(results, &vm.session.filters, &vm.compare))
                }
                None => {
                    (notice(NoticeLevel::Info, "Enter a city and budget, then start the search."))
                }
            }
        },
    )
}

fn search_form(session: &Session) -> Markup {
    let criteria = &session.criteria;

    html! {
        form id="search-form" class="card" method="post" action="/search" {
            h2 { "Search Criteria" }
            div class="grid-2" {
                div {
                    label for="city" { "City" }
                    input type="text" id="city" name="city" placeholder="e.g., Bangalore" value=(criteria.city);
                }
                div {
                    label for="category" { "Property Category" }
                    select id="category" name="category" {
                        @for c in PropertyCategory::ALL {
                            option value=(c.as_str()) selected[c == criteria.category] { (c.as_str()) }
                        }
                    }
                }
                div {
                    label for="max_price" { "Maximum Price (in Crores)" }
                    input type="number" id="max_price" name="max_price" min="0.1" max="100" step="0.1" value=(criteria.max_price);
                }
                div {
                    label for="property_type" { "Property Type" }
                    select id="property_type" name="property_type" {
                        @for t in PropertyType::ALL {
                            option value=(t.as_str()) selected[t == criteria.property_type] { (t.as_str()) }
                        }
                    }
                }
            }
            button type="submit" class="primary" { "🔍 Start Search" }
        }
    }
}

use crate::config::MODEL_CHOICES;
use crate::domain::{Amenity, BuilderReputation, SortOrder};
use crate::session::NoticeLevel;
use crate::templates::{components::notice, pages::HomeVm};
use maud::{html, Markup};

pub fn sidebar(vm: &HomeVm) -> Markup {
    html! {
        h2 { "🏠 AI Real Estate Agent" }
        (configuration(vm))
        (alerts(vm))
        (filters(vm))
        (favorites(vm))
    }
}

fn configuration(vm: &HomeVm) -> Markup {
    html! {
        section id="configuration" {
            h3 { "⚙️ Configuration" }
            form method="post" action="/credentials" {
                label for="model_id" { "Select Model" }
                select id="model_id" name="model_id" {
                    @for model in MODEL_CHOICES {
                        option value=(model) selected[model == vm.session.model_id] { (model) }
                    }
                }

                label for="firecrawl_key" { "Firecrawl API Key" }
                @if vm.env_firecrawl {
                    p class="env-ok" { "✅ Firecrawl API Key found in environment variables" }
                }
                input type="password" id="firecrawl_key" name="firecrawl_key" autocomplete="off"
                    placeholder=(key_placeholder(vm.session.firecrawl_key.is_some(), vm.env_firecrawl));

                label for="openai_key" { "OpenAI API Key" }
                @if vm.env_openai {
                    p class="env-ok" { "✅ OpenAI API Key found in environment variables" }
                }
                input type="password" id="openai_key" name="openai_key" autocomplete="off"
                    placeholder=(key_placeholder(vm.session.openai_key.is_some(), vm.env_openai));

                button type="submit" { "Save configuration" }
            }
            @if !vm.missing_keys.is_empty() {
                (notice(NoticeLevel::Warning, &format!("Missing API keys: {}", vm.missing_keys.join(", "))))
            }
        }
    }
}

fn key_placeholder(typed: bool, from_env: bool) -> &'static str {
    match (typed, from_env) {
        (true, _) => "Saved for this session",
        (false, true) => "Using the environment key",
        (false, false) => "Paste your key",
    }
}

fn alerts(vm: &HomeVm) -> Markup {
    html! {
        section id="alerts" {
            h3 { "🔔 Property Alerts" }
            label for="alert_email" { "Email for alerts" }
            input type="email" id="alert_email" name="alert_email" form="search-form"
                placeholder="you@example.com" value=(vm.session.alert_email);
            button type="submit" form="search-form" formaction="/alerts" { "Save Search & Get Alerts" }
        }
    }
}

fn filters(vm: &HomeVm) -> Markup {
    let f = &vm.session.filters;

    html! {
        section id="filters" {
            h3 { "🎯 Advanced Filters" }

            label for="min_price" { "Minimum Price (Crores)" }
            input type="number" id="min_price" name="min_price" form="search-form"
                min="0" max="100" step="0.1" value=(f.min_price);

            label for="max_age" { "Max Property Age (years): " (f.max_age_years) }
            input type="range" id="max_age" name="max_age" form="search-form"
                min="0" max="50" value=(f.max_age_years);

            label { "Must-have Amenities" }
            div class="checks" {
                @for a in Amenity::ALL {
                    label {
                        input type="checkbox" name="amenities" form="search-form"
                            value=(a.as_str()) checked[f.amenities.contains(a)];
                        (a.as_str())
                    }
                }
            }

            label for="builder_reputation" { "Builder Reputation" }
            select id="builder_reputation" name="builder_reputation" form="search-form" {
                @for r in BuilderReputation::ALL {
                    option value=(r.as_str()) selected[*r == f.builder_reputation] { (r.as_str()) }
                }
            }

            label for="sort_by" { "Sort By" }
            select id="sort_by" name="sort_by" form="search-form" {
                @for s in SortOrder::ALL {
                    option value=(s.as_str()) selected[*s == f.sort_by] { (s.as_str()) }
                }
            }

            button type="submit" form="search-form" formaction="/filters" { "Apply filters" }
        }
    }
}

fn favorites(vm: &HomeVm) -> Markup {
    let favorites = &vm.session.favorites;

    html! {
        section id="favorites" {
            h3 { "⭐ Saved Favorites" }
            @if favorites.is_empty() {
                (notice(NoticeLevel::Info, "No favorites yet. Star properties to save them!"))
            } @else {
                p class="muted" { (favorites.len()) " saved" }
                @for fav in favorites {
                    div class="fav" {
                        strong { (fav.name) }
                        div class="muted" { (fav.location) " · " (fav.price) }
                    }
                }
                a class="btn" href="/favorites.csv" { "Export CSV" }
                " "
                a class="btn" href="/favorites.xlsx" { "Export Excel" }
            }
        }
    }
}

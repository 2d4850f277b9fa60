use crate::domain::AdvancedFilters;
use crate::parser::parse_price_crores;
use crate::session::SearchResults;
use maud::{html, Markup};

/// Side-by-side table of the rows picked by index.
pub fn comparison_section(
    results: &SearchResults,
    filters: &AdvancedFilters,
    selected: &[usize],
) -> Markup {
    let rows = &results.properties.rows;
    if rows.is_empty() {
        return html! {};
    }
    let shown = filters.apply(rows);
    let picked: Vec<_> = selected.iter().filter_map(|i| rows.get(*i)).collect();

    html! {
        section id="compare" class="card" {
            h2 { "📊 Compare Properties" }
            form method="get" action="/compare" {
                div class="checks" {
                    @for (idx, row) in &shown {
                        label {
                            input type="checkbox" name="selected" value=(idx) checked[selected.contains(idx)];
                            (row.label())
                        }
                    }
                }
                button type="submit" { "Compare selected" }
            }

            @if !picked.is_empty() {
                table class="comparison" {
                    thead {
                        tr { th { "Property" } th { "Location" } th { "Price" } th { "Price (Cr)" } }
                    }
                    tbody {
                        @for row in &picked {
                            tr {
                                td { (row.name) }
                                td { (row.location) }
                                td { (row.price) }
                                td {
                                    @match parse_price_crores(&row.price) {
                                        Some(cr) => (format!("{cr:.2}")),
                                        None => "—",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

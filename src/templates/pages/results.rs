use crate::domain::{AdvancedFilters, PropertyRow, TrendRow};
use crate::geocode::{Coordinates, FALLBACK_CENTER};
use crate::session::{NoticeLevel, SearchResults};
use crate::templates::components::{card, map_widget, markdown, notice, MapData, MapMarker};
use maud::{html, Markup};

const CITY_ZOOM: u8 = 12;
const COUNTRY_ZOOM: u8 = 5;

pub fn results_section(results: &SearchResults, filters: &AdvancedFilters) -> Markup {
    let shown = filters.apply(&results.properties.rows);

    html! {
        section id="results" {
            p class="muted" {
                "Results for " strong { (results.criteria.city) }
                " · " (results.criteria.category) " " (results.criteria.property_type)
                " under " (results.criteria.max_price) " Cr"
                " · searched " (results.searched_at.format("%d %b %Y %H:%M UTC"))
            }

            (card("🏘️ Property Recommendations", html! {
                (markdown(&results.properties.text))
                (property_table(&results.properties.rows, &shown))
            }))

            h2 { "🗺️ Property Map" }
            (property_map(results, &shown))

            details open {
                summary { "📈 Location Trends Analysis" }
                (markdown(&results.trends.text))
                @if !results.trends.rows.is_empty() {
                    (trend_table(&results.trends.rows))
                }
            }

            h2 { "🔥 Price Heatmap" }
            (heatmap(results))
        }
    }
}

fn property_table(all: &[PropertyRow], shown: &[(usize, &PropertyRow)]) -> Markup {
    html! {
        @if all.is_empty() {
            (notice(NoticeLevel::Info, "No structured listings could be read from the summary."))
        } @else if shown.is_empty() {
            (notice(NoticeLevel::Info, "No properties match the current filters."))
        } @else {
            table class="properties" {
                thead { tr { th { "Property" } th { "Location" } th { "Price" } th {} } }
                tbody {
                    @for (idx, row) in shown {
                        tr {
                            td { (row.name) }
                            td { (row.location) }
                            td { (row.price) }
                            td {
                                form method="post" action="/favorites" {
                                    input type="hidden" name="row" value=(idx);
                                    button type="submit" class="star" title="Save to favorites" { "☆" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn trend_table(rows: &[TrendRow]) -> Markup {
    html! {
        table class="trends" {
            thead { tr { th { "Location" } th { "Price/sqft" } th { "Growth" } th { "Rental yield" } } }
            tbody {
                @for t in rows {
                    tr {
                        td { (t.location) }
                        td { "₹" (format!("{:.0}", t.price_per_sqft)) }
                        td { (t.percent_increase) "%" }
                        td { (t.rental_yield) "%" }
                    }
                }
            }
        }
    }
}

fn map_center(results: &SearchResults) -> (Coordinates, u8) {
    match results.city_center {
        Some(c) => (c, CITY_ZOOM),
        None => (FALLBACK_CENTER, COUNTRY_ZOOM),
    }
}

fn property_map(results: &SearchResults, shown: &[(usize, &PropertyRow)]) -> Markup {
    let (center, zoom) = map_center(results);
    let mut data = MapData::new(center, zoom);

    for (idx, row) in shown {
        if let Some(Some(at)) = results.property_pins.get(*idx) {
            data.markers.push(MapMarker::pin(
                *at,
                vec![
                    row.name.clone(),
                    format!("Location: {}", row.location),
                    format!("Price: {}", row.price),
                ],
            ));
        }
    }

    html! {
        @if data.markers.is_empty() && !shown.is_empty() {
            (notice(NoticeLevel::Info, "None of the listed locations could be placed on the map."))
        }
        (map_widget("property-map", &data))
    }
}

fn heatmap(results: &SearchResults) -> Markup {
    let placed: Vec<(&TrendRow, Coordinates)> = results
        .trends
        .rows
        .iter()
        .zip(&results.trend_pins)
        .filter_map(|(row, pin)| pin.map(|at| (row, at)))
        .collect();

    if placed.is_empty() {
        return notice(NoticeLevel::Info, "No location trend data available for heatmap.");
    }

    let (center, zoom) = map_center(results);
    let mut data = MapData::new(center, zoom);
    let top = placed
        .iter()
        .map(|(row, _)| row.price_per_sqft)
        .fold(0.0_f64, f64::max);

    for (row, at) in &placed {
        let intensity = if top > 0.0 { row.price_per_sqft / top } else { 1.0 };
        data.heat.push([at.lat, at.lon, intensity]);
        data.markers.push(MapMarker::circle(
            *at,
            vec![
                row.location.clone(),
                format!("Price/sqft: ₹{:.0}", row.price_per_sqft),
                format!("Growth: {}%", row.percent_increase),
                format!("Rental yield: {}%", row.rental_yield),
            ],
        ));
    }

    map_widget("trend-heatmap", &data)
}

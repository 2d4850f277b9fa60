// src/tests/router_tests/search_tests.rs

use crate::tests::fakes::{FakeExtractor, FakeGeocoder, FakeServices, FakeSummarizer};
use crate::tests::utils::{
    body_string, get, happy_services, listings_reply, location, post_form, TestApp,
};
use scraper::{Html, Selector};

const BANGALORE: &str = "city=Bangalore&category=Residential&property_type=Flat&max_price=5.0";

fn table_names(body: &str) -> Vec<String> {
    let doc = Html::parse_document(body);
    let cells = Selector::parse("table.properties tbody tr td:first-child").unwrap();
    doc.select(&cells)
        .map(|td| td.text().collect::<String>())
        .collect()
}

#[test]
fn successful_search_shows_rows_maps_and_trends() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    let resp = app.send(post_form("/search", BANGALORE, Some(&token)));
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/#results");

    let body = body_string(app.send(get("/", Some(&token))));
    assert!(body.contains("Property search completed!"));
    assert!(body.contains("Location analysis completed!"));
    assert!(body.contains("<strong>Top pick:</strong>"));
    assert_eq!(table_names(&body), vec!["Brigade Meadows", "Alpha Towers"]);
    assert!(body.contains("Whitefield keeps climbing."));
    assert!(body.contains(r#"renderMap("property-map""#));
    assert!(body.contains(r#"renderMap("trend-heatmap""#));
    assert!(!body.contains("No location trend data available for heatmap."));
}

#[test]
fn search_builds_bangalore_urls_and_uses_environment_keys() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    app.send(post_form("/search", BANGALORE, Some(&token)));

    let calls = app.services.extractor.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].urls.len(), 3);
    for url in &calls[0].urls {
        assert!(url.contains("bangalore"), "{url}");
        assert!(!url.contains("{city}"), "{url}");
    }
    assert!(calls[0]
        .prompt
        .starts_with("Extract up to 5 Residential Flats in Bangalore under 5.0 crores."));
    assert!(calls[1].urls[0].contains("price-trends-in-bangalore"));

    let keys = app.services.keys_seen.lock().unwrap().clone();
    assert!(keys.contains(&("firecrawl".into(), "fc-env".into(), String::new())));
    assert!(keys.contains(&("openai".into(), "sk-env".into(), "gpt-3.5-turbo".into())));
}

#[test]
fn search_geocodes_city_rows_and_localities() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    app.send(post_form("/search", BANGALORE, Some(&token)));

    assert_eq!(
        app.services.geocoder.queries(),
        vec![
            "Bangalore".to_string(),
            "Koramangala".to_string(),
            "Kanakapura Road".to_string(),
            "Whitefield Bangalore".to_string(),
        ]
    );
}

#[test]
fn typed_keys_override_environment_keys() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    app.send(post_form(
        "/credentials",
        "model_id=gpt-4-turbo&firecrawl_key=fc-typed&openai_key=sk-typed",
        Some(&token),
    ));
    app.send(post_form("/search", BANGALORE, Some(&token)));

    let keys = app.services.keys_seen.lock().unwrap().clone();
    assert_eq!(
        keys,
        vec![
            ("firecrawl".to_string(), "fc-typed".to_string(), String::new()),
            ("openai".to_string(), "sk-typed".to_string(), "gpt-4-turbo".to_string()),
        ]
    );
}

#[test]
fn invalid_city_makes_no_remote_calls() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    let resp = app.send(post_form(
        "/search",
        "city=Bang4lore&max_price=5.0",
        Some(&token),
    ));
    assert_eq!(resp.status(), 303);

    let body = body_string(app.send(get("/", Some(&token))));
    assert!(body.contains("No valid property listing URLs found for this city."));
    assert!(!body.contains("Property search completed!"));
    assert_eq!(app.services.remote_calls(), 0);
    assert!(app.services.geocoder.queries().is_empty());
}

#[test]
fn empty_city_makes_no_remote_calls() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    app.send(post_form("/search", "city=++&max_price=5.0", Some(&token)));

    let body = body_string(app.send(get("/", Some(&token))));
    assert!(body.contains("No valid city name provided."));
    assert_eq!(app.services.remote_calls(), 0);
}

#[test]
fn missing_keys_warn_before_anything_runs() {
    let app = TestApp::without_keys(happy_services());
    let token = app.start_session();

    app.send(post_form("/search", BANGALORE, Some(&token)));

    let body = body_string(app.send(get("/", Some(&token))));
    assert!(body.contains("Please enter your API keys in the sidebar first!"));
    assert_eq!(app.services.remote_calls(), 0);
    assert!(app.services.keys_seen.lock().unwrap().is_empty());
}

#[test]
fn budget_outside_range_is_rejected() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    app.send(post_form("/search", "city=Pune&max_price=250", Some(&token)));

    let body = body_string(app.send(get("/", Some(&token))));
    assert!(body.contains("Maximum price must be between 0.1 and 100 crores."));
    assert_eq!(app.services.remote_calls(), 0);
}

#[test]
fn remote_failure_is_shown_in_place_of_results() {
    let services = FakeServices::new(
        FakeExtractor::failing("connection refused"),
        FakeSummarizer::replying("unused"),
        FakeGeocoder::default(),
    );
    let app = TestApp::new(services);
    let token = app.start_session();

    let resp = app.send(post_form("/search", BANGALORE, Some(&token)));
    assert_eq!(resp.status(), 303);

    let body = body_string(app.send(get("/", Some(&token))));
    assert!(body.contains("Error: Network error: connection refused"));
    assert!(body.contains("No structured listings could be read from the summary."));
    assert!(body.contains("No location trend data available for heatmap."));
    assert_eq!(app.services.summarizer.call_count(), 0);
}

#[test]
fn sidebar_filters_travel_with_the_search() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    let form = format!("{BANGALORE}&min_price=1.0&max_age=20&sort_by=Price%3A+High+to+Low");
    app.send(post_form("/search", &form, Some(&token)));

    let calls = app.services.extractor.calls();
    assert!(calls[0]
        .prompt
        .contains("Only include properties priced above 1 crores."));

    let body = body_string(app.send(get("/", Some(&token))));
    // 85 Lakh is below the 1 crore floor
    assert_eq!(table_names(&body), vec!["Alpha Towers"]);
}

#[test]
fn unparseable_summary_falls_back_to_the_text_parser() {
    let services = FakeServices::new(
        FakeExtractor::replying(listings_reply()),
        FakeSummarizer::replying(
            "Here are my picks:\n- Name: Alpha Towers\nLocation: Koramangala\nPrice: 1.2 Cr\n",
        ),
        FakeGeocoder::default(),
    );
    let app = TestApp::new(services);
    let token = app.start_session();

    app.send(post_form("/search", BANGALORE, Some(&token)));

    let body = body_string(app.send(get("/", Some(&token))));
    assert_eq!(table_names(&body), vec!["Alpha Towers"]);
    // nothing geocoded, so the map stays on the country view
    assert!(body.contains("20.5937"));
}

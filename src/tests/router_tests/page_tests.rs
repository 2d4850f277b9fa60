// src/tests/router_tests/page_tests.rs

use crate::router::handle;
use crate::errors::ServerError;
use crate::tests::fakes::{FakeExtractor, FakeGeocoder, FakeServices, FakeSummarizer};
use crate::tests::utils::{
    body_string, get, happy_services, location, post_form, session_cookie, TestApp,
};
use scraper::{Html, Selector};

#[test]
fn home_page_renders_search_form_and_sets_cookie() {
    let app = TestApp::new(happy_services());

    let resp = app.send(get("/", None));
    assert_eq!(resp.status(), 200);

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(cookie.starts_with("rs_session="));
    assert!(cookie.contains("HttpOnly"));

    let doc = Html::parse_document(&body_string(resp));
    let form = Selector::parse("form#search-form[action='/search']").unwrap();
    assert_eq!(doc.select(&form).count(), 1);
    let city = Selector::parse("input[name='city']").unwrap();
    assert_eq!(doc.select(&city).count(), 1);
}

#[test]
fn returning_visitor_keeps_session() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    let resp = app.send(get("/", Some(&token)));
    assert_eq!(resp.status(), 200);
    assert!(session_cookie(&resp).is_none());
}

#[test]
fn environment_keys_are_reported_in_sidebar() {
    let app = TestApp::new(happy_services());
    let body = body_string(app.send(get("/", None)));

    assert!(body.contains("Firecrawl API Key found in environment variables"));
    assert!(body.contains("OpenAI API Key found in environment variables"));
    assert!(!body.contains("Missing API keys"));
}

#[test]
fn missing_keys_show_a_warning() {
    let app = TestApp::without_keys(FakeServices::new(
        FakeExtractor::failing("unused"),
        FakeSummarizer::failing("unused"),
        FakeGeocoder::default(),
    ));
    let body = body_string(app.send(get("/", None)));

    assert!(body.contains("Missing API keys: Firecrawl, OpenAI"));
}

#[test]
fn credentials_are_stored_per_session() {
    let app = TestApp::without_keys(happy_services());
    let token = app.start_session();

    let resp = app.send(post_form(
        "/credentials",
        "model_id=gpt-4-turbo&firecrawl_key=fc-typed&openai_key=sk-typed",
        Some(&token),
    ));
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");

    let body = body_string(app.send(get("/", Some(&token))));
    assert!(body.contains("Configuration saved."));
    assert!(!body.contains("Missing API keys"));

    let doc = Html::parse_document(&body);
    let selected = Selector::parse("select[name='model_id'] option[selected]").unwrap();
    let model: Vec<String> = doc
        .select(&selected)
        .map(|o| o.text().collect::<String>())
        .collect();
    assert_eq!(model, vec!["gpt-4-turbo"]);

    // another visitor is unaffected
    let other = body_string(app.send(get("/", None)));
    assert!(other.contains("Missing API keys"));
}

#[test]
fn unknown_model_is_rejected() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    app.send(post_form("/credentials", "model_id=gpt-99", Some(&token)));
    let body = body_string(app.send(get("/", Some(&token))));

    assert!(body.contains("Unknown model: gpt-99"));
}

#[test]
fn notices_show_only_once() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    app.send(post_form("/filters", "sort_by=Newest", Some(&token)));
    assert!(body_string(app.send(get("/", Some(&token)))).contains("Filters applied."));
    assert!(!body_string(app.send(get("/", Some(&token)))).contains("Filters applied."));
}

#[test]
fn health_reports_ok() {
    let app = TestApp::new(happy_services());
    let body = body_string(app.send(get("/health", None)));
    assert!(body.starts_with("ok"));
}

#[test]
fn health_checks_do_not_open_sessions() {
    let app = TestApp::new(happy_services());

    for _ in 0..3 {
        let resp = app.send(get("/health", None));
        assert_eq!(resp.status(), 200);
        assert!(resp.headers().get("Set-Cookie").is_none());
    }
    assert_eq!(app.state.sessions.len(), 0);

    let cookie = app.start_session();
    let body = body_string(app.send(get("/health", Some(&cookie))));
    assert_eq!(body, "ok (1 active sessions)");
}

#[test]
fn unknown_route_is_not_found() {
    let app = TestApp::new(happy_services());
    let err = handle(get("/nope", None), &app.state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

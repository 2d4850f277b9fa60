// src/tests/router_tests/alert_tests.rs

use crate::tests::utils::{body_string, get, happy_services, location, post_form, TestApp};

#[test]
fn saving_a_search_appends_exactly_one_line() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    let resp = app.send(post_form(
        "/alerts",
        "city=Bangalore&category=Residential&property_type=Flat&max_price=5.0&alert_email=buyer%40example.com",
        Some(&token),
    ));
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");

    assert_eq!(
        app.saved_lines(),
        vec!["buyer@example.com,Bangalore,Residential,Flat,5.0"]
    );

    let body = body_string(app.send(get("/", Some(&token))));
    assert!(body.contains("Your search criteria has been saved!"));
    // nothing remote happens when saving
    assert_eq!(app.services.remote_calls(), 0);
}

#[test]
fn each_save_adds_a_line() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    app.send(post_form(
        "/alerts",
        "city=Pune&category=Commercial&property_type=Individual+House&max_price=2.5&alert_email=a%40b.com",
        Some(&token),
    ));
    app.send(post_form(
        "/alerts",
        "city=Pune&max_price=3&alert_email=a%40b.com",
        Some(&token),
    ));

    assert_eq!(
        app.saved_lines(),
        vec![
            "a@b.com,Pune,Commercial,Individual House,2.5",
            "a@b.com,Pune,Residential,Flat,3.0",
        ]
    );
}

#[test]
fn invalid_email_saves_nothing() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    app.send(post_form(
        "/alerts",
        "city=Bangalore&max_price=5.0&alert_email=not-an-email",
        Some(&token),
    ));

    assert!(app.saved_lines().is_empty());
    let body = body_string(app.send(get("/", Some(&token))));
    assert!(body.contains("Please enter a valid email address to get alerts."));
    // the typed value is kept in the field
    assert!(body.contains(r#"value="not-an-email""#));
}

#[test]
fn invalid_city_saves_nothing() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    app.send(post_form(
        "/alerts",
        "city=Bangalore%2C+KA&max_price=5.0&alert_email=a%40b.com",
        Some(&token),
    ));

    assert!(app.saved_lines().is_empty());
}

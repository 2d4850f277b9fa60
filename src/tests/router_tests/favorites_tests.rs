// src/tests/router_tests/favorites_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_bytes, body_string, get, happy_services, location, post_form, TestApp,
};
use scraper::{Html, Selector};

const BANGALORE: &str = "city=Bangalore&category=Residential&property_type=Flat&max_price=5.0";

/// A session that has already run the Bangalore search.
fn searched(app: &TestApp) -> String {
    let token = app.start_session();
    app.send(post_form("/search", BANGALORE, Some(&token)));
    // clear the search notices
    app.send(get("/", Some(&token)));
    token
}

#[test]
fn starring_a_row_adds_it_to_favorites() {
    let app = TestApp::new(happy_services());
    let token = searched(&app);

    // row 0 is Alpha Towers in result order
    let resp = app.send(post_form("/favorites", "row=0", Some(&token)));
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/#results");

    let body = body_string(app.send(get("/", Some(&token))));
    assert!(body.contains("Saved Alpha Towers to favorites!"));

    let doc = Html::parse_document(&body);
    let favs = Selector::parse("#favorites .fav strong").unwrap();
    let names: Vec<String> = doc.select(&favs).map(|e| e.text().collect()).collect();
    assert_eq!(names, vec!["Alpha Towers"]);
}

#[test]
fn favorites_are_not_deduplicated() {
    let app = TestApp::new(happy_services());
    let token = searched(&app);

    app.send(post_form("/favorites", "row=1", Some(&token)));
    app.send(post_form("/favorites", "row=1", Some(&token)));

    let csv = body_string(app.send(get("/favorites.csv", Some(&token))));
    assert_eq!(
        csv,
        "Brigade Meadows,Kanakapura Road,85 Lakh\nBrigade Meadows,Kanakapura Road,85 Lakh"
    );
}

#[test]
fn starring_without_results_is_a_bad_request() {
    let app = TestApp::new(happy_services());
    let token = app.start_session();

    let err = handle(post_form("/favorites", "row=0", Some(&token)), &app.state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn csv_export_has_one_line_per_favorite() {
    let app = TestApp::new(happy_services());
    let token = searched(&app);

    app.send(post_form("/favorites", "row=0", Some(&token)));
    app.send(post_form("/favorites", "row=1", Some(&token)));

    let resp = app.send(get("/favorites.csv", Some(&token)));
    assert_eq!(resp.status(), 200);
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(disposition.contains("favorites.csv"));

    let csv = body_string(resp);
    assert_eq!(
        csv.lines().collect::<Vec<_>>(),
        vec![
            "Alpha Towers,Koramangala,1.2 Cr",
            "Brigade Meadows,Kanakapura Road,85 Lakh",
        ]
    );
}

#[test]
fn xlsx_export_is_a_workbook() {
    let app = TestApp::new(happy_services());
    let token = searched(&app);
    app.send(post_form("/favorites", "row=0", Some(&token)));

    let resp = app.send(get("/favorites.xlsx", Some(&token)));
    assert_eq!(resp.status(), 200);

    let bytes = body_bytes(resp);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn compare_shows_selected_rows_only() {
    let app = TestApp::new(happy_services());
    let token = searched(&app);

    let body = body_string(app.send(get("/compare?selected=1", Some(&token))));

    let doc = Html::parse_document(&body);
    let rows = Selector::parse("table.comparison tbody tr td:first-child").unwrap();
    let names: Vec<String> = doc.select(&rows).map(|e| e.text().collect()).collect();
    assert_eq!(names, vec!["Brigade Meadows"]);

    let checked = Selector::parse("#compare input[name='selected'][checked]").unwrap();
    assert_eq!(doc.select(&checked).count(), 1);
}

#[test]
fn compare_ignores_out_of_range_rows() {
    let app = TestApp::new(happy_services());
    let token = searched(&app);

    let body = body_string(app.send(get("/compare?selected=9&selected=abc", Some(&token))));

    let doc = Html::parse_document(&body);
    let table = Selector::parse("table.comparison").unwrap();
    assert_eq!(doc.select(&table).count(), 0);
}

#[test]
fn filters_post_changes_the_visible_order() {
    let app = TestApp::new(happy_services());
    let token = searched(&app);

    app.send(post_form(
        "/filters",
        "sort_by=Price%3A+High+to+Low",
        Some(&token),
    ));

    let body = body_string(app.send(get("/", Some(&token))));
    let doc = Html::parse_document(&body);
    let cells = Selector::parse("table.properties tbody tr td:first-child").unwrap();
    let names: Vec<String> = doc.select(&cells).map(|e| e.text().collect()).collect();
    assert_eq!(names, vec!["Alpha Towers", "Brigade Meadows"]);

    // the star buttons still point at the original row indices
    let rows = Selector::parse("table.properties input[name='row']").unwrap();
    let idx: Vec<&str> = doc.select(&rows).filter_map(|e| e.value().attr("value")).collect();
    assert_eq!(idx, vec!["0", "1"]);
}

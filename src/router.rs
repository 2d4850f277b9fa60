use crate::agent::PropertyAgent;
use crate::config::MODEL_CHOICES;
use crate::domain::{normalize_city, normalize_email, Favorite};
use crate::errors::ServerError;
use crate::forms::{cookie, FormData};
use crate::responses::{csv_response, html_response, see_other, text_response, xlsx_response};
use crate::responses::ResultResp;
use crate::session::{Notice, SearchResults, SessionHandle, SESSION_COOKIE};
use crate::spreadsheets::shortlist_xlsx;
use crate::state::AppState;
use crate::storage::SavedSearch;
use crate::templates::{home_page, HomeVm};
use astra::{Request, Response};
use chrono::Utc;
use tracing::{error, info};

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    if (method.as_str(), path.as_str()) == ("GET", "/health") {
        return text_response(format!("ok ({} active sessions)", state.sessions.len()));
    }

    let session = state
        .sessions
        .open(cookie(&req, SESSION_COOKIE).as_deref(), Utc::now())?;
    let token = session.token.as_str();

    let resp = match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(state, token, Vec::new()),
        ("GET", "/compare") => {
            let query = FormData::from_query(&req);
            let picked = query
                .get_all("selected")
                .filter_map(|v| v.parse().ok())
                .collect();
            home(state, token, picked)
        }
        ("POST", "/credentials") => save_credentials(&mut req, state, token),
        ("POST", "/search") => search(&mut req, state, token),
        ("POST", "/alerts") => save_alert(&mut req, state, token),
        ("POST", "/filters") => apply_filters(&mut req, state, token),
        ("POST", "/favorites") => add_favorite(&mut req, state, token),
        ("GET", "/favorites.csv") => favorites_csv(state, token),
        ("GET", "/favorites.xlsx") => favorites_xlsx(state, token),
        _ => Err(ServerError::NotFound),
    }?;

    with_session_cookie(resp, &session)
}

fn with_session_cookie(mut resp: Response, session: &SessionHandle) -> ResultResp {
    if session.fresh {
        let cookie = format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            session.token
        );
        resp.headers_mut().insert(
            "Set-Cookie",
            cookie.parse().map_err(|_| ServerError::InternalError)?,
        );
    }
    Ok(resp)
}

/// Queue a notice for the next page view and send the browser there.
fn flash(state: &AppState, token: &str, notice: Notice, location: &str) -> ResultResp {
    state.sessions.with_session(token, |s| s.notify(notice))?;
    see_other(location)
}

fn home(state: &AppState, token: &str, compare: Vec<usize>) -> ResultResp {
    let page = state.sessions.with_session(token, |s| {
        let notices = s.take_notices();
        home_page(&HomeVm::new(s, &state.config, notices, compare))
    })?;
    html_response(page)
}

fn save_credentials(req: &mut Request, state: &AppState, token: &str) -> ResultResp {
    let form = FormData::from_body(req)?;
    let model = form.get("model_id").filter(|m| !m.is_empty());
    if let Some(m) = model.filter(|m| !MODEL_CHOICES.contains(m)) {
        return flash(state, token, Notice::error(format!("Unknown model: {m}")), "/");
    }

    state.sessions.with_session(token, |s| {
        if let Some(m) = model {
            s.model_id = m.to_string();
        }
        if let Some(k) = form.get("firecrawl_key").filter(|k| !k.is_empty()) {
            s.firecrawl_key = Some(k.to_string());
        }
        if let Some(k) = form.get("openai_key").filter(|k| !k.is_empty()) {
            s.openai_key = Some(k.to_string());
        }

        let keys = s.api_keys(
            state.config.firecrawl_api_key.as_deref(),
            state.config.openai_api_key.as_deref(),
        );
        s.notify(match keys {
            Ok(_) => Notice::success("Configuration saved."),
            Err(missing) => Notice::warning(format!(
                "Configuration saved. Still missing API keys: {}",
                missing.join(", ")
            )),
        });
    })?;

    see_other("/")
}

fn search(req: &mut Request, state: &AppState, token: &str) -> ResultResp {
    let form = FormData::from_body(req)?;
    let filters = form.filters();
    let criteria = match form.criteria() {
        Ok(c) => c,
        Err(msg) => return flash(state, token, Notice::error(msg), "/"),
    };

    let ready = state.sessions.with_session(token, |s| {
        s.criteria = criteria.clone();
        s.filters = filters.clone();
        if let Some(email) = form.get("alert_email") {
            s.alert_email = email.to_string();
        }
        s.api_keys(
            state.config.firecrawl_api_key.as_deref(),
            state.config.openai_api_key.as_deref(),
        )
        .map(|keys| (keys, s.model_id.clone()))
    })?;

    let Ok((keys, model_id)) = ready else {
        return flash(
            state,
            token,
            Notice::warning("⚠️ Please enter your API keys in the sidebar first!"),
            "/",
        );
    };

    if let Err(e) = normalize_city(&criteria.city) {
        return flash(state, token, Notice::error(e.user_message()), "/");
    }

    // Remote calls run outside the session lock.
    let agent = PropertyAgent::new(
        state.services.extractor(&keys.firecrawl)?,
        state.services.summarizer(&keys.openai, &model_id)?,
    )
    .structured(state.config.structured_summaries);

    info!(city = %criteria.city, model = %model_id, "Starting property search");
    let properties = agent.search_properties(&criteria, &filters);
    let trends = agent.location_trends(&criteria.city);

    let geocoder = state.services.geocoder();
    let city_center = geocoder.geocode(criteria.city.trim());
    let property_pins = properties
        .rows
        .iter()
        .map(|row| geocoder.geocode(&row.location))
        .collect();
    let trend_pins = trends
        .rows
        .iter()
        .map(|row| geocoder.geocode(&format!("{} {}", row.location, criteria.city.trim())))
        .collect();

    info!(
        city = %criteria.city,
        properties = properties.rows.len(),
        trends = trends.rows.len(),
        "Search finished"
    );

    state.sessions.with_session(token, |s| {
        s.results = Some(SearchResults {
            criteria,
            searched_at: Utc::now(),
            properties,
            trends,
            city_center,
            property_pins,
            trend_pins,
        });
        s.notify(Notice::success("Property search completed!"));
        s.notify(Notice::success("Location analysis completed!"));
    })?;

    see_other("/#results")
}

fn save_alert(req: &mut Request, state: &AppState, token: &str) -> ResultResp {
    let form = FormData::from_body(req)?;
    let typed = form.get("alert_email").unwrap_or("");
    state
        .sessions
        .with_session(token, |s| s.alert_email = typed.to_string())?;

    let Some(email) = normalize_email(typed) else {
        return flash(
            state,
            token,
            Notice::error("Please enter a valid email address to get alerts."),
            "/",
        );
    };
    let criteria = match form.criteria() {
        Ok(c) => c,
        Err(msg) => return flash(state, token, Notice::error(msg), "/"),
    };
    if let Err(e) = normalize_city(&criteria.city) {
        return flash(state, token, Notice::error(e.user_message()), "/");
    }

    let search = SavedSearch::new(email, &criteria);
    match state.saved_searches.append(&search) {
        Ok(()) => flash(
            state,
            token,
            Notice::success(
                "Your search criteria has been saved! You'll get alerts when new properties match.",
            ),
            "/",
        ),
        Err(e) => {
            error!(error = %e, path = %state.saved_searches.path().display(), "Could not save search");
            flash(
                state,
                token,
                Notice::error("Could not save your search. Please try again."),
                "/",
            )
        }
    }
}

fn apply_filters(req: &mut Request, state: &AppState, token: &str) -> ResultResp {
    let filters = FormData::from_body(req)?.filters();
    state.sessions.with_session(token, |s| {
        s.filters = filters;
        s.notify(Notice::info("Filters applied."));
    })?;
    see_other("/#results")
}

fn add_favorite(req: &mut Request, state: &AppState, token: &str) -> ResultResp {
    let form = FormData::from_body(req)?;
    let idx: usize = form
        .get("row")
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| ServerError::BadRequest("Missing property row".into()))?;

    let saved = state.sessions.with_session(token, |s| {
        let favorite = s
            .results
            .as_ref()
            .and_then(|r| r.properties.rows.get(idx))
            .map(Favorite::from)?;
        s.notify(Notice::success(format!("Saved {} to favorites!", favorite.name)));
        s.favorites.push(favorite);
        Some(())
    })?;

    match saved {
        Some(()) => see_other("/#results"),
        None => Err(ServerError::BadRequest(
            "That property is no longer in your results.".into(),
        )),
    }
}

fn favorites_csv(state: &AppState, token: &str) -> ResultResp {
    let body = state.sessions.with_session(token, |s| {
        s.favorites
            .iter()
            .map(Favorite::csv_line)
            .collect::<Vec<_>>()
            .join("\n")
    })?;
    csv_response(body, "favorites.csv")
}

fn favorites_xlsx(state: &AppState, token: &str) -> ResultResp {
    let favorites = state.sessions.with_session(token, |s| s.favorites.clone())?;
    xlsx_response(shortlist_xlsx(&favorites)?, "favorites.xlsx")
}

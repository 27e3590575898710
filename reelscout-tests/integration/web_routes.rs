//! Web routes exercised in-process against a scripted provider.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use reelscout_core::ReelscoutConfig;
use reelscout_search::providers::mock::movie;
use reelscout_search::providers::{MockProvider, MockReply};
use reelscout_search::{
    FAILED_TO_FETCH, MovieSearchService, NO_MOVIES_FOUND, POSTER_PLACEHOLDER_URL,
};
use reelscout_web::{AppState, router};
use serde_json::Value;
use tower::ServiceExt;

fn app(mock: Arc<MockProvider>) -> Router {
    let config = ReelscoutConfig::for_testing();
    router(AppState::new(MovieSearchService::with_provider(mock), &config))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, String) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}

/// Pulls the session id out of the hidden field of a rendered page.
fn session_id(html: &str) -> String {
    let marker = r#"name="sid" value=""#;
    let start = html.find(marker).expect("page carries a session field") + marker.len();
    html[start..start + 36].to_string()
}

#[tokio::test]
async fn test_auto_page_searches_default_query_on_load() {
    let mock = Arc::new(MockProvider::new());
    mock.on(
        "avatar",
        MockReply::Found(vec![movie(2, "Avatar"), movie(3, "Avatar 2")]),
    );
    let app = app(mock.clone());

    let (status, html) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Find your favourite movie."));
    assert!(html.contains(r#"hx-get="/htmx/search""#));
    assert!(html.contains("Movie Name: <span"));
    assert!(html.contains("Avatar 2"));
    assert!(html.contains(POSTER_PLACEHOLDER_URL));
    assert!(html.contains("https://img.example/3.jpg"));
    assert_eq!(mock.queries(), vec!["avatar".to_string()]);
}

#[tokio::test]
async fn test_manual_page_shows_placeholder_without_request() {
    let mock = Arc::new(MockProvider::new());
    let app = app(mock.clone());

    let (status, html) = get(&app, "/manual").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Search for a movie to get started"));
    assert!(html.contains(r#"hx-post="/htmx/submit""#));
    assert!(!html.contains("data-imdb-id"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_search_fragment_keeps_known_session() {
    let mock = Arc::new(MockProvider::new());
    mock.on("heat", MockReply::Found(vec![movie(1, "Heat")]));
    let app = app(mock.clone());

    let (_, page) = get(&app, "/").await;
    let sid = session_id(&page);

    let (status, fragment) = get(&app, &format!("/htmx/search?sid={sid}&query=heat")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("Heat"));
    assert!(!fragment.contains("hx-swap-oob"));

    // Clearing the box empties the grid without another request.
    let (_, fragment) = get(&app, &format!("/htmx/search?sid={sid}&query=")).await;
    assert!(!fragment.contains("data-imdb-id"));
    assert_eq!(mock.queries(), vec!["avatar".to_string(), "heat".to_string()]);
}

#[tokio::test]
async fn test_unknown_session_is_replaced_out_of_band() {
    let mock = Arc::new(MockProvider::new());
    mock.on("heat", MockReply::Found(vec![movie(1, "Heat")]));
    let app = app(mock);

    let (status, fragment) = get(
        &app,
        "/htmx/search?sid=00000000-0000-0000-0000-000000000000&query=heat",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("Heat"));
    assert!(fragment.contains(r#"hx-swap-oob="true""#));
    assert!(!fragment.contains("00000000-0000-0000-0000-000000000000"));
}

#[tokio::test]
async fn test_submit_fragment_reports_misses_and_failures() {
    let mock = Arc::new(MockProvider::new());
    mock.on("nothing", MockReply::NotFound(None));
    mock.on("down", MockReply::Fail("connection refused".to_string()));
    let app = app(mock.clone());

    let (_, page) = get(&app, "/manual").await;
    let sid = session_id(&page);

    let (_, fragment) = post_form(&app, "/htmx/submit", &format!("sid={sid}&query=nothing")).await;
    assert!(fragment.contains(NO_MOVIES_FOUND));

    let (_, fragment) = post_form(&app, "/htmx/submit", &format!("sid={sid}&query=down")).await;
    assert!(fragment.contains(FAILED_TO_FETCH));
    assert!(!fragment.contains("connection refused"));

    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_submit_with_empty_query_keeps_placeholder() {
    let mock = Arc::new(MockProvider::new());
    let app = app(mock.clone());

    let (_, page) = get(&app, "/manual").await;
    let sid = session_id(&page);

    let (status, fragment) = post_form(&app, "/htmx/submit", &format!("sid={sid}&query=")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(fragment.contains("Search for a movie to get started"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_api_search_reports_view_and_state() {
    let mock = Arc::new(MockProvider::new());
    mock.on("heat", MockReply::Found(vec![movie(2, "Heat")]));
    let app = app(mock);

    let (status, body) = get(&app, "/api/search?q=heat&policy=manual").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["query"], "heat");
    assert_eq!(json["view"], "results");
    assert_eq!(json["state"]["has_searched"], true);
    assert_eq!(json["state"]["is_loading"], false);
    assert_eq!(json["state"]["results"][0]["title"], "Heat");

    let (_, body) = get(&app, "/api/search?q=&policy=manual").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["view"], "placeholder");

    let (_, body) = get(&app, "/api/search?q=").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["view"], "results");
}

#[tokio::test]
async fn test_health() {
    let app = app(Arc::new(MockProvider::new()));
    get(&app, "/manual").await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["provider"], "mock");
    assert_eq!(json["sessions"], 1);
}

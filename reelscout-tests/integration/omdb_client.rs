//! OMDb client behaviour against a local stub of the API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use reelscout_core::OmdbConfig;
use reelscout_search::{
    FAILED_TO_FETCH, MovieSearchError, MovieSearchProvider, MovieSearchService, OmdbProvider,
    POSTER_PLACEHOLDER_URL, SearchOutcome, TriggerPolicy,
};
use serde_json::json;

type Recorded = Arc<Mutex<Vec<HashMap<String, String>>>>;

async fn stub_search(
    State(recorded): State<Recorded>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let title = params.get("s").cloned().unwrap_or_default();
    recorded.lock().unwrap().push(params);

    match title.as_str() {
        "avatar" => axum::Json(json!({
            "Search": [
                {"Title": "Avatar", "Year": "2009", "imdbID": "tt0499549", "Type": "movie", "Poster": "N/A"},
                {"Title": "Avatar: The Way of Water", "Year": "2022", "imdbID": "tt1630029", "Type": "movie",
                 "Poster": "https://m.media-amazon.com/images/M/way-of-water.jpg"}
            ],
            "totalResults": "2",
            "Response": "True"
        }))
        .into_response(),
        "badkey" => (
            StatusCode::UNAUTHORIZED,
            axum::Json(json!({"Response": "False", "Error": "Invalid API key!"})),
        )
            .into_response(),
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        "garbled" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => axum::Json(json!({"Response": "False", "Error": "Movie not found!"})).into_response(),
    }
}

/// Serves the stub on an ephemeral port and returns its base URL.
async fn spawn_stub() -> (String, Recorded) {
    let recorded: Recorded = Arc::default();
    let app = Router::new()
        .route("/", get(stub_search))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/"), recorded)
}

fn provider_for(base_url: &str) -> OmdbProvider {
    OmdbProvider::new(&OmdbConfig {
        api_key: Some("stub-key".to_string()),
        base_url: base_url.to_string(),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_match_sends_key_and_title() {
    let (base, recorded) = spawn_stub().await;
    let provider = provider_for(&base);

    let outcome = provider.search("avatar").await.unwrap();

    let SearchOutcome::Found(movies) = outcome else {
        panic!("expected a match, got {outcome:?}");
    };
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].imdb_id, "tt0499549");
    assert_eq!(movies[0].poster_src(), POSTER_PLACEHOLDER_URL);
    assert_eq!(
        movies[1].poster_src(),
        "https://m.media-amazon.com/images/M/way-of-water.jpg"
    );

    let requests = recorded.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].get("apikey").map(String::as_str), Some("stub-key"));
    assert_eq!(requests[0].get("s").map(String::as_str), Some("avatar"));
}

#[tokio::test]
async fn test_title_is_query_encoded() {
    let (base, recorded) = spawn_stub().await;
    let provider = provider_for(&base);

    provider.search("fast & furious?").await.unwrap();

    let requests = recorded.lock().unwrap();
    assert_eq!(
        requests[0].get("s").map(String::as_str),
        Some("fast & furious?")
    );
}

#[tokio::test]
async fn test_miss_carries_provider_explanation() {
    let (base, _) = spawn_stub().await;
    let provider = provider_for(&base);

    let outcome = provider.search("zzzzqqq").await.unwrap();

    assert_eq!(
        outcome,
        SearchOutcome::NotFound {
            message: Some("Movie not found!".to_string())
        }
    );
}

#[tokio::test]
async fn test_json_error_status_is_still_interpreted() {
    let (base, _) = spawn_stub().await;
    let provider = provider_for(&base);

    let outcome = provider.search("badkey").await.unwrap();

    assert_eq!(
        outcome,
        SearchOutcome::NotFound {
            message: Some("Invalid API key!".to_string())
        }
    );
}

#[tokio::test]
async fn test_non_json_failures() {
    let (base, _) = spawn_stub().await;
    let provider = provider_for(&base);

    assert!(matches!(
        provider.search("boom").await,
        Err(MovieSearchError::ProviderError { .. })
    ));
    assert!(matches!(
        provider.search("garbled").await,
        Err(MovieSearchError::ParseError { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = provider_for(&format!("http://{addr}/"));

    assert!(matches!(
        provider.search("avatar").await,
        Err(MovieSearchError::NetworkError { .. })
    ));
}

#[tokio::test]
async fn test_session_over_stub_cycles_through_outcomes() {
    let (base, recorded) = spawn_stub().await;
    let service = MovieSearchService::with_provider(Arc::new(provider_for(&base)));
    let session = service.session(TriggerPolicy::Auto);

    let state = session.trigger("boom").await;
    assert_eq!(state.error.as_deref(), Some(FAILED_TO_FETCH));
    assert!(state.results.is_empty());
    assert!(!state.is_loading);

    let state = session.trigger("zzzzqqq").await;
    assert_eq!(state.error.as_deref(), Some("Movie not found!"));

    let state = session.trigger("avatar").await;
    assert_eq!(state.error, None);
    assert_eq!(state.results.len(), 2);

    // Empty input clears results without a request.
    let state = session.trigger("").await;
    assert!(state.results.is_empty());
    assert_eq!(recorded.lock().unwrap().len(), 3);
}

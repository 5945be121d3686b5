//! HTTP client tests.
//!
//! Each test serves a small axum router on an ephemeral port that stands in
//! for the autocomplete endpoint.

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value as JsonValue, json};

use icd_autocomplete::{AutocompleteConfig, Dropdown, IcdClient, LookupError, MemoryForm};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const PATH: &str = "/ajax/icd11-autocomplete/";

/// Serve `router` on 127.0.0.1 and return the endpoint URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}{PATH}")
}

/// Endpoint answering every request with a fixed status and JSON body
async fn fixed(status: StatusCode, body: JsonValue) -> String {
    serve(Router::new().route(
        PATH,
        get(move || async move { (status, Json(body)).into_response() }),
    ))
    .await
}

/// Endpoint echoing the `q` parameter back as the title of one match
async fn echo() -> String {
    async fn handler(Query(params): Query<HashMap<String, String>>) -> Json<JsonValue> {
        let q = params.get("q").cloned().unwrap_or_default();
        Json(json!({ "results": [{ "code": "ECHO", "title": q }] }))
    }
    serve(Router::new().route(PATH, get(handler))).await
}

fn client(endpoint: String) -> IcdClient {
    let config = AutocompleteConfig {
        endpoint,
        request_timeout: Duration::from_millis(500),
        ..AutocompleteConfig::default()
    };
    IcdClient::new(&config).expect("Failed to build client")
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn results_envelope() {
    let url = fixed(
        StatusCode::OK,
        json!({
            "results": [{
                "code": "BA00",
                "title": "Acute appendicitis",
                "description": "Acute inflammation of the appendix",
                "foundation_uri": "http://id.who.int/icd/entity/1",
                "chapter": "13"
            }]
        }),
    )
    .await;

    let matches = client(url).fetch("BA").await.unwrap();
    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.code, "BA00");
    assert_eq!(m.title, "Acute appendicitis");
    assert_eq!(m.chapter.as_deref(), Some("13"));
    assert_eq!(m.foundation_uri.as_deref(), Some("http://id.who.int/icd/entity/1"));
}

#[tokio::test]
async fn bare_list() {
    let url = fixed(
        StatusCode::OK,
        json!([
            { "code": "BA00", "title": "Acute appendicitis" },
            { "code": "BA01", "title": "Appendicitis" }
        ]),
    )
    .await;

    let matches = client(url).fetch("BA").await.unwrap();
    let codes: Vec<_> = matches.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, ["BA00", "BA01"]);
}

#[tokio::test]
async fn query_text_is_sent_encoded() {
    let url = echo().await;
    let matches = client(url).fetch("acute & chronic").await.unwrap();
    assert_eq!(matches[0].title, "acute & chronic");
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_payload() {
    let url = fixed(StatusCode::OK, json!({ "error": "rate limited" })).await;
    let err = client(url).fetch("BA").await.unwrap_err();
    assert_eq!(err, LookupError::Server("rate limited".to_string()));
}

#[tokio::test]
async fn error_payload_on_non_success_status() {
    let url = fixed(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": "rate limited" }),
    )
    .await;
    let err = client(url).fetch("BA").await.unwrap_err();
    assert_eq!(err, LookupError::Server("rate limited".to_string()));
}

#[tokio::test]
async fn plain_non_success_status() {
    let url = serve(Router::new().route(
        PATH,
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
    ))
    .await;
    let err = client(url).fetch("BA").await.unwrap_err();
    assert_eq!(err, LookupError::Status(500));
}

#[tokio::test]
async fn malformed_payload() {
    let url = fixed(StatusCode::OK, json!({ "matches": [] })).await;
    let err = client(url).fetch("BA").await.unwrap_err();
    assert_eq!(err.kind(), "malformed");
}

#[tokio::test]
async fn unreachable_endpoint() {
    // Bind then release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}{PATH}"))
        .fetch("BA")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "transport");
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let url = serve(Router::new().route(
        PATH,
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Response::new(Body::from("[]"))
        }),
    ))
    .await;
    let err = client(url).fetch("BA").await.unwrap_err();
    assert_eq!(err.kind(), "transport");
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn typed_text_reaches_dropdown() {
    let url = fixed(
        StatusCode::OK,
        json!({ "results": [{ "code": "BA00", "title": "Acute appendicitis" }] }),
    )
    .await;
    let config = AutocompleteConfig {
        endpoint: url,
        quiet_period: Duration::from_millis(20),
        ..AutocompleteConfig::default()
    };
    let client = IcdClient::new(&config).unwrap();
    let (handle, task) =
        icd_autocomplete::spawn(config, client, Dropdown::default(), MemoryForm::default());

    handle.input("BA");
    tokio::time::sleep(Duration::from_millis(300)).await;
    drop(handle);

    let (dropdown, _) = task.await.unwrap();
    assert_eq!(dropdown.suggestions().len(), 1);
    assert_eq!(dropdown.suggestions()[0].label, "BA00 - Acute appendicitis");
    assert_eq!(dropdown.notice(), None);
}

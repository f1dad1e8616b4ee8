use axum::body::{Body, Bytes};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use search_core::PreprocessorConfig;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;
use tower::ServiceExt;

fn build_tiny_corpus(dir: &std::path::Path) {
    fs::write(
        dir.join("docs.json"),
        r#"[
            {"id": "a", "title": "Reef", "text": "tropical fish sea"},
            {"id": "b", "title": "Aquarium", "text": "tropical fish"},
            {"id": "c", "title": "Abyss", "text": "deep blue ocean"}
        ]"#,
    )
    .unwrap();
}

fn app() -> Router {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    server::build_app(dir.path(), PreprocessorConfig::english()).unwrap()
}

async fn call(app: Router, req: Request<Body>) -> (StatusCode, Bytes) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health() {
    let (status, body) = call(app(), Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn search_returns_ranked_results() {
    let (status, body) = call(app(), Request::get("/search?q=tropical%20fish&k=2").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    let arr = json["results"].as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["doc_id"].as_u64().unwrap(), 1);
    assert_eq!(arr[0]["external_id"], "b");
    assert_eq!(arr[1]["doc_id"].as_u64().unwrap(), 0);
    assert_eq!(json["total_hits"].as_u64().unwrap(), 2);
}

#[tokio::test]
async fn cosine_search_pages_with_offset() {
    let app = app();
    let (status, body) =
        call(app.clone(), post_json("/cosine_search", serde_json::json!({"query": "tropical fish"}))).await;
    assert_eq!(status, StatusCode::OK);
    let all: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(all["results"].as_array().unwrap().len(), 3);

    let (status, body) = call(
        app,
        post_json("/cosine_search", serde_json::json!({"query": "tropical fish", "limit": 1, "offset": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let page: Value = serde_json::from_slice(&body).unwrap();
    let arr = page["results"].as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["doc_id"], all["results"][1]["doc_id"]);
}

#[tokio::test]
async fn cosine_search_rejects_oversized_limit() {
    let (status, body) = call(
        app(),
        post_json("/cosine_search", serde_json::json!({"query": "fish", "limit": server::MAX_SEARCH_ITEMS + 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn doc_lookup() {
    let app = app();
    let (status, body) = call(app.clone(), Request::get("/doc/2").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["title"], "Abyss");
    assert_eq!(json["text"], "deep blue ocean");

    let (status, _) = call(app, Request::get("/doc/42").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn offset_past_the_end_keeps_total_hits() {
    let (status, body) = call(
        app(),
        post_json("/cosine_search", serde_json::json!({"query": "tropical fish", "offset": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["results"].as_array().unwrap().is_empty());
    assert_eq!(json["total_hits"].as_u64().unwrap(), 2);
}

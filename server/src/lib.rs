use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use search_core::source::load_path;
use search_core::{ingest, DocId, DocIdAllocator, DocMeta, Preprocessor, PreprocessorConfig, SimilarityEngine};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Upper bound on `limit` accepted by `/cosine_search`.
pub const MAX_SEARCH_ITEMS: usize = 10_000;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_limit")]
    pub k: usize,
}

#[derive(Deserialize)]
pub struct CosineSearchRequest {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    10
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    /// Documents with a positive score.
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f64,
    pub title: Option<String>,
    pub external_id: Option<String>,
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody { success: false, message: message.into() }))
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SimilarityEngine>,
    pub docs: Arc<HashMap<DocId, DocMeta>>,
}

impl AppState {
    /// Load, normalize and index every record under `corpus_path`.
    pub fn load(corpus_path: impl AsRef<std::path::Path>, config: PreprocessorConfig) -> Result<Self> {
        let preprocessor = Preprocessor::new(config)?;
        let records = load_path(corpus_path)?;
        let corpus = ingest(records, &preprocessor, &DocIdAllocator::new())?;
        tracing::info!(documents = corpus.len(), skipped = corpus.skipped, "corpus indexed");
        let engine = SimilarityEngine::build(corpus.documents, preprocessor)?;
        Ok(Self { engine: Arc::new(engine), docs: Arc::new(corpus.docs) })
    }
}

pub fn build_app(corpus_path: impl AsRef<std::path::Path>, config: PreprocessorConfig) -> Result<Router> {
    let state = AppState::load(corpus_path, config)?;

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Ok(router(state).layer(cors).layer(TraceLayer::new_for_http()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/cosine_search", post(cosine_search_handler))
        .route("/doc/:doc_id", get(doc_handler))
        .with_state(state)
}

fn run_search(state: &AppState, query: String, limit: usize, offset: usize) -> SearchResponse {
    let start = std::time::Instant::now();
    let ranked = state.engine.rank(&query);
    let total_hits = ranked.iter().filter(|(score, _)| *score > 0.0).count();

    let results = ranked
        .into_iter()
        .skip(offset)
        .take(limit)
        .filter_map(|(score, doc)| {
            let meta = state.docs.get(&doc.id())?;
            Some(SearchHit {
                doc_id: doc.id(),
                score,
                title: meta.title.clone(),
                external_id: meta.external_id.clone(),
                text: meta.text.clone(),
            })
        })
        .collect();

    let took_s = start.elapsed().as_secs_f64();
    tracing::debug!(query = %query, total_hits, took_s, "search served");
    SearchResponse { query, took_s, total_hits, results }
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let k = params.k.clamp(1, 100);
    Json(run_search(&state, params.q, k, 0))
}

pub async fn cosine_search_handler(
    State(state): State<AppState>,
    Json(req): Json<CosineSearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    if req.limit > MAX_SEARCH_ITEMS {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            format!("limit {} exceeds the maximum of {MAX_SEARCH_ITEMS}", req.limit),
        ));
    }
    Ok(Json(run_search(&state, req.query, req.limit, req.offset)))
}

pub async fn doc_handler(
    State(state): State<AppState>,
    Path(doc_id): Path<DocId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let meta = state
        .docs
        .get(&doc_id)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("document {doc_id} not found")))?;
    Ok(Json(serde_json::json!({
        "doc_id": doc_id,
        "external_id": meta.external_id,
        "title": meta.title,
        "text": meta.text,
        "meta": meta.meta,
    })))
}

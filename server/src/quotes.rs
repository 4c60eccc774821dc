//! Quotes service: random pick, append, and text update.
//!
//! The only service without a root descriptor route, and the only one whose
//! own default port (5000) differs from the port the client expects (5001).

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use store::{Quote, Repository};

use crate::{error::ApiError, payload::text_field};

pub const DATA_FILE: &str = "quotes.json";
pub const DEFAULT_PORT: u16 = 5000;

const MISSING_FIELD: &str = "Missing 'quote' field";

pub fn app(repo: Repository<Quote>) -> Router {
    Router::new()
        .route("/api/quote", get(random_quote).post(add_quote))
        .route("/api/quote/{id}", put(update_quote))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(repo))
}

async fn random_quote(
    State(repo): State<Arc<Repository<Quote>>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(match repo.random()? {
        Some(quote) => (StatusCode::OK, Json(json!(quote))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "id": 0, "quote": "No quotes available." })),
        ),
    })
}

async fn add_quote(
    State(repo): State<Arc<Repository<Quote>>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let text = text_field(&body, "quote")
        .ok_or_else(|| ApiError::Validation(MISSING_FIELD.to_string()))?;

    let quote = repo.insert(|id| Quote { id, quote: text })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Quote added successfully!", "quote": quote })),
    ))
}

async fn update_quote(
    State(repo): State<Arc<Repository<Quote>>>,
    Path(id): Path<u64>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let text = text_field(&body, "quote")
        .ok_or_else(|| ApiError::Validation(MISSING_FIELD.to_string()))?;

    Ok(match repo.update(id, |quote| quote.quote = text)? {
        Some(quote) => (
            StatusCode::OK,
            Json(json!({ "message": "Quote updated!", "quote": quote })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Quote not found" })),
        ),
    })
}

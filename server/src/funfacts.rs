//! Fun facts service: random pick and append.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use store::{FunFact, Repository};

use crate::{error::ApiError, payload::text_field};

pub const DATA_FILE: &str = "funfacts.json";
pub const DEFAULT_PORT: u16 = 5002;

const MISSING_FIELD: &str = "Request JSON must include a non-empty 'fact' field.";

pub fn app(repo: Repository<FunFact>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/funfact", get(random_funfact).post(add_funfact))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(repo))
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "service": "Fun Facts",
        "status": "running",
        "endpoints": ["/funfact"],
    }))
}

async fn random_funfact(
    State(repo): State<Arc<Repository<FunFact>>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(match repo.random()? {
        Some(fact) => (StatusCode::OK, Json(json!(fact))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "id": 0, "fact": "No fun facts available." })),
        ),
    })
}

async fn add_funfact(
    State(repo): State<Arc<Repository<FunFact>>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let text = text_field(&body, "fact")
        .ok_or_else(|| ApiError::Validation(MISSING_FIELD.to_string()))?;

    let fact = repo.insert(|id| FunFact { id, fact: text })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Fun fact added successfully!", "fact": fact })),
    ))
}

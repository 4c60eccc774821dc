//! Daily reflections service: append and lookup-by-today.
//!
//! The creation date is stamped server-side; duplicate reflections for one
//! day are not rejected, and the today lookup returns the first match.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use store::{today, Reflection, Repository};

use crate::{error::ApiError, payload::text_field};

pub const DATA_FILE: &str = "reflections.json";
pub const DEFAULT_PORT: u16 = 5003;

const MISSING_FIELD: &str = "Request JSON must include a non-empty 'reflection' field.";

pub fn app(repo: Repository<Reflection>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/reflection", post(add_reflection))
        .route("/reflection/today", get(today_reflection))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(repo))
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "service": "Daily Reflections",
        "status": "running",
        "endpoints": ["/reflection", "/reflection/today"],
    }))
}

async fn add_reflection(
    State(repo): State<Arc<Repository<Reflection>>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let text = text_field(&body, "reflection")
        .ok_or_else(|| ApiError::Validation(MISSING_FIELD.to_string()))?;

    let reflection = repo.insert(|id| Reflection {
        id,
        date: today(),
        reflection: text,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Reflection saved successfully!",
            "reflection": reflection,
        })),
    ))
}

async fn today_reflection(
    State(repo): State<Arc<Repository<Reflection>>>,
) -> Result<impl IntoResponse, ApiError> {
    let date = today();

    Ok(match repo.find(|r| r.date == date)? {
        Some(reflection) => (StatusCode::OK, Json(json!(reflection))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "message": "No reflection found for today.",
                "date": date,
            })),
        ),
    })
}

//! Goals service: list, append, and one-way completion.

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

use store::{Goal, Repository};

use crate::{error::ApiError, payload::text_field};

pub const DATA_FILE: &str = "goals.json";
pub const DEFAULT_PORT: u16 = 5004;

const MISSING_FIELD: &str = "Request JSON must include a non-empty 'goal' field.";

pub fn app(repo: Repository<Goal>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/goals", get(list_goals).post(add_goal))
        .route("/goals/{id}", put(complete_goal))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(repo))
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "service": "Goal Tracker",
        "status": "running",
        "endpoints": ["/goals"],
    }))
}

async fn list_goals(
    State(repo): State<Arc<Repository<Goal>>>,
) -> Result<impl IntoResponse, ApiError> {
    let goals = repo.all()?;

    Ok(Json(json!({ "count": goals.len(), "goals": goals })))
}

async fn add_goal(
    State(repo): State<Arc<Repository<Goal>>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let text = text_field(&body, "goal")
        .ok_or_else(|| ApiError::Validation(MISSING_FIELD.to_string()))?;

    let goal = repo.insert(|id| Goal {
        id,
        goal: text,
        completed: false,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Goal created successfully!", "goal": goal })),
    ))
}

async fn complete_goal(
    State(repo): State<Arc<Repository<Goal>>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    // Completion is one-way; repeating the call is a no-op.
    Ok(match repo.update(id, |goal| goal.completed = true)? {
        Some(goal) => (
            StatusCode::OK,
            Json(json!({ "message": "Goal marked as completed!", "goal": goal })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Goal not found" })),
        ),
    })
}

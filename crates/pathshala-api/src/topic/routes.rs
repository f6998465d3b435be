use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{ApiState, error::ApiError};

use super::model::{TopicDetail, TopicSummary};

/// Create the topic routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/topics", get(get_all_topics))
        .route("/topics/{id}", get(get_topic_by_id))
}

/// Get all topics, in authored order
async fn get_all_topics(State(state): State<ApiState>) -> Response {
    let topics: Vec<TopicSummary<'_>> = state
        .content
        .all_topics()
        .iter()
        .map(TopicSummary::from)
        .collect();

    Json(topics).into_response()
}

/// Get topic by ID
async fn get_topic_by_id(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(topic) = state.content.topic_by_id(&id) else {
        tracing::debug!(topic_id = %id, "Topic not found");
        return Err(ApiError::NotFound { entity: "Topic", id });
    };

    Ok(Json(TopicDetail::from(topic)).into_response())
}

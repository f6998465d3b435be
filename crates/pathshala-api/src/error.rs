use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": format!("{entity} not found"),
                    "id": id
                })),
            )
                .into_response(),
        }
    }
}

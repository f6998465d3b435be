use axum::Router;

use crate::{problem, state::ApiState, topic, unit};

/// V1 API routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .merge(topic::routes())
        .merge(unit::routes())
        .merge(problem::routes())
}

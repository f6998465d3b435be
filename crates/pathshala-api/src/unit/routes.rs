use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
};

use pathshala_content::models::LocalizedText;
use pathshala_grading::{numerals::to_bengali_number, progress::progress_percent};

use crate::{ApiState, error::ApiError, problem::model::ProblemView};

use super::model::{ProgressQuery, UnitDetail, UnitProgress};

/// Create the unit and lesson routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/units/{id}", get(get_unit_by_id))
        .route("/units/{id}/problems", get(get_unit_problems))
        .route("/units/{id}/progress", get(get_unit_progress))
        .route("/lessons/{id}", get(get_lesson_by_id))
}

/// Get unit by ID, with its owning topic
async fn get_unit_by_id(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(unit) = state.content.unit_by_id(&id) else {
        tracing::debug!(unit_id = %id, "Unit not found");
        return Err(ApiError::NotFound { entity: "Unit", id });
    };

    Ok(Json(UnitDetail::from(unit)).into_response())
}

/// Get every problem of a unit, set by set.
///
/// An unknown unit is not an error here: it simply has no problems.
async fn get_unit_problems(State(state): State<ApiState>, Path(id): Path<String>) -> Response {
    let problems: Vec<ProblemView<'_>> = state
        .content
        .problems_for_unit(&id)
        .into_iter()
        .map(ProblemView::from)
        .collect();

    if problems.is_empty() {
        tracing::debug!(unit_id = %id, "No problems for unit");
    }

    Json(problems).into_response()
}

/// Progress through a unit after `completed` of its problems
async fn get_unit_progress(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Query(query): Query<ProgressQuery>,
) -> Result<Response, ApiError> {
    let Some(unit) = state.content.unit_by_id(&id) else {
        tracing::debug!(unit_id = %id, "Unit not found");
        return Err(ApiError::NotFound { entity: "Unit", id });
    };

    let total = state.content.problems_for_unit(&unit.unit.id).len();
    let percent = progress_percent(query.completed, total);

    Ok(Json(UnitProgress {
        unit_id: &unit.unit.id,
        completed: query.completed.min(total),
        total,
        percent,
        label: LocalizedText::new(
            format!("{percent}%"),
            format!("{}%", to_bengali_number(f64::from(percent))),
        ),
    })
    .into_response())
}

/// Get lesson by ID
async fn get_lesson_by_id(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(lesson) = state.content.lesson_by_id(&id) else {
        tracing::debug!(lesson_id = %id, "Lesson not found");
        return Err(ApiError::NotFound { entity: "Lesson", id });
    };

    Ok(Json(lesson).into_response())
}

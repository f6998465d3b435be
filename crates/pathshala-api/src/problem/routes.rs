use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use pathshala_content::models::Locale;
use pathshala_grading::{grade, hints};

use crate::{
    ApiState, error::ApiError, normalization::normalize_answer, validation::validate_locale,
};

use super::model::{
    HintQuery, HintResponse, ProblemSetView, ProblemView, SubmitAnswerRequest,
    SubmitAnswerResponse,
};

/// Create the problem and problem set routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/problems/{id}", get(get_problem_by_id))
        .route("/problems/{id}/hints", get(get_next_hint))
        .route("/problems/{id}/submit", post(submit_answer))
        .route("/problem-sets/{id}", get(get_problem_set_by_id))
}

fn problem_not_found(id: String) -> ApiError {
    tracing::debug!(problem_id = %id, "Problem not found");
    ApiError::NotFound {
        entity: "Problem",
        id,
    }
}

/// Get problem by ID
async fn get_problem_by_id(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(problem) = state.content.problem_by_id(&id) else {
        return Err(problem_not_found(id));
    };

    Ok(Json(ProblemView::from(problem)).into_response())
}

/// Get the next hint after `revealed` hints have been shown
async fn get_next_hint(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Query(query): Query<HintQuery>,
) -> Result<Response, ApiError> {
    let locale = match query.lang.as_deref() {
        Some(code) => validate_locale(code)?,
        None => Locale::En,
    };

    let Some(problem) = state.content.problem_by_id(&id) else {
        return Err(problem_not_found(id));
    };

    let Some(hint) = hints::next_hint(problem, query.revealed) else {
        tracing::debug!(problem_id = %id, revealed = query.revealed, "No more hints");
        return Err(ApiError::NotFound { entity: "Hint", id });
    };

    let revealed = query.revealed + 1;
    let total = problem.hints.len();

    Ok(Json(HintResponse {
        hint,
        revealed,
        total,
        has_more: hints::has_more_hints(problem, revealed),
        label: hints::hint_counter_label(locale, revealed, total),
    })
    .into_response())
}

/// Grade a submitted answer
async fn submit_answer(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Response, ApiError> {
    let Some(problem) = state.content.problem_by_id(&id) else {
        return Err(problem_not_found(id));
    };

    let answer = normalize_answer(&problem.kind, request.answer);
    let outcome = grade(problem, &answer);

    crate::metrics::record_submission(problem.kind.as_str(), outcome.correct);
    tracing::info!(
        problem_id = %problem.id,
        problem_type = problem.kind.as_str(),
        correct = outcome.correct,
        points_awarded = outcome.points_awarded,
        "Answer graded"
    );

    Ok(Json(SubmitAnswerResponse {
        grade: outcome,
        explanation: &problem.explanation,
    })
    .into_response())
}

/// Get problem set by ID, with its problems
async fn get_problem_set_by_id(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(set) = state.content.problem_set_by_id(&id) else {
        tracing::debug!(problem_set_id = %id, "Problem set not found");
        return Err(ApiError::NotFound {
            entity: "Problem set",
            id,
        });
    };

    Ok(Json(ProblemSetView::from(set)).into_response())
}

//! Answer grading for Pathshala
//!
//! This crate decides whether a submitted answer is correct for a problem.
//! Answers arrive from an untyped boundary, so they are taken as a
//! [`serde_json::Value`]; an answer of the wrong shape for the problem is
//! simply incorrect. Grading never fails and never touches any state.

pub mod hints;
pub mod numerals;
pub mod progress;

use pathshala_content::models::{
    DragDropProblem, LocalizedText, McqProblem, NumberInputProblem, Problem, ProblemKind,
};
use serde::Serialize;
use serde_json::Value;

/// Validate an answer against a problem.
///
/// # Arguments
///
/// * `problem` - The problem being answered
/// * `answer` - The submitted answer, of any JSON shape
///
/// # Rules
///
/// * Multiple choice: the answer must be a string equal (case-sensitively)
///   to the id of the first option flagged correct.
/// * Number input: the answer must be a JSON number within the problem's
///   tolerance of the correct answer, bounds included. Numeric strings are
///   rejected; parsing is the caller's job.
/// * Drag and drop: the answer must be an object mapping every drop zone in
///   the solution to its draggable id. Zones the solution does not mention
///   are ignored.
/// * Unsupported problem types are never correct.
pub fn validate_answer(problem: &Problem, answer: &Value) -> bool {
    match &problem.kind {
        ProblemKind::Mcq(mcq) => validate_mcq_answer(mcq, answer),
        ProblemKind::NumberInput(number) => validate_number_input_answer(number, answer),
        ProblemKind::DragDrop(drag_drop) => validate_drag_drop_answer(drag_drop, answer),
        ProblemKind::Unsupported => false,
    }
}

fn validate_mcq_answer(problem: &McqProblem, answer: &Value) -> bool {
    let Some(answer) = answer.as_str() else {
        return false;
    };

    problem
        .correct_option()
        .is_some_and(|option| option.id == answer)
}

fn validate_number_input_answer(problem: &NumberInputProblem, answer: &Value) -> bool {
    let Some(answer) = answer.as_f64() else {
        return false;
    };

    (answer - problem.correct_answer).abs() <= problem.tolerance()
}

fn validate_drag_drop_answer(problem: &DragDropProblem, answer: &Value) -> bool {
    let Some(answer) = answer.as_object() else {
        return false;
    };

    problem
        .solution
        .iter()
        .all(|(zone_id, draggable_id)| {
            answer.get(zone_id).and_then(Value::as_str) == Some(draggable_id.as_str())
        })
}

/// Outcome of grading one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade<'a> {
    pub correct: bool,
    /// The problem's points when correct, zero otherwise
    pub points_awarded: u32,
    /// Authored feedback for this particular answer, when there is any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<&'a LocalizedText>,
}

/// Grade an answer: validate it and pick the matching feedback.
///
/// Only multiple choice problems carry feedback. A correct pick gets the
/// `correct` text; a wrong pick gets the text authored for that option, if
/// any.
pub fn grade<'a>(problem: &'a Problem, answer: &Value) -> Grade<'a> {
    let correct = validate_answer(problem, answer);

    let feedback = match &problem.kind {
        ProblemKind::Mcq(McqProblem {
            feedback: Some(feedback),
            ..
        }) => {
            if correct {
                Some(&feedback.correct)
            } else {
                answer
                    .as_str()
                    .and_then(|option_id| feedback.incorrect.get(option_id))
            }
        }
        _ => None,
    };

    Grade {
        correct,
        points_awarded: if correct { problem.points } else { 0 },
        feedback,
    }
}

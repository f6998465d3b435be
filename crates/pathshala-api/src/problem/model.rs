//! Wire shapes for problems.
//!
//! Problems are served without anything that gives the answer away: no
//! correctness flags on options, no correct number or tolerance, no
//! drag-drop solution, no explanation and no hint text. The explanation and
//! any feedback come back from submitting an answer; hints are fetched one
//! at a time.

use pathshala_content::models::{
    Draggable, DropZone, Hint, LocalizedText, McqOption, Problem, ProblemKind, ProblemSet,
};
use pathshala_grading::Grade;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A multiple choice option as shown to the learner
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionView<'a> {
    pub id: &'a str,
    pub text: &'a LocalizedText,
}

impl<'a> From<&'a McqOption> for OptionView<'a> {
    fn from(option: &'a McqOption) -> Self {
        Self {
            id: &option.id,
            text: &option.text,
        }
    }
}

/// A problem as shown to the learner before answering
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemView<'a> {
    pub id: &'a str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub difficulty: u8,
    pub difficulty_label: &'static str,
    pub question: &'a LocalizedText,
    pub hint_count: usize,
    pub tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionView<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggables: Option<&'a [Draggable]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_zones: Option<&'a [DropZone]>,
}

impl<'a> From<&'a Problem> for ProblemView<'a> {
    fn from(problem: &'a Problem) -> Self {
        let mut view = Self {
            id: &problem.id,
            kind: problem.kind.as_str(),
            difficulty: problem.difficulty.level(),
            difficulty_label: problem.difficulty.label(),
            question: &problem.question,
            hint_count: problem.hints.len(),
            tags: &problem.tags,
            estimated_time: problem.estimated_time,
            points: problem.points,
            options: None,
            draggables: None,
            drop_zones: None,
        };

        match &problem.kind {
            ProblemKind::Mcq(mcq) => {
                view.options = Some(mcq.options.iter().map(OptionView::from).collect());
            }
            ProblemKind::DragDrop(drag_drop) => {
                view.draggables = Some(&drag_drop.draggables);
                view.drop_zones = Some(&drag_drop.drop_zones);
            }
            ProblemKind::NumberInput(_) | ProblemKind::Unsupported => {}
        }

        view
    }
}

/// Problem set as listed inside its unit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSetSummary<'a> {
    pub id: &'a str,
    pub unit_id: &'a str,
    pub name: &'a LocalizedText,
    pub description: &'a LocalizedText,
    pub order: u32,
    pub min_score_to_pass: u8,
    pub problem_count: usize,
}

impl<'a> From<&'a ProblemSet> for ProblemSetSummary<'a> {
    fn from(set: &'a ProblemSet) -> Self {
        Self {
            id: &set.id,
            unit_id: &set.unit_id,
            name: &set.name,
            description: &set.description,
            order: set.order,
            min_score_to_pass: set.min_score_to_pass,
            problem_count: set.problems.len(),
        }
    }
}

/// A problem set with its problems
#[derive(Debug, Clone, Serialize)]
pub struct ProblemSetView<'a> {
    #[serde(flatten)]
    pub set: ProblemSetSummary<'a>,
    pub problems: Vec<ProblemView<'a>>,
}

impl<'a> From<&'a ProblemSet> for ProblemSetView<'a> {
    fn from(set: &'a ProblemSet) -> Self {
        Self {
            set: ProblemSetSummary::from(set),
            problems: set.problems.iter().map(ProblemView::from).collect(),
        }
    }
}

/// Query for the next hint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HintQuery {
    /// How many hints the learner has already seen
    #[serde(default)]
    pub revealed: usize,
    /// Locale for the counter label, `en` when absent
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse<'a> {
    pub hint: &'a Hint,
    /// Hints seen once this one is shown
    pub revealed: usize,
    pub total: usize,
    pub has_more: bool,
    /// Counter for the hint button, e.g. `Hint (1/3)`
    pub label: String,
}

/// Request body for an answer submission
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    /// The answer in whatever shape the problem type expects
    #[serde(default)]
    pub answer: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse<'a> {
    #[serde(flatten)]
    pub grade: Grade<'a>,
    pub explanation: &'a LocalizedText,
}

use pathshala_content::{
    UnitRef,
    models::{Lesson, LocalizedText, Unit},
};
use serde::{Deserialize, Serialize};

use crate::{problem::model::ProblemSetSummary, topic::model::TopicBadge};

/// Unit as listed inside its topic
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSummary<'a> {
    pub id: &'a str,
    pub topic_id: &'a str,
    pub name: &'a LocalizedText,
    pub description: &'a LocalizedText,
    pub order: u32,
    pub lesson_count: usize,
    pub problem_count: usize,
}

impl<'a> From<&'a Unit> for UnitSummary<'a> {
    fn from(unit: &'a Unit) -> Self {
        Self {
            id: &unit.id,
            topic_id: &unit.topic_id,
            name: &unit.name,
            description: &unit.description,
            order: unit.order,
            lesson_count: unit.lessons.len(),
            problem_count: unit.problem_sets.iter().map(|set| set.problems.len()).sum(),
        }
    }
}

/// A unit's lessons in full and its problem sets in summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitView<'a> {
    pub id: &'a str,
    pub topic_id: &'a str,
    pub name: &'a LocalizedText,
    pub description: &'a LocalizedText,
    pub order: u32,
    pub lessons: &'a [Lesson],
    pub problem_sets: Vec<ProblemSetSummary<'a>>,
}

impl<'a> From<&'a Unit> for UnitView<'a> {
    fn from(unit: &'a Unit) -> Self {
        Self {
            id: &unit.id,
            topic_id: &unit.topic_id,
            name: &unit.name,
            description: &unit.description,
            order: unit.order,
            lessons: &unit.lessons,
            problem_sets: unit.problem_sets.iter().map(ProblemSetSummary::from).collect(),
        }
    }
}

/// Response for a single unit: the unit plus its owning topic's badge
#[derive(Debug, Clone, Serialize)]
pub struct UnitDetail<'a> {
    pub topic: TopicBadge<'a>,
    pub unit: UnitView<'a>,
}

impl<'a> From<UnitRef<'a>> for UnitDetail<'a> {
    fn from(UnitRef { topic, unit }: UnitRef<'a>) -> Self {
        Self {
            topic: TopicBadge::from(topic),
            unit: UnitView::from(unit),
        }
    }
}

/// Query for a unit's progress bar
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressQuery {
    /// Problems the learner has completed so far
    #[serde(default)]
    pub completed: usize,
}

/// A unit's progress bar: counts, percentage and the label in both locales
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitProgress<'a> {
    pub unit_id: &'a str,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub label: LocalizedText,
}

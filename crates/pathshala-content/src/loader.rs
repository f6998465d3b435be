use std::sync::Arc;

use crate::{
    models::{Lesson, Problem, ProblemSet, Topic, Unit},
    registry::Registry,
};

/// Read-only query service over the curriculum.
///
/// Every lookup is a linear scan in authored order; the first match wins.
/// Misses are reported as `None` (or an empty list), never as an error.
/// Cloning is cheap: the topics are shared behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct ContentLoader {
    topics: Arc<[Topic]>,
}

/// A unit together with the topic that owns it
#[derive(Debug, Clone, Copy)]
pub struct UnitRef<'a> {
    pub topic: &'a Topic,
    pub unit: &'a Unit,
}

impl ContentLoader {
    pub fn new(registry: Registry) -> Self {
        Self {
            topics: registry.into_topics().into(),
        }
    }

    /// Get all topics, in authored order
    pub fn all_topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Get topic by ID
    pub fn topic_by_id(&self, topic_id: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id == topic_id)
    }

    /// Get unit by ID, searching every topic
    pub fn unit_by_id(&self, unit_id: &str) -> Option<UnitRef<'_>> {
        self.topics.iter().find_map(|topic| {
            topic
                .units
                .iter()
                .find(|unit| unit.id == unit_id)
                .map(|unit| UnitRef { topic, unit })
        })
    }

    /// Get lesson by ID
    pub fn lesson_by_id(&self, lesson_id: &str) -> Option<&Lesson> {
        self.units()
            .flat_map(|unit| &unit.lessons)
            .find(|lesson| lesson.id == lesson_id)
    }

    /// Get problem set by ID
    pub fn problem_set_by_id(&self, problem_set_id: &str) -> Option<&ProblemSet> {
        self.units()
            .flat_map(|unit| &unit.problem_sets)
            .find(|set| set.id == problem_set_id)
    }

    /// Get problem by ID
    pub fn problem_by_id(&self, problem_id: &str) -> Option<&Problem> {
        self.units()
            .flat_map(|unit| &unit.problem_sets)
            .flat_map(|set| &set.problems)
            .find(|problem| problem.id == problem_id)
    }

    /// Get all problems for a unit, set by set.
    ///
    /// An unknown unit and a unit without problems both yield an empty list.
    pub fn problems_for_unit(&self, unit_id: &str) -> Vec<&Problem> {
        let Some(UnitRef { unit, .. }) = self.unit_by_id(unit_id) else {
            return Vec::new();
        };

        unit.problem_sets
            .iter()
            .flat_map(|set| &set.problems)
            .collect()
    }

    fn units(&self) -> impl Iterator<Item = &Unit> {
        self.topics.iter().flat_map(|topic| &topic.units)
    }
}

impl From<Registry> for ContentLoader {
    fn from(registry: Registry) -> Self {
        Self::new(registry)
    }
}

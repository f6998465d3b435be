use crate::{error::ContentError, models::Topic};

/// Authored curriculum, one topic per fixture, in display order
const FIXTURES: &[(&str, &str)] = &[
    (
        "topics/addition.json",
        include_str!("../content/topics/addition.json"),
    ),
    (
        "topics/geometry.json",
        include_str!("../content/topics/geometry.json"),
    ),
];

/// The complete in-memory curriculum
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    topics: Vec<Topic>,
}

impl Registry {
    /// Parse the bundled content fixtures.
    ///
    /// The fixtures are compiled into the binary, so a failure here is an
    /// authoring defect caught by this crate's tests rather than a runtime
    /// condition.
    pub fn load() -> Result<Self, ContentError> {
        let topics = FIXTURES
            .iter()
            .map(|&(fixture, json)| {
                let topic = serde_json::from_str::<Topic>(json)
                    .map_err(|source| ContentError::Parse { fixture, source })?;
                tracing::debug!(fixture, topic_id = %topic.id, "Parsed content fixture");
                Ok(topic)
            })
            .collect::<Result<Vec<_>, ContentError>>()?;

        Ok(Self::from_topics(topics))
    }

    /// Build a registry from already constructed topics
    pub const fn from_topics(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn into_topics(self) -> Vec<Topic> {
        self.topics
    }

    /// Number of units across every topic
    pub fn unit_count(&self) -> usize {
        self.topics.iter().map(|topic| topic.units.len()).sum()
    }

    /// Number of problems across every problem set
    pub fn problem_count(&self) -> usize {
        self.topics
            .iter()
            .flat_map(|topic| &topic.units)
            .flat_map(|unit| &unit.problem_sets)
            .map(|set| set.problems.len())
            .sum()
    }
}

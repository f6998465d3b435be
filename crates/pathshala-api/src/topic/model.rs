use pathshala_content::models::{LocalizedText, Topic};
use serde::Serialize;

use crate::unit::model::UnitSummary;

/// Topic as listed in the catalogue, without its nested content
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary<'a> {
    pub id: &'a str,
    pub name: &'a LocalizedText,
    pub description: &'a LocalizedText,
    pub icon: &'a str,
    pub color: &'a str,
    pub prerequisites: &'a [String],
    pub order: u32,
    pub estimated_hours: f64,
    pub unit_count: usize,
}

impl<'a> From<&'a Topic> for TopicSummary<'a> {
    fn from(topic: &'a Topic) -> Self {
        Self {
            id: &topic.id,
            name: &topic.name,
            description: &topic.description,
            icon: &topic.icon,
            color: &topic.color,
            prerequisites: &topic.prerequisites,
            order: topic.order,
            estimated_hours: topic.estimated_hours,
            unit_count: topic.units.len(),
        }
    }
}

/// A topic with a summary of each of its units
#[derive(Debug, Clone, Serialize)]
pub struct TopicDetail<'a> {
    #[serde(flatten)]
    pub topic: TopicSummary<'a>,
    pub units: Vec<UnitSummary<'a>>,
}

impl<'a> From<&'a Topic> for TopicDetail<'a> {
    fn from(topic: &'a Topic) -> Self {
        Self {
            topic: TopicSummary::from(topic),
            units: topic.units.iter().map(UnitSummary::from).collect(),
        }
    }
}

/// Just enough of a topic to theme a page that belongs to it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TopicBadge<'a> {
    pub id: &'a str,
    pub name: &'a LocalizedText,
    pub icon: &'a str,
    pub color: &'a str,
}

impl<'a> From<&'a Topic> for TopicBadge<'a> {
    fn from(topic: &'a Topic) -> Self {
        Self {
            id: &topic.id,
            name: &topic.name,
            icon: &topic.icon,
            color: &topic.color,
        }
    }
}

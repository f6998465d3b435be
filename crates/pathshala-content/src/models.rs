use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Locales every user-facing string is authored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    En,
    /// Bangla
    Bn,
}

impl Locale {
    /// Every supported locale, in display order
    pub const ALL: [Self; 2] = [Self::En, Self::Bn];

    /// The locale tag as it appears in content and query strings
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Bn => "bn",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "bn" => Ok(Self::Bn),
            other => Err(ContentError::UnknownLocale(other.to_string())),
        }
    }
}

/// A user-facing string with its translation
///
/// Both locales are required; a fixture missing either key fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedText {
    /// English text
    pub en: String,
    /// Bangla text
    pub bn: String,
}

impl LocalizedText {
    /// Build a localized text from its two translations
    pub fn new(en: impl Into<String>, bn: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            bn: bn.into(),
        }
    }

    /// The text for `locale`
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Bn => &self.bn,
        }
    }

    /// Locales whose text is blank
    pub fn blank_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.get(*locale).trim().is_empty())
            .collect()
    }
}

/// Topic model - top-level subject area, owns its units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Unique topic identifier
    pub id: String,
    /// Topic name
    pub name: LocalizedText,
    /// Topic description
    pub description: LocalizedText,
    /// Icon name, resolved by the presentation layer
    pub icon: String,
    /// Theme color tag
    pub color: String,
    /// Topic IDs shown before this one (display ordering only)
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Units in authored order
    pub units: Vec<Unit>,
    /// Display order
    pub order: u32,
    /// Estimated time to complete the topic, in hours
    pub estimated_hours: f64,
}

/// Unit model - one learning objective within a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Unit identifier, unique across every topic
    pub id: String,
    /// Topic ID this unit belongs to (denormalized, must match the owning topic)
    pub topic_id: String,
    /// Unit name
    pub name: LocalizedText,
    /// Unit description
    pub description: LocalizedText,
    /// Display order within the topic
    pub order: u32,
    /// Lessons in authored order
    pub lessons: Vec<Lesson>,
    /// Problem sets in authored order
    pub problem_sets: Vec<ProblemSet>,
}

/// Lesson model - ordered instructional content for a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Unique lesson identifier
    pub id: String,
    /// Unit ID this lesson belongs to
    pub unit_id: String,
    /// Lesson title
    pub title: LocalizedText,
    /// Content blocks, rendered in sequence
    pub content: Vec<ContentBlock>,
    /// Display order within the unit
    pub order: u32,
    /// Estimated reading time, in minutes
    pub estimated_minutes: u32,
}

/// One displayable block of lesson content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentBlock {
    /// Plain text
    Text(TextBlock),
    /// Static image
    Image(ImageBlock),
    /// Worked example with optional steps
    Example(ExampleBlock),
    /// Counting widget
    Counter(CounterBlock),
    /// Adjustable angle diagram
    AngleVisualizer(AngleVisualizerBlock),
    /// Side-by-side comparison of angle types
    AngleComparison(AngleComparisonBlock),
    /// Protractor diagram
    Protractor(ProtractorBlock),
    /// Line / ray / segment diagram
    LineBuilder(LineBuilderBlock),
    /// Diagram of two lines and how they relate
    LineRelationship(LineRelationshipBlock),
    /// Diagram of line orientations
    LineOrientation(LineOrientationBlock),
    /// Circle diagram
    Circle(CircleBlock),
}

/// How a text block is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    /// Body paragraph
    #[default]
    Paragraph,
    /// Section heading
    Heading,
    /// Highlighted box
    Callout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub content: LocalizedText,
    #[serde(default)]
    pub format: TextFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub src: String,
    pub alt: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleBlock {
    pub title: LocalizedText,
    pub problem: LocalizedText,
    pub solution: LocalizedText,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<ExampleStep>,
}

/// A numbered step of a worked example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleStep {
    pub step: u32,
    pub description: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterBlock {
    pub start_value: i32,
    pub max_value: i32,
    pub label: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_equation: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleVisualizerBlock {
    pub initial_angle: f64,
    pub min_angle: f64,
    pub max_angle: f64,
    pub label: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_degrees: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_type: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_interaction: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngleComparisonBlock {
    pub title: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtractorBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_angle: Option<f64>,
    pub instruction: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_interaction: Option<bool>,
}

/// Which straight figure a line builder starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Line,
    Ray,
    Segment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBuilderBlock {
    pub initial_type: LineKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_measurement: Option<bool>,
    pub instruction: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_interaction: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineRelationship {
    Parallel,
    Perpendicular,
    Intersecting,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRelationshipBlock {
    pub relationship: LineRelationship,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_interaction: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_angle: Option<bool>,
    pub title: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineOrientation {
    Horizontal,
    Vertical,
    Diagonal,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineOrientationBlock {
    pub orientation: LineOrientation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_slope: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_equation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_interaction: Option<bool>,
    pub instruction: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_center: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_radius: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_diameter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_circumference: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_interaction: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<LocalizedText>,
}

/// Problem set model - a graded collection of problems for one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSet {
    /// Unique problem set identifier
    pub id: String,
    /// Unit ID this set belongs to
    pub unit_id: String,
    /// Set name
    pub name: LocalizedText,
    /// Set description
    pub description: LocalizedText,
    /// Problems in authored order
    pub problems: Vec<Problem>,
    /// Display order within the unit
    pub order: u32,
    /// Minimum score percentage (0-100) to pass the set.
    /// Carried for progress tracking; nothing in this workspace gates on it.
    pub min_score_to_pass: u8,
}

/// Problem difficulty, 1 (easiest) to 5 (hardest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    /// Lowest difficulty level
    pub const MIN: u8 = 1;
    /// Highest difficulty level
    pub const MAX: u8 = 5;

    /// Numeric level
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Badge label shown next to a problem
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "Easy",
            2 => "Medium",
            3 => "Hard",
            4 => "Very Hard",
            _ => "Expert",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ContentError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ContentError::InvalidDifficulty(level))
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

/// A progressively revealed hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    /// 1 = subtle, 2 = moderate, 3 = direct
    pub level: u8,
    /// Hint text
    pub text: LocalizedText,
}

/// Problem model - the graded unit of work
///
/// The fields shared by every problem live here; the variant-specific
/// payload is in [`ProblemKind`], keyed by the `type` field on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Problem identifier, unique across the registry
    pub id: String,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Question text
    pub question: LocalizedText,
    /// Explanation shown after an answer is submitted
    pub explanation: LocalizedText,
    /// Hints in reveal order
    #[serde(default)]
    pub hints: Vec<Hint>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Estimated solving time, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
    /// Points awarded for a correct answer
    pub points: u32,
    /// Variant-specific payload
    #[serde(flatten)]
    pub kind: ProblemKind,
}

/// The closed set of problem variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ProblemKind {
    /// Multiple choice
    Mcq(McqProblem),
    /// Numeric answer
    NumberInput(NumberInputProblem),
    /// Match draggables to drop zones
    DragDrop(DragDropProblem),
    /// A `type` tag this build does not know; never graded correct
    #[serde(other)]
    Unsupported,
}

impl ProblemKind {
    /// The wire tag of this variant
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mcq(_) => "mcq",
            Self::NumberInput(_) => "number-input",
            Self::DragDrop(_) => "drag-drop",
            Self::Unsupported => "unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqProblem {
    pub options: Vec<McqOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<McqFeedback>,
}

impl McqProblem {
    /// The first option flagged correct, if any
    pub fn correct_option(&self) -> Option<&McqOption> {
        self.options.iter().find(|option| option.is_correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McqOption {
    pub id: String,
    pub text: LocalizedText,
    #[serde(default)]
    pub is_correct: bool,
}

/// Per-answer feedback for a multiple choice problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqFeedback {
    /// Shown when the correct option is picked
    pub correct: LocalizedText,
    /// Option ID -> feedback shown when that wrong option is picked
    #[serde(default)]
    pub incorrect: IndexMap<String, LocalizedText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInputProblem {
    pub correct_answer: f64,
    /// Allowed absolute distance from `correct_answer`; absent means exact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_equivalent: Option<bool>,
}

impl NumberInputProblem {
    /// Effective tolerance, zero when unset
    pub fn tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragDropProblem {
    pub draggables: Vec<Draggable>,
    pub drop_zones: Vec<DropZone>,
    /// Drop zone ID -> the draggable ID that belongs there
    pub solution: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draggable {
    pub id: String,
    pub content: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropZone {
    pub id: String,
    pub label: LocalizedText,
    /// Draggable IDs the zone advertises; presentational only
    #[serde(default)]
    pub accepts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_difficulty_range() {
        assert!(Difficulty::try_from(0).is_err());
        assert!(Difficulty::try_from(6).is_err());
        assert_eq!(Difficulty::try_from(1).unwrap().label(), "Easy");
        assert_eq!(Difficulty::try_from(4).unwrap().label(), "Very Hard");
        assert_eq!(Difficulty::try_from(5).unwrap().label(), "Expert");
    }

    #[test]
    fn test_localized_text_requires_both_locales() {
        let partial = serde_json::from_value::<LocalizedText>(json!({ "en": "Addition" }));
        assert!(partial.is_err());

        let text: LocalizedText =
            serde_json::from_value(json!({ "en": "Addition", "bn": "যোগ" })).unwrap();
        assert_eq!(text.get(Locale::Bn), "যোগ");
        assert!(text.blank_locales().is_empty());
        assert_eq!(LocalizedText::new("x", " ").blank_locales(), vec![Locale::Bn]);
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("bn".parse::<Locale>().unwrap(), Locale::Bn);
        assert!("EN".parse::<Locale>().is_err());
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_problem_variant_by_type_tag() {
        let problem: Problem = serde_json::from_value(json!({
            "id": "p1",
            "type": "number-input",
            "difficulty": 2,
            "question": { "en": "2 + 2?", "bn": "২ + ২?" },
            "explanation": { "en": "4", "bn": "৪" },
            "correctAnswer": 4,
            "points": 10
        }))
        .unwrap();

        assert!(problem.hints.is_empty());
        assert!(problem.tags.is_empty());
        assert_eq!(problem.estimated_time, None);
        match &problem.kind {
            ProblemKind::NumberInput(number) => {
                assert_eq!(number.correct_answer, 4.0);
                assert_eq!(number.tolerance(), 0.0);
            }
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn test_unknown_problem_type_is_unsupported() {
        let problem: Problem = serde_json::from_value(json!({
            "id": "p2",
            "type": "free-text",
            "difficulty": 1,
            "question": { "en": "?", "bn": "?" },
            "explanation": { "en": "-", "bn": "-" },
            "points": 5
        }))
        .unwrap();

        assert_eq!(problem.kind, ProblemKind::Unsupported);
    }

    #[test]
    fn test_text_block_format_defaults_to_paragraph() {
        let block: ContentBlock = serde_json::from_value(json!({
            "type": "text",
            "content": { "en": "Hi", "bn": "হাই" }
        }))
        .unwrap();

        assert_eq!(
            block,
            ContentBlock::Text(TextBlock {
                content: LocalizedText::new("Hi", "হাই"),
                format: TextFormat::Paragraph,
            })
        );
    }

    #[test]
    fn test_image_block() {
        let block: ContentBlock = serde_json::from_value(json!({
            "type": "image",
            "src": "/images/apples.png",
            "alt": { "en": "Three apples", "bn": "তিনটি আপেল" },
            "caption": { "en": "Count them", "bn": "গুনে দেখো" },
            "width": 320,
            "height": 240
        }))
        .unwrap();

        assert_eq!(
            block,
            ContentBlock::Image(ImageBlock {
                src: "/images/apples.png".to_string(),
                alt: LocalizedText::new("Three apples", "তিনটি আপেল"),
                caption: Some(LocalizedText::new("Count them", "গুনে দেখো")),
                width: Some(320),
                height: Some(240),
            })
        );
    }

    #[test]
    fn test_image_block_optional_fields() {
        let block: ContentBlock = serde_json::from_value(json!({
            "type": "image",
            "src": "/images/apples.png",
            "alt": { "en": "Three apples", "bn": "তিনটি আপেল" }
        }))
        .unwrap();

        let ContentBlock::Image(image) = &block else {
            panic!("expected an image block, got {block:?}");
        };
        assert_eq!(image.caption, None);
        assert_eq!(image.width, None);
        assert_eq!(image.height, None);

        let value = serde_json::to_value(&block).unwrap();
        assert!(value.get("caption").is_none());
        assert!(value.get("width").is_none());
    }

    #[test]
    fn test_counter_block() {
        let block: ContentBlock = serde_json::from_value(json!({
            "type": "counter",
            "startValue": 2,
            "maxValue": 10,
            "label": { "en": "Apples", "bn": "আপেল" },
            "showEquation": true
        }))
        .unwrap();

        assert_eq!(
            block,
            ContentBlock::Counter(CounterBlock {
                start_value: 2,
                max_value: 10,
                label: LocalizedText::new("Apples", "আপেল"),
                show_equation: Some(true),
            })
        );

        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["startValue"], 2);
        assert_eq!(value["maxValue"], 10);
        assert_eq!(value["type"], "counter");
    }

    #[test]
    fn test_counter_block_rejects_snake_case_fields() {
        let result = serde_json::from_value::<ContentBlock>(json!({
            "type": "counter",
            "start_value": 2,
            "max_value": 10,
            "label": { "en": "Apples", "bn": "আপেল" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_drag_drop_solution_keeps_authored_order() {
        let problem: DragDropProblem = serde_json::from_value(json!({
            "draggables": [],
            "dropZones": [],
            "solution": { "drop_8": "drag_a", "drop_10": "drag_b", "drop_7": "drag_c" }
        }))
        .unwrap();

        let zones: Vec<&str> = problem.solution.keys().map(String::as_str).collect();
        assert_eq!(zones, ["drop_8", "drop_10", "drop_7"]);
    }
}

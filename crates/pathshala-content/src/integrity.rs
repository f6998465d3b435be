//! One-shot integrity pass over the curriculum.
//!
//! Content defects (a multiple choice problem without exactly one correct
//! option, a drag-and-drop solution that does not cover its drop zones, a
//! blank translation, ...) are never checked while grading. This module
//! reports them so they can be caught by tests and at start-up instead.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use thiserror::Error;

use crate::models::{
    ContentBlock, DragDropProblem, Locale, LocalizedText, McqProblem, Problem, ProblemKind, Topic,
};

/// Kinds of curriculum entity that carry an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Topic,
    Unit,
    Lesson,
    ProblemSet,
    Problem,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Topic => "topic",
            Self::Unit => "unit",
            Self::Lesson => "lesson",
            Self::ProblemSet => "problem set",
            Self::Problem => "problem",
        })
    }
}

/// A content-authoring defect
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntityKind, id: String },
    #[error("{kind} '{id}' points at parent '{found}' but is owned by '{expected}'")]
    ParentMismatch {
        kind: EntityKind,
        id: String,
        expected: String,
        found: String,
    },
    #[error("topic '{topic_id}' lists unknown prerequisite '{prerequisite}'")]
    UnknownPrerequisite {
        topic_id: String,
        prerequisite: String,
    },
    #[error("problem '{problem_id}' has {count} correct options, expected exactly one")]
    CorrectOptionCount { problem_id: String, count: usize },
    #[error("problem '{problem_id}' repeats option id '{option_id}'")]
    DuplicateOptionId {
        problem_id: String,
        option_id: String,
    },
    #[error("problem '{problem_id}' has feedback for unknown option '{option_id}'")]
    FeedbackForUnknownOption {
        problem_id: String,
        option_id: String,
    },
    #[error("problem '{problem_id}' has no solution for drop zone '{zone_id}'")]
    UnsolvedDropZone { problem_id: String, zone_id: String },
    #[error("problem '{problem_id}' solves unknown drop zone '{zone_id}'")]
    UnknownDropZone { problem_id: String, zone_id: String },
    #[error("problem '{problem_id}' places unknown draggable '{draggable_id}' in '{zone_id}'")]
    UnknownDraggable {
        problem_id: String,
        zone_id: String,
        draggable_id: String,
    },
    #[error("problem '{problem_id}' has a negative or non-finite tolerance")]
    InvalidTolerance { problem_id: String },
    #[error("problem '{problem_id}' has an unsupported type")]
    UnsupportedProblem { problem_id: String },
    #[error("problem set '{problem_set_id}' has pass threshold {value}, expected 0-100")]
    PassThresholdOutOfRange { problem_set_id: String, value: u8 },
    #[error("{location} has blank '{locale}' text")]
    BlankText { location: String, locale: Locale },
}

/// Check a topic list and report every defect found, in traversal order
pub fn check(topics: &[Topic]) -> Vec<IntegrityIssue> {
    let mut checker = Checker::default();
    checker.run(topics);
    checker.issues
}

#[derive(Default)]
struct Checker {
    seen: HashMap<EntityKind, HashSet<String>>,
    issues: Vec<IntegrityIssue>,
}

impl Checker {
    fn run(&mut self, topics: &[Topic]) {
        let topic_ids: HashSet<&str> = topics.iter().map(|t| t.id.as_str()).collect();

        for topic in topics {
            self.unique(EntityKind::Topic, &topic.id);
            self.text(&format!("topic '{}' name", topic.id), &topic.name);
            self.text(&format!("topic '{}' description", topic.id), &topic.description);

            for prerequisite in &topic.prerequisites {
                if !topic_ids.contains(prerequisite.as_str()) {
                    self.issues.push(IntegrityIssue::UnknownPrerequisite {
                        topic_id: topic.id.clone(),
                        prerequisite: prerequisite.clone(),
                    });
                }
            }

            for unit in &topic.units {
                self.unique(EntityKind::Unit, &unit.id);
                self.parent(EntityKind::Unit, &unit.id, &topic.id, &unit.topic_id);
                self.text(&format!("unit '{}' name", unit.id), &unit.name);
                self.text(&format!("unit '{}' description", unit.id), &unit.description);

                for lesson in &unit.lessons {
                    self.unique(EntityKind::Lesson, &lesson.id);
                    self.parent(EntityKind::Lesson, &lesson.id, &unit.id, &lesson.unit_id);
                    self.text(&format!("lesson '{}' title", lesson.id), &lesson.title);
                    for (index, block) in lesson.content.iter().enumerate() {
                        for text in block_texts(block) {
                            self.text(&format!("lesson '{}' block {index}", lesson.id), text);
                        }
                    }
                }

                for set in &unit.problem_sets {
                    self.unique(EntityKind::ProblemSet, &set.id);
                    self.parent(EntityKind::ProblemSet, &set.id, &unit.id, &set.unit_id);
                    self.text(&format!("problem set '{}' name", set.id), &set.name);
                    self.text(
                        &format!("problem set '{}' description", set.id),
                        &set.description,
                    );
                    if set.min_score_to_pass > 100 {
                        self.issues.push(IntegrityIssue::PassThresholdOutOfRange {
                            problem_set_id: set.id.clone(),
                            value: set.min_score_to_pass,
                        });
                    }

                    for problem in &set.problems {
                        self.problem(problem);
                    }
                }
            }
        }
    }

    fn problem(&mut self, problem: &Problem) {
        let id = &problem.id;
        self.unique(EntityKind::Problem, id);
        self.text(&format!("problem '{id}' question"), &problem.question);
        self.text(&format!("problem '{id}' explanation"), &problem.explanation);
        for hint in &problem.hints {
            self.text(&format!("problem '{id}' hint {}", hint.level), &hint.text);
        }

        match &problem.kind {
            ProblemKind::Mcq(mcq) => self.mcq(id, mcq),
            ProblemKind::NumberInput(number) => {
                let tolerance = number.tolerance();
                if !number.correct_answer.is_finite() || !tolerance.is_finite() || tolerance < 0.0
                {
                    self.issues.push(IntegrityIssue::InvalidTolerance {
                        problem_id: id.clone(),
                    });
                }
            }
            ProblemKind::DragDrop(drag_drop) => self.drag_drop(id, drag_drop),
            ProblemKind::Unsupported => self.issues.push(IntegrityIssue::UnsupportedProblem {
                problem_id: id.clone(),
            }),
        }
    }

    fn mcq(&mut self, problem_id: &str, mcq: &McqProblem) {
        let count = mcq.options.iter().filter(|o| o.is_correct).count();
        if count != 1 {
            self.issues.push(IntegrityIssue::CorrectOptionCount {
                problem_id: problem_id.to_string(),
                count,
            });
        }

        let mut option_ids = HashSet::new();
        for option in &mcq.options {
            if !option_ids.insert(option.id.as_str()) {
                self.issues.push(IntegrityIssue::DuplicateOptionId {
                    problem_id: problem_id.to_string(),
                    option_id: option.id.clone(),
                });
            }
            self.text(
                &format!("problem '{problem_id}' option '{}'", option.id),
                &option.text,
            );
        }

        if let Some(feedback) = &mcq.feedback {
            self.text(&format!("problem '{problem_id}' feedback"), &feedback.correct);
            for (option_id, text) in &feedback.incorrect {
                if !option_ids.contains(option_id.as_str()) {
                    self.issues.push(IntegrityIssue::FeedbackForUnknownOption {
                        problem_id: problem_id.to_string(),
                        option_id: option_id.clone(),
                    });
                }
                self.text(
                    &format!("problem '{problem_id}' feedback for '{option_id}'"),
                    text,
                );
            }
        }
    }

    fn drag_drop(&mut self, problem_id: &str, drag_drop: &DragDropProblem) {
        let draggable_ids: HashSet<&str> =
            drag_drop.draggables.iter().map(|d| d.id.as_str()).collect();
        let zone_ids: HashSet<&str> = drag_drop.drop_zones.iter().map(|z| z.id.as_str()).collect();

        for zone in &drag_drop.drop_zones {
            if !drag_drop.solution.contains_key(&zone.id) {
                self.issues.push(IntegrityIssue::UnsolvedDropZone {
                    problem_id: problem_id.to_string(),
                    zone_id: zone.id.clone(),
                });
            }
            self.text(
                &format!("problem '{problem_id}' drop zone '{}'", zone.id),
                &zone.label,
            );
        }

        for (zone_id, draggable_id) in &drag_drop.solution {
            if !zone_ids.contains(zone_id.as_str()) {
                self.issues.push(IntegrityIssue::UnknownDropZone {
                    problem_id: problem_id.to_string(),
                    zone_id: zone_id.clone(),
                });
            }
            if !draggable_ids.contains(draggable_id.as_str()) {
                self.issues.push(IntegrityIssue::UnknownDraggable {
                    problem_id: problem_id.to_string(),
                    zone_id: zone_id.clone(),
                    draggable_id: draggable_id.clone(),
                });
            }
        }

        for draggable in &drag_drop.draggables {
            self.text(
                &format!("problem '{problem_id}' draggable '{}'", draggable.id),
                &draggable.content,
            );
        }
    }

    fn unique(&mut self, kind: EntityKind, id: &str) {
        if !self.seen.entry(kind).or_default().insert(id.to_string()) {
            self.issues.push(IntegrityIssue::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }

    fn parent(&mut self, kind: EntityKind, id: &str, expected: &str, found: &str) {
        if expected != found {
            self.issues.push(IntegrityIssue::ParentMismatch {
                kind,
                id: id.to_string(),
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
    }

    fn text(&mut self, location: &str, text: &LocalizedText) {
        for locale in text.blank_locales() {
            self.issues.push(IntegrityIssue::BlankText {
                location: location.to_string(),
                locale,
            });
        }
    }
}

fn block_texts(block: &ContentBlock) -> Vec<&LocalizedText> {
    match block {
        ContentBlock::Text(b) => vec![&b.content],
        ContentBlock::Image(b) => std::iter::once(&b.alt).chain(&b.caption).collect(),
        ContentBlock::Example(b) => [&b.title, &b.problem, &b.solution]
            .into_iter()
            .chain(b.steps.iter().map(|s| &s.description))
            .collect(),
        ContentBlock::Counter(b) => vec![&b.label],
        ContentBlock::AngleVisualizer(b) => vec![&b.label],
        ContentBlock::AngleComparison(b) => {
            std::iter::once(&b.title).chain(&b.description).collect()
        }
        ContentBlock::Protractor(b) => vec![&b.instruction],
        ContentBlock::LineBuilder(b) => vec![&b.instruction],
        ContentBlock::LineRelationship(b) => {
            std::iter::once(&b.title).chain(&b.description).collect()
        }
        ContentBlock::LineOrientation(b) => vec![&b.instruction],
        ContentBlock::Circle(b) => b.instruction.iter().collect(),
    }
}

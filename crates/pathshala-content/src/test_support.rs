//! Small hand-built curriculum trees for unit tests

use indexmap::IndexMap;

use crate::models::{
    Difficulty, DragDropProblem, Draggable, DropZone, Hint, LocalizedText, McqOption, McqProblem,
    NumberInputProblem, Problem, ProblemKind, ProblemSet, Topic, Unit,
};

pub(crate) fn text(en: &str) -> LocalizedText {
    LocalizedText::new(en, format!("{en} (bn)"))
}

pub(crate) fn problem(id: &str, kind: ProblemKind) -> Problem {
    Problem {
        id: id.to_string(),
        difficulty: Difficulty::try_from(1).unwrap(),
        question: text("question"),
        explanation: text("explanation"),
        hints: vec![Hint {
            level: 1,
            text: text("hint"),
        }],
        tags: vec!["sample".to_string()],
        estimated_time: Some(30),
        points: 10,
        kind,
    }
}

pub(crate) fn mcq(id: &str, options: &[&str], correct: &str) -> Problem {
    let options = options
        .iter()
        .map(|option| McqOption {
            id: (*option).to_string(),
            text: text(option),
            is_correct: *option == correct,
        })
        .collect();

    problem(
        id,
        ProblemKind::Mcq(McqProblem {
            options,
            feedback: None,
        }),
    )
}

pub(crate) fn number(id: &str, correct_answer: f64, tolerance: Option<f64>) -> Problem {
    problem(
        id,
        ProblemKind::NumberInput(NumberInputProblem {
            correct_answer,
            tolerance,
            accept_equivalent: None,
        }),
    )
}

pub(crate) fn drag_drop(id: &str, pairs: &[(&str, &str)]) -> Problem {
    let draggables = pairs
        .iter()
        .map(|(_, draggable)| Draggable {
            id: (*draggable).to_string(),
            content: text(draggable),
        })
        .collect();
    let drop_zones = pairs
        .iter()
        .map(|(zone, draggable)| DropZone {
            id: (*zone).to_string(),
            label: text(zone),
            accepts: vec![(*draggable).to_string()],
        })
        .collect();
    let solution: IndexMap<String, String> = pairs
        .iter()
        .map(|(zone, draggable)| ((*zone).to_string(), (*draggable).to_string()))
        .collect();

    problem(
        id,
        ProblemKind::DragDrop(DragDropProblem {
            draggables,
            drop_zones,
            solution,
        }),
    )
}

pub(crate) fn problem_set(id: &str, unit_id: &str, problems: Vec<Problem>) -> ProblemSet {
    ProblemSet {
        id: id.to_string(),
        unit_id: unit_id.to_string(),
        name: text(id),
        description: text("practice"),
        problems,
        order: 1,
        min_score_to_pass: 70,
    }
}

pub(crate) fn unit(id: &str, topic_id: &str, problem_sets: Vec<ProblemSet>) -> Unit {
    Unit {
        id: id.to_string(),
        topic_id: topic_id.to_string(),
        name: text(id),
        description: text("unit"),
        order: 1,
        lessons: Vec::new(),
        problem_sets,
    }
}

pub(crate) fn topic(id: &str, units: Vec<Unit>) -> Topic {
    Topic {
        id: id.to_string(),
        name: text(id),
        description: text("topic"),
        icon: "Plus".to_string(),
        color: "primary".to_string(),
        prerequisites: Vec::new(),
        units,
        order: 1,
        estimated_hours: 1.0,
    }
}

/// One topic, two units, four problems spread over three sets
pub(crate) fn sample_topic() -> Topic {
    topic(
        "topic_sample",
        vec![
            unit(
                "unit_a",
                "topic_sample",
                vec![
                    problem_set(
                        "set_a1",
                        "unit_a",
                        vec![
                            mcq("p_mcq", &["a", "b", "c"], "b"),
                            number("p_num", 10.0, Some(2.0)),
                        ],
                    ),
                    problem_set(
                        "set_a2",
                        "unit_a",
                        vec![drag_drop("p_dd", &[("zoneA", "x"), ("zoneB", "y")])],
                    ),
                ],
            ),
            unit(
                "unit_b",
                "topic_sample",
                vec![problem_set(
                    "set_b1",
                    "unit_b",
                    vec![number("p_exact", 90.0, None)],
                )],
            ),
        ],
    )
}

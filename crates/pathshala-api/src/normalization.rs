//! Answer normalization at the HTTP boundary.
//!
//! Number-input answers usually arrive as whatever the learner typed. The
//! grader only accepts JSON numbers, so typed strings are parsed here the
//! way the browser's `parseFloat` reads them: leading whitespace is skipped
//! and the longest numeric prefix wins, so `"9 apples"` is 9. Bangla digits
//! are read as their ASCII counterparts. Strings with no numeric prefix are
//! left alone and grade as incorrect.

use std::sync::LazyLock;

use pathshala_content::models::ProblemKind;
use pathshala_grading::numerals::to_ascii_digits;
use regex::Regex;
use serde_json::{Number, Value};

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("numeric prefix pattern should compile")
});

/// Normalize a submitted answer for the problem it answers.
///
/// Only number-input string answers change; every other answer is returned
/// as it came in.
pub fn normalize_answer(kind: &ProblemKind, answer: Value) -> Value {
    match (kind, answer) {
        (ProblemKind::NumberInput(_), Value::String(typed)) => parse_number(&typed)
            .and_then(Number::from_f64)
            .map_or(Value::String(typed), Value::Number),
        (_, answer) => answer,
    }
}

/// Parse the leading number of `typed`, `parseFloat` style
fn parse_number(typed: &str) -> Option<f64> {
    let ascii = to_ascii_digits(typed);
    let prefix = NUMERIC_PREFIX.find(ascii.trim_start())?;
    prefix.as_str().parse().ok()
}

//! Progressive hint reveal.
//!
//! Hints are shown one at a time in authored order. Callers track how many
//! hints have been revealed so far; nothing is stored here.

use pathshala_content::models::{Hint, Locale, Problem};

/// The hint to show after `revealed` hints have already been shown,
/// or `None` once every hint is out.
pub fn next_hint(problem: &Problem, revealed: usize) -> Option<&Hint> {
    problem.hints.get(revealed)
}

/// Whether another hint can still be requested
pub fn has_more_hints(problem: &Problem, revealed: usize) -> bool {
    revealed < problem.hints.len()
}

/// Label for the hint button, e.g. `Hint (1/3)`
pub fn hint_counter_label(locale: Locale, revealed: usize, total: usize) -> String {
    let word = match locale {
        Locale::En => "Hint",
        Locale::Bn => "ইঙ্গিত",
    };
    format!("{word} ({}/{total})", revealed.min(total))
}

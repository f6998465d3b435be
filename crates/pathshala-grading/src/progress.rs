//! Completion percentage for a run through a unit's problems.

/// Percentage of `total` problems completed, rounded to the nearest integer.
///
/// # Arguments
///
/// * `completed` - Number of problems answered correctly so far
/// * `total` - Number of problems in the unit
///
/// # Returns
///
/// A value between 0 and 100. A unit without problems reports 0, and
/// `completed` is capped at `total`.
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    let completed = completed.min(total);
    let percent = (completed as f64 / total as f64 * 100.0).round();
    percent as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 6), 0);
        assert_eq!(progress_percent(1, 6), 17);
        assert_eq!(progress_percent(3, 6), 50);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(6, 6), 100);
    }

    #[test]
    fn test_progress_percent_edge_cases() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(9, 6), 100);
    }
}

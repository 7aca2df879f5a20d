//! Scoring: correct counts, the 0–100 score, and result assembly.

use chrono::Utc;
use rand::Rng;

use crate::drill_engine::models::{DrillResult, DrillSettings, Problem};

/// Problems whose recorded user answer equals the correct answer.
/// Unanswered problems count as incorrect; fractions compare the
/// numerator only.
pub fn correct_count(problems: &[Problem]) -> usize {
    problems.iter().filter(|p| p.is_correct()).count()
}

/// `round(100 * correct / total)` as an integer. An empty collection
/// scores 0.
pub fn score(problems: &[Problem]) -> u32 {
    if problems.is_empty() {
        return 0;
    }
    let correct = correct_count(problems) as f64;
    (100.0 * correct / problems.len() as f64).round() as u32
}

/// Assemble the persisted record for one completed (or timed-out)
/// drill.
pub fn build_result<R: Rng>(
    rng: &mut R,
    settings: &DrillSettings,
    username: &str,
    problems: Vec<Problem>,
    time_spent_secs: u64,
) -> DrillResult {
    DrillResult {
        id: format!("RS-{:08X}", rng.next_u32()),
        date: Utc::now(),
        username: username.to_string(),
        operations: settings.operation_labels(),
        problem_count: problems.len(),
        correct_count: correct_count(&problems),
        time_limit_min: settings.time_limit_min,
        time_spent_secs,
        score: score(&problems),
        problems,
    }
}

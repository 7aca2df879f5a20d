//! Flash mental-math sequences: a short run of numbers revealed one at a
//! time, combined left to right under a single operation.

use rand::Rng;

use crate::drill_engine::{
    helpers,
    models::{DigitSize, DrillSettings, Operation, Problem, ProblemBody, ProblemKind},
    ranges::flash_range,
};

/// Numbers shown per sequence when the settings leave it unset.
pub const DEFAULT_NUMBER_COUNT: usize = 5;
/// Per-number display interval when the settings leave it unset.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// A generated sequence plus its folded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashSequence {
    pub numbers: Vec<i64>,
    pub answer: i64,
}

/// Combine the sequence left to right. Division truncates at each step;
/// every drawn value is ≥ 1 and the running value never goes negative
/// under division, so truncation matches floor division.
fn fold(operation: Operation, numbers: &[i64]) -> i64 {
    let mut iter = numbers.iter();
    let Some(&first) = iter.next() else {
        return 0;
    };
    iter.fold(first, |acc, &n| match operation {
        Operation::Addition => acc + n,
        Operation::Subtraction => acc - n,
        Operation::Multiplication => acc * n,
        Operation::Division => acc / n,
    })
}

/// Draw `count` values from the first selected digit size (1-digit when
/// none is selected) and fold them under `operation`. Flash ranges are
/// grade-independent, and no zero-answer rejection applies here.
pub fn generate_sequence<R: Rng>(
    rng: &mut R,
    operation: Operation,
    digits: &[DigitSize],
    count: usize,
) -> FlashSequence {
    let digit = digits.first().copied().unwrap_or(DigitSize::OneDigit);
    let range = flash_range(digit);
    let numbers: Vec<i64> = (0..count).map(|_| range.sample(rng)).collect();
    let answer = fold(operation, &numbers);
    FlashSequence { numbers, answer }
}

/// Wrap one sequence into a problem for the timed reveal component.
pub fn generate_problem<R: Rng>(
    rng: &mut R,
    operation: Operation,
    settings: &DrillSettings,
) -> Problem {
    let count = settings.flash_number_count.unwrap_or(DEFAULT_NUMBER_COUNT);
    let interval_ms = settings.flash_interval_ms.unwrap_or(DEFAULT_INTERVAL_MS);
    let sequence = generate_sequence(rng, operation, &settings.digits, count);
    Problem {
        id: helpers::problem_id(rng, ProblemKind::Flash),
        kind: ProblemKind::Flash,
        question: format!("Flash mental math ({})", operation),
        answer: sequence.answer,
        answer_denominator: None,
        user_answer: None,
        calculation: None,
        body: ProblemBody::Flash {
            numbers: sequence.numbers,
            interval_ms,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sequence_draws_from_first_digit_size() {
        let mut rng = StdRng::seed_from_u64(21);
        let seq = generate_sequence(
            &mut rng,
            Operation::Addition,
            &[DigitSize::TwoDigit, DigitSize::OneDigit],
            8,
        );
        assert_eq!(seq.numbers.len(), 8);
        assert!(seq.numbers.iter().all(|&n| (10..=99).contains(&n)));
    }

    #[test]
    fn empty_digit_selection_defaults_to_one_digit() {
        let mut rng = StdRng::seed_from_u64(22);
        let seq = generate_sequence(&mut rng, Operation::Addition, &[], 6);
        assert!(seq.numbers.iter().all(|&n| (1..=9).contains(&n)));
    }

    #[test]
    fn fold_matches_each_operation() {
        assert_eq!(fold(Operation::Addition, &[3, 5, 2]), 10);
        assert_eq!(fold(Operation::Subtraction, &[9, 4, 3]), 2);
        assert_eq!(fold(Operation::Multiplication, &[2, 3, 4]), 24);
        // 40 / 3 = 13, 13 / 2 = 6
        assert_eq!(fold(Operation::Division, &[40, 3, 2]), 6);
    }

    #[test]
    fn subtraction_fold_may_go_negative() {
        // Flash has no rejection loop, so negative answers are allowed.
        assert_eq!(fold(Operation::Subtraction, &[1, 9, 9]), -17);
    }
}

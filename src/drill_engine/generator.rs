//! Problem assembly and batch planning.
//!
//! `generate_arithmetic` / `generate_written` build one well-formed
//! problem from an (operation, grade, digit-set) request; `plan_problems`
//! is the batch entry point that turns a [`DrillSettings`] into the full
//! shuffled collection a drill presents.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::drill_engine::{
    flash, helpers,
    models::{
        DigitSize, DrillMode, DrillOperation, DrillSettings, Grade, Operation, Problem,
        ProblemBody, ProblemKind,
    },
    ranges::number_range,
    word,
};

/// Rejection-sampling cap for degenerate answers. Zero answers only
/// occur for subtraction, where each retry misses with probability
/// 1/(range width + 1), so the cap is effectively unreachable.
const MAX_GENERATION_ATTEMPTS: usize = 64;

/// Operations a grade does not support silently fall back to addition.
fn gate_operation(operation: Operation, grade: Grade) -> Operation {
    if grade.permits(operation) {
        operation
    } else {
        Operation::Addition
    }
}

/// Pick a digit size uniformly from the caller's selection, then apply
/// the grade downgrades: grade 1 never sees 3-digit operands and drops
/// to 1-digit half the time; grade 2 caps out at 2 digits.
fn select_digit<R: Rng>(rng: &mut R, grade: Grade, digits: &[DigitSize]) -> DigitSize {
    let mut digit = if digits.is_empty() {
        DigitSize::OneDigit
    } else {
        digits[rng.gen_range(0..digits.len())]
    };
    if grade == Grade::First && digit == DigitSize::ThreeDigit {
        digit = DigitSize::TwoDigit;
    }
    if grade == Grade::First && digit == DigitSize::TwoDigit && rng.gen_bool(0.5) {
        digit = DigitSize::OneDigit;
    }
    if grade == Grade::Second && digit == DigitSize::ThreeDigit {
        digit = DigitSize::TwoDigit;
    }
    digit
}

/// Grade-fixed operand tables for multiplication, independent of the
/// selected digit sizes.
fn multiplication_operands<R: Rng>(rng: &mut R, grade: Grade) -> (i64, i64) {
    match grade {
        Grade::Second => (rng.gen_range(1..=9), rng.gen_range(1..=9)),
        Grade::Third => (rng.gen_range(10..=99), rng.gen_range(1..=9)),
        Grade::Fourth => (rng.gen_range(10..=99), rng.gen_range(10..=99)),
        Grade::First => (rng.gen_range(1..=9), rng.gen_range(1..=9)),
    }
}

/// Grade-fixed (answer, divisor) tables for division. The dividend is
/// derived, so division is always exact.
fn division_parts<R: Rng>(rng: &mut R, grade: Grade) -> (i64, i64) {
    match grade {
        Grade::Third => (rng.gen_range(1..=9), rng.gen_range(1..=9)),
        Grade::Fourth => (rng.gen_range(10..=99), rng.gen_range(1..=9)),
        Grade::First | Grade::Second => (rng.gen_range(1..=5), rng.gen_range(1..=5)),
    }
}

struct Operands {
    operand1: i64,
    operand2: i64,
    answer: i64,
}

fn draw_operands<R: Rng>(
    rng: &mut R,
    operation: Operation,
    grade: Grade,
    digits: &[DigitSize],
) -> Operands {
    let digit = select_digit(rng, grade, digits);
    let range = number_range(digit, grade);
    match operation {
        Operation::Addition => {
            let operand1 = range.sample(rng);
            let operand2 = range.sample(rng);
            Operands { operand1, operand2, answer: operand1 + operand2 }
        }
        Operation::Subtraction => {
            // operand2 never exceeds operand1, so the answer stays ≥ 0.
            let operand1 = range.sample(rng);
            let operand2 = rng.gen_range(range.min..=operand1);
            Operands { operand1, operand2, answer: operand1 - operand2 }
        }
        Operation::Multiplication => {
            let (operand1, operand2) = multiplication_operands(rng, grade);
            Operands { operand1, operand2, answer: operand1 * operand2 }
        }
        Operation::Division => {
            let (answer, operand2) = division_parts(rng, grade);
            Operands { operand1: answer * operand2, operand2, answer }
        }
    }
}

/// Redraw everything (digit pick included) until the answer is nonzero.
fn draw_nonzero<R: Rng>(
    rng: &mut R,
    operation: Operation,
    grade: Grade,
    digits: &[DigitSize],
) -> Operands {
    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let drawn = draw_operands(rng, operation, grade, digits);
        if drawn.answer != 0 {
            return drawn;
        }
    }
    // Only subtraction can land on zero (every other family stays
    // positive), so force the widest non-degenerate pair.
    let range = number_range(select_digit(rng, grade, digits), grade);
    Operands {
        operand1: range.max,
        operand2: range.min,
        answer: range.max - range.min,
    }
}

/// Build one plain arithmetic problem with an inline `"a OP b = ?"`
/// question string. The kind tag reflects the (possibly substituted)
/// operation.
pub fn generate_arithmetic<R: Rng>(
    rng: &mut R,
    operation: Operation,
    grade: Grade,
    digits: &[DigitSize],
) -> Problem {
    let operation = gate_operation(operation, grade);
    let drawn = draw_nonzero(rng, operation, grade, digits);
    let kind = ProblemKind::Arithmetic(operation);
    Problem {
        id: helpers::problem_id(rng, kind),
        kind,
        question: format!(
            "{} {} {} = ?",
            drawn.operand1,
            operation.symbol(),
            drawn.operand2
        ),
        answer: drawn.answer,
        answer_denominator: None,
        user_answer: None,
        calculation: None,
        body: ProblemBody::Plain,
    }
}

/// Sibling of [`generate_arithmetic`] for the vertical-column renderer:
/// same numerics, but the operands travel in the body instead of being
/// folded into the question string.
pub fn generate_written<R: Rng>(
    rng: &mut R,
    operation: Operation,
    grade: Grade,
    digits: &[DigitSize],
) -> Problem {
    let operation = gate_operation(operation, grade);
    let drawn = draw_nonzero(rng, operation, grade, digits);
    Problem {
        id: helpers::problem_id(rng, ProblemKind::Written),
        kind: ProblemKind::Written,
        question: format!(
            "{} {} {} = ?",
            drawn.operand1,
            operation.symbol(),
            drawn.operand2
        ),
        answer: drawn.answer,
        answer_denominator: None,
        user_answer: None,
        calculation: None,
        body: ProblemBody::Written {
            operand1: drawn.operand1,
            operand2: drawn.operand2,
            operation,
        },
    }
}

/// Batch entry point: seeds an RNG from the settings (entropy when no
/// seed is given) and fills the whole drill.
pub fn plan_problems(settings: &DrillSettings) -> Vec<Problem> {
    let mut rng: StdRng = match settings.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    plan_with_rng(&mut rng, settings)
}

/// Fill a drill from an existing RNG. Produces exactly
/// `settings.problem_count` problems in every mode.
pub fn plan_with_rng<R: Rng>(rng: &mut R, settings: &DrillSettings) -> Vec<Problem> {
    match settings.mode {
        // Flash drills skip the per-operation split: every problem uses
        // the first selected operation as the fold rule.
        DrillMode::Flash => {
            let rule = settings
                .operations
                .first()
                .map(|op| op.arithmetic())
                .unwrap_or(Operation::Addition);
            (0..settings.problem_count)
                .map(|_| flash::generate_problem(rng, rule, settings))
                .collect()
        }
        // Written drills draw a fresh random operation per slot.
        DrillMode::Written => {
            let mut problems: Vec<Problem> = (0..settings.problem_count)
                .map(|_| {
                    let operation = *helpers::pick(rng, &Operation::ALL);
                    generate_written(rng, operation, settings.grade, &settings.digits)
                })
                .collect();
            helpers::shuffle(rng, &mut problems);
            problems
        }
        // Plain drills split the count evenly across the selected
        // operations, remainder to the first entries in caller order.
        DrillMode::Plain => {
            let operations: &[DrillOperation] = if settings.operations.is_empty() {
                &[DrillOperation::Addition]
            } else {
                &settings.operations
            };
            let base = settings.problem_count / operations.len();
            let remainder = settings.problem_count % operations.len();
            let mut problems = Vec::with_capacity(settings.problem_count);
            for (index, operation) in operations.iter().enumerate() {
                let slots = if index < remainder { base + 1 } else { base };
                for _ in 0..slots {
                    let problem = match operation {
                        DrillOperation::Word => word::generate_one(rng, settings.grade),
                        _ => generate_arithmetic(
                            rng,
                            operation.arithmetic(),
                            settings.grade,
                            &settings.digits,
                        ),
                    };
                    problems.push(problem);
                }
            }
            helpers::shuffle(rng, &mut problems);
            problems
        }
    }
}

//! Word problems: narrative templates over fixed vocabulary lists.
//!
//! Each module holds one scenario family. Every public function follows
//! the same signature:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, grade: Grade) -> Problem
//! ```
//!
//! Templates are built so divisors and denominators are always positive
//! and divisions come out exact, so unlike the arithmetic assembler no
//! retry loop exists here.

pub mod count;
pub mod division;
pub mod fraction;
pub mod geometry;
pub mod length;
pub mod mixed;
pub mod multiplication;
pub mod shopping;
pub mod time;
pub mod weight;

use rand::Rng;

use crate::drill_engine::{
    helpers,
    models::{Grade, Problem, ProblemBody, ProblemKind, WordScenario},
};

/// Grade-scaled parameter magnitudes shared by the scenario templates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScenarioScale {
    pub small: i64,
    pub medium: i64,
    pub large: i64,
}

pub(crate) fn scale_for(grade: Grade) -> ScenarioScale {
    match grade {
        Grade::First => ScenarioScale { small: 10, medium: 20, large: 50 },
        Grade::Second => ScenarioScale { small: 20, medium: 50, large: 100 },
        Grade::Third => ScenarioScale { small: 50, medium: 100, large: 500 },
        Grade::Fourth => ScenarioScale { small: 100, medium: 500, large: 1000 },
    }
}

/// Naive plural for the vocabulary lists (all of which pluralise with
/// a trailing "s").
pub(crate) fn plural(word: &str, count: i64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Assemble the final [`Problem`] from a scenario's parts. Last call in
/// every scenario module.
pub(crate) fn assemble<R: Rng>(
    rng: &mut R,
    scenario: WordScenario,
    question: String,
    answer: i64,
    calculation: String,
) -> Problem {
    let kind = ProblemKind::Word(scenario);
    Problem {
        id: helpers::problem_id(rng, kind),
        kind,
        question,
        answer,
        answer_denominator: None,
        user_answer: None,
        calculation: Some(calculation),
        body: ProblemBody::Plain,
    }
}

/// Generate one word problem from a uniformly drawn grade-appropriate
/// scenario.
pub fn generate_one<R: Rng>(rng: &mut R, grade: Grade) -> Problem {
    let scenario = *helpers::pick(rng, grade.word_scenarios());
    match scenario {
        WordScenario::Shopping => shopping::generate(rng, grade),
        WordScenario::Time => time::generate(rng, grade),
        WordScenario::Weight => weight::generate(rng, grade),
        WordScenario::Length => length::generate(rng, grade),
        WordScenario::Count => count::generate(rng, grade),
        WordScenario::Division => division::generate(rng, grade),
        WordScenario::Multiplication => multiplication::generate(rng, grade),
        WordScenario::Fraction => fraction::generate(rng, grade),
        WordScenario::Geometry => geometry::generate(rng, grade),
        WordScenario::Mixed => mixed::generate(rng, grade),
    }
}

/// Generate `count` word problems. No dedup and no shuffling guarantee;
/// the batch planner shuffles the combined drill.
pub fn generate_batch<R: Rng>(rng: &mut R, grade: Grade, count: usize) -> Vec<Problem> {
    (0..count).map(|_| generate_one(rng, grade)).collect()
}

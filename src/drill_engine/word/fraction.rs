use rand::Rng;

use crate::drill_engine::helpers::pick;
use crate::drill_engine::models::{Grade, Problem, WordScenario};
use crate::drill_engine::word::assemble;

const ITEMS: [&str; 5] = ["pizza", "cake", "chocolate bar", "orange", "apple pie"];

/// Remaining fraction after eating some pieces. The answer carries the
/// numerator; the denominator travels separately for display.
pub fn generate<R: Rng>(rng: &mut R, grade: Grade) -> Problem {
    let item = *pick(rng, &ITEMS);

    let denominator = if grade <= Grade::Second {
        rng.gen_range(2..=4i64)
    } else {
        rng.gen_range(2..=8i64)
    };
    let eaten = rng.gen_range(1..=denominator - 1);
    let numerator = denominator - eaten;

    let question = format!(
        "A {item} was cut into {denominator} equal pieces and {eaten} of them were eaten. \
         What fraction of the {item} is left?"
    );
    let calculation = format!("1 - {eaten}/{denominator} = {numerator}/{denominator}");

    Problem {
        answer_denominator: Some(denominator),
        ..assemble(rng, WordScenario::Fraction, question, numerator, calculation)
    }
}

use rand::Rng;

use crate::drill_engine::models::{Grade, Problem, WordScenario};
use crate::drill_engine::word::assemble;

/// Perimeter of a square or rectangle.
pub fn generate<R: Rng>(rng: &mut R, _grade: Grade) -> Problem {
    let length = rng.gen_range(1..=20i64);
    let width = rng.gen_range(1..=20i64);

    if rng.gen_bool(0.5) {
        let answer = length * 4;
        let question = format!(
            "A square has sides {length} cm long. What is the perimeter of the square in cm?"
        );
        let calculation = format!("{length} cm × 4 = {answer} cm");
        assemble(rng, WordScenario::Geometry, question, answer, calculation)
    } else {
        let answer = 2 * (length + width);
        let question = format!(
            "A rectangle is {length} cm long and {width} cm wide. \
             What is the perimeter of the rectangle in cm?"
        );
        let calculation = format!(
            "({length} cm + {width} cm) × 2 = {} cm × 2 = {answer} cm",
            length + width
        );
        assemble(rng, WordScenario::Geometry, question, answer, calculation)
    }
}

use rand::Rng;

use crate::drill_engine::helpers::pick;
use crate::drill_engine::models::{Grade, Problem, WordScenario};
use crate::drill_engine::word::{assemble, scale_for};

const ITEMS: [&str; 7] = ["string", "tape", "ribbon", "rope", "wire", "yarn", "cord"];

/// Two pieces joined end to end. Grades 1–2 stay in centimetres;
/// higher grades sometimes measure in metres.
pub fn generate<R: Rng>(rng: &mut R, grade: Grade) -> Problem {
    let scale = scale_for(grade);
    let item = *pick(rng, &ITEMS);

    let limit = if grade <= Grade::Second { scale.medium } else { scale.large };
    let length1 = rng.gen_range(10..=limit);
    let length2 = rng.gen_range(10..=limit);
    let unit = if grade <= Grade::Second {
        "cm"
    } else {
        *pick(rng, &["cm", "m"])
    };

    let answer = length1 + length2;
    let question = format!(
        "A piece of {item} is {length1} {unit} long and another piece is {length2} {unit} long. \
         How many {unit} long are they when joined end to end?"
    );
    let calculation = format!("{length1} {unit} + {length2} {unit} = {answer} {unit}");

    assemble(rng, WordScenario::Length, question, answer, calculation)
}

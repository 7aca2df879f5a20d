use rand::Rng;

use crate::drill_engine::helpers::pick_two_distinct;
use crate::drill_engine::models::{Grade, Problem, WordScenario};
use crate::drill_engine::word::{assemble, scale_for};

const ITEMS: [&str; 8] = [
    "rice",
    "flour",
    "potatoes",
    "carrots",
    "apples",
    "oranges",
    "books",
    "toys",
];

/// Two bags, combined weight.
pub fn generate<R: Rng>(rng: &mut R, grade: Grade) -> Problem {
    let scale = scale_for(grade);
    let (item1, item2) = pick_two_distinct(rng, &ITEMS);

    let limit = if grade <= Grade::Second { scale.small } else { scale.medium };
    let weight1 = rng.gen_range(1..=limit);
    let weight2 = rng.gen_range(1..=limit);

    let answer = weight1 + weight2;
    let question = format!(
        "A bag of {item1} weighs {weight1} kg and a bag of {item2} weighs {weight2} kg. \
         How many kilograms do the two bags weigh together?"
    );
    let calculation = format!("{weight1} kg + {weight2} kg = {answer} kg");

    assemble(rng, WordScenario::Weight, question, answer, calculation)
}

use rand::Rng;

use crate::drill_engine::helpers::pick_two_distinct;
use crate::drill_engine::models::{Grade, Problem, WordScenario};
use crate::drill_engine::word::{assemble, plural, scale_for};

const ITEMS: [&str; 10] = [
    "apple",
    "orange",
    "banana",
    "melon",
    "lemon",
    "plum",
    "bread roll",
    "chocolate bar",
    "rice ball",
    "ice cream",
];

/// Buying two kinds of items: price × count, summed. Prices are kept to
/// multiples of 10 yen.
pub fn generate<R: Rng>(rng: &mut R, grade: Grade) -> Problem {
    let scale = scale_for(grade);
    let (item1, item2) = pick_two_distinct(rng, &ITEMS);

    let price1 = rng.gen_range(10..=scale.medium) * 10;
    let price2 = rng.gen_range(10..=scale.medium) * 10;
    let count1 = rng.gen_range(1..=5i64);
    let count2 = rng.gen_range(1..=5i64);

    let answer = price1 * count1 + price2 * count2;
    let question = format!(
        "One {item1} costs {price1} yen and one {item2} costs {price2} yen. \
         How much do {count1} {} and {count2} {} cost altogether?",
        plural(item1, count1),
        plural(item2, count2),
    );
    let calculation = format!(
        "{price1} yen × {count1} + {price2} yen × {count2} = {} yen + {} yen = {answer} yen",
        price1 * count1,
        price2 * count2,
    );

    assemble(rng, WordScenario::Shopping, question, answer, calculation)
}

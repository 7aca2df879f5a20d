use rand::Rng;

use crate::drill_engine::helpers::pick;
use crate::drill_engine::models::{Grade, Problem, WordScenario};
use crate::drill_engine::word::{assemble, scale_for};

struct Group {
    whole: &'static str,
    part: &'static str,
    remaining: &'static str,
}

const GROUPS: [Group; 5] = [
    Group { whole: "children in the class", part: "boys", remaining: "girls" },
    Group { whole: "apples in the basket", part: "red apples", remaining: "green apples" },
    Group { whole: "things in the pencil case", part: "pencils", remaining: "erasers" },
    Group { whole: "toys in the box", part: "balls", remaining: "stuffed animals" },
    Group { whole: "sweets in the tin", part: "chocolates", remaining: "candies" },
];

/// Whole minus named part.
pub fn generate<R: Rng>(rng: &mut R, grade: Grade) -> Problem {
    let scale = scale_for(grade);
    let group = pick(rng, &GROUPS);

    let max = if grade <= Grade::Second { scale.small } else { scale.medium };
    let total = rng.gen_range(max / 2..=max);
    let part = rng.gen_range(1..=total - 1);

    let answer = total - part;
    let question = format!(
        "There are {total} {}. {part} of them are {}. How many {} are there?",
        group.whole, group.part, group.remaining
    );
    let calculation = format!("{total} - {part} = {answer}");

    assemble(rng, WordScenario::Count, question, answer, calculation)
}

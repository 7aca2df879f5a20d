use rand::Rng;

use crate::drill_engine::helpers::pick;
use crate::drill_engine::models::{Grade, Problem, WordScenario};
use crate::drill_engine::word::{assemble, scale_for};

struct Story {
    thing: &'static str,
    gone: &'static str,
    came: &'static str,
}

const STORIES: [Story; 4] = [
    Story { thing: "pigeons in the park", gone: "flew away", came: "flew in" },
    Story { thing: "apples in the basket", gone: "were eaten", came: "were added" },
    Story { thing: "children in the classroom", gone: "left early", came: "arrived late" },
    Story { thing: "books on the shelf", gone: "were borrowed", came: "were returned" },
];

/// One subtraction then one addition in a single story.
pub fn generate<R: Rng>(rng: &mut R, grade: Grade) -> Problem {
    let scale = scale_for(grade);
    let story = pick(rng, &STORIES);

    let max = if grade <= Grade::Second { scale.small } else { scale.medium };
    let initial = rng.gen_range(max / 2..=max);
    let gone = rng.gen_range(1..=initial / 2);
    let came = rng.gen_range(1..=max / 2);

    let answer = initial - gone + came;
    let question = format!(
        "There were {initial} {}. {gone} of them {}, and then {came} more {}. \
         How many are there now?",
        story.thing, story.gone, story.came
    );
    let calculation = format!(
        "{initial} - {gone} + {came} = {} + {came} = {answer}",
        initial - gone
    );

    assemble(rng, WordScenario::Mixed, question, answer, calculation)
}

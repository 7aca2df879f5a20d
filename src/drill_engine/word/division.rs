use rand::Rng;

use crate::drill_engine::helpers::pick;
use crate::drill_engine::models::{Grade, Problem, WordScenario};
use crate::drill_engine::word::{assemble, scale_for};

struct Sharing {
    item: &'static str,
    recipient: &'static str,
}

const SCENARIOS: [Sharing; 5] = [
    Sharing { item: "cookies", recipient: "friends" },
    Sharing { item: "oranges", recipient: "family members" },
    Sharing { item: "chocolates", recipient: "friends" },
    Sharing { item: "stickers", recipient: "classmates" },
    Sharing { item: "sweets", recipient: "children" },
];

/// Equal sharing. The divisor is chosen first and the total derived as
/// a multiple, so the division is always exact.
pub fn generate<R: Rng>(rng: &mut R, grade: Grade) -> Problem {
    let scale = scale_for(grade);
    let sharing = pick(rng, &SCENARIOS);

    let (divisor, total) = if grade <= Grade::Second {
        let divisor = rng.gen_range(2..=5i64);
        (divisor, divisor * rng.gen_range(1..=10i64))
    } else {
        let divisor = rng.gen_range(2..=10i64);
        (divisor, divisor * rng.gen_range(1..=scale.small))
    };

    let answer = total / divisor;
    let question = format!(
        "If you share {total} {} equally among {divisor} {}, how many does each one get?",
        sharing.item, sharing.recipient
    );
    let calculation = format!("{total} ÷ {divisor} = {answer}");

    assemble(rng, WordScenario::Division, question, answer, calculation)
}

use rand::Rng;

use crate::drill_engine::helpers::pick;
use crate::drill_engine::models::{Grade, Problem, WordScenario};
use crate::drill_engine::word::assemble;

struct Packing {
    container: &'static str,
    containers: &'static str,
    item: &'static str,
}

const CONTAINERS: [Packing; 5] = [
    Packing { container: "box", containers: "boxes", item: "eggs" },
    Packing { container: "bag", containers: "bags", item: "oranges" },
    Packing { container: "pack", containers: "packs", item: "strawberries" },
    Packing { container: "box", containers: "boxes", item: "crayons" },
    Packing { container: "bundle", containers: "bundles", item: "pencils" },
];

/// Items per container × container count.
pub fn generate<R: Rng>(rng: &mut R, grade: Grade) -> Problem {
    let packing = pick(rng, &CONTAINERS);

    let (per_container, containers) = if grade <= Grade::Second {
        (rng.gen_range(2..=10i64), rng.gen_range(2..=5i64))
    } else {
        (rng.gen_range(5..=20i64), rng.gen_range(3..=10i64))
    };

    let answer = per_container * containers;
    let question = format!(
        "Each {} holds {per_container} {}. How many {} are there in {containers} {}?",
        packing.container, packing.item, packing.item, packing.containers
    );
    let calculation = format!("{per_container} × {containers} = {answer}");

    assemble(rng, WordScenario::Multiplication, question, answer, calculation)
}

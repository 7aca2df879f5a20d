//! Shared builders used across the generator families.
//!
//! Every generator mints ids, picks vocabulary, and shuffles collections
//! the same way; these helpers centralise that work so the generator and
//! scenario files focus on the numeric rules only.

use rand::Rng;

use crate::drill_engine::models::{Operation, ProblemKind, WordScenario};

/// Two-letter id prefix per generator family.
fn id_prefix(kind: ProblemKind) -> &'static str {
    match kind {
        ProblemKind::Arithmetic(Operation::Addition) => "AD",
        ProblemKind::Arithmetic(Operation::Subtraction) => "SB",
        ProblemKind::Arithmetic(Operation::Multiplication) => "ML",
        ProblemKind::Arithmetic(Operation::Division) => "DV",
        ProblemKind::Word(WordScenario::Shopping) => "SH",
        ProblemKind::Word(WordScenario::Time) => "TM",
        ProblemKind::Word(WordScenario::Weight) => "WG",
        ProblemKind::Word(WordScenario::Length) => "LN",
        ProblemKind::Word(WordScenario::Count) => "CT",
        ProblemKind::Word(WordScenario::Division) => "WD",
        ProblemKind::Word(WordScenario::Multiplication) => "WM",
        ProblemKind::Word(WordScenario::Fraction) => "FR",
        ProblemKind::Word(WordScenario::Geometry) => "GE",
        ProblemKind::Word(WordScenario::Mixed) => "MX",
        ProblemKind::Flash => "FL",
        ProblemKind::Written => "WR",
    }
}

/// Mint a problem id from the family prefix plus RNG output.
/// Opaque; only uniqueness within a single session matters.
pub fn problem_id<R: Rng>(rng: &mut R, kind: ProblemKind) -> String {
    format!("{}-{:08X}", id_prefix(kind), rng.next_u32())
}

/// Pick one element uniformly from a non-empty slice.
pub fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Pick two distinct elements uniformly from a slice of length ≥ 2.
pub fn pick_two_distinct<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> (&'a T, &'a T) {
    let first = rng.gen_range(0..items.len());
    let mut second = rng.gen_range(0..items.len());
    while second == first {
        second = rng.gen_range(0..items.len());
    }
    (&items[first], &items[second])
}

/// Uniform in-place Fisher-Yates shuffle.
pub fn shuffle<R: Rng, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

use rand::Rng;

use crate::drill_engine::helpers::pick;
use crate::drill_engine::models::{Grade, Problem, WordScenario};
use crate::drill_engine::word::assemble;

const ACTIVITIES: [&str; 7] = [
    "The lesson",
    "Playtime",
    "The movie",
    "Reading time",
    "The game",
    "Practice",
    "Study time",
];

/// Elapsed-time questions. Grades 1–2 work in whole hours on a 12-hour
/// clock; grades 3–4 get minute-level durations.
pub fn generate<R: Rng>(rng: &mut R, grade: Grade) -> Problem {
    let activity = *pick(rng, &ACTIVITIES);

    if grade <= Grade::Second {
        let start_hour = rng.gen_range(1..=12i64);
        let mut end_hour = start_hour + rng.gen_range(1..=5i64);
        if end_hour > 12 {
            end_hour -= 12;
        }

        let answer = if end_hour > start_hour {
            end_hour - start_hour
        } else {
            end_hour + 12 - start_hour
        };
        let calculation = if end_hour > start_hour {
            format!("{end_hour} o'clock - {start_hour} o'clock = {answer} hours")
        } else {
            format!(
                "{end_hour} o'clock + 12 hours - {start_hour} o'clock = {} o'clock - {start_hour} o'clock = {answer} hours",
                end_hour + 12
            )
        };
        let question = format!(
            "{activity} starts at {start_hour} o'clock and ends at {end_hour} o'clock. \
             How many hours does it last?"
        );
        return assemble(rng, WordScenario::Time, question, answer, calculation);
    }

    let start_hour = rng.gen_range(1..=12i64);
    let start_minute = rng.gen_range(0..=1i64) * 30;
    let start_total = start_hour * 60 + start_minute;
    let duration = rng.gen_range(30..=180i64);

    // Wrap the displayed end time onto the 12-hour clock.
    let mut end_total = start_total + duration;
    while end_total >= 12 * 60 {
        end_total -= 12 * 60;
    }
    let mut end_hour = end_total / 60;
    let end_minute = end_total % 60;
    if end_hour == 0 {
        end_hour = 12;
    }

    let question = format!(
        "{activity} starts at {start_hour}:{start_minute:02} and ends at \
         {end_hour}:{end_minute:02}. How many minutes does it last?"
    );

    let calculation = format!(
        "{start_hour} h × 60 + {start_minute} min = {start_total} min; \
         {start_total} min + {duration} min = {} min; answer: {duration} minutes",
        start_total + duration
    );

    assemble(rng, WordScenario::Time, question, duration, calculation)
}

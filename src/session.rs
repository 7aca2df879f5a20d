//! Drill session controller.
//!
//! Owns a copy of the settings and the generated batch, walks the
//! problems with an answer cursor, and closes out into a [`DrillResult`].
//! The countdown itself is driven externally; the session only decides
//! what expiry means: [`DrillSession::finish`] scores the problems
//! presented so far, so a timed-out drill records partial results.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::drill_engine::generator;
use crate::drill_engine::models::{DrillResult, DrillSettings, Problem};
use crate::scoring;

pub struct DrillSession {
    settings: DrillSettings,
    username: String,
    problems: Vec<Problem>,
    cursor: usize,
    rng: StdRng,
}

impl DrillSession {
    /// Copy the settings in and generate the full batch up front.
    pub fn new(username: impl Into<String>, settings: DrillSettings) -> Self {
        let mut rng: StdRng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let problems = generator::plan_with_rng(&mut rng, &settings);
        DrillSession {
            settings,
            username: username.into(),
            problems,
            cursor: 0,
            rng,
        }
    }

    pub fn settings(&self) -> &DrillSettings {
        &self.settings
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// The problem currently being presented, if any remain.
    pub fn current(&self) -> Option<&Problem> {
        self.problems.get(self.cursor)
    }

    /// Attach an answer to the current problem and advance. Returns
    /// `false` once the batch is exhausted.
    pub fn submit_answer(&mut self, value: i64) -> bool {
        match self.problems.get_mut(self.cursor) {
            Some(problem) => {
                problem.user_answer = Some(value);
                self.cursor += 1;
                true
            }
            None => false,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.problems.len()
    }

    /// Has the drill run past its time limit?
    pub fn is_expired(&self, elapsed_secs: u64) -> bool {
        elapsed_secs >= u64::from(self.settings.time_limit_min) * 60
    }

    /// Close the session out. Only the problems presented so far are
    /// scored, which is what makes the timeout path record partial
    /// results.
    pub fn finish(mut self, time_spent_secs: u64) -> DrillResult {
        self.problems.truncate(self.cursor);
        scoring::build_result(
            &mut self.rng,
            &self.settings,
            &self.username,
            self.problems,
            time_spent_secs,
        )
    }
}

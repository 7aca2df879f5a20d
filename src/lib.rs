//! # math_drill_gen
//!
//! A fully offline generator for children's arithmetic drills.
//!
//! This library generates randomised, grade-appropriate math problems
//! across four arithmetic operations, ten narrative word-problem
//! scenarios, vertical written calculation, and flash mental-math
//! sequences. Every problem is guaranteed non-degenerate: subtraction
//! never goes negative, division is always exact, and no arithmetic
//! answer is zero.
//!
//! ## How it works
//!
//! 1. Build a [`DrillSettings`] with a grade, a drill mode, the selected
//!    operations, a problem count, and the digit sizes to draw from.
//! 2. Call [`plan_problems`] — the engine splits the count across the
//!    selected operations, generates each slot with grade-gated operand
//!    ranges, and shuffles the batch.
//! 3. Present the problems, attach user answers, and close the drill out
//!    through [`DrillSession`] — the result is scored 0–100 and can be
//!    appended to the [`HistoryStore`] log.
//!
//! ## Key features
//!
//! - **Deterministic**: set `rng_seed: Some(u64)` to reproduce the exact
//!   same batch every time — useful for tests and progress tracking.
//! - **Grade-gated**: grade 1 only sees addition/subtraction with small
//!   operands; multiplication and division tables widen through grade 4.
//! - **One engine, three modes**: `Plain`, `Written` (column layout), and
//!   `Flash` (timed sequences) share the same settings and record shape.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{plan_problems, DrillOperation, DrillSettings, Grade};
//!
//! let mut settings = DrillSettings::new(Grade::Second);
//! settings.operations = vec![DrillOperation::Addition, DrillOperation::Division];
//! settings.problem_count = 6;
//! settings.rng_seed = Some(42);
//!
//! let problems = plan_problems(&settings);
//! assert_eq!(problems.len(), 6);
//! for problem in &problems {
//!     println!("{}  (answer: {})", problem.question, problem.answer);
//! }
//! ```

pub mod drill_engine;
pub mod persistence;
pub mod scoring;
pub mod session;

// Convenience re-exports so callers can use `math_drill_gen::plan_problems`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    generate_arithmetic, generate_written, plan_problems, plan_with_rng, DigitSize, DrillMode,
    DrillOperation, DrillResult, DrillSettings, Grade, Operation, Problem, ProblemBody,
    ProblemKind, WordScenario,
};
pub use persistence::{HistoryStore, PersistenceError};
pub use session::DrillSession;

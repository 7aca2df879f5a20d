//! Core drill engine — problem generation, numeric ranges, and batch
//! planning.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: grades, tags, problems, settings, results |
//! | `ranges`    | Digit-size/grade → inclusive operand ranges |
//! | `helpers`   | Shared builders: ids, uniform picks, Fisher-Yates shuffle |
//! | `generator` | Problem assembly and the `plan_problems` batch entry point |
//! | `word`      | Narrative word-problem templates, one module per scenario |
//! | `flash`     | Flash mental-math sequences for the timed reveal screen |

pub mod flash;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod ranges;
pub mod word;

// Re-export the public API surface so callers can use
// `drill_engine::plan_problems` without reaching into sub-modules.
pub use generator::{generate_arithmetic, generate_written, plan_problems, plan_with_rng};
pub use models::{
    DigitSize, DrillMode, DrillOperation, DrillResult, DrillSettings, Grade, Operation,
    Problem, ProblemBody, ProblemKind, WordScenario,
};

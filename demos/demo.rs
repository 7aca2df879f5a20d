//! End-to-end demo of the drill engine.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `math_drill_gen` works end to end:
//!
//! 1. **A mixed plain drill** — addition, division, and word problems
//!    split across ten slots, generated from a fixed seed so the output
//!    is deterministic and reproducible.
//!
//! 2. **Mode comparison** — the same settings rendered as a written
//!    (column layout) batch and a flash (timed sequence) batch.
//!
//! 3. **A full session** — problems answered programmatically, scored,
//!    and appended to a history store in a temporary directory.
//!
//! ## Key concepts demonstrated
//!
//! - `DrillSettings::new(grade)` — minimal constructor; everything else
//!   defaults.
//! - `rng_seed: Some(u64)` makes the output fully deterministic.
//! - `DrillSession` walks the batch with an answer cursor and closes out
//!   into a scored `DrillResult`.
//! - `HistoryStore` keeps the newest-first result log.

use math_drill_gen::{
    plan_problems, DigitSize, DrillMode, DrillOperation, DrillSession, DrillSettings, Grade,
    HistoryStore, Problem, ProblemBody,
};

fn print_problem(problem: &Problem) {
    println!("  [{}] {}  →  {}", problem.id, problem.question, problem.answer);
    if let Some(calculation) = &problem.calculation {
        println!("        {}", calculation);
    }
    match &problem.body {
        ProblemBody::Written { operand1, operand2, operation } => {
            println!("        column layout: {operand1} {} {operand2}", operation.symbol());
        }
        ProblemBody::Flash { numbers, interval_ms } => {
            let shown: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
            println!("        reveal: {} (every {interval_ms} ms)", shown.join(", "));
        }
        ProblemBody::Plain => {}
    }
}

fn main() {
    // ── Mixed plain drill ────────────────────────────────────────────────────
    println!();
    println!("══ Plain drill: grade 3, addition + division + word, 10 slots ══");
    println!();

    let mut settings = DrillSettings::new(Grade::Third);
    settings.operations = vec![
        DrillOperation::Addition,
        DrillOperation::Division,
        DrillOperation::Word,
    ];
    settings.problem_count = 10;
    settings.digits = vec![DigitSize::OneDigit, DigitSize::TwoDigit];
    settings.rng_seed = Some(42);

    for problem in &plan_problems(&settings) {
        print_problem(problem);
    }

    // ── Mode comparison ──────────────────────────────────────────────────────
    println!();
    println!("══ Written and flash modes, same grade ══");
    println!();

    let written = DrillSettings {
        mode: DrillMode::Written,
        problem_count: 3,
        rng_seed: Some(7),
        ..DrillSettings::new(Grade::Fourth)
    };
    for problem in &plan_problems(&written) {
        print_problem(problem);
    }

    let flash = DrillSettings {
        mode: DrillMode::Flash,
        operations: vec![DrillOperation::Addition],
        problem_count: 2,
        flash_number_count: Some(4),
        flash_interval_ms: Some(500),
        rng_seed: Some(7),
        ..DrillSettings::new(Grade::Fourth)
    };
    for problem in &plan_problems(&flash) {
        print_problem(problem);
    }

    // ── A full session, scored and persisted ─────────────────────────────────
    println!();
    println!("══ Session: answer everything, score, persist ══");
    println!();

    let mut session_settings = DrillSettings::new(Grade::Second);
    session_settings.problem_count = 5;
    session_settings.rng_seed = Some(2025);
    let mut session = DrillSession::new("demo-kid", session_settings);

    // Answer all but the last problem correctly.
    let mut index = 0usize;
    while let Some(problem) = session.current() {
        let answer = if index + 1 == 5 { -1 } else { problem.answer };
        session.submit_answer(answer);
        index += 1;
    }
    let result = session.finish(95);
    println!(
        "  {} scored {} ({}/{} correct in {} s)",
        result.username, result.score, result.correct_count, result.problem_count,
        result.time_spent_secs
    );

    let dir = std::env::temp_dir().join("math_drill_gen_demo");
    let store = HistoryStore::with_dir(&dir);
    match store.append(result) {
        Ok(history) => println!("  history now holds {} record(s) in {}", history.len(), dir.display()),
        Err(err) => eprintln!("  could not persist the result: {err}"),
    }
}

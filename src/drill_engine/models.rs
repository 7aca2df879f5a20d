use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Grade / magnitude primitives
// ---------------------------------------------------------------------------

/// School grade 1–4. Gates which operations, digit sizes, and word
/// scenarios a drill may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grade {
    First,
    Second,
    Third,
    Fourth,
}

impl Grade {
    /// The grade as the number a settings form works with.
    pub fn number(self) -> u8 {
        match self {
            Grade::First => 1,
            Grade::Second => 2,
            Grade::Third => 3,
            Grade::Fourth => 4,
        }
    }

    /// Operations a drill at this grade may actually pose.
    /// Grade 1 is addition/subtraction only; everyone else gets all four.
    pub fn allowed_operations(self) -> &'static [Operation] {
        match self {
            Grade::First => &[Operation::Addition, Operation::Subtraction],
            _ => &[
                Operation::Addition,
                Operation::Subtraction,
                Operation::Multiplication,
                Operation::Division,
            ],
        }
    }

    pub fn permits(self, operation: Operation) -> bool {
        self.allowed_operations().contains(&operation)
    }

    /// Word-problem scenarios available at this grade.
    pub fn word_scenarios(self) -> &'static [WordScenario] {
        match self {
            Grade::First => &[
                WordScenario::Shopping,
                WordScenario::Count,
                WordScenario::Length,
                WordScenario::Weight,
            ],
            Grade::Second => &[
                WordScenario::Shopping,
                WordScenario::Count,
                WordScenario::Length,
                WordScenario::Weight,
                WordScenario::Time,
                WordScenario::Multiplication,
                WordScenario::Division,
            ],
            Grade::Third | Grade::Fourth => &[
                WordScenario::Shopping,
                WordScenario::Count,
                WordScenario::Length,
                WordScenario::Weight,
                WordScenario::Time,
                WordScenario::Multiplication,
                WordScenario::Division,
                WordScenario::Fraction,
                WordScenario::Geometry,
                WordScenario::Mixed,
            ],
        }
    }
}

impl TryFrom<u8> for Grade {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Grade::First),
            2 => Ok(Grade::Second),
            3 => Ok(Grade::Third),
            4 => Ok(Grade::Fourth),
            other => Err(format!("grade out of range: {other}")),
        }
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> u8 {
        grade.number()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "grade {}", self.number())
    }
}

/// Coarse operand-magnitude selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitSize {
    #[serde(rename = "1digit")]
    OneDigit,
    #[serde(rename = "2digit")]
    TwoDigit,
    #[serde(rename = "3digit")]
    ThreeDigit,
}

impl fmt::Display for DigitSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitSize::OneDigit => write!(f, "1digit"),
            DigitSize::TwoDigit => write!(f, "2digit"),
            DigitSize::ThreeDigit => write!(f, "3digit"),
        }
    }
}

// ---------------------------------------------------------------------------
// Operation tags
// ---------------------------------------------------------------------------

/// The four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Symbol used when rendering question strings.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }

    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
        };
        write!(f, "{}", s)
    }
}

/// Narrative template families for word problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordScenario {
    Shopping,
    Time,
    Weight,
    Length,
    Count,
    Division,
    Multiplication,
    Fraction,
    Geometry,
    Mixed,
}

impl fmt::Display for WordScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WordScenario::Shopping => "shopping",
            WordScenario::Time => "time",
            WordScenario::Weight => "weight",
            WordScenario::Length => "length",
            WordScenario::Count => "count",
            WordScenario::Division => "division",
            WordScenario::Multiplication => "multiplication",
            WordScenario::Fraction => "fraction",
            WordScenario::Geometry => "geometry",
            WordScenario::Mixed => "mixed",
        };
        write!(f, "{}", s)
    }
}

/// Identifies which generator family produced a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    Arithmetic(Operation),
    Word(WordScenario),
    Flash,
    Written,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemKind::Arithmetic(op) => write!(f, "{}", op),
            ProblemKind::Word(scenario) => write!(f, "{}", scenario),
            ProblemKind::Flash => write!(f, "flash"),
            ProblemKind::Written => write!(f, "written"),
        }
    }
}

// ---------------------------------------------------------------------------
// Problem record
// ---------------------------------------------------------------------------

/// Presentation payload. Exactly one shape applies per problem: plain
/// problems fold everything into the question string, written problems
/// carry operands for the column renderer, flash problems carry the
/// reveal sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ProblemBody {
    #[default]
    Plain,
    Written {
        operand1: i64,
        operand2: i64,
        operation: Operation,
    },
    Flash {
        numbers: Vec<i64>,
        interval_ms: u64,
    },
}

impl ProblemBody {
    pub fn is_plain(&self) -> bool {
        matches!(self, ProblemBody::Plain)
    }
}

/// One question instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Opaque token, unique within one session.
    pub id: String,
    pub kind: ProblemKind,
    pub question: String,
    /// Integer correct answer. Fraction problems store the numerator here
    /// and the denominator in `answer_denominator`.
    pub answer: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_denominator: Option<i64>,
    /// Attached after presentation; absent until answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<i64>,
    /// Worked-solution string for problems that explain themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation: Option<String>,
    #[serde(default, skip_serializing_if = "ProblemBody::is_plain")]
    pub body: ProblemBody,
}

impl Problem {
    /// Exact-equality check against the recorded user answer.
    /// Fractions compare the numerator only.
    pub fn is_correct(&self) -> bool {
        self.user_answer == Some(self.answer)
    }
}

// ---------------------------------------------------------------------------
// Drill configuration
// ---------------------------------------------------------------------------

/// How a batch is presented: inline equations, vertical written
/// calculation, or timed flash sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillMode {
    Plain,
    Written,
    Flash,
}

/// What the settings screen lets a user select per batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillOperation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Word,
}

impl DrillOperation {
    /// Human-readable label recorded on drill results.
    pub fn label(self) -> &'static str {
        match self {
            DrillOperation::Addition => "Addition",
            DrillOperation::Subtraction => "Subtraction",
            DrillOperation::Multiplication => "Multiplication",
            DrillOperation::Division => "Division",
            DrillOperation::Word => "Word problems",
        }
    }

    /// The arithmetic operation this selection stands for.
    /// `Word` has no arithmetic counterpart and degrades to addition,
    /// which is what the flash fold uses for it.
    pub fn arithmetic(self) -> Operation {
        match self {
            DrillOperation::Addition => Operation::Addition,
            DrillOperation::Subtraction => Operation::Subtraction,
            DrillOperation::Multiplication => Operation::Multiplication,
            DrillOperation::Division => Operation::Division,
            DrillOperation::Word => Operation::Addition,
        }
    }
}

impl fmt::Display for DrillOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Configuration for one generation batch. Owned transiently by the
/// settings screen; copied into the session when a drill starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillSettings {
    pub grade: Grade,
    pub mode: DrillMode,
    /// Selected operations in presentation order. Non-empty.
    pub operations: Vec<DrillOperation>,
    pub problem_count: usize,
    pub time_limit_min: u32,
    /// Selected digit sizes. Non-empty.
    pub digits: Vec<DigitSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_number_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_interval_ms: Option<u64>,
    /// Seed for reproducible batches. `None` draws from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

impl DrillSettings {
    /// Settings with the defaults a fresh configuration screen shows.
    pub fn new(grade: Grade) -> Self {
        DrillSettings {
            grade,
            mode: DrillMode::Plain,
            operations: vec![DrillOperation::Addition, DrillOperation::Subtraction],
            problem_count: 10,
            time_limit_min: 5,
            digits: vec![DigitSize::OneDigit, DigitSize::TwoDigit],
            flash_number_count: None,
            flash_interval_ms: None,
            rng_seed: None,
        }
    }

    /// Labels recorded on the drill result. Written and flash drills do
    /// not split by operation, so they report the mode instead.
    pub fn operation_labels(&self) -> Vec<String> {
        match self.mode {
            DrillMode::Plain => self.operations.iter().map(|op| op.label().to_string()).collect(),
            DrillMode::Written => vec!["Written calculation".to_string()],
            DrillMode::Flash => vec!["Flash mental math".to_string()],
        }
    }
}

// ---------------------------------------------------------------------------
// Drill result record
// ---------------------------------------------------------------------------

/// Persisted summary of one completed (or timed-out) drill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillResult {
    pub id: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub operations: Vec<String>,
    pub problem_count: usize,
    pub correct_count: usize,
    pub time_limit_min: u32,
    pub time_spent_secs: u64,
    /// 0–100, rounded.
    pub score: u32,
    pub problems: Vec<Problem>,
}

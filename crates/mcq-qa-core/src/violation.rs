//! Violation reporting and the validator strategy interface
//!
//! Every finding the engine produces is a `Violation`: a tagged kind, an
//! optional question ordinal, and a human-readable detail. Whether a
//! violation is an error or a warning is decided by the channel that
//! produced it (protocol validators report errors, statistical and
//! quality checks report warnings), not by the violation itself.

use crate::question::Question;
use serde::{Deserialize, Serialize};

/// Machine-readable category of a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Stem refers to source material ("according to the passage", "नोट:")
    MetaReference,
    /// Stem uses an absolute quantifier ("always"/"never")
    AbsoluteQuantifier,
    /// Stem contains a double-negative construction
    DoubleNegative,
    /// An option is "None of the above"/"All of the above"
    CatchAllOption,
    /// A "Both X and Y" option in a form that does not pair statements
    PairedOption,
    /// Longest option exceeds 3x the shortest (visual-weight imbalance)
    OptionLengthImbalance,
    /// Two or more options share the same text
    DuplicateOption,
    /// A mandatory structural scaffold element is missing for the form
    MissingScaffold,
    /// Question, explanation, or option text is empty
    EmptyField,
    /// Option-key set does not match the protocol's labeling convention
    OptionKeyShape,
    /// Correct-answer key is not a member of the option-key set
    InvalidAnswerKey,
    /// A Hindi field has no non-empty English twin
    MissingBilingualMirror,
    /// An answer key's share of the batch is outside the balance band
    AnswerImbalance,
    /// A run of identical correct-answer keys is too long
    AnswerRun,
    /// A warm-up position carries a non-low cognitive load
    WarmupViolation,
    /// A run of high-load questions is too long
    HighLoadRun,
}

/// One structured finding about a question or a batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Category tag
    pub kind: ViolationKind,
    /// Ordinal of the offending question, if the finding is per-question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<u32>,
    /// Human-readable message
    pub detail: String,
}

impl Violation {
    /// Create a batch-level violation
    #[must_use]
    pub fn batch(kind: ViolationKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            question: None,
            detail: detail.into(),
        }
    }

    /// Create a violation attributed to one question
    #[must_use]
    pub fn for_question(kind: ViolationKind, number: u32, detail: impl Into<String>) -> Self {
        Self {
            kind,
            question: Some(number),
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.question {
            Some(n) => write!(f, "Q{n}: {}", self.detail),
            None => write!(f, "{}", self.detail),
        }
    }
}

/// Strategy interface for batch validators
///
/// A validator receives the whole ordered batch and returns every violation
/// it can find; it never short-circuits and never fails. Protocols hold an
/// ordered list of these, constructed at configuration-load time.
pub trait Validator: Send + Sync {
    /// Check the whole batch, returning all findings
    fn check(&self, batch: &[Question]) -> Vec<Violation>;

    /// Get the validator name
    fn name(&self) -> &'static str;
}

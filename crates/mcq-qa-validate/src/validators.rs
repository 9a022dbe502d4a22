//! Validator strategy implementations
//!
//! Each validator wraps one family of checks behind the [`Validator`]
//! trait so protocols can compose their hard constraints as an ordered
//! list. Validators never short-circuit; every finding from every
//! question is reported.

use crate::patterns::validate_prohibited_patterns;
use crate::quality;
use crate::structure::validate_structure;
use mcq_qa_core::{OptionLabeling, Question, Validator, Violation, ViolationKind};

/// Flags prohibited phrasings in stems and options
pub struct ProhibitedPatternValidator;

impl Validator for ProhibitedPatternValidator {
    fn check(&self, batch: &[Question]) -> Vec<Violation> {
        batch.iter().flat_map(validate_prohibited_patterns).collect()
    }

    fn name(&self) -> &'static str {
        "prohibited-patterns"
    }
}

/// Enforces per-form structural scaffolds
pub struct StructureValidator;

impl Validator for StructureValidator {
    fn check(&self, batch: &[Question]) -> Vec<Violation> {
        batch.iter().flat_map(validate_structure).collect()
    }

    fn name(&self) -> &'static str {
        "structure"
    }
}

/// Enforces the protocol's option-key convention and answer-key membership
/// as hard constraints
pub struct OptionShapeValidator {
    labeling: OptionLabeling,
}

impl OptionShapeValidator {
    /// Create a validator for the given labeling convention
    #[must_use]
    pub const fn new(labeling: OptionLabeling) -> Self {
        Self { labeling }
    }
}

impl Validator for OptionShapeValidator {
    fn check(&self, batch: &[Question]) -> Vec<Violation> {
        batch
            .iter()
            .flat_map(|q| quality::option_shape(q, self.labeling))
            .collect()
    }

    fn name(&self) -> &'static str {
        "option-shape"
    }
}

/// Requires a non-empty English twin for every bilingual field
///
/// Attached only by protocols whose questions are delivered in Hindi with
/// an English mirror.
pub struct BilingualMirrorValidator;

impl BilingualMirrorValidator {
    fn check_question(question: &Question) -> Vec<Violation> {
        let mut violations = Vec::new();
        let n = question.number;
        let mirror = |detail: String| Violation::for_question(ViolationKind::MissingBilingualMirror, n, detail);

        match &question.text_en {
            Some(text) if !text.trim().is_empty() => {}
            _ => violations.push(mirror("stem has no English mirror".to_string())),
        }

        match &question.options_en {
            Some(options_en) => {
                for key in question.options.keys() {
                    let twin_ok = options_en
                        .get(key)
                        .is_some_and(|t| !t.trim().is_empty());
                    if !twin_ok {
                        violations.push(mirror(format!("option '{key}' has no English mirror")));
                    }
                }
            }
            None => violations.push(mirror("options have no English mirrors".to_string())),
        }

        match &question.explanation_en {
            Some(text) if !text.trim().is_empty() => {}
            _ => violations.push(mirror("explanation has no English mirror".to_string())),
        }

        violations
    }
}

impl Validator for BilingualMirrorValidator {
    fn check(&self, batch: &[Question]) -> Vec<Violation> {
        batch.iter().flat_map(Self::check_question).collect()
    }

    fn name(&self) -> &'static str {
        "bilingual-mirror"
    }
}

//! Universal per-question quality checks
//!
//! These apply to every question regardless of protocol or form: no empty
//! fields, the option-key set must match the labeling convention, and the
//! answer key must name a real option.

use mcq_qa_core::{OptionLabeling, Question, Violation, ViolationKind};
use std::collections::BTreeSet;

/// Flag empty stem, explanation, and option texts
#[must_use]
pub fn empty_fields(question: &Question) -> Vec<Violation> {
    let mut violations = Vec::new();
    let n = question.number;

    if question.text.trim().is_empty() {
        violations.push(Violation::for_question(
            ViolationKind::EmptyField,
            n,
            "question text is empty",
        ));
    }
    if question.explanation.trim().is_empty() {
        violations.push(Violation::for_question(
            ViolationKind::EmptyField,
            n,
            "explanation is empty",
        ));
    }
    for (key, text) in &question.options {
        if text.trim().is_empty() {
            violations.push(Violation::for_question(
                ViolationKind::EmptyField,
                n,
                format!("option '{key}' is empty"),
            ));
        }
    }
    violations
}

/// Flag key-set mismatches and out-of-set answer keys
#[must_use]
pub fn option_shape(question: &Question, labeling: OptionLabeling) -> Vec<Violation> {
    let mut violations = Vec::new();
    let n = question.number;

    let expected: BTreeSet<&str> = labeling.keys().into_iter().collect();
    let actual: BTreeSet<&str> = question.options.keys().map(String::as_str).collect();
    if actual != expected {
        let actual_keys: Vec<&str> = actual.iter().copied().collect();
        violations.push(Violation::for_question(
            ViolationKind::OptionKeyShape,
            n,
            format!(
                "option keys [{}] do not match the {labeling} convention",
                actual_keys.join(", ")
            ),
        ));
    }

    if !question.options.contains_key(&question.answer) {
        violations.push(Violation::for_question(
            ViolationKind::InvalidAnswerKey,
            n,
            format!("answer key '{}' is not an option", question.answer),
        ));
    }

    violations
}

/// All universal quality checks for one question
#[must_use]
pub fn basic_quality(question: &Question, labeling: OptionLabeling) -> Vec<Violation> {
    let mut violations = empty_fields(question);
    violations.extend(option_shape(question, labeling));
    violations
}

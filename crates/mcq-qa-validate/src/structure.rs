//! Per-form structural scaffold checks
//!
//! Only two forms carry bespoke scaffolds: match-the-following needs its
//! two-column layout and coded answers, assertion-reason needs its labeled
//! statement pair. The remaining forms are covered by the generic quality
//! checks alone. Every missing element is reported separately so one
//! malformed question can yield several findings.

use mcq_qa_core::{Question, StructuralForm, Violation, ViolationKind};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static COLUMN_I_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(column|list)\s*[-–]?\s*I\b").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

static COLUMN_II_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(column|list)\s*[-–]?\s*II\b")
        .unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

/// Left-column item markers: "A.", "B)", etc. at line start
static LEFT_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*\(?([A-D])[.)]").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

/// Right-column roman-numeral markers I through IV
static ROMAN_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(IV|III|II|I)\b").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

/// Coded answer pair of the shape "A-III"
static CODED_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-D])\s*[-–]\s*(?:IV|III|II|I)\b")
        .unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

/// Matching instruction phrasings, lowercase
const MATCH_INSTRUCTION_PHRASES: &[&str] = &[
    "codes given below",
    "correctly matched",
    "correct match",
    "match the following",
];

/// Assertion-reason answer-selection instructions, lowercase
const AR_INSTRUCTION_PHRASES: &[&str] = &[
    "select the correct",
    "choose the correct",
    "in the light of the above",
];

/// Run the scaffold checks appropriate to the question's form
#[must_use]
pub fn validate_structure(question: &Question) -> Vec<Violation> {
    match question.form {
        StructuralForm::MatchTheFollowing => check_match_the_following(question),
        StructuralForm::AssertionReason => check_assertion_reason(question),
        // No bespoke scaffold; generic quality checks apply
        _ => Vec::new(),
    }
}

fn scaffold(question: &Question, detail: impl Into<String>) -> Violation {
    Violation::for_question(ViolationKind::MissingScaffold, question.number, detail)
}

fn check_match_the_following(question: &Question) -> Vec<Violation> {
    let mut violations = Vec::new();
    let text = &question.text;

    if !(COLUMN_I_RE.is_match(text) && COLUMN_II_RE.is_match(text)) {
        violations.push(scaffold(
            question,
            "matching question lacks Column I / Column II headers",
        ));
    }

    let lowered = text.to_lowercase();
    if !MATCH_INSTRUCTION_PHRASES.iter().any(|p| lowered.contains(p)) {
        violations.push(scaffold(
            question,
            "matching question lacks an instruction phrase (e.g. 'using the codes given below')",
        ));
    }

    let left: BTreeSet<&str> = LEFT_MARKER_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();
    if left.len() < 4 {
        violations.push(scaffold(
            question,
            format!(
                "matching question has {} of 4 left-column markers (A. through D.)",
                left.len()
            ),
        ));
    }

    let romans: BTreeSet<&str> = ROMAN_MARKER_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();
    if romans.len() < 4 {
        violations.push(scaffold(
            question,
            format!(
                "matching question has {} of 4 roman-numeral right-column markers (I through IV)",
                romans.len()
            ),
        ));
    }

    // Coded answers usually live in the options, not the stem
    let mut coded_haystack = text.clone();
    for option in question.option_texts() {
        coded_haystack.push('\n');
        coded_haystack.push_str(option);
    }
    let coded_letters: BTreeSet<&str> = CODED_PAIR_RE
        .captures_iter(&coded_haystack)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();
    if coded_letters.len() < 4 {
        violations.push(scaffold(
            question,
            "matching question lacks coded letter-to-roman answers covering A through D",
        ));
    }

    violations
}

fn check_assertion_reason(question: &Question) -> Vec<Violation> {
    let mut violations = Vec::new();
    let lowered = question.text.to_lowercase();

    if !lowered.contains("assertion") {
        violations.push(scaffold(question, "assertion-reason question lacks an Assertion label"));
    }
    if !lowered.contains("reason") {
        violations.push(scaffold(question, "assertion-reason question lacks a Reason label"));
    }
    if !AR_INSTRUCTION_PHRASES.iter().any(|p| lowered.contains(p)) {
        violations.push(scaffold(
            question,
            "assertion-reason question lacks an answer-selection instruction",
        ));
    }
    let references_explanation = question
        .option_texts()
        .any(|t| t.to_lowercase().contains("explanation") || t.to_lowercase().contains("explains"));
    if !references_explanation {
        violations.push(scaffold(
            question,
            "assertion-reason options do not express the explanation relationship",
        ));
    }

    violations
}

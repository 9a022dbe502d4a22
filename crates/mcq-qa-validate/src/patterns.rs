//! Prohibited-pattern detection
//!
//! Data-driven tables of forbidden phrasings, matched case-insensitively
//! against question stems and options in both English and Hindi. Each table
//! entry carries the needle and the message that fires when it matches, so
//! adding a new prohibition is a one-line change.

use mcq_qa_core::{Question, Violation, ViolationKind};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// One forbidden needle and the message it produces
struct TextPattern {
    needle: &'static str,
    message: &'static str,
}

/// Stem phrasings that leak generation context or cite source material.
///
/// Hindi needles are matched as-is; `to_lowercase` leaves Devanagari
/// untouched.
const META_REFERENCE_PATTERNS: &[TextPattern] = &[
    TextPattern {
        needle: "according to the passage",
        message: "stem cites a passage the candidate cannot see",
    },
    TextPattern {
        needle: "according to the text",
        message: "stem cites source text the candidate cannot see",
    },
    TextPattern {
        needle: "as mentioned above",
        message: "stem refers to material above the question",
    },
    TextPattern {
        needle: "as mentioned in the",
        message: "stem refers to external source material",
    },
    TextPattern {
        needle: "refer to the",
        message: "stem directs the candidate to external material",
    },
    TextPattern {
        needle: "as discussed in",
        message: "stem refers to a prior discussion",
    },
    TextPattern {
        needle: "as stated in the",
        message: "stem cites an external statement",
    },
    TextPattern {
        needle: "from the chapter",
        message: "stem cites a chapter reference",
    },
    TextPattern {
        needle: "गद्यांश के अनुसार",
        message: "stem cites a passage the candidate cannot see (Hindi)",
    },
    TextPattern {
        needle: "उपरोक्त गद्यांश",
        message: "stem refers to a passage above the question (Hindi)",
    },
    TextPattern {
        needle: "स्रोत के अनुसार",
        message: "stem cites an external source (Hindi)",
    },
];

/// Double negatives in either language read as trick phrasing
const DOUBLE_NEGATIVE_PATTERNS: &[TextPattern] = &[
    TextPattern {
        needle: "not incorrect",
        message: "stem uses the double negative 'not incorrect'",
    },
    TextPattern {
        needle: "not untrue",
        message: "stem uses the double negative 'not untrue'",
    },
    TextPattern {
        needle: "not impossible",
        message: "stem uses the double negative 'not impossible'",
    },
    TextPattern {
        needle: "not unrelated",
        message: "stem uses the double negative 'not unrelated'",
    },
    TextPattern {
        needle: "गलत नहीं",
        message: "stem uses a double negative (Hindi)",
    },
];

/// Catch-all option texts, in both languages
const CATCH_ALL_PATTERNS: &[&str] = &[
    "none of the above",
    "all of the above",
    "none of these",
    "all of these",
    "उपरोक्त में से कोई नहीं",
    "उपरोक्त सभी",
    "इनमें से कोई नहीं",
    "ये सभी",
];

/// Absolute Hindi quantifiers; no word-boundary regex needed for Devanagari
const HINDI_ABSOLUTE_PATTERNS: &[&str] = &["हमेशा", "कभी नहीं"];

/// English absolutes need word boundaries ("never" must not fire inside
/// "nevertheless")
static ABSOLUTE_QUANTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(always|never)\b").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

/// Editorial note markers in either script; the boundary keeps "footnote:"
/// and "denote:" from firing
static NOTE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(note|नोट):").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

/// "Both <X> and <Y>" option openings
static PAIRED_OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*both\b.+\band\b").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

/// Longest option may not exceed this multiple of the shortest
const MAX_OPTION_LENGTH_RATIO: usize = 3;

/// Scan one stem for meta-references to source material
///
/// Each matching table entry yields one violation; the caller attributes
/// them to a question ordinal.
#[must_use]
pub fn detect_meta_references(text: &str) -> Vec<Violation> {
    let haystack = text.to_lowercase();
    let mut violations: Vec<Violation> = META_REFERENCE_PATTERNS
        .iter()
        .filter(|p| haystack.contains(p.needle))
        .map(|p| Violation::batch(ViolationKind::MetaReference, p.message))
        .collect();
    if NOTE_MARKER_RE.is_match(text) {
        violations.push(Violation::batch(
            ViolationKind::MetaReference,
            "stem carries an editorial note marker",
        ));
    }
    violations
}

/// Run every per-question prohibition against one question
#[must_use]
pub fn validate_prohibited_patterns(question: &Question) -> Vec<Violation> {
    let mut violations = Vec::new();
    let n = question.number;

    for v in detect_meta_references(&question.text) {
        violations.push(Violation::for_question(v.kind, n, v.detail));
    }
    violations.extend(check_absolute_quantifiers(question));
    violations.extend(check_double_negatives(question));
    violations.extend(check_catch_all_options(question));
    violations.extend(check_paired_options(question));
    violations.extend(check_option_length_ratio(question));
    violations.extend(check_duplicate_options(question));
    violations
}

/// One violation per distinct absolute quantifier found in the stem
fn check_absolute_quantifiers(question: &Question) -> Vec<Violation> {
    let mut terms: BTreeSet<String> = ABSOLUTE_QUANTIFIER_RE
        .find_iter(&question.text)
        .map(|m| m.as_str().to_lowercase())
        .collect();
    for needle in HINDI_ABSOLUTE_PATTERNS {
        if question.text.contains(needle) {
            terms.insert((*needle).to_string());
        }
    }
    terms
        .into_iter()
        .map(|term| {
            Violation::for_question(
                ViolationKind::AbsoluteQuantifier,
                question.number,
                format!("stem uses the absolute quantifier '{term}'"),
            )
        })
        .collect()
}

fn check_double_negatives(question: &Question) -> Vec<Violation> {
    let haystack = question.text.to_lowercase();
    DOUBLE_NEGATIVE_PATTERNS
        .iter()
        .filter(|p| haystack.contains(p.needle))
        .map(|p| Violation::for_question(ViolationKind::DoubleNegative, question.number, p.message))
        .collect()
}

/// At most one violation per question, however many options match
fn check_catch_all_options(question: &Question) -> Vec<Violation> {
    let hit = question.option_texts().any(|text| {
        let lowered = text.to_lowercase();
        CATCH_ALL_PATTERNS.iter().any(|p| lowered.contains(p))
    });
    if hit {
        vec![Violation::for_question(
            ViolationKind::CatchAllOption,
            question.number,
            "options include a 'None/All of the above' catch-all",
        )]
    } else {
        Vec::new()
    }
}

/// "Both X and Y" options are only legitimate in forms that pair statements
fn check_paired_options(question: &Question) -> Vec<Violation> {
    if question.form.expects_paired_statements() {
        return Vec::new();
    }
    question
        .options
        .iter()
        .filter(|(_, text)| PAIRED_OPTION_RE.is_match(text))
        .map(|(key, _)| {
            Violation::for_question(
                ViolationKind::PairedOption,
                question.number,
                format!("option '{key}' is a 'Both ... and ...' composite in a single-answer form"),
            )
        })
        .collect()
}

/// Compare option lengths in characters, not bytes; Devanagari text is
/// multi-byte throughout. Skipped when any option is empty (that is an
/// empty-field finding, not an imbalance).
fn check_option_length_ratio(question: &Question) -> Vec<Violation> {
    let lengths: Vec<usize> = question
        .option_texts()
        .map(|t| t.chars().count())
        .collect();
    if lengths.is_empty() || lengths.contains(&0) {
        return Vec::new();
    }
    let shortest = lengths.iter().copied().min().unwrap_or(0);
    let longest = lengths.iter().copied().max().unwrap_or(0);
    if longest > MAX_OPTION_LENGTH_RATIO * shortest {
        vec![Violation::for_question(
            ViolationKind::OptionLengthImbalance,
            question.number,
            format!(
                "option lengths are lopsided (longest {longest} chars, shortest {shortest} chars)"
            ),
        )]
    } else {
        Vec::new()
    }
}

fn check_duplicate_options(question: &Question) -> Vec<Violation> {
    let distinct: BTreeSet<&str> = question.option_texts().collect();
    if distinct.len() < question.options.len() {
        vec![Violation::for_question(
            ViolationKind::DuplicateOption,
            question.number,
            "two or more options share the same text",
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcq_qa_core::{CognitiveLoad, StructuralForm};
    use std::collections::BTreeMap;

    fn options(texts: [&str; 4]) -> BTreeMap<String, String> {
        ["1", "2", "3", "4"]
            .iter()
            .zip(texts)
            .map(|(k, v)| ((*k).to_string(), v.to_string()))
            .collect()
    }

    fn question(text: &str, opts: [&str; 4]) -> Question {
        Question::new(
            5,
            text,
            "singleFactRecall",
            StructuralForm::Standard4OptionMcq,
            CognitiveLoad::Medium,
            "1",
            options(opts),
            "Because of reasons explained in standard references.",
        )
    }

    fn clean() -> Question {
        question(
            "Which river flows through the city of Varanasi?",
            ["Ganga", "Yamuna", "Godavari", "Narmada"],
        )
    }

    #[test]
    fn test_clean_question_passes() {
        assert!(validate_prohibited_patterns(&clean()).is_empty());
    }

    #[test]
    fn test_meta_reference_english() {
        let found = detect_meta_references("According to the passage, which river is longest?");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::MetaReference);
    }

    #[test]
    fn test_meta_reference_hindi() {
        let found = detect_meta_references("गद्यांश के अनुसार सबसे लंबी नदी कौन सी है?");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_meta_reference_note_marker() {
        assert_eq!(detect_meta_references("Note: consider only rivers.").len(), 1);
        assert_eq!(detect_meta_references("नोट: केवल नदियों पर विचार करें।").len(), 1);
    }

    #[test]
    fn test_note_marker_requires_word_boundary() {
        // "note" embedded in a longer word is not an editorial marker
        assert!(detect_meta_references("See footnote: page 12 of the atlas.").is_empty());
        assert!(detect_meta_references("Let x denote: the angle of incidence.").is_empty());
    }

    #[test]
    fn test_meta_reference_attributed_to_question() {
        let q = question(
            "As mentioned above, which option is correct?",
            ["a", "b", "c", "d"],
        );
        let found = validate_prohibited_patterns(&q);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question, Some(5));
    }

    #[test]
    fn test_absolute_quantifier_always() {
        let q = question(
            "Which gas is always present in exhaled air?",
            ["Oxygen", "Helium", "Argon", "Neon"],
        );
        let found = validate_prohibited_patterns(&q);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::AbsoluteQuantifier);
        assert!(found[0].detail.contains("always"));
    }

    #[test]
    fn test_absolute_quantifier_word_boundary() {
        let q = question(
            "Nevertheless, which treaty ended the war?",
            ["Treaty A", "Treaty B", "Treaty C", "Treaty D"],
        );
        assert!(validate_prohibited_patterns(&q).is_empty());
    }

    #[test]
    fn test_absolute_quantifier_hindi() {
        let q = question(
            "कौन सी धातु हमेशा तरल अवस्था में रहती है?",
            ["पारा", "सोना", "चांदी", "तांबा"],
        );
        let found = validate_prohibited_patterns(&q);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::AbsoluteQuantifier);
    }

    #[test]
    fn test_double_negative() {
        let q = question(
            "Which statement is not incorrect about monsoons?",
            ["First", "Second", "Third", "Fourth"],
        );
        let found = validate_prohibited_patterns(&q);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::DoubleNegative);
    }

    #[test]
    fn test_catch_all_single_violation_even_with_two_hits() {
        let q = question(
            "Which of these is a noble gas?",
            ["Argon", "None of the above", "All of the above", "Xenon"],
        );
        let found = validate_prohibited_patterns(&q);
        let catch_alls: Vec<_> = found
            .iter()
            .filter(|v| v.kind == ViolationKind::CatchAllOption)
            .collect();
        assert_eq!(catch_alls.len(), 1);
    }

    #[test]
    fn test_catch_all_hindi() {
        let q = question(
            "इनमें से कौन सी नोबल गैस है?",
            ["आर्गन", "हीलियम", "नाइट्रोजन", "उपरोक्त में से कोई नहीं"],
        );
        let found = validate_prohibited_patterns(&q);
        assert!(found.iter().any(|v| v.kind == ViolationKind::CatchAllOption));
    }

    #[test]
    fn test_paired_option_in_standard_form() {
        let q = question(
            "Which factor drives the monsoon?",
            [
                "Pressure gradient",
                "Both pressure and rotation",
                "Rotation of the earth",
                "Albedo changes",
            ],
        );
        let found = validate_prohibited_patterns(&q);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::PairedOption);
        assert!(found[0].detail.contains("'2'"));
    }

    #[test]
    fn test_paired_option_exempt_for_assertion_reason() {
        let mut q = question(
            "Assertion (A): Water boils at 100C. Reason (R): Pressure is standard. Select the correct option.",
            [
                "Both A and R are true and R explains A",
                "Both A and R are true but R does not explain A",
                "A is true but R is false",
                "A is false but R is true",
            ],
        );
        q.form = StructuralForm::AssertionReason;
        let found = validate_prohibited_patterns(&q);
        assert!(!found.iter().any(|v| v.kind == ViolationKind::PairedOption));
    }

    #[test]
    fn test_option_length_imbalance() {
        let q = question(
            "Which statement about photosynthesis is correct?",
            [
                "It occurs only in the chloroplasts of green plant cells during daylight hours",
                "It stops",
                "It reverses",
                "It slows",
            ],
        );
        let found = validate_prohibited_patterns(&q);
        assert!(found
            .iter()
            .any(|v| v.kind == ViolationKind::OptionLengthImbalance));
    }

    #[test]
    fn test_option_length_measured_in_chars_not_bytes() {
        // Devanagari options of similar character length must not trip the
        // ratio just because of multi-byte encoding
        let q = question(
            "भारत की राजधानी कौन सी है?",
            ["नई दिल्ली", "मुंबई", "कोलकाता", "चेन्नई"],
        );
        let found = validate_prohibited_patterns(&q);
        assert!(!found
            .iter()
            .any(|v| v.kind == ViolationKind::OptionLengthImbalance));
    }

    #[test]
    fn test_option_length_skipped_when_option_empty() {
        let q = question(
            "Which river is longest?",
            ["", "Ganga with many tributaries flowing east", "Yamuna", "Kaveri"],
        );
        let found = validate_prohibited_patterns(&q);
        assert!(!found
            .iter()
            .any(|v| v.kind == ViolationKind::OptionLengthImbalance));
    }

    #[test]
    fn test_duplicate_options() {
        let q = question(
            "Which planet is largest?",
            ["Jupiter", "Saturn", "Jupiter", "Mars"],
        );
        let found = validate_prohibited_patterns(&q);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::DuplicateOption);
    }

    #[test]
    fn test_multiple_prohibitions_all_reported() {
        let q = question(
            "According to the passage, which metal is always liquid?",
            ["Mercury", "None of the above", "Gold", "Gold"],
        );
        let found = validate_prohibited_patterns(&q);
        let has = |kind| found.iter().any(|v| v.kind == kind);
        assert!(has(ViolationKind::MetaReference));
        assert!(has(ViolationKind::AbsoluteQuantifier));
        assert!(has(ViolationKind::CatchAllOption));
        assert!(has(ViolationKind::DuplicateOption));
    }
}

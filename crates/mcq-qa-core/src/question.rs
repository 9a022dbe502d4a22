//! Question data model
//!
//! A `Question` is one generated MCQ item. The validation engine consumes
//! questions read-only; nothing in this crate mutates a question after
//! generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option labeling convention declared by a protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionLabeling {
    /// Keys "1".."4"
    Numeric,
    /// Keys "A".."D"
    Alphabetic,
}

impl OptionLabeling {
    /// Get the expected 4-key set, in display order
    #[must_use]
    pub const fn keys(&self) -> [&'static str; 4] {
        match self {
            Self::Numeric => ["1", "2", "3", "4"],
            Self::Alphabetic => ["A", "B", "C", "D"],
        }
    }

    /// Check whether a single answer key belongs to this convention
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys().contains(&key)
    }
}

impl std::fmt::Display for OptionLabeling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Alphabetic => write!(f, "alphabetic"),
        }
    }
}

/// Coarse cognitive density tag, independent of archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CognitiveLoad {
    /// Warm-up level
    Low,
    /// Typical level
    Medium,
    /// Dense multi-step level
    High,
}

impl CognitiveLoad {
    /// Get all load levels
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    /// Get the wire tag for this load level
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for CognitiveLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Presentational/answer-mechanics shape of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructuralForm {
    /// Plain 4-option single-answer MCQ
    #[serde(rename = "standard4OptionMCQ")]
    Standard4OptionMcq,
    /// "Which of the following statements are correct" with coded options
    #[serde(rename = "multipleSelectQuestions")]
    MultipleSelect,
    /// Two columns plus coded letter-to-roman answers
    #[serde(rename = "matchTheFollowing")]
    MatchTheFollowing,
    /// Chronological/sequential ordering with coded options
    #[serde(rename = "arrangeInOrder")]
    ArrangeInOrder,
    /// Assertion (A) / Reason (R) with explanation-style options
    #[serde(rename = "assertionReason")]
    AssertionReason,
}

impl StructuralForm {
    /// Get all structural forms
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Standard4OptionMcq,
            Self::MultipleSelect,
            Self::MatchTheFollowing,
            Self::ArrangeInOrder,
            Self::AssertionReason,
        ]
    }

    /// Get the wire tag for this form
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Standard4OptionMcq => "standard4OptionMCQ",
            Self::MultipleSelect => "multipleSelectQuestions",
            Self::MatchTheFollowing => "matchTheFollowing",
            Self::ArrangeInOrder => "arrangeInOrder",
            Self::AssertionReason => "assertionReason",
        }
    }

    /// Whether options of this form legitimately pair statements
    /// ("Both A and R", "Both 1 and 2"), exempting them from the
    /// paired-option prohibition.
    #[must_use]
    pub const fn expects_paired_statements(&self) -> bool {
        matches!(self, Self::AssertionReason | Self::MultipleSelect)
    }
}

impl std::fmt::Display for StructuralForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One generated MCQ item
///
/// Option keys are either "1".."4" or "A".."D" depending on the protocol's
/// labeling convention. A `BTreeMap` keeps them in key order, so identical
/// questions always serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Ordinal position within the batch (1-based)
    pub number: u32,
    /// Question stem
    pub text: String,
    /// Cognitive-pattern label (e.g. "singleFactRecall")
    pub archetype: String,
    /// Structural form tag
    pub form: StructuralForm,
    /// Cognitive load tag
    pub load: CognitiveLoad,
    /// Correct-answer key; must be a member of the option-key set
    pub answer: String,
    /// Option key to option text; exactly 4 entries when well-formed
    pub options: BTreeMap<String, String>,
    /// Explanation shown after answering
    pub explanation: String,
    /// Optional free-form difficulty tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// English twin of the stem, for bilingual protocols
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_en: Option<String>,
    /// English twins of the options, for bilingual protocols
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_en: Option<BTreeMap<String, String>>,
    /// English twin of the explanation, for bilingual protocols
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation_en: Option<String>,
}

impl Question {
    /// Create a new question
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        number: u32,
        text: impl Into<String>,
        archetype: impl Into<String>,
        form: StructuralForm,
        load: CognitiveLoad,
        answer: impl Into<String>,
        options: BTreeMap<String, String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            number,
            text: text.into(),
            archetype: archetype.into(),
            form,
            load,
            answer: answer.into(),
            options,
            explanation: explanation.into(),
            difficulty: None,
            text_en: None,
            options_en: None,
            explanation_en: None,
        }
    }

    /// Set the difficulty tag
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Set the English mirror of the stem
    #[must_use]
    pub fn with_text_en(mut self, text_en: impl Into<String>) -> Self {
        self.text_en = Some(text_en.into());
        self
    }

    /// Set the English mirrors of the options
    #[must_use]
    pub fn with_options_en(mut self, options_en: BTreeMap<String, String>) -> Self {
        self.options_en = Some(options_en);
        self
    }

    /// Set the English mirror of the explanation
    #[must_use]
    pub fn with_explanation_en(mut self, explanation_en: impl Into<String>) -> Self {
        self.explanation_en = Some(explanation_en.into());
        self
    }

    /// Iterate option texts in key order
    pub fn option_texts(&self) -> impl Iterator<Item = &str> {
        self.options.values().map(String::as_str)
    }

    /// Whether this question carries any English mirror field
    #[must_use]
    pub fn is_bilingual(&self) -> bool {
        self.text_en.is_some() || self.options_en.is_some() || self.explanation_en.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn sample() -> Question {
        Question::new(
            1,
            "Which planet is known as the Red Planet?",
            "singleFactRecall",
            StructuralForm::Standard4OptionMcq,
            CognitiveLoad::Low,
            "2",
            options(&[("1", "Venus"), ("2", "Mars"), ("3", "Jupiter"), ("4", "Saturn")]),
            "Mars appears red due to iron oxide on its surface.",
        )
    }

    #[test]
    fn test_labeling_keys() {
        assert_eq!(OptionLabeling::Numeric.keys(), ["1", "2", "3", "4"]);
        assert_eq!(OptionLabeling::Alphabetic.keys(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_labeling_contains() {
        assert!(OptionLabeling::Numeric.contains("3"));
        assert!(!OptionLabeling::Numeric.contains("A"));
        assert!(OptionLabeling::Alphabetic.contains("D"));
        assert!(!OptionLabeling::Alphabetic.contains("4"));
    }

    #[test]
    fn test_load_all() {
        let all = CognitiveLoad::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&CognitiveLoad::Low));
        assert!(all.contains(&CognitiveLoad::High));
    }

    #[test]
    fn test_load_display() {
        assert_eq!(format!("{}", CognitiveLoad::Low), "low");
        assert_eq!(format!("{}", CognitiveLoad::Medium), "medium");
        assert_eq!(format!("{}", CognitiveLoad::High), "high");
    }

    #[test]
    fn test_form_all() {
        assert_eq!(StructuralForm::all().len(), 5);
    }

    #[test]
    fn test_form_tags() {
        assert_eq!(
            StructuralForm::Standard4OptionMcq.tag(),
            "standard4OptionMCQ"
        );
        assert_eq!(
            StructuralForm::MultipleSelect.tag(),
            "multipleSelectQuestions"
        );
        assert_eq!(StructuralForm::MatchTheFollowing.tag(), "matchTheFollowing");
        assert_eq!(StructuralForm::ArrangeInOrder.tag(), "arrangeInOrder");
        assert_eq!(StructuralForm::AssertionReason.tag(), "assertionReason");
    }

    #[test]
    fn test_form_paired_statements() {
        assert!(StructuralForm::AssertionReason.expects_paired_statements());
        assert!(StructuralForm::MultipleSelect.expects_paired_statements());
        assert!(!StructuralForm::Standard4OptionMcq.expects_paired_statements());
        assert!(!StructuralForm::MatchTheFollowing.expects_paired_statements());
        assert!(!StructuralForm::ArrangeInOrder.expects_paired_statements());
    }

    #[test]
    fn test_question_builders() {
        let q = sample()
            .with_difficulty("easy")
            .with_text_en("Which planet is known as the Red Planet?")
            .with_explanation_en("Mars appears red due to iron oxide.");
        assert_eq!(q.difficulty.as_deref(), Some("easy"));
        assert!(q.is_bilingual());
    }

    #[test]
    fn test_question_not_bilingual_by_default() {
        assert!(!sample().is_bilingual());
    }

    #[test]
    fn test_option_texts_key_order() {
        let q = sample();
        let texts: Vec<&str> = q.option_texts().collect();
        assert_eq!(texts, vec!["Venus", "Mars", "Jupiter", "Saturn"]);
    }

    #[test]
    fn test_question_serde_round_trip() {
        let q = sample().with_difficulty("easy");
        let json = serde_json::to_string(&q).expect("serialize");
        assert!(json.contains("\"form\":\"standard4OptionMCQ\""));
        assert!(json.contains("\"load\":\"low\""));
        let back: Question = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, q);
    }

    #[test]
    fn test_question_serde_skips_absent_mirrors() {
        let json = serde_json::to_string(&sample()).expect("serialize");
        assert!(!json.contains("text_en"));
        assert!(!json.contains("options_en"));
    }

    #[test]
    fn test_form_serde_tags() {
        let json = serde_json::to_string(&StructuralForm::AssertionReason).expect("serialize");
        assert_eq!(json, "\"assertionReason\"");
        let back: StructuralForm =
            serde_json::from_str("\"matchTheFollowing\"").expect("deserialize");
        assert_eq!(back, StructuralForm::MatchTheFollowing);
    }
}

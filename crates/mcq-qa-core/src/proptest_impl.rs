//! Proptest strategies for the core types
//!
//! Used by property tests across the workspace to fuzz questions, batches,
//! and fraction maps.

use crate::protocol::{DifficultyTier, FractionMap};
use crate::question::{CognitiveLoad, OptionLabeling, Question, StructuralForm};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Strategy for generating archetype tags
pub fn archetype_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "singleFactRecall",
        "definitionRecognition",
        "conceptApplication",
        "multiStepCalculation",
        "dataInterpretation",
        "eliminationReasoning",
    ])
    .prop_map(str::to_string)
}

/// Strategy for generating cognitive loads
pub fn cognitive_load_strategy() -> impl Strategy<Value = CognitiveLoad> {
    prop_oneof![
        Just(CognitiveLoad::Low),
        Just(CognitiveLoad::Medium),
        Just(CognitiveLoad::High),
    ]
}

/// Strategy for generating structural forms
pub fn structural_form_strategy() -> impl Strategy<Value = StructuralForm> {
    prop_oneof![
        Just(StructuralForm::Standard4OptionMcq),
        Just(StructuralForm::MultipleSelect),
        Just(StructuralForm::MatchTheFollowing),
        Just(StructuralForm::ArrangeInOrder),
        Just(StructuralForm::AssertionReason),
    ]
}

/// Strategy for generating difficulty tiers
pub fn difficulty_tier_strategy() -> impl Strategy<Value = DifficultyTier> {
    prop_oneof![
        Just(DifficultyTier::Easy),
        Just(DifficultyTier::Balanced),
        Just(DifficultyTier::Hard),
    ]
}

/// Strategy for generating a well-formed question under a labeling convention
pub fn question_strategy(labeling: OptionLabeling) -> impl Strategy<Value = Question> {
    (
        1u32..=200,
        "[a-z][a-z ]{15,60}\\?",
        archetype_strategy(),
        cognitive_load_strategy(),
        0usize..4,
        prop::collection::vec("[a-z]{5,12}", 4),
        "[a-z][a-z ]{10,40}\\.",
    )
        .prop_map(
            move |(number, text, archetype, load, answer_idx, texts, explanation)| {
                let keys = labeling.keys();
                let options: BTreeMap<String, String> = keys
                    .iter()
                    .zip(texts)
                    .map(|(k, v)| ((*k).to_string(), v))
                    .collect();
                Question::new(
                    number,
                    text,
                    archetype,
                    StructuralForm::Standard4OptionMcq,
                    load,
                    keys[answer_idx],
                    options,
                    explanation,
                )
            },
        )
}

/// Strategy for generating an ordered batch with sequential ordinals
pub fn batch_strategy(
    labeling: OptionLabeling,
    size: std::ops::Range<usize>,
) -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec(question_strategy(labeling), size).prop_map(|mut batch| {
        for (i, q) in batch.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            {
                q.number = (i + 1) as u32;
            }
        }
        batch
    })
}

/// Strategy for generating a fraction map whose values sum to exactly 1.0
pub fn fraction_map_strategy() -> impl Strategy<Value = FractionMap> {
    prop::collection::vec(1u32..=10, 2..5).prop_map(|weights| {
        let total: u32 = weights.iter().sum();
        let pairs: Vec<(String, f64)> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("archetype{i}"), f64::from(*w) / f64::from(total)))
            .collect();
        let refs: Vec<(&str, f64)> = pairs.iter().map(|(n, f)| (n.as_str(), *f)).collect();
        FractionMap::from_pairs(&refs)
    })
}

//! Built-in protocol registry
//!
//! Three shipped protocols cover the exam sections currently generated:
//! SSC GD general knowledge (bilingual Hindi with numeric keys), NEET
//! physics (alphabetic keys, assertion-reason heavy), and UPSC prelims
//! general studies (alphabetic keys, matching heavy). Each is built
//! through the [`Protocol`] builder, so a bad definition fails at load
//! time rather than mid-validation.

use crate::error::Result;
use crate::validators::{
    BilingualMirrorValidator, OptionShapeValidator, ProhibitedPatternValidator, StructureValidator,
};
use mcq_qa_core::{
    DifficultyTier, Error, FractionMap, OptionLabeling, Protocol, SequencingRules, TierMix,
};

/// Build every shipped protocol
///
/// # Errors
///
/// Returns an error if any shipped definition fails its build-time checks.
pub fn all_protocols() -> Result<Vec<Protocol>> {
    Ok(vec![
        ssc_gd_gk_hindi()?,
        neet_physics()?,
        upsc_prelims_gs()?,
    ])
}

/// Look up one shipped protocol by id
///
/// # Errors
///
/// Returns [`Error::ProtocolNotFound`] for an unknown id.
pub fn find_protocol(id: &str) -> Result<Protocol> {
    all_protocols()?
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| Error::ProtocolNotFound(id.to_string()).into())
}

/// Ids of every shipped protocol
#[must_use]
pub fn protocol_ids() -> Vec<&'static str> {
    vec!["ssc-gd-gk-hindi", "neet-physics", "upsc-prelims-gs"]
}

fn ssc_gd_gk_hindi() -> Result<Protocol> {
    let easy = TierMix::new(
        FractionMap::from_pairs(&[
            ("singleFactRecall", 0.50),
            ("definitionRecognition", 0.25),
            ("conceptApplication", 0.15),
            ("eliminationReasoning", 0.10),
        ]),
        FractionMap::from_pairs(&[
            ("standard4OptionMCQ", 0.90),
            ("multipleSelectQuestions", 0.10),
        ]),
        FractionMap::from_pairs(&[("low", 0.50), ("medium", 0.40), ("high", 0.10)]),
    );
    let balanced = TierMix::new(
        FractionMap::from_pairs(&[
            ("singleFactRecall", 0.35),
            ("definitionRecognition", 0.25),
            ("conceptApplication", 0.25),
            ("eliminationReasoning", 0.15),
        ]),
        FractionMap::from_pairs(&[
            ("standard4OptionMCQ", 0.80),
            ("multipleSelectQuestions", 0.10),
            ("matchTheFollowing", 0.10),
        ]),
        FractionMap::from_pairs(&[("low", 0.30), ("medium", 0.50), ("high", 0.20)]),
    );
    let hard = TierMix::new(
        FractionMap::from_pairs(&[
            ("singleFactRecall", 0.20),
            ("definitionRecognition", 0.20),
            ("conceptApplication", 0.40),
            ("eliminationReasoning", 0.20),
        ]),
        FractionMap::from_pairs(&[
            ("standard4OptionMCQ", 0.70),
            ("multipleSelectQuestions", 0.15),
            ("matchTheFollowing", 0.15),
        ]),
        FractionMap::from_pairs(&[("low", 0.20), ("medium", 0.45), ("high", 0.35)]),
    );

    Ok(Protocol::builder("ssc-gd-gk-hindi", "SSC GD General Knowledge (Hindi)")
        .stream("ssc")
        .subject("general-knowledge")
        .labeling(OptionLabeling::Numeric)
        .prohibition("no passage citations; questions are delivered standalone")
        .prohibition("every field carries an English mirror for review")
        .sequencing(SequencingRules::default())
        .metadata("modeled on SSC GD constable GK sections 2022-2024")
        .tier_mix(DifficultyTier::Easy, easy)
        .tier_mix(DifficultyTier::Balanced, balanced)
        .tier_mix(DifficultyTier::Hard, hard)
        .validator(Box::new(ProhibitedPatternValidator))
        .validator(Box::new(StructureValidator))
        .validator(Box::new(OptionShapeValidator::new(OptionLabeling::Numeric)))
        .validator(Box::new(BilingualMirrorValidator))
        .build()?)
}

fn neet_physics() -> Result<Protocol> {
    let easy = TierMix::new(
        FractionMap::from_pairs(&[
            ("singleFactRecall", 0.30),
            ("definitionRecognition", 0.20),
            ("conceptApplication", 0.30),
            ("multiStepCalculation", 0.20),
        ]),
        FractionMap::from_pairs(&[
            ("standard4OptionMCQ", 0.85),
            ("assertionReason", 0.15),
        ]),
        FractionMap::from_pairs(&[("low", 0.45), ("medium", 0.40), ("high", 0.15)]),
    );
    let balanced = TierMix::new(
        FractionMap::from_pairs(&[
            ("singleFactRecall", 0.20),
            ("definitionRecognition", 0.15),
            ("conceptApplication", 0.35),
            ("multiStepCalculation", 0.30),
        ]),
        FractionMap::from_pairs(&[
            ("standard4OptionMCQ", 0.70),
            ("assertionReason", 0.15),
            ("matchTheFollowing", 0.15),
        ]),
        FractionMap::from_pairs(&[("low", 0.30), ("medium", 0.45), ("high", 0.25)]),
    );
    let hard = TierMix::new(
        FractionMap::from_pairs(&[
            ("singleFactRecall", 0.10),
            ("definitionRecognition", 0.10),
            ("conceptApplication", 0.40),
            ("multiStepCalculation", 0.40),
        ]),
        FractionMap::from_pairs(&[
            ("standard4OptionMCQ", 0.60),
            ("assertionReason", 0.20),
            ("matchTheFollowing", 0.10),
            ("arrangeInOrder", 0.10),
        ]),
        FractionMap::from_pairs(&[("low", 0.15), ("medium", 0.45), ("high", 0.40)]),
    );

    Ok(Protocol::builder("neet-physics", "NEET Physics")
        .stream("neet")
        .subject("physics")
        .labeling(OptionLabeling::Alphabetic)
        .prohibition("no numerical answers requiring more than two calculation steps at easy tier")
        .sequencing(SequencingRules::default())
        .metadata("modeled on NEET UG physics sections 2021-2024")
        .tier_mix(DifficultyTier::Easy, easy)
        .tier_mix(DifficultyTier::Balanced, balanced)
        .tier_mix(DifficultyTier::Hard, hard)
        .validator(Box::new(ProhibitedPatternValidator))
        .validator(Box::new(StructureValidator))
        .validator(Box::new(OptionShapeValidator::new(OptionLabeling::Alphabetic)))
        .build()?)
}

fn upsc_prelims_gs() -> Result<Protocol> {
    let easy = TierMix::new(
        FractionMap::from_pairs(&[
            ("singleFactRecall", 0.35),
            ("conceptApplication", 0.25),
            ("eliminationReasoning", 0.25),
            ("dataInterpretation", 0.15),
        ]),
        FractionMap::from_pairs(&[
            ("standard4OptionMCQ", 0.60),
            ("multipleSelectQuestions", 0.20),
            ("matchTheFollowing", 0.20),
        ]),
        FractionMap::from_pairs(&[("low", 0.40), ("medium", 0.45), ("high", 0.15)]),
    );
    let balanced = TierMix::new(
        FractionMap::from_pairs(&[
            ("singleFactRecall", 0.25),
            ("conceptApplication", 0.30),
            ("eliminationReasoning", 0.30),
            ("dataInterpretation", 0.15),
        ]),
        FractionMap::from_pairs(&[
            ("standard4OptionMCQ", 0.45),
            ("multipleSelectQuestions", 0.25),
            ("matchTheFollowing", 0.20),
            ("arrangeInOrder", 0.10),
        ]),
        FractionMap::from_pairs(&[("low", 0.25), ("medium", 0.50), ("high", 0.25)]),
    );
    let hard = TierMix::new(
        FractionMap::from_pairs(&[
            ("singleFactRecall", 0.15),
            ("conceptApplication", 0.35),
            ("eliminationReasoning", 0.30),
            ("dataInterpretation", 0.20),
        ]),
        FractionMap::from_pairs(&[
            ("standard4OptionMCQ", 0.35),
            ("multipleSelectQuestions", 0.30),
            ("matchTheFollowing", 0.20),
            ("arrangeInOrder", 0.15),
        ]),
        FractionMap::from_pairs(&[("low", 0.15), ("medium", 0.50), ("high", 0.35)]),
    );

    Ok(Protocol::builder("upsc-prelims-gs", "UPSC Prelims General Studies")
        .stream("upsc")
        .subject("general-studies")
        .labeling(OptionLabeling::Alphabetic)
        .prohibition("no current-affairs items older than two years")
        .sequencing(SequencingRules::default())
        .metadata("modeled on UPSC CSE prelims GS paper I 2020-2024")
        .tier_mix(DifficultyTier::Easy, easy)
        .tier_mix(DifficultyTier::Balanced, balanced)
        .tier_mix(DifficultyTier::Hard, hard)
        .validator(Box::new(ProhibitedPatternValidator))
        .validator(Box::new(StructureValidator))
        .validator(Box::new(OptionShapeValidator::new(OptionLabeling::Alphabetic)))
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_protocols_build() {
        let protocols = all_protocols().expect("registry");
        assert_eq!(protocols.len(), 3);
    }

    #[test]
    fn test_registry_ids_match() {
        let protocols = all_protocols().expect("registry");
        let ids: Vec<&str> = protocols.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, protocol_ids());
    }

    #[test]
    fn test_find_protocol() {
        let protocol = find_protocol("neet-physics").expect("lookup");
        assert_eq!(protocol.labeling, OptionLabeling::Alphabetic);
        assert_eq!(protocol.stream, "neet");
    }

    #[test]
    fn test_find_unknown_protocol() {
        let err = find_protocol("cbse-class-10").unwrap_err();
        assert!(err.to_string().contains("cbse-class-10"));
    }

    #[test]
    fn test_every_tier_mix_sums_to_one() {
        for protocol in all_protocols().expect("registry") {
            for tier in DifficultyTier::all() {
                let mix = protocol.tier_mix(tier);
                assert!(
                    mix.unbalanced_components().is_empty(),
                    "{} {tier} is unbalanced",
                    protocol.id
                );
            }
        }
    }

    #[test]
    fn test_bilingual_protocol_carries_mirror_validator() {
        let protocol = find_protocol("ssc-gd-gk-hindi").expect("lookup");
        let names: Vec<&str> = protocol.validators().iter().map(|v| v.name()).collect();
        assert!(names.contains(&"bilingual-mirror"));
        assert_eq!(protocol.labeling, OptionLabeling::Numeric);
    }

    #[test]
    fn test_monolingual_protocols_skip_mirror_validator() {
        for id in ["neet-physics", "upsc-prelims-gs"] {
            let protocol = find_protocol(id).expect("lookup");
            let names: Vec<&str> = protocol.validators().iter().map(|v| v.name()).collect();
            assert!(!names.contains(&"bilingual-mirror"));
        }
    }
}

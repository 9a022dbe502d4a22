//! Protocol configuration
//!
//! A `Protocol` describes one exam section: its option labeling, its
//! declared target distributions per difficulty tier, its sequencing
//! constraints, and the ordered list of validators that define its hard
//! constraints. Protocols are built once at configuration-load time and
//! never mutated afterwards; a definition that cannot be validated fails
//! loudly at build, not at batch-validation time.

use crate::error::{Error, Result};
use crate::question::OptionLabeling;
use crate::violation::Validator;
use serde::{Deserialize, Serialize};

/// Tolerance for a tier mix's fractions summing to 1.0
pub const MIX_SUM_EPSILON: f64 = 0.01;

/// Named difficulty tier of a generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    /// Recall-heavy mix
    Easy,
    /// Representative exam mix
    Balanced,
    /// Application-heavy mix
    Hard,
}

impl DifficultyTier {
    /// Get all tiers
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Easy, Self::Balanced, Self::Hard]
    }

    /// Get the wire tag for this tier
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Balanced => "balanced",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for DifficultyTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "balanced" => Ok(Self::Balanced),
            "hard" => Ok(Self::Hard),
            other => Err(Error::UnknownTier(other.to_string())),
        }
    }
}

/// Ordered name-to-fraction mapping
///
/// Declaration order is preserved so derived quota listings are
/// reproducible; the order carries no semantic meaning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FractionMap(Vec<(String, f64)>);

impl FractionMap {
    /// Build from (name, fraction) pairs, keeping declaration order
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(name, frac)| ((*name).to_string(), *frac))
                .collect(),
        )
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, frac)| (name.as_str(), *frac))
    }

    /// Look up a fraction by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, frac)| *frac)
    }

    /// Sum of all fractions
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().map(|(_, frac)| frac).sum()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the fractions sum to 1.0 within [`MIX_SUM_EPSILON`]
    #[must_use]
    pub fn sums_to_one(&self) -> bool {
        (self.sum() - 1.0).abs() <= MIX_SUM_EPSILON
    }
}

/// The declared target distribution for one difficulty tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierMix {
    /// Archetype name to fraction
    pub archetypes: FractionMap,
    /// Structural-form tag to fraction
    pub forms: FractionMap,
    /// Cognitive-load tag to fraction
    pub loads: FractionMap,
}

impl TierMix {
    /// Create a tier mix from its three fraction maps
    #[must_use]
    pub fn new(archetypes: FractionMap, forms: FractionMap, loads: FractionMap) -> Self {
        Self {
            archetypes,
            forms,
            loads,
        }
    }

    /// Names of the component maps that do not sum to ~1.0
    #[must_use]
    pub fn unbalanced_components(&self) -> Vec<&'static str> {
        let mut bad = Vec::new();
        if !self.archetypes.sums_to_one() {
            bad.push("archetypes");
        }
        if !self.forms.sums_to_one() {
            bad.push("forms");
        }
        if !self.loads.sums_to_one() {
            bad.push("loads");
        }
        bad
    }
}

/// Cognitive-load sequencing constraints for a protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencingRules {
    /// Leading positions that must carry low load (clamped to batch size)
    pub warmup_count: usize,
    /// Longest permitted run of consecutive high-load questions
    pub max_consecutive_high: usize,
}

impl Default for SequencingRules {
    fn default() -> Self {
        Self {
            warmup_count: 3,
            max_consecutive_high: 2,
        }
    }
}

impl SequencingRules {
    /// Set the warm-up length
    #[must_use]
    pub const fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Set the longest permitted high-load run
    #[must_use]
    pub const fn with_max_consecutive_high(mut self, max: usize) -> Self {
        self.max_consecutive_high = max;
        self
    }
}

/// Immutable configuration for one exam section
pub struct Protocol {
    /// Stable identifier (e.g. "ssc-gd-gk-hindi")
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Exam stream (e.g. "ssc", "neet", "upsc")
    pub stream: String,
    /// Subject within the stream
    pub subject: String,
    /// Option labeling convention
    pub labeling: OptionLabeling,
    /// Advisory prohibition notes; policy text, not machine-enforced
    pub prohibitions: Vec<String>,
    /// Cognitive-load sequencing constraints
    pub sequencing: SequencingRules,
    /// Free-form provenance notes
    pub metadata: Vec<String>,
    easy: TierMix,
    balanced: TierMix,
    hard: TierMix,
    validators: Vec<Box<dyn Validator>>,
}

impl std::fmt::Debug for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Protocol")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("labeling", &self.labeling)
            .field("validator_count", &self.validators.len())
            .finish_non_exhaustive()
    }
}

impl Protocol {
    /// Start building a protocol
    #[must_use]
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> ProtocolBuilder {
        ProtocolBuilder::new(id, name)
    }

    /// Get the declared mix for a tier
    #[must_use]
    pub fn tier_mix(&self, tier: DifficultyTier) -> &TierMix {
        match tier {
            DifficultyTier::Easy => &self.easy,
            DifficultyTier::Balanced => &self.balanced,
            DifficultyTier::Hard => &self.hard,
        }
    }

    /// The ordered validator list defining this protocol's hard constraints
    #[must_use]
    pub fn validators(&self) -> &[Box<dyn Validator>] {
        &self.validators
    }
}

/// Builder for [`Protocol`]; `build` fails loudly on unusable definitions
pub struct ProtocolBuilder {
    id: String,
    name: String,
    stream: String,
    subject: String,
    labeling: OptionLabeling,
    prohibitions: Vec<String>,
    sequencing: SequencingRules,
    metadata: Vec<String>,
    easy: Option<TierMix>,
    balanced: Option<TierMix>,
    hard: Option<TierMix>,
    validators: Vec<Box<dyn Validator>>,
}

impl ProtocolBuilder {
    fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stream: String::new(),
            subject: String::new(),
            labeling: OptionLabeling::Alphabetic,
            prohibitions: Vec::new(),
            sequencing: SequencingRules::default(),
            metadata: Vec::new(),
            easy: None,
            balanced: None,
            hard: None,
            validators: Vec::new(),
        }
    }

    /// Set the exam stream
    #[must_use]
    pub fn stream(mut self, stream: impl Into<String>) -> Self {
        self.stream = stream.into();
        self
    }

    /// Set the subject
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the option labeling convention
    #[must_use]
    pub const fn labeling(mut self, labeling: OptionLabeling) -> Self {
        self.labeling = labeling;
        self
    }

    /// Set the declared mix for a tier
    #[must_use]
    pub fn tier_mix(mut self, tier: DifficultyTier, mix: TierMix) -> Self {
        match tier {
            DifficultyTier::Easy => self.easy = Some(mix),
            DifficultyTier::Balanced => self.balanced = Some(mix),
            DifficultyTier::Hard => self.hard = Some(mix),
        }
        self
    }

    /// Add an advisory prohibition note
    #[must_use]
    pub fn prohibition(mut self, note: impl Into<String>) -> Self {
        self.prohibitions.push(note.into());
        self
    }

    /// Set the sequencing constraints
    #[must_use]
    pub const fn sequencing(mut self, rules: SequencingRules) -> Self {
        self.sequencing = rules;
        self
    }

    /// Add a free-form provenance note
    #[must_use]
    pub fn metadata(mut self, note: impl Into<String>) -> Self {
        self.metadata.push(note.into());
        self
    }

    /// Append a validator; order is preserved
    #[must_use]
    pub fn validator(mut self, validator: Box<dyn Validator>) -> Self {
        self.validators.push(validator);
        self
    }

    /// Validate and finish the protocol
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProtocol`] when no validators are configured,
    /// a tier mix is missing, or a tier mix's fractions do not sum to ~1.0.
    pub fn build(self) -> Result<Protocol> {
        if self.validators.is_empty() {
            return Err(Error::InvalidProtocol {
                id: self.id,
                reason: "no validators configured".to_string(),
            });
        }

        let mut missing = Vec::new();
        if self.easy.is_none() {
            missing.push("easy");
        }
        if self.balanced.is_none() {
            missing.push("balanced");
        }
        if self.hard.is_none() {
            missing.push("hard");
        }
        if !missing.is_empty() {
            return Err(Error::InvalidProtocol {
                id: self.id,
                reason: format!("missing tier mixes: {}", missing.join(", ")),
            });
        }

        // Checked for None above
        let easy = self.easy.ok_or_else(|| unreachable_mix(&self.id))?;
        let balanced = self.balanced.ok_or_else(|| unreachable_mix(&self.id))?;
        let hard = self.hard.ok_or_else(|| unreachable_mix(&self.id))?;

        for (tier, mix) in [("easy", &easy), ("balanced", &balanced), ("hard", &hard)] {
            let bad = mix.unbalanced_components();
            if !bad.is_empty() {
                return Err(Error::InvalidProtocol {
                    id: self.id,
                    reason: format!(
                        "tier '{tier}' fraction maps do not sum to 1.0: {}",
                        bad.join(", ")
                    ),
                });
            }
        }

        Ok(Protocol {
            id: self.id,
            name: self.name,
            stream: self.stream,
            subject: self.subject,
            labeling: self.labeling,
            prohibitions: self.prohibitions,
            sequencing: self.sequencing,
            metadata: self.metadata,
            easy,
            balanced,
            hard,
            validators: self.validators,
        })
    }
}

fn unreachable_mix(id: &str) -> Error {
    Error::InvalidProtocol {
        id: id.to_string(),
        reason: "tier mix vanished during build".to_string(),
    }
}

//! MCQ QA Core
//!
//! Data model and distribution math for auditing LLM-generated
//! multiple-choice exam batches. A `Protocol` declares one exam section's
//! labeling convention, target distributions, and hard constraints; the
//! validation engine (mcq-qa-validate) judges batches against it.
//!
//! The core is pure: no I/O, no shared state, no suspension points. Every
//! operation is a deterministic transformation of its inputs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
// Allow common patterns
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::redundant_clone))]

pub mod distribution;
pub mod error;
pub mod proptest_impl;
pub mod protocol;
pub mod question;
pub mod violation;

pub use distribution::{DistributionPlan, compute_counts, quota_sum};
pub use error::{Error, Result};
pub use protocol::{
    DifficultyTier, FractionMap, MIX_SUM_EPSILON, Protocol, ProtocolBuilder, SequencingRules,
    TierMix,
};
pub use question::{CognitiveLoad, OptionLabeling, Question, StructuralForm};
pub use violation::{Validator, Violation, ViolationKind};

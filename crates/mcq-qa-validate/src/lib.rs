//! MCQ QA Validate
//!
//! Validation engine for generated MCQ batches. A protocol's validators
//! produce errors, the universal quality checks and batch statistics
//! produce warnings, and the orchestrator folds both channels into one
//! deduplicated [`ValidationReport`].

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
#![cfg_attr(test, allow(clippy::cast_possible_truncation))]

pub mod batch;
pub mod error;
pub mod orchestrator;
pub mod parallel;
pub mod patterns;
pub mod quality;
pub mod registry;
pub mod report;
pub mod structure;
pub mod validators;

pub use batch::{check_answer_balance, check_cognitive_load_sequencing, MAX_ANSWER_RUN};
pub use error::{Error, Result};
pub use orchestrator::validate_batch;
pub use parallel::{validate_batches, validate_batches_with, ParallelConfig};
pub use patterns::{detect_meta_references, validate_prohibited_patterns};
pub use quality::basic_quality;
pub use registry::{all_protocols, find_protocol, protocol_ids};
pub use report::ValidationReport;
pub use structure::validate_structure;
pub use validators::{
    BilingualMirrorValidator, OptionShapeValidator, ProhibitedPatternValidator, StructureValidator,
};

//! Batch validation orchestration
//!
//! Runs every configured check over a batch and folds the findings into a
//! single [`ValidationReport`]. The channel decides severity: the
//! protocol's validators report errors, the universal quality checks and
//! batch statistics report warnings. Nothing short-circuits, so one run
//! surfaces every finding at once.

use crate::batch::{check_answer_balance, check_cognitive_load_sequencing};
use crate::quality::basic_quality;
use crate::report::ValidationReport;
use mcq_qa_core::{Protocol, Question, Violation};

/// Validate one ordered batch against a protocol
///
/// Pure and idempotent: identical input always yields an identical report.
#[must_use]
pub fn validate_batch(batch: &[Question], protocol: &Protocol) -> ValidationReport {
    let mut errors: Vec<Violation> = Vec::new();
    for validator in protocol.validators() {
        errors.extend(validator.check(batch));
    }

    let mut warnings: Vec<Violation> = Vec::new();
    for question in batch {
        warnings.extend(basic_quality(question, protocol.labeling));
    }
    warnings.extend(check_answer_balance(batch));
    warnings.extend(check_cognitive_load_sequencing(batch, &protocol.sequencing));

    ValidationReport::new(errors, warnings)
}

//! Validation report
//!
//! The single output of one orchestration run: a batch is `valid` iff the
//! deduplicated error list is empty. Warnings never affect validity.

use crate::error::Result;
use mcq_qa_core::Violation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of validating one batch against one protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff no errors were found
    pub valid: bool,
    /// Hard failures; the batch must be rejected or regenerated
    pub errors: Vec<Violation>,
    /// Advisory findings; the batch may still be accepted
    pub warnings: Vec<Violation>,
}

impl ValidationReport {
    /// Build a report, deduplicating both channels
    ///
    /// Dedup keeps the first occurrence of each violation, so repeated runs
    /// over identical input produce byte-identical reports.
    #[must_use]
    pub fn new(errors: Vec<Violation>, warnings: Vec<Violation>) -> Self {
        let errors = dedup(errors);
        let warnings = dedup(warnings);
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Whether the report carries neither errors nor warnings
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Rendered error messages, in report order
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Rendered warning messages, in report order
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Set-semantics dedup preserving first-occurrence order
fn dedup(violations: Vec<Violation>) -> Vec<Violation> {
    let mut seen = HashSet::new();
    violations
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

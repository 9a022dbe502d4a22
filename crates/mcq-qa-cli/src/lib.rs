//! MCQ QA CLI Library
//!
//! Library functions for the mcq-qa command-line tool.

#![forbid(unsafe_code)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

use mcq_qa_core::{DistributionPlan, Question};
use mcq_qa_validate::ValidationReport;
use std::fmt::Write as _;
use std::path::Path;

/// Load a batch of questions from a JSON or YAML file
///
/// The format is picked by extension; anything that is not `.yaml`/`.yml`
/// is parsed as JSON.
pub fn load_batch(path: &Path) -> Result<Vec<Question>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading batch file {}: {e}", path.display()))?;
    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| format!("Error parsing batch YAML: {e}"))
    } else {
        serde_json::from_str(&content).map_err(|e| format!("Error parsing batch JSON: {e}"))
    }
}

/// Render a report as human-readable text
pub fn format_report(report: &ValidationReport, protocol_id: &str, batch_len: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Validation Report ===");
    let _ = writeln!(out, "Protocol: {protocol_id}");
    let _ = writeln!(out, "Questions: {batch_len}");
    let _ = writeln!(out, "Valid: {}", report.valid);
    let _ = writeln!(
        out,
        "Errors: {}, Warnings: {}",
        report.errors.len(),
        report.warnings.len()
    );

    if !report.errors.is_empty() {
        let _ = writeln!(out, "\n--- Errors ---");
        for message in report.error_messages() {
            let _ = writeln!(out, "  {message}");
        }
    }
    if !report.warnings.is_empty() {
        let _ = writeln!(out, "\n--- Warnings ---");
        for message in report.warning_messages() {
            let _ = writeln!(out, "  {message}");
        }
    }
    out
}

/// Render a distribution plan as human-readable text
pub fn format_plan(plan: &DistributionPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Distribution Plan ===");
    let _ = writeln!(out, "Protocol: {}", plan.protocol_id);
    let _ = writeln!(out, "Tier: {}", plan.tier);
    let _ = writeln!(out, "Requested total: {}", plan.total);

    for (label, counts) in [
        ("Archetypes", &plan.archetypes),
        ("Forms", &plan.forms),
        ("Loads", &plan.loads),
    ] {
        let _ = writeln!(out, "\n--- {label} ---");
        for (name, count) in counts {
            let _ = writeln!(out, "  {name}: {count}");
        }
    }

    let drift = plan.archetype_drift();
    if drift != 0 {
        let _ = writeln!(out, "\nArchetype quota drift: {drift:+}");
    }
    out
}

/// Serialize a plan as pretty JSON
pub fn plan_to_json(plan: &DistributionPlan) -> Result<String, String> {
    serde_json::to_string_pretty(plan).map_err(|e| format!("Error serializing plan: {e}"))
}

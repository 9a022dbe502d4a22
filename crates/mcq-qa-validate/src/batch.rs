//! Batch-level statistical checks
//!
//! These judge the batch as a whole: answer-key balance, same-answer runs,
//! and cognitive-load sequencing. All findings here are advisory; a skewed
//! key distribution is a quality smell, not a broken question.

use mcq_qa_core::{CognitiveLoad, Question, SequencingRules, Violation, ViolationKind};
use std::collections::BTreeMap;

/// Longest tolerated run of identical correct-answer keys
pub const MAX_ANSWER_RUN: usize = 3;

/// Lower edge of the balance band as a fraction of batch size
pub const BALANCE_FLOOR: f64 = 0.20;

/// Upper edge of the balance band as a fraction of batch size
pub const BALANCE_CEILING: f64 = 0.30;

/// Check answer-key balance and same-answer runs
///
/// For a 4-key batch of size N, each possible key should appear between
/// `floor(0.20 * N)` and `ceil(0.30 * N)` times. The key universe comes
/// from the batch's option-key sets, so a key that is never the answer
/// still counts as zero and is flagged when zero is below the floor. Runs
/// longer than `MAX_ANSWER_RUN` produce one finding per maximal run.
#[must_use]
pub fn check_answer_balance(batch: &[Question]) -> Vec<Violation> {
    let total = batch.len();
    if total == 0 {
        return Vec::new();
    }
    let mut violations = Vec::new();

    let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
    for q in batch {
        for key in q.options.keys() {
            tally.entry(key.as_str()).or_insert(0);
        }
    }
    for q in batch {
        *tally.entry(q.answer.as_str()).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let (low, high) = (
        (BALANCE_FLOOR * total as f64).floor() as usize,
        (BALANCE_CEILING * total as f64).ceil() as usize,
    );

    for (key, count) in &tally {
        if *count < low || *count > high {
            #[allow(clippy::cast_precision_loss)]
            let percentage = 100.0 * *count as f64 / total as f64;
            violations.push(Violation::batch(
                ViolationKind::AnswerImbalance,
                format!(
                    "answer key '{key}' appears {count} of {total} times ({percentage:.0}%), \
                     outside the 20-30% balance band"
                ),
            ));
        }
    }

    violations.extend(answer_runs(batch));
    violations
}

/// One finding per maximal run of identical answer keys longer than the cap
fn answer_runs(batch: &[Question]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut start = 0;
    for i in 1..=batch.len() {
        let run_ended = i == batch.len() || batch[i].answer != batch[start].answer;
        if run_ended {
            let length = i - start;
            if length > MAX_ANSWER_RUN {
                violations.push(Violation::batch(
                    ViolationKind::AnswerRun,
                    format!(
                        "answer key '{}' repeats {length} times in a row (questions {} to {})",
                        batch[start].answer,
                        batch[start].number,
                        batch[i - 1].number
                    ),
                ));
            }
            start = i;
        }
    }
    violations
}

/// Check warm-up loads and high-load runs against the protocol's rules
#[must_use]
pub fn check_cognitive_load_sequencing(
    batch: &[Question],
    rules: &SequencingRules,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    let warmup = rules.warmup_count.min(batch.len());
    for (i, q) in batch.iter().take(warmup).enumerate() {
        if q.load != CognitiveLoad::Low {
            violations.push(Violation::for_question(
                ViolationKind::WarmupViolation,
                q.number,
                format!(
                    "warm-up position {} carries {} load, expected low",
                    i + 1,
                    q.load
                ),
            ));
        }
    }

    violations.extend(high_load_runs(batch, rules.max_consecutive_high));
    violations
}

fn high_load_runs(batch: &[Question], cap: usize) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut start: Option<usize> = None;
    for i in 0..=batch.len() {
        let is_high = i < batch.len() && batch[i].load == CognitiveLoad::High;
        match (start, is_high) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                let length = i - s;
                if length > cap {
                    violations.push(Violation::batch(
                        ViolationKind::HighLoadRun,
                        format!(
                            "{length} consecutive high-load questions ({} to {})",
                            batch[s].number,
                            batch[i - 1].number
                        ),
                    ));
                }
                start = None;
            }
            _ => {}
        }
    }
    violations
}

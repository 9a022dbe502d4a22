//! Per-archetype quota computation
//!
//! Turns a protocol's declared fractional mix into integer quotas for a
//! generation request. Each entry is rounded independently with
//! `f64::round` (half away from zero), so the quota sum is NOT guaranteed
//! to equal the requested total. That slack is a deliberate property of
//! the distribution contract — callers tolerate it, and largest-remainder
//! reallocation would change generation behavior.

use crate::protocol::{DifficultyTier, FractionMap, Protocol};
use serde::Serialize;

/// Compute integer quotas from a fraction map
///
/// Output preserves the map's declaration order. Deterministic: identical
/// inputs always produce identical output.
#[must_use]
pub fn compute_counts(mix: &FractionMap, total: usize) -> Vec<(String, usize)> {
    mix.iter()
        .map(|(name, frac)| {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            #[allow(clippy::cast_sign_loss)]
            let count = (total as f64 * frac).round() as usize;
            (name.to_string(), count)
        })
        .collect()
}

/// Sum of the quotas in a count listing
#[must_use]
pub fn quota_sum(counts: &[(String, usize)]) -> usize {
    counts.iter().map(|(_, n)| n).sum()
}

/// All three quota listings derived for one tier and total
#[derive(Debug, Clone, Serialize)]
pub struct DistributionPlan {
    /// Protocol the plan was derived from
    pub protocol_id: String,
    /// Tier the plan was derived for
    pub tier: DifficultyTier,
    /// Requested question count
    pub total: usize,
    /// Archetype quotas in declaration order
    pub archetypes: Vec<(String, usize)>,
    /// Structural-form quotas in declaration order
    pub forms: Vec<(String, usize)>,
    /// Cognitive-load quotas in declaration order
    pub loads: Vec<(String, usize)>,
}

impl DistributionPlan {
    /// Derive the plan for a protocol, tier, and requested total
    #[must_use]
    pub fn for_tier(protocol: &Protocol, tier: DifficultyTier, total: usize) -> Self {
        let mix = protocol.tier_mix(tier);
        Self {
            protocol_id: protocol.id.clone(),
            tier,
            total,
            archetypes: compute_counts(&mix.archetypes, total),
            forms: compute_counts(&mix.forms, total),
            loads: compute_counts(&mix.loads, total),
        }
    }

    /// Signed difference between the archetype quota sum and the requested
    /// total (the independent-rounding slack)
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn archetype_drift(&self) -> i64 {
        quota_sum(&self.archetypes) as i64 - self.total as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_counts_exact() {
        let mix = FractionMap::from_pairs(&[("recall", 0.4), ("conceptual", 0.6)]);
        let counts = compute_counts(&mix, 10);
        assert_eq!(
            counts,
            vec![("recall".to_string(), 4), ("conceptual".to_string(), 6)]
        );
        assert_eq!(quota_sum(&counts), 10);
    }

    #[test]
    fn test_compute_counts_rounds_half_away_from_zero() {
        // 10 * 0.25 = 2.5 rounds to 3, not 2
        let mix = FractionMap::from_pairs(&[("a", 0.25)]);
        assert_eq!(compute_counts(&mix, 10), vec![("a".to_string(), 3)]);
    }

    #[test]
    fn test_compute_counts_sum_may_drift_low() {
        let mix = FractionMap::from_pairs(&[("a", 0.33), ("b", 0.33), ("c", 0.34)]);
        let counts = compute_counts(&mix, 10);
        // 3.3 -> 3, 3.3 -> 3, 3.4 -> 3: drift is accepted, not reallocated
        assert_eq!(quota_sum(&counts), 9);
    }

    #[test]
    fn test_compute_counts_sum_may_drift_high() {
        let mix =
            FractionMap::from_pairs(&[("a", 0.25), ("b", 0.25), ("c", 0.25), ("d", 0.25)]);
        let counts = compute_counts(&mix, 10);
        // Each 2.5 rounds up independently
        assert_eq!(quota_sum(&counts), 12);
    }

    #[test]
    fn test_compute_counts_deterministic() {
        let mix = FractionMap::from_pairs(&[("a", 0.17), ("b", 0.83)]);
        assert_eq!(compute_counts(&mix, 37), compute_counts(&mix, 37));
    }

    #[test]
    fn test_compute_counts_preserves_declaration_order() {
        let mix = FractionMap::from_pairs(&[("zebra", 0.5), ("apple", 0.5)]);
        let names: Vec<String> = compute_counts(&mix, 4)
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_compute_counts_zero_total() {
        let mix = FractionMap::from_pairs(&[("a", 1.0)]);
        assert_eq!(compute_counts(&mix, 0), vec![("a".to_string(), 0)]);
    }

    #[test]
    fn test_quota_sum_empty() {
        assert_eq!(quota_sum(&[]), 0);
    }
}

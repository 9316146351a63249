//! Brute force vs optimal metrics
//!
//! Pure reduction over two traces. Nothing is cached; callers recompute
//! whenever either trace is regenerated.

use crate::generators::Trace;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonStats {
    pub brute_force_steps: usize,
    pub optimal_steps: usize,
    /// `brute_force_steps - optimal_steps`; negative when the optimal trace is longer
    pub saved_ops: i64,
    /// Percentage of brute-force steps saved, rounded half up
    pub efficiency_gain: i64,
    /// Final operation count of the brute-force trace
    pub brute_force_ops: u64,
    /// Final operation count of the optimal trace
    pub optimal_ops: u64,
}

impl ComparisonStats {
    /// Stats from sequence lengths alone; operation totals are left at 0
    pub fn from_lengths(brute_force_steps: usize, optimal_steps: usize) -> Self {
        let saved_ops = brute_force_steps as i64 - optimal_steps as i64;
        let denominator = brute_force_steps.max(1) as f64;
        let efficiency_gain = (saved_ops as f64 / denominator * 100.0 + 0.5).floor() as i64;

        ComparisonStats {
            brute_force_steps,
            optimal_steps,
            saved_ops,
            efficiency_gain,
            brute_force_ops: 0,
            optimal_ops: 0,
        }
    }

    pub fn between(brute_force: &Trace, optimal: &Trace) -> Self {
        ComparisonStats {
            brute_force_ops: brute_force.total_operations(),
            optimal_ops: optimal.total_operations(),
            ..Self::from_lengths(brute_force.len(), optimal.len())
        }
    }

    /// Whether the optimal trace is the shorter one (or they tie)
    pub fn optimal_wins(&self) -> bool {
        self.saved_ops >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(ComparisonStats::from_lengths(8, 7).efficiency_gain, 13);
        // -1/8 = -12.5% rounds toward +inf
        assert_eq!(ComparisonStats::from_lengths(8, 9).efficiency_gain, -12);
    }

    #[test]
    fn test_empty_brute_force_floors_denominator() {
        let stats = ComparisonStats::from_lengths(0, 3);
        assert_eq!(stats.saved_ops, -3);
        assert_eq!(stats.efficiency_gain, -300);
        assert!(!stats.optimal_wins());
    }
}

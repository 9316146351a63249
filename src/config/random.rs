//! Random inputs for the viewer's reshuffle keys

use super::SimulationConfig;
use crate::catalog::Algorithm;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Length of every generated input
pub const RANDOM_LEN: usize = 12;

/// Generated values fall in `0..VALUE_RANGE` unless the variant needs another range
const VALUE_RANGE: i64 = 50;

/// A fresh input and parameter for `algorithm`.
///
/// `target_exists` only matters for target-based variants: when set, the
/// target is one the search can answer (a present value, a reachable pair sum
/// or window sum); otherwise it is chosen so that it cannot be.
pub fn random_config<R: Rng + ?Sized>(
    algorithm: Algorithm,
    rng: &mut R,
    target_exists: bool,
) -> SimulationConfig {
    let (input, param) = match algorithm {
        Algorithm::TwoSumSorted => {
            let input = sorted_values(rng, 0..VALUE_RANGE);
            let target = if target_exists {
                let i = rng.gen_range(0..RANDOM_LEN - 1);
                let j = rng.gen_range(i + 1..RANDOM_LEN);
                input[i] + input[j]
            } else {
                let sums: FxHashSet<i64> = input
                    .iter()
                    .enumerate()
                    .flat_map(|(i, &a)| input[i + 1..].iter().map(move |&b| a + b))
                    .collect();
                missing_value(rng, 0..2 * VALUE_RANGE, &sums)
            };
            (input, target)
        }
        Algorithm::BinarySearch | Algorithm::LowerBound | Algorithm::UpperBound => {
            let input = sorted_values(rng, 0..VALUE_RANGE);
            let target = if target_exists {
                input.choose(rng).copied().unwrap_or(0)
            } else {
                let present: FxHashSet<i64> = input.iter().copied().collect();
                missing_value(rng, 0..VALUE_RANGE, &present)
            };
            (input, target)
        }
        // Roughly one in five is a zero
        Algorithm::MoveZeroes => (values(rng, 0..5), 0),
        Algorithm::Partition | Algorithm::NextGreater | Algorithm::NextSmaller => {
            (values(rng, 1..VALUE_RANGE), 0)
        }
        Algorithm::Container => (values(rng, 1..10), 0),
        Algorithm::DailyTemperatures => (values(rng, 60..80), 0),
        Algorithm::FixedWindow => (values(rng, 0..20), rng.gen_range(2..=4)),
        Algorithm::VariableWindow => {
            let input = values(rng, 1..10);
            let target = if target_exists {
                let i = rng.gen_range(0..RANDOM_LEN);
                let j = rng.gen_range(i..RANDOM_LEN);
                input[i..=j].iter().sum::<i64>()
            } else {
                input.iter().sum::<i64>() + 1
            };
            (input, target)
        }
        Algorithm::AtMostK | Algorithm::ExactK => (values(rng, 1..5), rng.gen_range(1..=3)),
    };

    SimulationConfig::new(algorithm, input, param)
}

fn values<R: Rng + ?Sized>(rng: &mut R, range: std::ops::Range<i64>) -> Vec<i64> {
    (0..RANDOM_LEN)
        .map(|_| rng.gen_range(range.clone()))
        .collect()
}

fn sorted_values<R: Rng + ?Sized>(rng: &mut R, range: std::ops::Range<i64>) -> Vec<i64> {
    let mut input = values(rng, range);
    input.sort_unstable();
    input
}

/// A value from `range` not in `taken`, or `range.end` if none is left.
/// Callers only ever take values from inside `range`.
fn missing_value<R: Rng + ?Sized>(
    rng: &mut R,
    range: std::ops::Range<i64>,
    taken: &FxHashSet<i64>,
) -> i64 {
    let end = range.end;
    let candidates: Vec<i64> = range.filter(|v| !taken.contains(v)).collect();
    candidates.choose(rng).copied().unwrap_or(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_configs_are_valid() {
        let mut rng = StdRng::seed_from_u64(11);
        for algorithm in Algorithm::ALL {
            for exists in [true, false] {
                let config = random_config(algorithm, &mut rng, exists);
                assert_eq!(config.input.len(), RANDOM_LEN);
                assert!(config.validate().is_ok());
                if algorithm.requires_sorted_input() {
                    assert!(config.input.windows(2).all(|w| w[0] <= w[1]));
                }
            }
        }
    }

    #[test]
    fn test_search_target_presence_follows_flag() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let hit = random_config(Algorithm::BinarySearch, &mut rng, true);
            assert!(hit.input.contains(&hit.param));

            let miss = random_config(Algorithm::BinarySearch, &mut rng, false);
            assert!(!miss.input.contains(&miss.param));
        }
    }

    #[test]
    fn test_pair_sum_target_presence_follows_flag() {
        let mut rng = StdRng::seed_from_u64(5);
        for exists in [true, false] {
            let config = random_config(Algorithm::TwoSumSorted, &mut rng, exists);
            let input = &config.input;
            let found = (0..input.len())
                .any(|i| (i + 1..input.len()).any(|j| input[i] + input[j] == config.param));
            assert_eq!(found, exists);
        }
    }
}

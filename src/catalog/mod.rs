//! Algorithm catalogue
//!
//! Every simulated algorithm is a fixed, hand-written variant. This module
//! names them, groups them into families, and carries the presets and
//! complexity labels the front-end shows.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    TwoPointer,
    SlidingWindow,
    BinarySearch,
    MonotonicStack,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::TwoPointer => "Two Pointers",
            Family::SlidingWindow => "Sliding Window",
            Family::BinarySearch => "Binary Search",
            Family::MonotonicStack => "Monotonic Stack",
        };
        f.write_str(name)
    }
}

/// What the single numeric parameter means for a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    None,
    Target,
    WindowSize,
    DistinctLimit,
}

impl Parameter {
    pub fn name(self) -> &'static str {
        match self {
            Parameter::None => "-",
            Parameter::Target => "target",
            Parameter::WindowSize => "window size",
            Parameter::DistinctLimit => "k",
        }
    }
}

/// Asymptotic cost labels for the comparison panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub brute_force: &'static str,
    pub optimal: &'static str,
}

/// A simulated algorithm variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Pair with a given sum in a sorted array (opposite-direction pointers)
    TwoSumSorted,
    /// Move non-zero values to the front (same-direction pointers)
    MoveZeroes,
    /// Lomuto partition around the last element (same-direction pointers)
    Partition,
    /// Container with most water
    Container,
    /// Every window of a fixed size
    FixedWindow,
    /// Shortest window whose sum reaches a target
    VariableWindow,
    /// Subarrays with at most K distinct values
    AtMostK,
    /// Subarrays with exactly K distinct values
    ExactK,
    /// Standard binary search
    BinarySearch,
    /// First index with value >= target
    LowerBound,
    /// First index with value > target
    UpperBound,
    /// Next greater element
    NextGreater,
    /// Next smaller element
    NextSmaller,
    /// Days until a warmer temperature (next greater, as a distance)
    DailyTemperatures,
}

impl Algorithm {
    pub const ALL: [Algorithm; 14] = [
        Algorithm::TwoSumSorted,
        Algorithm::MoveZeroes,
        Algorithm::Partition,
        Algorithm::Container,
        Algorithm::FixedWindow,
        Algorithm::VariableWindow,
        Algorithm::AtMostK,
        Algorithm::ExactK,
        Algorithm::BinarySearch,
        Algorithm::LowerBound,
        Algorithm::UpperBound,
        Algorithm::NextGreater,
        Algorithm::NextSmaller,
        Algorithm::DailyTemperatures,
    ];

    /// The variant after this one in catalogue order, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn family(self) -> Family {
        match self {
            Algorithm::TwoSumSorted
            | Algorithm::MoveZeroes
            | Algorithm::Partition
            | Algorithm::Container => Family::TwoPointer,
            Algorithm::FixedWindow
            | Algorithm::VariableWindow
            | Algorithm::AtMostK
            | Algorithm::ExactK => Family::SlidingWindow,
            Algorithm::BinarySearch | Algorithm::LowerBound | Algorithm::UpperBound => {
                Family::BinarySearch
            }
            Algorithm::NextGreater | Algorithm::NextSmaller | Algorithm::DailyTemperatures => {
                Family::MonotonicStack
            }
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::TwoSumSorted => "Two Sum (sorted)",
            Algorithm::MoveZeroes => "Move Zeroes",
            Algorithm::Partition => "Partition (Lomuto)",
            Algorithm::Container => "Container With Most Water",
            Algorithm::FixedWindow => "Fixed-Size Window",
            Algorithm::VariableWindow => "Minimum Size Subarray Sum",
            Algorithm::AtMostK => "At Most K Distinct",
            Algorithm::ExactK => "Exactly K Distinct",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::LowerBound => "Lower Bound",
            Algorithm::UpperBound => "Upper Bound",
            Algorithm::NextGreater => "Next Greater Element",
            Algorithm::NextSmaller => "Next Smaller Element",
            Algorithm::DailyTemperatures => "Daily Temperatures",
        }
    }

    pub fn parameter(self) -> Parameter {
        match self {
            Algorithm::TwoSumSorted
            | Algorithm::VariableWindow
            | Algorithm::BinarySearch
            | Algorithm::LowerBound
            | Algorithm::UpperBound => Parameter::Target,
            Algorithm::FixedWindow => Parameter::WindowSize,
            Algorithm::AtMostK | Algorithm::ExactK => Parameter::DistinctLimit,
            Algorithm::MoveZeroes
            | Algorithm::Partition
            | Algorithm::Container
            | Algorithm::NextGreater
            | Algorithm::NextSmaller
            | Algorithm::DailyTemperatures => Parameter::None,
        }
    }

    /// Whether the optimal strategy assumes ascending input
    pub fn requires_sorted_input(self) -> bool {
        matches!(
            self,
            Algorithm::TwoSumSorted
                | Algorithm::BinarySearch
                | Algorithm::LowerBound
                | Algorithm::UpperBound
        )
    }

    pub fn preset_input(self) -> Vec<i64> {
        match self {
            Algorithm::TwoSumSorted
            | Algorithm::BinarySearch
            | Algorithm::LowerBound
            | Algorithm::UpperBound => vec![2, 5, 7, 8, 11, 15],
            Algorithm::MoveZeroes => vec![0, 1, 0, 3, 12],
            Algorithm::Partition => vec![7, 2, 9, 4, 1, 6, 5],
            Algorithm::Container => vec![1, 8, 6, 2, 5, 4, 8, 3, 7],
            Algorithm::FixedWindow => vec![2, 5, 1, 8, 2, 9, 1],
            Algorithm::VariableWindow => vec![2, 3, 1, 2, 4, 3],
            Algorithm::AtMostK | Algorithm::ExactK => vec![1, 2, 1, 2, 3],
            Algorithm::NextGreater => vec![2, 1, 2, 4, 3],
            Algorithm::NextSmaller => vec![4, 5, 2, 10, 8],
            Algorithm::DailyTemperatures => vec![73, 74, 75, 71, 69, 72, 76, 73],
        }
    }

    pub fn preset_param(self) -> i64 {
        match self {
            Algorithm::TwoSumSorted => 13,
            Algorithm::FixedWindow => 3,
            Algorithm::VariableWindow => 7,
            Algorithm::AtMostK | Algorithm::ExactK => 2,
            Algorithm::BinarySearch | Algorithm::LowerBound | Algorithm::UpperBound => 8,
            _ => 0,
        }
    }

    pub fn complexity(self) -> Complexity {
        let (brute_force, optimal) = match self {
            Algorithm::TwoSumSorted
            | Algorithm::Container
            | Algorithm::MoveZeroes
            | Algorithm::Partition => ("O(N²)", "O(N)"),
            Algorithm::FixedWindow => ("O(N×K)", "O(N)"),
            Algorithm::VariableWindow | Algorithm::AtMostK | Algorithm::ExactK => {
                ("O(N²)", "O(N)")
            }
            Algorithm::BinarySearch | Algorithm::LowerBound | Algorithm::UpperBound => {
                ("O(N)", "O(log N)")
            }
            Algorithm::NextGreater | Algorithm::NextSmaller | Algorithm::DailyTemperatures => {
                ("O(N²)", "O(N)")
            }
        };
        Complexity {
            brute_force,
            optimal,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_visits_every_variant() {
        let mut algorithm = Algorithm::TwoSumSorted;
        for _ in 0..Algorithm::ALL.len() - 1 {
            algorithm = algorithm.next();
            assert_ne!(algorithm, Algorithm::TwoSumSorted);
        }
        assert_eq!(algorithm.next(), Algorithm::TwoSumSorted);
    }

    #[test]
    fn test_presets_fit_their_parameter() {
        for algorithm in Algorithm::ALL {
            let input = algorithm.preset_input();
            assert!(!input.is_empty(), "{:?} has no preset", algorithm);
            if algorithm.requires_sorted_input() {
                assert!(input.windows(2).all(|w| w[0] <= w[1]));
            }
            if matches!(
                algorithm.parameter(),
                Parameter::WindowSize | Parameter::DistinctLimit
            ) {
                let k = algorithm.preset_param();
                assert!(k >= 1 && k as usize <= input.len());
            }
        }
    }
}

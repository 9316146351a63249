//! Optimal step generators
//!
//! Each generator is a pure function `(input, parameter) -> StepSequence`:
//! no hidden state, no I/O, identical output for identical arguments. The
//! working array is copied into every step, so later mutation never reaches
//! an earlier step. Degenerate input (empty array, size out of range,
//! non-positive K) yields an empty sequence instead of an error.
//!
//! - [`two_pointer`]: opposite direction, same direction, partition, container
//! - [`sliding_window`]: fixed, variable, at most K, exactly K
//! - [`binary_search`]: standard, lower bound, upper bound
//! - [`monotonic_stack`]: next greater / smaller, value or distance
//!
//! [`generate_optimal`] dispatches a [`SimulationConfig`] to the right
//! generator and wraps the result in a [`Trace`].

pub mod binary_search;
pub mod monotonic_stack;
pub mod sliding_window;
pub mod two_pointer;

use crate::catalog::Algorithm;
use crate::config::SimulationConfig;
use crate::model::pointers::PointerStep;
use crate::model::scan::ScanStep;
use crate::model::search::SearchStep;
use crate::model::stack::StackStep;
use crate::model::window::WindowStep;
use crate::model::{AlgorithmStep, StepSequence};
use monotonic_stack::{Direction, Resolution};
use serde::Serialize;

/// A step sequence of any family, for consumers that do not care which
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "steps", rename_all = "snake_case")]
pub enum Trace {
    Pointers(StepSequence<PointerStep>),
    Window(StepSequence<WindowStep>),
    Search(StepSequence<SearchStep>),
    Stack(StepSequence<StackStep>),
    Scan(StepSequence<ScanStep>),
}

impl Trace {
    pub fn len(&self) -> usize {
        match self {
            Trace::Pointers(s) => s.len(),
            Trace::Window(s) => s.len(),
            Trace::Search(s) => s.len(),
            Trace::Stack(s) => s.len(),
            Trace::Scan(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn step(&self, index: usize) -> Option<&dyn AlgorithmStep> {
        match self {
            Trace::Pointers(s) => s.get(index).map(|s| s as &dyn AlgorithmStep),
            Trace::Window(s) => s.get(index).map(|s| s as &dyn AlgorithmStep),
            Trace::Search(s) => s.get(index).map(|s| s as &dyn AlgorithmStep),
            Trace::Stack(s) => s.get(index).map(|s| s as &dyn AlgorithmStep),
            Trace::Scan(s) => s.get(index).map(|s| s as &dyn AlgorithmStep),
        }
    }

    /// Step at a shared timeline index, frozen on the last step once the
    /// timeline runs past this trace's end
    pub fn step_clamped(&self, index: usize) -> Option<&dyn AlgorithmStep> {
        let last = self.len().checked_sub(1)?;
        self.step(index.min(last))
    }

    pub fn last(&self) -> Option<&dyn AlgorithmStep> {
        self.step_clamped(usize::MAX)
    }

    /// Operation count of the last step, 0 when empty
    pub fn total_operations(&self) -> u64 {
        self.last().map_or(0, |s| s.operation_count())
    }
}

/// Run the optimal strategy for `config`
pub fn generate_optimal(config: &SimulationConfig) -> Trace {
    let input = &config.input;
    let param = config.param;

    match config.algorithm {
        Algorithm::TwoSumSorted => Trace::Pointers(two_pointer::opposite_direction(input, param)),
        Algorithm::MoveZeroes => Trace::Pointers(two_pointer::same_direction(input)),
        Algorithm::Partition => Trace::Pointers(two_pointer::partition(input)),
        Algorithm::Container => Trace::Pointers(two_pointer::container(input)),
        Algorithm::FixedWindow => Trace::Window(sliding_window::fixed_window(input, param)),
        Algorithm::VariableWindow => Trace::Window(sliding_window::variable_window(input, param)),
        Algorithm::AtMostK => Trace::Window(sliding_window::at_most_k(input, param)),
        Algorithm::ExactK => Trace::Window(sliding_window::exact_k(input, param)),
        Algorithm::BinarySearch => Trace::Search(binary_search::standard(input, param)),
        Algorithm::LowerBound => Trace::Search(binary_search::lower_bound(input, param)),
        Algorithm::UpperBound => Trace::Search(binary_search::upper_bound(input, param)),
        Algorithm::NextGreater => Trace::Stack(monotonic_stack::next_match(
            input,
            Direction::Greater,
            Resolution::Value,
        )),
        Algorithm::NextSmaller => Trace::Stack(monotonic_stack::next_match(
            input,
            Direction::Smaller,
            Resolution::Value,
        )),
        Algorithm::DailyTemperatures => Trace::Stack(monotonic_stack::next_match(
            input,
            Direction::Greater,
            Resolution::Distance,
        )),
    }
}

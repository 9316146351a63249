//! Brute-force counterparts
//!
//! Naive algorithms over the same input and parameter as the optimal
//! generators: nested loops recomputing from scratch, linear scans instead of
//! halving, pairwise scans instead of a stack. Every step is one fundamental
//! probe and costs one operation, so the sequence length is the honest
//! operation count [`crate::comparison::ComparisonStats`] relies on.
//!
//! The probe that settles the answer carries the terminal phase; no summary
//! steps are appended.

pub mod monotonic_stack;
pub mod search;
pub mod sliding_window;
pub mod two_pointer;

use crate::catalog::Algorithm;
use crate::config::SimulationConfig;
use crate::generators::monotonic_stack::{Direction, Resolution};
use crate::generators::Trace;
use crate::model::scan::{ScanPhase, ScanStep};
use crate::model::StepSequence;

/// Everything about a probe except its bookkeeping
#[derive(Debug, Default)]
pub(crate) struct Probe {
    pub outer: usize,
    pub inner: Option<usize>,
    pub value: Option<i64>,
    pub best: Option<i64>,
    pub results: Vec<i64>,
    pub swapped: Option<(usize, usize)>,
    pub phase: ScanPhase,
    pub explanation: String,
}

/// Record one probe; its operation count is one more than the previous step's
pub(crate) fn record(steps: &mut StepSequence<ScanStep>, array: &[i64], probe: Probe) {
    let operation_count = steps.last_operation_count() + 1;
    steps.push(ScanStep {
        step: steps.next_ordinal(),
        array: array.to_vec(),
        outer: probe.outer,
        inner: probe.inner,
        value: probe.value,
        best: probe.best,
        results: probe.results,
        swapped: probe.swapped,
        phase: probe.phase,
        operation_count,
        explanation: probe.explanation,
    });
}

/// Re-phase the last probe once the scan knows it was the final one
pub(crate) fn conclude(steps: &mut StepSequence<ScanStep>, phase: ScanPhase, note: &str) {
    if let Some(last) = steps.last_mut() {
        last.phase = phase;
        if !note.is_empty() {
            last.explanation.push(' ');
            last.explanation.push_str(note);
        }
    }
}

/// Run the naive strategy for `config`
pub fn generate_brute_force(config: &SimulationConfig) -> Trace {
    let input = &config.input;
    let param = config.param;

    let steps = match config.algorithm {
        Algorithm::TwoSumSorted => two_pointer::pair_sum(input, param),
        Algorithm::MoveZeroes => two_pointer::move_zeroes(input),
        Algorithm::Partition => two_pointer::partition(input),
        Algorithm::Container => two_pointer::container(input),
        Algorithm::FixedWindow => sliding_window::fixed_window(input, param),
        Algorithm::VariableWindow => sliding_window::variable_window(input, param),
        Algorithm::AtMostK => sliding_window::at_most_k(input, param),
        Algorithm::ExactK => sliding_window::exact_k(input, param),
        Algorithm::BinarySearch => search::linear(input, param),
        Algorithm::LowerBound => search::first_at_least(input, param),
        Algorithm::UpperBound => search::first_above(input, param),
        Algorithm::NextGreater => {
            monotonic_stack::pairwise(input, Direction::Greater, Resolution::Value)
        }
        Algorithm::NextSmaller => {
            monotonic_stack::pairwise(input, Direction::Smaller, Resolution::Value)
        }
        Algorithm::DailyTemperatures => {
            monotonic_stack::pairwise(input, Direction::Greater, Resolution::Distance)
        }
    };

    Trace::Scan(steps)
}

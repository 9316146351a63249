//! Step model shared by every generator
//!
//! Every generator produces a [`StepSequence`] of immutable step records. A
//! record is self-contained: it owns a copy of the working array at that
//! moment, its positional markers, a monotone operation counter, a phase
//! discriminator and a human-readable explanation. No step refers to any
//! other step.
//!
//! # Record types
//!
//! - [`pointers::PointerStep`]: two-pointer family
//! - [`window::WindowStep`]: sliding-window family
//! - [`search::SearchStep`]: binary-search family
//! - [`stack::StackStep`]: monotonic-stack family
//! - [`scan::ScanStep`]: nested-loop brute force for all families
//!
//! The [`AlgorithmStep`] trait is the render contract. It is object safe so
//! the presentation layer can walk any family through `&dyn AlgorithmStep`.

pub mod pointers;
pub mod scan;
pub mod search;
pub mod stack;
pub mod window;

use serde::Serialize;
use std::ops::Index;

/// A labelled position inside the array (e.g. `L`, `R`, `mid`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub label: &'static str,
    pub index: usize,
}

impl Marker {
    pub fn new(label: &'static str, index: usize) -> Self {
        Marker { label, index }
    }
}

/// Render contract implemented by every step record
pub trait AlgorithmStep {
    /// Position of this step in its sequence
    fn ordinal(&self) -> usize;

    /// The working array as it was when this step was recorded
    fn array(&self) -> &[i64];

    /// Cumulative cost counter, non-decreasing across a sequence
    fn operation_count(&self) -> u64;

    fn explanation(&self) -> &str;

    /// Short label of the phase that produced this step
    fn phase_label(&self) -> &'static str;

    /// Whether the phase ends the algorithm (found, not found, complete)
    fn is_terminal(&self) -> bool;

    /// Pointer markers to draw under the array
    fn markers(&self) -> Vec<Marker>;

    /// Inclusive index range that is currently "active", if any
    fn span(&self) -> Option<(usize, usize)> {
        None
    }

    /// Family-specific facts for the inspector pane, in display order
    fn facts(&self) -> Vec<(&'static str, String)>;
}

/// Ordered, fully materialized list of steps.
///
/// Ordinals are `0..len` without gaps and operation counts never decrease;
/// both are enforced at push time in debug builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepSequence<S> {
    steps: Vec<S>,
}

impl<S> Default for StepSequence<S> {
    fn default() -> Self {
        StepSequence { steps: Vec::new() }
    }
}

impl<S: AlgorithmStep> StepSequence<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordinal the next pushed step must carry
    pub fn next_ordinal(&self) -> usize {
        self.steps.len()
    }

    /// Operation count of the last step, 0 for an empty sequence
    pub fn last_operation_count(&self) -> u64 {
        self.steps.last().map_or(0, |s| s.operation_count())
    }

    /// Append a step
    pub(crate) fn push(&mut self, step: S) {
        debug_assert_eq!(step.ordinal(), self.steps.len(), "step ordinal gap");
        debug_assert!(
            step.operation_count() >= self.last_operation_count(),
            "operation count decreased"
        );
        self.steps.push(step);
    }

    /// Last step, for generators that only learn a probe was final after
    /// making it
    pub(crate) fn last_mut(&mut self) -> Option<&mut S> {
        self.steps.last_mut()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    /// Step at `index`, clamped to the last step. `None` only when empty.
    pub fn get_clamped(&self, index: usize) -> Option<&S> {
        let last = self.steps.len().checked_sub(1)?;
        self.steps.get(index.min(last))
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.steps
    }
}

impl<S> Index<usize> for StepSequence<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.steps[index]
    }
}

impl<'a, S> IntoIterator for &'a StepSequence<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Format an optional answer, `-` when absent
pub(crate) fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::scan::{ScanPhase, ScanStep};

    fn probe(step: usize, ops: u64) -> ScanStep {
        ScanStep {
            step,
            array: vec![1, 2, 3],
            outer: 0,
            inner: Some(step),
            value: None,
            best: None,
            results: Vec::new(),
            swapped: None,
            phase: ScanPhase::Probing,
            operation_count: ops,
            explanation: String::new(),
        }
    }

    #[test]
    fn test_clamped_access() {
        let mut seq = StepSequence::new();
        seq.push(probe(0, 1));
        seq.push(probe(1, 2));

        assert_eq!(seq.get_clamped(0).map(|s| s.step), Some(0));
        assert_eq!(seq.get_clamped(9).map(|s| s.step), Some(1));
        assert_eq!(seq.last_operation_count(), 2);
    }

    #[test]
    fn test_empty_sequence_clamps_to_none() {
        let seq: StepSequence<ScanStep> = StepSequence::new();
        assert!(seq.get_clamped(0).is_none());
        assert_eq!(seq.last_operation_count(), 0);
    }
}

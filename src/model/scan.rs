//! Brute-force step record
//!
//! All naive counterparts share this shape: an outer loop index, an optional
//! inner loop index, and whatever quantity the probe computed. The length of
//! a brute-force sequence is the count of its fundamental probes, so every
//! step is exactly one probe.

use super::{fmt_opt, AlgorithmStep, Marker};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPhase {
    /// Probe made, nothing decided
    #[default]
    Probing,
    /// Probe matched (a pair, a next element, an inner loop exit condition)
    Match,
    /// Probe broke the inner loop because the constraint was exceeded
    Rejected,
    /// Probe triggered a swap
    Swapped,
    /// Last probe of an exhaustive scan (terminal)
    Complete,
    /// Probe that answered the whole problem (terminal)
    Found,
    /// Last probe, no answer exists (terminal)
    NotFound,
}

impl ScanPhase {
    pub fn label(self) -> &'static str {
        match self {
            ScanPhase::Probing => "probing",
            ScanPhase::Match => "match",
            ScanPhase::Rejected => "rejected",
            ScanPhase::Swapped => "swapped",
            ScanPhase::Complete => "complete",
            ScanPhase::Found => "found",
            ScanPhase::NotFound => "not found",
        }
    }
}

/// Snapshot of a nested-loop brute-force scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanStep {
    pub step: usize,
    pub array: Vec<i64>,
    pub outer: usize,
    pub inner: Option<usize>,
    /// Quantity computed by this probe (pair sum, area, running sum, distinct count)
    pub value: Option<i64>,
    /// Running answer (best area, window sum, subarray count, found index)
    pub best: Option<i64>,
    /// Per-index answers for scans that resolve every position
    pub results: Vec<i64>,
    pub swapped: Option<(usize, usize)>,
    pub phase: ScanPhase,
    pub operation_count: u64,
    pub explanation: String,
}

impl AlgorithmStep for ScanStep {
    fn ordinal(&self) -> usize {
        self.step
    }

    fn array(&self) -> &[i64] {
        &self.array
    }

    fn operation_count(&self) -> u64 {
        self.operation_count
    }

    fn explanation(&self) -> &str {
        &self.explanation
    }

    fn phase_label(&self) -> &'static str {
        self.phase.label()
    }

    fn is_terminal(&self) -> bool {
        matches!(
            self.phase,
            ScanPhase::Complete | ScanPhase::Found | ScanPhase::NotFound
        )
    }

    fn markers(&self) -> Vec<Marker> {
        let mut markers = vec![Marker::new("i", self.outer)];
        if let Some(inner) = self.inner {
            markers.push(Marker::new("j", inner));
        }
        markers
    }

    fn span(&self) -> Option<(usize, usize)> {
        self.inner
            .filter(|&j| j >= self.outer)
            .map(|j| (self.outer, j))
    }

    fn facts(&self) -> Vec<(&'static str, String)> {
        let mut facts = vec![
            ("i", self.outer.to_string()),
            ("j", fmt_opt(self.inner)),
            ("value", fmt_opt(self.value)),
            ("best", fmt_opt(self.best)),
        ];
        if !self.results.is_empty() {
            let results = self
                .results
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            facts.push(("result", format!("[{}]", results)));
        }
        if let Some((a, b)) = self.swapped {
            facts.push(("swapped", format!("{} <-> {}", a, b)));
        }
        facts
    }
}

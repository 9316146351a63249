//! Monotonic-stack step record

use super::{fmt_opt, AlgorithmStep, Marker};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StackPhase {
    /// Comparison against the stack top failed; popping stops
    Compare,
    /// Comparison succeeded; the top was popped and resolved
    Pop,
    /// Current index pushed
    Push,
    /// Scan over; indices left on the stack have no match (terminal)
    Finished,
}

impl StackPhase {
    pub fn label(self) -> &'static str {
        match self {
            StackPhase::Compare => "compare",
            StackPhase::Pop => "pop",
            StackPhase::Push => "push",
            StackPhase::Finished => "finished",
        }
    }
}

/// Snapshot of a monotonic-stack scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackStep {
    pub step: usize,
    pub array: Vec<i64>,
    /// Indices on the stack, bottom first
    pub stack: Vec<usize>,
    /// Index being processed; `array.len()` once the scan has finished
    pub current: usize,
    /// Stack top compared against `current` in this step
    pub compared_with: Option<usize>,
    /// Per-index answers, `-1` while unresolved or without match
    pub results: Vec<i64>,
    pub phase: StackPhase,
    pub operation_count: u64,
    pub explanation: String,
}

impl AlgorithmStep for StackStep {
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
        self.phase == StackPhase::Finished
    }

    fn markers(&self) -> Vec<Marker> {
        let mut markers = Vec::with_capacity(2);
        if self.current < self.array.len() {
            markers.push(Marker::new("i", self.current));
        }
        if let Some(top) = self.compared_with {
            markers.push(Marker::new("top", top));
        }
        markers
    }

    fn facts(&self) -> Vec<(&'static str, String)> {
        let stack = self
            .stack
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let results = self
            .results
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            ("current", self.current.to_string()),
            ("top", fmt_opt(self.compared_with)),
            ("stack", format!("[{}]", stack)),
            ("result", format!("[{}]", results)),
        ]
    }
}

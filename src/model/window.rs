//! Sliding-window step record

use super::{fmt_opt, AlgorithmStep, Marker};
use serde::Serialize;

/// Why a sliding-window step exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPhase {
    /// Filling the first fixed-size window
    Initializing,
    /// A fixed-size window is full and its aggregate is final
    WindowComplete,
    /// `right` moved and its element joined the window
    Expanding,
    /// One iteration of the shrink loop evicted `array[left]`
    Shrinking,
    /// The shrink loop stopped: the window no longer meets the target
    Settled,
    /// The window is valid again and its subarray count was added
    Contributing,
}

impl WindowPhase {
    pub fn label(self) -> &'static str {
        match self {
            WindowPhase::Initializing => "initializing",
            WindowPhase::WindowComplete => "window complete",
            WindowPhase::Expanding => "expanding",
            WindowPhase::Shrinking => "shrinking",
            WindowPhase::Settled => "need more",
            WindowPhase::Contributing => "contributing",
        }
    }
}

/// Snapshot of a sliding-window algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowStep {
    pub step: usize,
    pub array: Vec<i64>,
    pub left: usize,
    pub right: usize,
    pub window_len: usize,
    /// Running sum of the window (sum-based variants)
    pub sum: Option<i64>,
    /// Number of distinct values in the window (distinct-count variants)
    pub distinct: Option<usize>,
    pub incoming: Option<i64>,
    pub outgoing: Option<i64>,
    /// Best answer so far: max window sum (fixed) or min valid length (variable)
    pub best: Option<i64>,
    /// Subarrays ending at `right` credited by this step
    pub contribution: Option<u64>,
    /// Running total of all contributions
    pub total: Option<u64>,
    /// Whether the window satisfies the variant's constraint
    pub condition_met: bool,
    pub phase: WindowPhase,
    pub operation_count: u64,
    pub explanation: String,
}

impl AlgorithmStep for WindowStep {
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

    // Window traces have no dedicated terminal phase; the answer lives on the last step.
    fn is_terminal(&self) -> bool {
        false
    }

    fn markers(&self) -> Vec<Marker> {
        vec![Marker::new("L", self.left), Marker::new("R", self.right)]
    }

    fn span(&self) -> Option<(usize, usize)> {
        (self.window_len > 0).then_some((self.left, self.right))
    }

    fn facts(&self) -> Vec<(&'static str, String)> {
        let mut facts = vec![
            ("window", format!("[{}..{}]", self.left, self.right)),
            ("length", self.window_len.to_string()),
        ];
        if self.sum.is_some() {
            facts.push(("sum", fmt_opt(self.sum)));
        }
        if self.distinct.is_some() {
            facts.push(("distinct", fmt_opt(self.distinct)));
        }
        if self.incoming.is_some() || self.outgoing.is_some() {
            facts.push(("in", fmt_opt(self.incoming)));
            facts.push(("out", fmt_opt(self.outgoing)));
        }
        if self.best.is_some() {
            facts.push(("best", fmt_opt(self.best)));
        }
        if self.total.is_some() {
            facts.push(("contribution", fmt_opt(self.contribution)));
            facts.push(("total", fmt_opt(self.total)));
        }
        facts.push(("valid", self.condition_met.to_string()));
        facts
    }
}

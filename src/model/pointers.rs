//! Two-pointer step record

use super::{fmt_opt, AlgorithmStep, Marker};
use serde::Serialize;

/// Why a two-pointer step exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// Comparison made, left pointer moves right
    AdvanceLeft,
    /// Comparison made, right pointer moves left
    RetreatRight,
    /// Pair summing to the target found (terminal)
    Found,
    /// Pointers met without a match (terminal)
    NotFound,
    /// Scanner found a keeper out of place and swapped it to the boundary
    Swap,
    /// Scanner found a keeper already at the boundary
    Keep,
    /// Scanner skipped an element
    Skip,
    /// Last comparison of a full sweep (terminal)
    Complete,
}

impl PointerPhase {
    pub fn label(self) -> &'static str {
        match self {
            PointerPhase::AdvanceLeft => "advance left",
            PointerPhase::RetreatRight => "retreat right",
            PointerPhase::Found => "found",
            PointerPhase::NotFound => "not found",
            PointerPhase::Swap => "swap",
            PointerPhase::Keep => "keep",
            PointerPhase::Skip => "skip",
            PointerPhase::Complete => "complete",
        }
    }
}

/// Snapshot of a two-pointer algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointerStep {
    pub step: usize,
    pub array: Vec<i64>,
    pub left: usize,
    pub right: usize,
    /// `array[left] + array[right]` for target-sum search
    pub sum: Option<i64>,
    pub target: Option<i64>,
    /// Area between the pointers for container search
    pub area: Option<i64>,
    /// Best area seen so far
    pub best: Option<i64>,
    /// Indices swapped during this step (same-direction scan)
    pub swapped: Option<(usize, usize)>,
    /// Where the partition pivot sits in this step's array
    pub pivot: Option<usize>,
    pub phase: PointerPhase,
    pub operation_count: u64,
    pub explanation: String,
}

impl AlgorithmStep for PointerStep {
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
            PointerPhase::Found | PointerPhase::NotFound | PointerPhase::Complete
        )
    }

    fn markers(&self) -> Vec<Marker> {
        let mut markers = vec![Marker::new("L", self.left), Marker::new("R", self.right)];
        if let Some(pivot) = self.pivot {
            markers.push(Marker::new("P", pivot));
        }
        markers
    }

    fn span(&self) -> Option<(usize, usize)> {
        if self.left <= self.right {
            Some((self.left, self.right))
        } else {
            None
        }
    }

    fn facts(&self) -> Vec<(&'static str, String)> {
        let mut facts = vec![
            ("left", self.left.to_string()),
            ("right", self.right.to_string()),
        ];
        if self.sum.is_some() || self.target.is_some() {
            facts.push(("sum", fmt_opt(self.sum)));
            facts.push(("target", fmt_opt(self.target)));
        }
        if self.area.is_some() {
            facts.push(("area", fmt_opt(self.area)));
            facts.push(("max area", fmt_opt(self.best)));
        }
        if let Some(pivot) = self.pivot {
            facts.push(("pivot", fmt_opt(self.array.get(pivot).copied())));
        }
        if let Some((a, b)) = self.swapped {
            facts.push(("swapped", format!("{} <-> {}", a, b)));
        }
        facts
    }
}

//! Binary-search step record

use super::{fmt_opt, AlgorithmStep, Marker};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    /// Range is live and its midpoint has been computed
    RangeActive,
    /// Midpoint compared, half of the range discarded
    Eliminating,
    /// Answer reported (terminal)
    Found,
    /// Range emptied without a match (terminal)
    NotFound,
}

impl SearchPhase {
    pub fn label(self) -> &'static str {
        match self {
            SearchPhase::RangeActive => "range active",
            SearchPhase::Eliminating => "eliminating",
            SearchPhase::Found => "found",
            SearchPhase::NotFound => "not found",
        }
    }
}

/// Snapshot of a binary search.
///
/// `low`/`high` are signed: the standard search may drive `high` to `-1`.
/// Bound searches keep `high` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStep {
    pub step: usize,
    pub array: Vec<i64>,
    pub target: i64,
    pub low: isize,
    pub high: isize,
    /// Bound searches treat `high` as one past the live range
    pub exclusive_high: bool,
    pub mid: Option<usize>,
    /// Final index; `array.len()` means past the end for bound searches
    pub answer: Option<usize>,
    pub phase: SearchPhase,
    pub operation_count: u64,
    pub explanation: String,
}

impl SearchStep {
    /// Inclusive index range still under consideration
    fn live_range(&self, exclusive_high: bool) -> Option<(usize, usize)> {
        let hi = if exclusive_high { self.high - 1 } else { self.high };
        if self.low < 0 || hi < self.low {
            return None;
        }
        Some((self.low as usize, hi as usize))
    }
}

impl AlgorithmStep for SearchStep {
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
        matches!(self.phase, SearchPhase::Found | SearchPhase::NotFound)
    }

    fn markers(&self) -> Vec<Marker> {
        let n = self.array.len();
        let mut markers = Vec::with_capacity(3);
        if self.low >= 0 && (self.low as usize) < n {
            markers.push(Marker::new("lo", self.low as usize));
        }
        if let Some(mid) = self.mid {
            markers.push(Marker::new("mid", mid));
        }
        if self.high >= 0 && (self.high as usize) < n {
            markers.push(Marker::new("hi", self.high as usize));
        }
        if let Some(answer) = self.answer {
            markers.push(Marker::new("ans", answer));
        }
        markers
    }

    fn span(&self) -> Option<(usize, usize)> {
        self.live_range(self.exclusive_high)
    }

    fn facts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("target", self.target.to_string()),
            ("low", self.low.to_string()),
            ("high", self.high.to_string()),
            ("mid", fmt_opt(self.mid)),
            (
                "mid value",
                fmt_opt(self.mid.and_then(|m| self.array.get(m).copied())),
            ),
            ("answer", fmt_opt(self.answer)),
        ]
    }
}

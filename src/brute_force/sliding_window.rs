//! Naive window recomputation for the sliding-window family
//!
//! Every window start restarts its aggregate from scratch; each element
//! added is one probe.

use super::{conclude, record, Probe};
use crate::generators::sliding_window::window_param;
use crate::model::scan::{ScanPhase, ScanStep};
use crate::model::StepSequence;
use rustc_hash::FxHashSet;

/// Sum every window of size `k` from scratch
pub fn fixed_window(array: &[i64], k: i64) -> StepSequence<ScanStep> {
    let mut steps = StepSequence::new();
    let Some(k) = window_param(array.len(), k) else {
        return steps;
    };
    let mut best: Option<i64> = None;

    for i in 0..=array.len() - k {
        let mut sum: i64 = 0;
        for j in i..i + k {
            sum = sum.saturating_add(array[j]);
            let done = j + 1 == i + k;
            if done {
                best = Some(best.map_or(sum, |b| b.max(sum)));
            }
            record(
                &mut steps,
                array,
                Probe {
                    outer: i,
                    inner: Some(j),
                    value: Some(sum),
                    best,
                    phase: if done {
                        ScanPhase::Match
                    } else {
                        ScanPhase::Probing
                    },
                    explanation: if done {
                        format!(
                            "Window starting at {} sums to {}. Best {}.",
                            i,
                            sum,
                            best.unwrap_or(sum)
                        )
                    } else {
                        format!("Recompute window at {}: add {}, sum {}.", i, array[j], sum)
                    },
                    ..Probe::default()
                },
            );
        }
    }

    conclude(&mut steps, ScanPhase::Complete, "Every window summed.");
    steps
}

/// For each start, extend until the sum reaches `target`
pub fn variable_window(array: &[i64], target: i64) -> StepSequence<ScanStep> {
    let mut steps = StepSequence::new();
    if array.is_empty() || target <= 0 {
        return steps;
    }
    let mut best: Option<i64> = None;

    for i in 0..array.len() {
        let mut sum: i64 = 0;
        for j in i..array.len() {
            sum = sum.saturating_add(array[j]);
            let reached = sum >= target;
            if reached {
                let len = (j + 1 - i) as i64;
                best = Some(best.map_or(len, |b| b.min(len)));
            }
            record(
                &mut steps,
                array,
                Probe {
                    outer: i,
                    inner: Some(j),
                    value: Some(sum),
                    best,
                    phase: if reached {
                        ScanPhase::Match
                    } else {
                        ScanPhase::Probing
                    },
                    explanation: if reached {
                        format!(
                            "Sum {} >= {} with length {}. Shortest so far {}.",
                            sum,
                            target,
                            j + 1 - i,
                            best.unwrap_or_default()
                        )
                    } else {
                        format!("Start {}: add {}, sum {} < {}.", i, array[j], sum, target)
                    },
                    ..Probe::default()
                },
            );
            if reached {
                break;
            }
        }
    }

    conclude(&mut steps, ScanPhase::Complete, "Every start tried.");
    steps
}

/// Count subarrays with at most `k` distinct values, start by start
pub fn at_most_k(array: &[i64], k: i64) -> StepSequence<ScanStep> {
    distinct_scan(array, k, false)
}

/// Count subarrays with exactly `k` distinct values, start by start
pub fn exact_k(array: &[i64], k: i64) -> StepSequence<ScanStep> {
    distinct_scan(array, k, true)
}

fn distinct_scan(array: &[i64], k: i64, exact: bool) -> StepSequence<ScanStep> {
    let mut steps = StepSequence::new();
    let Some(k) = window_param(array.len(), k) else {
        return steps;
    };
    let mut count: i64 = 0;

    for i in 0..array.len() {
        let mut seen: FxHashSet<i64> = FxHashSet::default();
        for j in i..array.len() {
            seen.insert(array[j]);
            let distinct = seen.len();

            let (phase, explanation) = if distinct > k {
                (
                    ScanPhase::Rejected,
                    format!(
                        "[{}..{}] has {} distinct > {}. No longer subarray from {} qualifies.",
                        i, j, distinct, k, i
                    ),
                )
            } else if !exact || distinct == k {
                count += 1;
                (
                    ScanPhase::Match,
                    format!(
                        "[{}..{}] has {} distinct. Count {}.",
                        i, j, distinct, count
                    ),
                )
            } else {
                (
                    ScanPhase::Probing,
                    format!("[{}..{}] has only {} distinct.", i, j, distinct),
                )
            };

            record(
                &mut steps,
                array,
                Probe {
                    outer: i,
                    inner: Some(j),
                    value: Some(distinct as i64),
                    best: Some(count),
                    phase,
                    explanation,
                    ..Probe::default()
                },
            );
            if phase == ScanPhase::Rejected {
                break;
            }
        }
    }

    conclude(
        &mut steps,
        ScanPhase::Complete,
        &format!("Every start tried. Total {}.", count),
    );
    steps
}

//! Sliding-window generators
//!
//! - [`fixed_window`]: every window of size `k`, running sum, best sum
//! - [`variable_window`]: shortest window whose sum reaches a target
//! - [`at_most_k`]: count subarrays with at most `k` distinct values
//! - [`exact_k`]: count subarrays with exactly `k` distinct values, computed
//!   as `at_most(k) - at_most(k - 1)`
//!
//! # Cost model
//!
//! Adding an element costs 1, evicting an element costs 1 (a fixed-window
//! slide therefore costs 2). Crediting a contribution is bookkeeping and
//! costs nothing.

use crate::model::window::{WindowPhase, WindowStep};
use crate::model::StepSequence;
use rustc_hash::FxHashMap;

/// Validate a window/distinct-count parameter against the array length
pub(crate) fn window_param(len: usize, k: i64) -> Option<usize> {
    if len == 0 || k <= 0 || k as u64 > len as u64 {
        return None;
    }
    Some(k as usize)
}

/// Fixed window of size `k`.
///
/// One step per `right`. The first `k - 1` steps fill the window; every step
/// after that is a [`WindowPhase::WindowComplete`] step, so there are exactly
/// `n - k + 1` of them.
pub fn fixed_window(array: &[i64], k: i64) -> StepSequence<WindowStep> {
    let mut steps = StepSequence::new();
    let Some(k) = window_param(array.len(), k) else {
        return steps;
    };

    let mut sum: i64 = 0;
    let mut best: Option<i64> = None;
    let mut ops = 0;

    for right in 0..array.len() {
        let incoming = array[right];
        let (left, outgoing) = if right < k {
            sum = sum.saturating_add(incoming);
            ops += 1;
            (0, None)
        } else {
            let outgoing = array[right - k];
            sum = sum.saturating_sub(outgoing).saturating_add(incoming);
            ops += 2;
            (right + 1 - k, Some(outgoing))
        };

        let complete = right + 1 >= k;
        if complete {
            best = Some(best.map_or(sum, |b| b.max(sum)));
        }

        let explanation = match (complete, outgoing) {
            (false, _) => format!(
                "Add {}. Sum {}. Filling first window ({}/{}).",
                incoming,
                sum,
                right + 1,
                k
            ),
            (true, None) => format!("First window of size {} complete. Sum {}.", k, sum),
            (true, Some(out)) => format!(
                "Slide: drop {}, add {}. Sum {}. Best {}.",
                out,
                incoming,
                sum,
                best.unwrap_or(sum)
            ),
        };

        steps.push(WindowStep {
            step: steps.next_ordinal(),
            array: array.to_vec(),
            left,
            right,
            window_len: right + 1 - left,
            sum: Some(sum),
            distinct: None,
            incoming: Some(incoming),
            outgoing,
            best,
            contribution: None,
            total: None,
            condition_met: complete,
            phase: if complete {
                WindowPhase::WindowComplete
            } else {
                WindowPhase::Initializing
            },
            operation_count: ops,
            explanation,
        });
    }

    steps
}

/// Shortest window with `sum >= target`.
///
/// Every shrink-loop iteration emits its own step, recorded while the window
/// is still valid (before `array[left]` is evicted). A shrink loop that ran
/// is followed by one free step showing the window it left behind. A
/// non-positive target is degenerate and yields an empty sequence.
///
/// Negative values break the monotone shrink invariant; they are accepted and
/// the trace shows the (possibly wrong) answer the greedy scan arrives at.
pub fn variable_window(array: &[i64], target: i64) -> StepSequence<WindowStep> {
    let mut steps = StepSequence::new();
    if array.is_empty() || target <= 0 {
        return steps;
    }

    let mut left = 0;
    let mut sum: i64 = 0;
    let mut best: Option<usize> = None;
    let mut ops = 0;

    for right in 0..array.len() {
        sum = sum.saturating_add(array[right]);
        ops += 1;

        steps.push(WindowStep {
            step: steps.next_ordinal(),
            array: array.to_vec(),
            left,
            right,
            window_len: right + 1 - left,
            sum: Some(sum),
            distinct: None,
            incoming: Some(array[right]),
            outgoing: None,
            best: best.map(|b| b as i64),
            contribution: None,
            total: None,
            condition_met: sum >= target,
            phase: WindowPhase::Expanding,
            operation_count: ops,
            explanation: format!("Add {}. Sum {}. Target {}.", array[right], sum, target),
        });

        let mut shrunk = false;
        while left <= right && sum >= target {
            let len = right + 1 - left;
            best = Some(best.map_or(len, |b| b.min(len)));
            ops += 1;

            steps.push(WindowStep {
                step: steps.next_ordinal(),
                array: array.to_vec(),
                left,
                right,
                window_len: len,
                sum: Some(sum),
                distinct: None,
                incoming: None,
                outgoing: Some(array[left]),
                best: best.map(|b| b as i64),
                contribution: None,
                total: None,
                condition_met: true,
                phase: WindowPhase::Shrinking,
                operation_count: ops,
                explanation: format!(
                    "Sum {} >= {}. Valid window of length {} (min {}). Drop {} and shrink.",
                    sum,
                    target,
                    len,
                    best.unwrap_or(len),
                    array[left]
                ),
            });

            sum = sum.saturating_sub(array[left]);
            left += 1;
            shrunk = true;
        }

        if shrunk {
            steps.push(WindowStep {
                step: steps.next_ordinal(),
                array: array.to_vec(),
                left,
                right,
                window_len: right + 1 - left,
                sum: Some(sum),
                distinct: None,
                incoming: None,
                outgoing: None,
                best: best.map(|b| b as i64),
                contribution: None,
                total: None,
                condition_met: false,
                phase: WindowPhase::Settled,
                operation_count: ops,
                explanation: format!("Sum {} < {}. Need more elements.", sum, target),
            });
        }
    }

    steps
}

/// Subarrays with at most `k` distinct values.
///
/// `k <= 0` or `k > n` yields an empty sequence.
pub fn at_most_k(array: &[i64], k: i64) -> StepSequence<WindowStep> {
    match window_param(array.len(), k) {
        Some(k) => at_most_k_trace(array, k),
        None => StepSequence::new(),
    }
}

/// Unchecked at-most-K trace. Also valid for `k == 0`, where every
/// contribution is zero; [`exact_k`] relies on that for `k == 1`.
fn at_most_k_trace(array: &[i64], k: usize) -> StepSequence<WindowStep> {
    let mut steps = StepSequence::new();
    let mut freq: FxHashMap<i64, usize> = FxHashMap::default();
    let mut left = 0;
    let mut total: u64 = 0;
    let mut ops = 0;

    for right in 0..array.len() {
        let incoming = array[right];
        *freq.entry(incoming).or_insert(0) += 1;
        ops += 1;

        steps.push(WindowStep {
            step: steps.next_ordinal(),
            array: array.to_vec(),
            left,
            right,
            window_len: right + 1 - left,
            sum: None,
            distinct: Some(freq.len()),
            incoming: Some(incoming),
            outgoing: None,
            best: None,
            contribution: None,
            total: Some(total),
            condition_met: freq.len() <= k,
            phase: WindowPhase::Expanding,
            operation_count: ops,
            explanation: format!("Add {}. Distinct count {}.", incoming, freq.len()),
        });

        while freq.len() > k {
            let outgoing = array[left];
            if let Some(count) = freq.get_mut(&outgoing) {
                *count -= 1;
                if *count == 0 {
                    freq.remove(&outgoing);
                }
            }
            left += 1;
            ops += 1;

            steps.push(WindowStep {
                step: steps.next_ordinal(),
                array: array.to_vec(),
                left,
                right,
                window_len: right + 1 - left,
                sum: None,
                distinct: Some(freq.len()),
                incoming: None,
                outgoing: Some(outgoing),
                best: None,
                contribution: None,
                total: Some(total),
                condition_met: freq.len() <= k,
                phase: WindowPhase::Shrinking,
                operation_count: ops,
                explanation: format!(
                    "Too many distinct values (> {}). Drop {}, distinct now {}.",
                    k,
                    outgoing,
                    freq.len()
                ),
            });
        }

        let contribution = (right + 1 - left) as u64;
        total += contribution;

        steps.push(WindowStep {
            step: steps.next_ordinal(),
            array: array.to_vec(),
            left,
            right,
            window_len: right + 1 - left,
            sum: None,
            distinct: Some(freq.len()),
            incoming: None,
            outgoing: None,
            best: None,
            contribution: Some(contribution),
            total: Some(total),
            condition_met: true,
            phase: WindowPhase::Contributing,
            operation_count: ops,
            explanation: format!(
                "Valid window [{}..{}] with {} distinct. Adds +{} subarrays, total {}.",
                left,
                right,
                freq.len(),
                contribution,
                total
            ),
        });
    }

    steps
}

/// Subarrays with exactly `k` distinct values.
///
/// Mirrors the at-most-`k` trace step for step. Contribution steps carry the
/// difference against the at-most-`k - 1` trace's contribution for the same
/// `right` index; the two traces are aligned by `right`, never by ordinal,
/// since their shrink loops run a different number of times.
pub fn exact_k(array: &[i64], k: i64) -> StepSequence<WindowStep> {
    let mut steps = StepSequence::new();
    let Some(k) = window_param(array.len(), k) else {
        return steps;
    };

    let trace_k = at_most_k_trace(array, k);
    let trace_below = at_most_k_trace(array, k - 1);

    // right -> (contribution, cumulative ops once `right` is settled)
    let mut below: FxHashMap<usize, (u64, u64)> = FxHashMap::default();
    for step in &trace_below {
        if let Some(contribution) = step.contribution {
            below.insert(step.right, (contribution, step.operation_count));
        }
    }

    let mut total: u64 = 0;
    for step in &trace_k {
        let (below_count, below_ops) = below.get(&step.right).copied().unwrap_or((0, 0));
        let mut mirrored = step.clone();
        mirrored.operation_count = step.operation_count + below_ops;

        match step.contribution {
            Some(count) => {
                let net = count.saturating_sub(below_count);
                total += net;
                mirrored.contribution = Some(net);
                mirrored.total = Some(total);
                mirrored.explanation = format!(
                    "AtMost({}): {} - AtMost({}): {} = {} subarrays with exactly {} distinct. Total {}.",
                    k,
                    count,
                    k - 1,
                    below_count,
                    net,
                    k,
                    total
                );
            }
            None => {
                mirrored.total = Some(total);
                mirrored.explanation =
                    format!("{} (simulating AtMost({}))", step.explanation, k);
            }
        }

        steps.push(mirrored);
    }

    steps
}

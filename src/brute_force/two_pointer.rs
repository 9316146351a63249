//! Naive pair scans for the two-pointer family

use super::{conclude, record, Probe};
use crate::generators::two_pointer::KeepRule;
use crate::model::scan::{ScanPhase, ScanStep};
use crate::model::StepSequence;

/// Check every pair `(i, j)`, `i < j`, stopping at the first pair summing to `target`
pub fn pair_sum(array: &[i64], target: i64) -> StepSequence<ScanStep> {
    let mut steps = StepSequence::new();
    let n = array.len();

    for i in 0..n {
        for j in i + 1..n {
            let sum = array[i].saturating_add(array[j]);
            let found = sum == target;
            record(
                &mut steps,
                array,
                Probe {
                    outer: i,
                    inner: Some(j),
                    value: Some(sum),
                    phase: if found {
                        ScanPhase::Found
                    } else {
                        ScanPhase::Probing
                    },
                    explanation: if found {
                        format!(
                            "Pair ({}, {}) sums to {}. Found at indices {} and {}.",
                            array[i], array[j], target, i, j
                        )
                    } else {
                        format!(
                            "Pair ({}, {}) sums to {}, not {}.",
                            array[i], array[j], sum, target
                        )
                    },
                    ..Probe::default()
                },
            );
            if found {
                return steps;
            }
        }
    }

    conclude(
        &mut steps,
        ScanPhase::NotFound,
        &format!("Every pair checked: none sums to {}.", target),
    );
    steps
}

/// For each zero, search forward for the next non-zero and swap it in
pub fn move_zeroes(array: &[i64]) -> StepSequence<ScanStep> {
    let mut steps = StepSequence::new();
    let mut work = array.to_vec();

    compact(&mut steps, &mut work, array.len(), KeepRule::NonZero);

    conclude(&mut steps, ScanPhase::Complete, "All non-zero values are in front.");
    steps
}

/// Gather the values below the last element by forward search, then swap
/// the pivot in after them
pub fn partition(array: &[i64]) -> StepSequence<ScanStep> {
    let mut steps = StepSequence::new();
    let Some(&pivot) = array.last() else {
        return steps;
    };
    let pivot_index = array.len() - 1;
    let rule = KeepRule::BelowPivot(pivot);

    let mut work = array.to_vec();
    compact(&mut steps, &mut work, pivot_index, rule);

    // Only keepers sit in front of the first value the rule rejects
    let boundary = work[..pivot_index]
        .iter()
        .position(|&v| !rule.keeps(v))
        .unwrap_or(pivot_index);
    work.swap(boundary, pivot_index);
    record(
        &mut steps,
        &work,
        Probe {
            outer: boundary,
            inner: Some(pivot_index),
            value: Some(pivot),
            swapped: (boundary != pivot_index).then_some((boundary, pivot_index)),
            phase: ScanPhase::Swapped,
            explanation: format!("Swap pivot {} into index {}.", pivot, boundary),
            ..Probe::default()
        },
    );

    conclude(
        &mut steps,
        ScanPhase::Complete,
        &format!("Everything below {} is in front of it.", pivot),
    );
    steps
}

/// Fill each slot of `work[..end]` the rule rejects with the next kept
/// value found further on. Stops once only rejected values remain.
fn compact(steps: &mut StepSequence<ScanStep>, work: &mut [i64], end: usize, rule: KeepRule) {
    'outer: for i in 0..end {
        let value = work[i];
        let kept = rule.keeps(value);
        record(
            steps,
            work,
            Probe {
                outer: i,
                value: Some(value),
                explanation: if kept {
                    format!("Index {} holds {}. Already in place.", i, value)
                } else {
                    format!(
                        "Index {} holds {}. Search forward for {}.",
                        i,
                        rule.describe(value),
                        rule.keeper()
                    )
                },
                ..Probe::default()
            },
        );
        if kept {
            continue;
        }

        for j in i + 1..end {
            let candidate = work[j];
            if rule.keeps(candidate) {
                work.swap(i, j);
                record(
                    steps,
                    work,
                    Probe {
                        outer: i,
                        inner: Some(j),
                        value: Some(candidate),
                        swapped: Some((i, j)),
                        phase: ScanPhase::Swapped,
                        explanation: format!(
                            "Found {} at index {}. Swap it into index {}.",
                            candidate, j, i
                        ),
                        ..Probe::default()
                    },
                );
                continue 'outer;
            }
            record(
                steps,
                work,
                Probe {
                    outer: i,
                    inner: Some(j),
                    value: Some(candidate),
                    explanation: format!(
                        "Index {} holds {}, keep searching.",
                        j,
                        rule.describe(candidate)
                    ),
                    ..Probe::default()
                },
            );
        }

        // Nothing but rejected values from i onward.
        break;
    }
}

/// Area of every pair `(i, j)`, `i < j`
pub fn container(heights: &[i64]) -> StepSequence<ScanStep> {
    let mut steps = StepSequence::new();
    let n = heights.len();
    let mut best: Option<i64> = None;

    for i in 0..n {
        for j in i + 1..n {
            let height = heights[i].min(heights[j]);
            let area = height.saturating_mul((j - i) as i64);
            let max = best.map_or(area, |b| b.max(area));
            best = Some(max);
            record(
                &mut steps,
                heights,
                Probe {
                    outer: i,
                    inner: Some(j),
                    value: Some(area),
                    best: Some(max),
                    explanation: format!(
                        "Height {}, width {}, area {}. Max {}.",
                        height,
                        j - i,
                        area,
                        max
                    ),
                    ..Probe::default()
                },
            );
        }
    }

    if let Some(max) = best {
        conclude(
            &mut steps,
            ScanPhase::Complete,
            &format!("All pairs checked. Max area is {}.", max),
        );
    }
    steps
}

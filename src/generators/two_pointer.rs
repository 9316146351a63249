//! Two-pointer generators
//!
//! - [`opposite_direction`]: target-sum search over a sorted array
//! - [`same_direction`]: move non-zero values to the front, in place
//! - [`partition`]: Lomuto partition around the last element
//! - [`container`]: container-with-most-water, max area between two heights
//!
//! Each comparison (or scanner visit) costs one operation and emits one step.

use crate::model::pointers::{PointerPhase, PointerStep};
use crate::model::StepSequence;

/// Sorted-array target sum with pointers closing in from both ends.
///
/// Emits exactly one step per comparison. The comparison that finds the pair
/// is phased [`PointerPhase::Found`]; if the pointers would meet instead, the
/// last comparison is phased [`PointerPhase::NotFound`].
pub fn opposite_direction(array: &[i64], target: i64) -> StepSequence<PointerStep> {
    let mut steps = StepSequence::new();
    if array.len() < 2 {
        return steps;
    }

    let mut left = 0;
    let mut right = array.len() - 1;
    let mut ops = 0;

    while left < right {
        ops += 1;
        let sum = array[left].saturating_add(array[right]);

        let (phase, explanation) = if sum == target {
            (
                PointerPhase::Found,
                format!(
                    "Found! {} + {} = {} at indices {} and {}.",
                    array[left], array[right], target, left, right
                ),
            )
        } else if sum < target {
            let phase = if left + 1 >= right {
                PointerPhase::NotFound
            } else {
                PointerPhase::AdvanceLeft
            };
            (
                phase,
                format!(
                    "{} + {} = {} < {}. Too small, move left pointer right.",
                    array[left], array[right], sum, target
                ),
            )
        } else {
            let phase = if left + 1 >= right {
                PointerPhase::NotFound
            } else {
                PointerPhase::RetreatRight
            };
            (
                phase,
                format!(
                    "{} + {} = {} > {}. Too large, move right pointer left.",
                    array[left], array[right], sum, target
                ),
            )
        };

        let explanation = if phase == PointerPhase::NotFound {
            format!("{} Pointers meet: no pair sums to {}.", explanation, target)
        } else {
            explanation
        };

        steps.push(PointerStep {
            step: steps.next_ordinal(),
            array: array.to_vec(),
            left,
            right,
            sum: Some(sum),
            target: Some(target),
            area: None,
            best: None,
            swapped: None,
            pivot: None,
            phase,
            operation_count: ops,
            explanation,
        });

        match phase {
            PointerPhase::Found | PointerPhase::NotFound => break,
            PointerPhase::AdvanceLeft => left += 1,
            _ => right -= 1,
        }
    }

    steps
}

/// Which values a same-direction scan gathers at the front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepRule {
    NonZero,
    /// Strictly below the pivot value
    BelowPivot(i64),
}

impl KeepRule {
    pub fn keeps(self, value: i64) -> bool {
        match self {
            KeepRule::NonZero => value != 0,
            KeepRule::BelowPivot(pivot) => value < pivot,
        }
    }

    /// What a kept value is called in explanations
    pub(crate) fn keeper(self) -> String {
        match self {
            KeepRule::NonZero => "a non-zero".to_string(),
            KeepRule::BelowPivot(pivot) => format!("a value below {}", pivot),
        }
    }

    /// Describe `value`, e.g. `a zero` or `9, not below 5`
    pub(crate) fn describe(self, value: i64) -> String {
        match self {
            KeepRule::NonZero if value == 0 => "a zero".to_string(),
            KeepRule::BelowPivot(pivot) if value >= pivot => {
                format!("{}, not below {}", value, pivot)
            }
            _ => value.to_string(),
        }
    }
}

/// Same-direction scan moving every non-zero value before the zeroes.
///
/// `right` visits each index once (exactly `n` steps); `left` trails as the
/// write boundary. The snapshot is taken after the step's swap, if any.
pub fn same_direction(array: &[i64]) -> StepSequence<PointerStep> {
    let mut steps = StepSequence::new();
    let mut work = array.to_vec();
    scan_keepers(&mut steps, &mut work, array.len(), KeepRule::NonZero, None);
    steps
}

/// Lomuto partition around the last element.
///
/// `right` scans `0..n-1` swapping every value below the pivot to the
/// boundary, then one final step swaps the pivot onto the boundary: exactly
/// `n` steps in all.
pub fn partition(array: &[i64]) -> StepSequence<PointerStep> {
    let mut steps = StepSequence::new();
    let Some(&pivot) = array.last() else {
        return steps;
    };
    let pivot_index = array.len() - 1;

    let mut work = array.to_vec();
    let boundary = scan_keepers(
        &mut steps,
        &mut work,
        pivot_index,
        KeepRule::BelowPivot(pivot),
        Some(pivot_index),
    );

    work.swap(boundary, pivot_index);
    steps.push(PointerStep {
        step: steps.next_ordinal(),
        array: work,
        left: boundary,
        right: pivot_index,
        sum: None,
        target: None,
        area: None,
        best: None,
        swapped: (boundary != pivot_index).then_some((boundary, pivot_index)),
        pivot: Some(boundary),
        phase: PointerPhase::Complete,
        operation_count: steps.last_operation_count() + 1,
        explanation: format!(
            "Scan done. Swap pivot {} onto the boundary: it now sits at index {}.",
            pivot, boundary
        ),
    });

    steps
}

/// Visit `work[..end]` once, swapping every value `rule` keeps to the
/// trailing boundary. Returns the final boundary.
fn scan_keepers(
    steps: &mut StepSequence<PointerStep>,
    work: &mut [i64],
    end: usize,
    rule: KeepRule,
    pivot: Option<usize>,
) -> usize {
    let mut left = 0;

    for right in 0..end {
        let value = work[right];
        let kept = rule.keeps(value);

        let (phase, swapped, explanation) = if !kept {
            (
                PointerPhase::Skip,
                None,
                format!(
                    "Index {} holds {}. Leave it behind the boundary.",
                    right,
                    rule.describe(value)
                ),
            )
        } else if right != left {
            work.swap(left, right);
            (
                PointerPhase::Swap,
                Some((left, right)),
                format!(
                    "{} at index {} is {}. Swap it to the boundary at index {}.",
                    value,
                    right,
                    rule.keeper(),
                    left
                ),
            )
        } else {
            (
                PointerPhase::Keep,
                None,
                format!(
                    "{} is {} already at the boundary. Boundary moves right.",
                    value,
                    rule.keeper()
                ),
            )
        };

        steps.push(PointerStep {
            step: steps.next_ordinal(),
            array: work.to_vec(),
            left,
            right,
            sum: None,
            target: None,
            area: None,
            best: None,
            swapped,
            pivot,
            phase,
            operation_count: steps.last_operation_count() + 1,
            explanation,
        });

        if kept {
            left += 1;
        }
    }

    left
}

/// Container with most water: pointers at both ends, the shorter side moves in.
pub fn container(heights: &[i64]) -> StepSequence<PointerStep> {
    let mut steps = StepSequence::new();
    if heights.len() < 2 {
        return steps;
    }

    let mut left = 0;
    let mut right = heights.len() - 1;
    let mut best = i64::MIN;
    let mut ops = 0;

    while left < right {
        ops += 1;
        let height = heights[left].min(heights[right]);
        let area = height.saturating_mul((right - left) as i64);
        best = best.max(area);

        let move_left = heights[left] < heights[right];
        let (next_left, next_right) = if move_left {
            (left + 1, right)
        } else {
            (left, right - 1)
        };

        let phase = if next_left >= next_right {
            PointerPhase::Complete
        } else if move_left {
            PointerPhase::AdvanceLeft
        } else {
            PointerPhase::RetreatRight
        };

        let mut explanation = format!(
            "Height min({}, {}) = {}, width {}, area {}. Max so far {}.",
            heights[left],
            heights[right],
            height,
            right - left,
            area,
            best
        );
        if phase == PointerPhase::Complete {
            explanation.push_str(&format!(" Pointers meet. Max area is {}.", best));
        } else if move_left {
            explanation.push_str(" Left side is shorter, move it inward.");
        } else {
            explanation.push_str(" Right side is not taller, move it inward.");
        }

        steps.push(PointerStep {
            step: steps.next_ordinal(),
            array: heights.to_vec(),
            left,
            right,
            sum: None,
            target: None,
            area: Some(area),
            best: Some(best),
            swapped: None,
            pivot: None,
            phase,
            operation_count: ops,
            explanation,
        });

        left = next_left;
        right = next_right;
    }

    steps
}

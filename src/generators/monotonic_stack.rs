//! Monotonic-stack generator for next-greater / next-smaller queries

use crate::model::stack::{StackPhase, StackStep};
use crate::model::StepSequence;
use serde::Serialize;

/// Relation the next element must have with the pending one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Greater,
    Smaller,
}

impl Direction {
    /// Whether `candidate` resolves a pending element holding `pending`
    pub fn resolves(self, candidate: i64, pending: i64) -> bool {
        match self {
            Direction::Greater => candidate > pending,
            Direction::Smaller => candidate < pending,
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            Direction::Greater => "greater",
            Direction::Smaller => "smaller",
        }
    }
}

/// What a resolved index records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The matching value itself
    Value,
    /// How many indices ahead the match is (daily temperatures)
    Distance,
}

impl Resolution {
    pub fn answer(self, array: &[i64], pending: usize, matched: usize) -> i64 {
        match self {
            Resolution::Value => array[matched],
            Resolution::Distance => (matched - pending) as i64,
        }
    }
}

/// Left-to-right scan keeping a stack of unresolved indices.
///
/// Every comparison against the stack top emits a step: a successful one is a
/// [`StackPhase::Pop`], the failing one that ends the pop loop is a
/// [`StackPhase::Compare`]. Each push emits a step, and a final
/// [`StackPhase::Finished`] step leaves the remaining indices at `-1`.
pub fn next_match(
    array: &[i64],
    direction: Direction,
    resolution: Resolution,
) -> StepSequence<StackStep> {
    let mut steps = StepSequence::new();
    if array.is_empty() {
        return steps;
    }

    let mut results = vec![-1; array.len()];
    let mut stack: Vec<usize> = Vec::new();
    let mut ops = 0;

    for current in 0..array.len() {
        let value = array[current];

        while let Some(&top) = stack.last() {
            ops += 1;
            let top_value = array[top];

            if direction.resolves(value, top_value) {
                let answer = resolution.answer(array, top, current);
                results[top] = answer;
                stack.pop();
                steps.push(StackStep {
                    step: steps.next_ordinal(),
                    array: array.to_vec(),
                    stack: stack.clone(),
                    current,
                    compared_with: Some(top),
                    results: results.clone(),
                    phase: StackPhase::Pop,
                    operation_count: ops,
                    explanation: format!(
                        "{} is {} than {} (index {}). Pop {} and record {}.",
                        value,
                        direction.word(),
                        top_value,
                        top,
                        top,
                        answer
                    ),
                });
            } else {
                steps.push(StackStep {
                    step: steps.next_ordinal(),
                    array: array.to_vec(),
                    stack: stack.clone(),
                    current,
                    compared_with: Some(top),
                    results: results.clone(),
                    phase: StackPhase::Compare,
                    operation_count: ops,
                    explanation: format!(
                        "{} is not {} than {} (index {}). Stop popping.",
                        value,
                        direction.word(),
                        top_value,
                        top
                    ),
                });
                break;
            }
        }

        stack.push(current);
        ops += 1;
        steps.push(StackStep {
            step: steps.next_ordinal(),
            array: array.to_vec(),
            stack: stack.clone(),
            current,
            compared_with: None,
            results: results.clone(),
            phase: StackPhase::Push,
            operation_count: ops,
            explanation: format!("Push index {} (value {}).", current, value),
        });
    }

    let leftover = stack
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    steps.push(StackStep {
        step: steps.next_ordinal(),
        array: array.to_vec(),
        stack: stack.clone(),
        current: array.len(),
        compared_with: None,
        results: results.clone(),
        phase: StackPhase::Finished,
        operation_count: ops,
        explanation: format!(
            "Scan complete. Indices [{}] have no next {} element and stay -1.",
            leftover,
            direction.word()
        ),
    });

    steps
}

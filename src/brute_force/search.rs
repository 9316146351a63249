//! Linear scans standing in for binary search

use super::{conclude, record, Probe};
use crate::model::scan::{ScanPhase, ScanStep};
use crate::model::StepSequence;

/// Compare every element with `target` until one matches
pub fn linear(array: &[i64], target: i64) -> StepSequence<ScanStep> {
    let mut steps = StepSequence::new();

    for (i, &value) in array.iter().enumerate() {
        let found = value == target;
        record(
            &mut steps,
            array,
            Probe {
                outer: i,
                value: Some(value),
                best: found.then_some(i as i64),
                phase: if found {
                    ScanPhase::Found
                } else {
                    ScanPhase::Probing
                },
                explanation: if found {
                    format!("Index {} holds {}. Found target.", i, value)
                } else {
                    format!("Index {} holds {}, not {}.", i, value, target)
                },
                ..Probe::default()
            },
        );
        if found {
            return steps;
        }
    }

    conclude(
        &mut steps,
        ScanPhase::NotFound,
        &format!("End of array: {} not found.", target),
    );
    steps
}

/// First index with `value >= target`, scanning from the left
pub fn first_at_least(array: &[i64], target: i64) -> StepSequence<ScanStep> {
    first_matching(array, target, ">=", |v| v >= target)
}

/// First index with `value > target`, scanning from the left
pub fn first_above(array: &[i64], target: i64) -> StepSequence<ScanStep> {
    first_matching(array, target, ">", |v| v > target)
}

fn first_matching(
    array: &[i64],
    target: i64,
    relation: &str,
    accepts: impl Fn(i64) -> bool,
) -> StepSequence<ScanStep> {
    let mut steps = StepSequence::new();

    for (i, &value) in array.iter().enumerate() {
        let hit = accepts(value);
        record(
            &mut steps,
            array,
            Probe {
                outer: i,
                value: Some(value),
                best: hit.then_some(i as i64),
                phase: if hit {
                    ScanPhase::Found
                } else {
                    ScanPhase::Probing
                },
                explanation: if hit {
                    format!("{} {} {}. Answer is index {}.", value, relation, target, i)
                } else {
                    format!("{} is not {} {}.", value, relation, target)
                },
                ..Probe::default()
            },
        );
        if hit {
            return steps;
        }
    }

    let past_end = array.len() as i64;
    if let Some(last) = steps.last_mut() {
        last.best = Some(past_end);
    }
    conclude(
        &mut steps,
        ScanPhase::Found,
        &format!("No element {} {}. Answer is {} (past the end).", relation, target, past_end),
    );
    steps
}

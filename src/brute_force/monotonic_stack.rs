//! Pairwise scan standing in for the monotonic stack

use super::{conclude, record, Probe};
use crate::generators::monotonic_stack::{Direction, Resolution};
use crate::model::scan::{ScanPhase, ScanStep};
use crate::model::StepSequence;

/// For every index, scan right until an element resolves it
pub fn pairwise(
    array: &[i64],
    direction: Direction,
    resolution: Resolution,
) -> StepSequence<ScanStep> {
    let mut steps = StepSequence::new();
    let n = array.len();
    let mut results = vec![-1; n];

    for i in 0..n {
        for j in i + 1..n {
            let hit = direction.resolves(array[j], array[i]);
            if hit {
                results[i] = resolution.answer(array, i, j);
            }
            record(
                &mut steps,
                array,
                Probe {
                    outer: i,
                    inner: Some(j),
                    value: Some(array[j]),
                    results: results.clone(),
                    phase: if hit {
                        ScanPhase::Match
                    } else {
                        ScanPhase::Probing
                    },
                    explanation: if hit {
                        format!(
                            "{} is {} than {}. Result for index {} is {}.",
                            array[j],
                            direction.word(),
                            array[i],
                            i,
                            results[i]
                        )
                    } else {
                        format!(
                            "Comparing {} with {}: not {}.",
                            array[i],
                            array[j],
                            direction.word()
                        )
                    },
                    ..Probe::default()
                },
            );
            if hit {
                break;
            }
        }
    }

    conclude(
        &mut steps,
        ScanPhase::Complete,
        "Every index scanned; unresolved ones stay -1.",
    );
    steps
}

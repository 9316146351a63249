//! Binary-search generators: standard, lower bound, upper bound
//!
//! Every loop iteration emits two steps: [`SearchPhase::RangeActive`] shows
//! the live range and its computed midpoint, then the compare-and-branch step
//! shows the effect. Only the comparison costs an operation.

use crate::model::search::{SearchPhase, SearchStep};
use crate::model::StepSequence;

/// Which boundary a bound search looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    /// First index with `value >= target`
    Lower,
    /// First index with `value > target`
    Upper,
}

impl Bound {
    fn accepts(self, value: i64, target: i64) -> bool {
        match self {
            Bound::Lower => value >= target,
            Bound::Upper => value > target,
        }
    }

    fn relation(self) -> &'static str {
        match self {
            Bound::Lower => ">=",
            Bound::Upper => ">",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Bound::Lower => "Lower bound",
            Bound::Upper => "Upper bound",
        }
    }
}

/// Classic search over an inclusive range; stops at equality
pub fn standard(array: &[i64], target: i64) -> StepSequence<SearchStep> {
    let mut steps = StepSequence::new();
    if array.is_empty() {
        return steps;
    }

    let mut low: isize = 0;
    let mut high: isize = array.len() as isize - 1;
    let mut ops = 0;

    let record = |steps: &mut StepSequence<SearchStep>,
                  low: isize,
                  high: isize,
                  mid: Option<usize>,
                  answer: Option<usize>,
                  phase: SearchPhase,
                  ops: u64,
                  explanation: String| {
        steps.push(SearchStep {
            step: steps.next_ordinal(),
            array: array.to_vec(),
            target,
            low,
            high,
            exclusive_high: false,
            mid,
            answer,
            phase,
            operation_count: ops,
            explanation,
        });
    };

    while low <= high {
        let mid = (low + (high - low) / 2) as usize;
        let value = array[mid];

        record(
            &mut steps,
            low,
            high,
            Some(mid),
            None,
            SearchPhase::RangeActive,
            ops,
            format!(
                "Searching [{}, {}]. Mid index {} holds {}.",
                low, high, mid, value
            ),
        );

        ops += 1;
        if value == target {
            record(
                &mut steps,
                low,
                high,
                Some(mid),
                Some(mid),
                SearchPhase::Found,
                ops,
                format!("{} == {}. Found target at index {}.", value, target, mid),
            );
            return steps;
        }

        if value < target {
            record(
                &mut steps,
                low,
                high,
                Some(mid),
                None,
                SearchPhase::Eliminating,
                ops,
                format!(
                    "{} < {}. Target is to the right, discard [{}..{}].",
                    value, target, low, mid
                ),
            );
            low = mid as isize + 1;
        } else {
            record(
                &mut steps,
                low,
                high,
                Some(mid),
                None,
                SearchPhase::Eliminating,
                ops,
                format!(
                    "{} > {}. Target is to the left, discard [{}..{}].",
                    value, target, mid, high
                ),
            );
            high = mid as isize - 1;
        }
    }

    record(
        &mut steps,
        low,
        high,
        None,
        None,
        SearchPhase::NotFound,
        ops,
        format!(
            "Low ({}) passed high ({}). {} is not in the array.",
            low, high, target
        ),
    );
    steps
}

/// First index whose value is `>= target`; `n` when every value is smaller
pub fn lower_bound(array: &[i64], target: i64) -> StepSequence<SearchStep> {
    bound_search(array, target, Bound::Lower)
}

/// First index whose value is `> target`; `n` when no value is larger
pub fn upper_bound(array: &[i64], target: i64) -> StepSequence<SearchStep> {
    bound_search(array, target, Bound::Upper)
}

fn bound_search(array: &[i64], target: i64, bound: Bound) -> StepSequence<SearchStep> {
    let mut steps = StepSequence::new();
    if array.is_empty() {
        return steps;
    }

    let n = array.len();
    let mut low: usize = 0;
    let mut high: usize = n;
    let mut answer = n;
    let mut ops = 0;

    let record = |steps: &mut StepSequence<SearchStep>,
                  low: usize,
                  high: usize,
                  mid: Option<usize>,
                  answer: Option<usize>,
                  phase: SearchPhase,
                  ops: u64,
                  explanation: String| {
        steps.push(SearchStep {
            step: steps.next_ordinal(),
            array: array.to_vec(),
            target,
            low: low as isize,
            high: high as isize,
            exclusive_high: true,
            mid,
            answer,
            phase,
            operation_count: ops,
            explanation,
        });
    };

    while low < high {
        let mid = low + (high - low) / 2;
        let value = array[mid];

        record(
            &mut steps,
            low,
            high,
            Some(mid),
            None,
            SearchPhase::RangeActive,
            ops,
            format!(
                "{}: first element {} {} in [{}, {}). Mid index {} holds {}.",
                bound.name(),
                bound.relation(),
                target,
                low,
                high,
                mid,
                value
            ),
        );

        ops += 1;
        if bound.accepts(value, target) {
            answer = mid;
            record(
                &mut steps,
                low,
                high,
                Some(mid),
                None,
                SearchPhase::Eliminating,
                ops,
                format!(
                    "{} {} {}. Candidate at {}, keep looking left.",
                    value,
                    bound.relation(),
                    target,
                    mid
                ),
            );
            high = mid;
        } else {
            record(
                &mut steps,
                low,
                high,
                Some(mid),
                None,
                SearchPhase::Eliminating,
                ops,
                format!(
                    "{} is not {} {}. Answer lies right of {}.",
                    value,
                    bound.relation(),
                    target,
                    mid
                ),
            );
            low = mid + 1;
        }
    }

    let shown = match array.get(answer) {
        Some(v) => format!("value {}", v),
        None => "past the end".to_string(),
    };
    record(
        &mut steps,
        low,
        high,
        None,
        Some(answer),
        SearchPhase::Found,
        ops,
        format!("{} is index {} ({}).", bound.name(), answer, shown),
    );
    steps
}

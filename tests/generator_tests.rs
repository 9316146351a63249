// Integration tests for the optimal step generators

use stepscope::catalog::{Algorithm, Family};
use stepscope::config::SimulationConfig;
use stepscope::generators::monotonic_stack::{next_match, Direction, Resolution};
use stepscope::generators::{
    binary_search, generate_optimal, sliding_window, two_pointer, Trace,
};
use stepscope::model::pointers::PointerPhase;
use stepscope::model::search::{SearchPhase, SearchStep};
use stepscope::model::stack::StackPhase;
use stepscope::model::window::WindowPhase;
use stepscope::model::StepSequence;

const SORTED: [i64; 6] = [2, 5, 7, 8, 11, 15];

/// Ordinals are 0..len and operation counts never decrease
fn assert_well_formed(trace: &Trace) {
    let mut previous = 0;
    for i in 0..trace.len() {
        let step = trace.step(i).expect("step in range");
        assert_eq!(step.ordinal(), i, "ordinal gap at {}", i);
        assert!(
            step.operation_count() >= previous,
            "operation count decreased at {}",
            i
        );
        previous = step.operation_count();
    }
}

#[test]
fn test_every_preset_is_deterministic_and_well_formed() {
    for algorithm in Algorithm::ALL {
        let config = SimulationConfig::preset(algorithm);
        let first = generate_optimal(&config);
        let second = generate_optimal(&config);

        assert_eq!(first, second, "{:?} is not deterministic", algorithm);
        assert!(!first.is_empty(), "{:?} produced no steps", algorithm);
        assert_well_formed(&first);
        if matches!(
            algorithm.family(),
            Family::BinarySearch | Family::MonotonicStack
        ) {
            assert!(
                first.last().is_some_and(|s| s.is_terminal()),
                "{:?} does not end on a terminal step",
                algorithm
            );
        }
    }
}

#[test]
fn test_hand_picked_inputs_are_deterministic_and_well_formed() {
    let configs = [
        SimulationConfig::new(Algorithm::VariableWindow, vec![3, -1, 4, -2, 5], 4),
        SimulationConfig::new(Algorithm::VariableWindow, vec![-5, 10, -3], 6),
        SimulationConfig::new(Algorithm::BinarySearch, vec![1, 2, 2, 2, 3], 2),
        SimulationConfig::new(Algorithm::LowerBound, vec![1, 2, 2, 2, 3], 2),
        SimulationConfig::new(Algorithm::UpperBound, vec![1, 2, 2, 2, 3], 2),
        SimulationConfig::new(Algorithm::LowerBound, vec![5, 5, 5], 9),
        SimulationConfig::new(Algorithm::TwoSumSorted, vec![-3, -1, 0, 2], -1),
        SimulationConfig::new(Algorithm::MoveZeroes, vec![0, 0, 0], 0),
        SimulationConfig::new(Algorithm::Partition, vec![5, 5, 5, 5], 0),
        SimulationConfig::new(Algorithm::FixedWindow, vec![-1, -2, -3], 3),
        SimulationConfig::new(Algorithm::ExactK, vec![1, 1, 1, 2], 1),
        SimulationConfig::new(Algorithm::AtMostK, vec![4, 4, 4], 1),
        SimulationConfig::new(Algorithm::NextSmaller, vec![2, 2, 2], 0),
        SimulationConfig::new(Algorithm::DailyTemperatures, vec![30, 60, 90], 0),
    ];

    for config in &configs {
        let first = generate_optimal(config);
        assert_eq!(first, generate_optimal(config), "{:?}", config);
        assert!(!first.is_empty(), "{:?} produced no steps", config);
        assert_well_formed(&first);
    }

    // Duplicates: the bounds bracket the run of 2s
    assert_eq!(answer(binary_search::lower_bound(&[1, 2, 2, 2, 3], 2)), Some(1));
    assert_eq!(answer(binary_search::upper_bound(&[1, 2, 2, 2, 3], 2)), Some(4));
}

#[test]
fn test_degenerate_input_yields_empty_sequences() {
    for algorithm in Algorithm::ALL {
        let config = SimulationConfig::new(algorithm, Vec::new(), algorithm.preset_param());
        assert!(generate_optimal(&config).is_empty(), "{:?}", algorithm);
    }

    let input = [1, 2, 3];
    assert!(sliding_window::fixed_window(&input, 4).is_empty());
    assert!(sliding_window::fixed_window(&input, 0).is_empty());
    assert!(sliding_window::at_most_k(&input, 4).is_empty());
    assert!(sliding_window::at_most_k(&input, -1).is_empty());
    assert!(sliding_window::exact_k(&input, 4).is_empty());
    assert!(sliding_window::exact_k(&input, 0).is_empty());
    assert!(sliding_window::variable_window(&input, 0).is_empty());
    assert!(two_pointer::opposite_direction(&[5], 5).is_empty());
}

// ========== Two pointers ==========

#[test]
fn test_two_sum_finds_pair() {
    let steps = two_pointer::opposite_direction(&SORTED, 13);
    let last = steps.last().unwrap();

    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].phase, PointerPhase::RetreatRight);
    assert_eq!(last.phase, PointerPhase::Found);
    assert_eq!((last.left, last.right), (0, 4));
}

#[test]
fn test_two_sum_missing_pair_ends_not_found() {
    let steps = two_pointer::opposite_direction(&SORTED, 100);

    // One comparison per pointer move, at most n - 1
    assert_eq!(steps.len(), SORTED.len() - 1);
    assert_eq!(steps.last().unwrap().phase, PointerPhase::NotFound);
    assert_eq!(steps.iter().filter(|s| s.phase == PointerPhase::NotFound).count(), 1);
}

#[test]
fn test_move_zeroes_one_step_per_index() {
    let input = [0, 1, 0, 3, 12];
    let steps = two_pointer::same_direction(&input);

    assert_eq!(steps.len(), input.len());
    assert_eq!(steps.last().unwrap().array, vec![1, 3, 12, 0, 0]);
    // Earlier snapshots keep the array as it was
    assert_eq!(steps[0].array, vec![0, 1, 0, 3, 12]);
    assert!(steps.iter().any(|s| s.swapped.is_some()));
}

#[test]
fn test_partition_places_pivot_in_n_steps() {
    let input = [7, 2, 9, 4, 1, 6, 5];
    let steps = two_pointer::partition(&input);
    let last = steps.last().unwrap();

    assert_eq!(steps.len(), input.len());
    assert_eq!(last.array, vec![2, 4, 1, 5, 9, 6, 7]);
    assert_eq!(last.pivot, Some(3));
    assert_eq!(last.swapped, Some((3, 6)));
    assert_eq!(last.phase, PointerPhase::Complete);
    // 7, 9 and 6 stay put; 2, 4 and 1 are swapped to the boundary
    assert_eq!(
        steps.iter().filter(|s| s.phase == PointerPhase::Swap).count(),
        3
    );
    assert_eq!(steps[0].pivot, Some(6));
}

#[test]
fn test_partition_edges() {
    // Pivot is already the smallest: nothing moves until the final swap
    let steps = two_pointer::partition(&[3, 2, 1]);
    assert_eq!(steps.len(), 3);
    assert_eq!(steps.last().unwrap().array, vec![1, 2, 3]);

    let single = two_pointer::partition(&[4]);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].swapped, None);
    assert!(two_pointer::partition(&[]).is_empty());
}

#[test]
fn test_container_max_area() {
    let steps = two_pointer::container(&[1, 8, 6, 2, 5, 4, 8, 3, 7]);
    let last = steps.last().unwrap();

    assert!(steps.len() <= 8);
    assert_eq!(last.best, Some(49));
    assert_eq!(last.phase, PointerPhase::Complete);
}

// ========== Sliding window ==========

#[test]
fn test_fixed_window_complete_count() {
    let input = [2, 5, 1, 8, 2, 9, 1];
    for k in 1..=input.len() {
        let steps = sliding_window::fixed_window(&input, k as i64);
        let complete = steps
            .iter()
            .filter(|s| s.phase == WindowPhase::WindowComplete)
            .count();

        assert_eq!(steps.len(), input.len());
        assert_eq!(complete, input.len() - k + 1, "k = {}", k);
    }

    let steps = sliding_window::fixed_window(&input, 3);
    assert_eq!(steps.last().unwrap().best, Some(19));
    // 3 adds while filling, then 2 per slide
    assert_eq!(steps.last().unwrap().operation_count, 3 + 2 * 4);
}

#[test]
fn test_variable_window_emits_every_shrink() {
    let steps = sliding_window::variable_window(&[2, 3, 1, 2, 4, 3], 7);
    let last = steps.last().unwrap();

    assert_eq!(last.best, Some(2));
    let shrinks = steps
        .iter()
        .filter(|s| s.phase == WindowPhase::Shrinking)
        .count();
    // [2,3,1,2], [3,1,2,4], [1,2,4], [2,4,3], [4,3]
    assert_eq!(shrinks, 5);
}

#[test]
fn test_variable_window_settles_after_each_shrink_run() {
    let steps = sliding_window::variable_window(&[2, 3, 1, 2, 4, 3], 7);

    let settled: Vec<_> = steps
        .iter()
        .filter(|s| s.phase == WindowPhase::Settled)
        .collect();
    // After right = 3, 4 and 5
    assert_eq!(settled.len(), 3);
    for step in &settled {
        assert!(!step.condition_met);
        assert_eq!(step.operation_count, steps[step.step - 1].operation_count);
    }

    let last = steps.last().unwrap();
    assert_eq!(last.phase, WindowPhase::Settled);
    assert_eq!((last.left, last.right, last.sum), (5, 5, Some(3)));
}

#[test]
fn test_at_most_k_contributions_are_recorded() {
    let steps = sliding_window::at_most_k(&[1, 2, 1, 2, 3], 2);
    let contributions: Vec<u64> = steps.iter().filter_map(|s| s.contribution).collect();

    assert_eq!(contributions, vec![1, 2, 3, 4, 2]);
    assert_eq!(steps.last().unwrap().total, Some(12));
}

#[test]
fn test_exact_k_identity() {
    let arrays: [&[i64]; 4] = [
        &[1, 2, 1, 2, 3],
        &[1, 2, 1, 3, 4],
        &[5, 5, 5, 5],
        &[3, 1, 4, 1, 5, 9, 2, 6],
    ];

    for array in arrays {
        for k in 1..=array.len() as i64 {
            let exact = sliding_window::exact_k(array, k);
            let at_most = sliding_window::at_most_k(array, k);
            let below = if k > 1 {
                sliding_window::at_most_k(array, k - 1)
                    .last()
                    .and_then(|s| s.total)
                    .unwrap_or(0)
            } else {
                0
            };

            let exact_total = exact.last().and_then(|s| s.total).unwrap_or(0);
            let at_most_total = at_most.last().and_then(|s| s.total).unwrap_or(0);
            assert_eq!(exact_total, at_most_total - below, "{:?}, k = {}", array, k);
            // Mirrors the k trace step for step
            assert_eq!(exact.len(), at_most.len());
        }
    }

    let exact = sliding_window::exact_k(&[1, 2, 1, 2, 3], 2);
    assert_eq!(exact.last().unwrap().total, Some(7));
}

// ========== Binary search ==========

#[test]
fn test_standard_search_found_and_not_found() {
    let found = binary_search::standard(&SORTED, 8);
    let last = found.last().unwrap();
    assert_eq!(last.phase, SearchPhase::Found);
    assert_eq!(last.answer, Some(3));

    let missing = binary_search::standard(&SORTED, 9);
    assert_eq!(missing.last().unwrap().phase, SearchPhase::NotFound);
}

#[test]
fn test_search_shows_midpoint_before_effect() {
    let steps = binary_search::standard(&SORTED, 8);

    for pair in steps.as_slice().chunks(2) {
        assert_eq!(pair[0].phase, SearchPhase::RangeActive);
        if let Some(effect) = pair.get(1) {
            assert_eq!(effect.mid, pair[0].mid);
            assert_eq!(effect.operation_count, pair[0].operation_count + 1);
        }
    }
}

fn answer(steps: StepSequence<SearchStep>) -> Option<usize> {
    let last = steps.last().unwrap();
    assert_eq!(last.phase, SearchPhase::Found);
    last.answer
}

#[test]
fn test_bound_edges() {
    assert_eq!(answer(binary_search::lower_bound(&SORTED, 1)), Some(0));
    assert_eq!(answer(binary_search::lower_bound(&SORTED, 20)), Some(6));
    assert_eq!(answer(binary_search::lower_bound(&SORTED, 8)), Some(3));
    assert_eq!(answer(binary_search::upper_bound(&[1, 1, 1], 1)), Some(3));
    assert_eq!(answer(binary_search::upper_bound(&SORTED, 8)), Some(4));
}

#[test]
fn test_single_element_bound_still_reports() {
    let steps = binary_search::lower_bound(&[4], 9);
    assert_eq!(steps.last().unwrap().answer, Some(1));
}

// ========== Monotonic stack ==========

#[test]
fn test_next_greater_and_smaller() {
    let greater = next_match(&[2, 1, 2, 4, 3], Direction::Greater, Resolution::Value);
    assert_eq!(greater.last().unwrap().results, vec![4, 2, 4, -1, -1]);
    assert_eq!(greater.last().unwrap().phase, StackPhase::Finished);

    let smaller = next_match(&[4, 5, 2, 10, 8], Direction::Smaller, Resolution::Value);
    assert_eq!(smaller.last().unwrap().results, vec![2, 2, -1, 8, -1]);
}

#[test]
fn test_daily_temperatures_distance() {
    let steps = next_match(
        &[73, 74, 75, 71, 69, 72, 76, 73],
        Direction::Greater,
        Resolution::Distance,
    );
    assert_eq!(steps.last().unwrap().results, vec![1, 1, 4, 2, 1, 1, -1, -1]);
}

#[test]
fn test_stack_records_failed_comparisons() {
    // 3 then 1: comparing 1 against 3 fails and must still cost a step
    let steps = next_match(&[3, 1], Direction::Greater, Resolution::Value);
    let phases: Vec<StackPhase> = steps.iter().map(|s| s.phase).collect();

    assert_eq!(
        phases,
        vec![
            StackPhase::Push,
            StackPhase::Compare,
            StackPhase::Push,
            StackPhase::Finished
        ]
    );
    assert_eq!(steps.last().unwrap().operation_count, 3);
}

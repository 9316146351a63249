// Integration tests for the brute-force counterparts

use stepscope::brute_force::{
    generate_brute_force, monotonic_stack, search, sliding_window, two_pointer,
};
use stepscope::catalog::Algorithm;
use stepscope::config::SimulationConfig;
use stepscope::generators::monotonic_stack::{Direction, Resolution};
use stepscope::generators::{generate_optimal, Trace};
use stepscope::model::scan::{ScanPhase, ScanStep};
use stepscope::model::StepSequence;

const SORTED: [i64; 6] = [2, 5, 7, 8, 11, 15];

fn last(steps: &StepSequence<ScanStep>) -> &ScanStep {
    steps.last().expect("non-empty trace")
}

#[test]
fn test_every_step_is_one_probe() {
    for algorithm in Algorithm::ALL {
        let trace = generate_brute_force(&SimulationConfig::preset(algorithm));
        let Trace::Scan(steps) = &trace else {
            panic!("{:?} brute force is not a scan", algorithm);
        };

        assert!(!steps.is_empty(), "{:?}", algorithm);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step, i);
            assert_eq!(step.operation_count, i as u64 + 1, "{:?} at {}", algorithm, i);
        }
        assert!(
            matches!(
                last(steps).phase,
                ScanPhase::Complete | ScanPhase::Found | ScanPhase::NotFound
            ),
            "{:?} ends on {:?}",
            algorithm,
            last(steps).phase
        );
    }
}

#[test]
fn test_degenerate_input_yields_empty_sequences() {
    for algorithm in Algorithm::ALL {
        let config = SimulationConfig::new(algorithm, Vec::new(), algorithm.preset_param());
        assert!(generate_brute_force(&config).is_empty(), "{:?}", algorithm);
    }

    assert!(sliding_window::fixed_window(&[1, 2], 3).is_empty());
    assert!(sliding_window::at_most_k(&[1, 2], 0).is_empty());
    assert!(sliding_window::exact_k(&[1, 2], -3).is_empty());
    assert!(sliding_window::variable_window(&[1, 2], -1).is_empty());
}

#[test]
fn test_pair_sum_stops_at_first_match() {
    let steps = two_pointer::pair_sum(&SORTED, 13);

    // (0,1) (0,2) (0,3) (0,4)
    assert_eq!(steps.len(), 4);
    assert_eq!(last(&steps).phase, ScanPhase::Found);
    assert_eq!((last(&steps).outer, last(&steps).inner), (0, Some(4)));

    let missing = two_pointer::pair_sum(&[1, 2, 3], 10);
    assert_eq!(missing.len(), 3);
    assert_eq!(last(&missing).phase, ScanPhase::NotFound);
}

#[test]
fn test_move_zeroes_matches_optimal_result() {
    let steps = two_pointer::move_zeroes(&[0, 1, 0, 3, 12]);

    assert_eq!(last(&steps).array, vec![1, 3, 12, 0, 0]);
    assert_eq!(last(&steps).phase, ScanPhase::Complete);
    assert_eq!(steps[0].array, vec![0, 1, 0, 3, 12]);
}

#[test]
fn test_partition_by_forward_search() {
    let steps = two_pointer::partition(&[7, 2, 9, 4, 1, 6, 5]);
    let last = last(&steps);

    assert_eq!(last.array, vec![2, 4, 1, 5, 9, 6, 7]);
    assert_eq!(last.phase, ScanPhase::Complete);
    assert_eq!(last.swapped, Some((3, 6)));
    assert_eq!(steps.len(), 13);
}

#[test]
fn test_container_checks_every_pair() {
    let heights = [1, 8, 6, 2, 5, 4, 8, 3, 7];
    let steps = two_pointer::container(&heights);

    assert_eq!(steps.len(), heights.len() * (heights.len() - 1) / 2);
    assert_eq!(last(&steps).best, Some(49));
}

#[test]
fn test_fixed_window_recomputes_each_window() {
    let steps = sliding_window::fixed_window(&[2, 5, 1, 8, 2, 9, 1], 3);

    // (n - k + 1) windows of k additions
    assert_eq!(steps.len(), 5 * 3);
    assert_eq!(last(&steps).best, Some(19));
    assert_eq!(
        steps.iter().filter(|s| s.phase == ScanPhase::Match).count(),
        4
    );
}

#[test]
fn test_variable_window_extends_until_target() {
    let steps = sliding_window::variable_window(&[2, 3, 1, 2, 4, 3], 7);

    // 4 + 4 + 3 + 3 + 2 + 1 probes
    assert_eq!(steps.len(), 17);
    assert_eq!(last(&steps).best, Some(2));
}

#[test]
fn test_distinct_counts_agree_with_optimal() {
    let input = [1, 2, 1, 2, 3];

    let at_most = sliding_window::at_most_k(&input, 2);
    assert_eq!(at_most.len(), 15);
    assert_eq!(last(&at_most).best, Some(12));

    let exact = sliding_window::exact_k(&input, 2);
    assert_eq!(last(&exact).best, Some(7));
}

#[test]
fn test_linear_searches() {
    let found = search::linear(&SORTED, 8);
    assert_eq!(found.len(), 4);
    assert_eq!(last(&found).phase, ScanPhase::Found);
    assert_eq!(last(&found).best, Some(3));

    let missing = search::linear(&SORTED, 9);
    assert_eq!(missing.len(), SORTED.len());
    assert_eq!(last(&missing).phase, ScanPhase::NotFound);

    assert_eq!(last(&search::first_at_least(&SORTED, 1)).best, Some(0));
    assert_eq!(last(&search::first_at_least(&SORTED, 20)).best, Some(6));
    assert_eq!(last(&search::first_above(&[1, 1, 1], 1)).best, Some(3));
    assert_eq!(last(&search::first_above(&[1, 1, 1], 1)).phase, ScanPhase::Found);
}

#[test]
fn test_pairwise_scan_matches_stack_results() {
    for algorithm in [
        Algorithm::NextGreater,
        Algorithm::NextSmaller,
        Algorithm::DailyTemperatures,
    ] {
        let config = SimulationConfig::preset(algorithm);
        let (Trace::Scan(brute), Trace::Stack(optimal)) =
            (generate_brute_force(&config), generate_optimal(&config))
        else {
            panic!("unexpected trace kinds for {:?}", algorithm);
        };

        assert_eq!(
            last(&brute).results,
            optimal.last().unwrap().results,
            "{:?}",
            algorithm
        );
    }

    let steps = monotonic_stack::pairwise(&[3, 2, 1], Direction::Greater, Resolution::Value);
    // Nothing resolves: every pair is probed
    assert_eq!(steps.len(), 3);
    assert_eq!(last(&steps).results, vec![-1, -1, -1]);
}

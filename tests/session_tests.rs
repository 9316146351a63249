// Integration tests for sessions and comparison stats

use std::time::Instant;
use stepscope::catalog::Algorithm;
use stepscope::comparison::ComparisonStats;
use stepscope::config::SimulationConfig;
use stepscope::playback::{PlaybackState, BASE_INTERVAL};
use stepscope::session::{Session, ViewMode};

fn session(algorithm: Algorithm) -> Session {
    Session::new(SimulationConfig::preset(algorithm), ViewMode::Comparison)
}

#[test]
fn test_stats_formula() {
    let stats = ComparisonStats::from_lengths(12, 5);

    assert_eq!(stats.saved_ops, 7);
    // 7 / 12 = 58.33%
    assert_eq!(stats.efficiency_gain, 58);

    let tied = ComparisonStats::from_lengths(0, 0);
    assert_eq!(tied.saved_ops, 0);
    assert_eq!(tied.efficiency_gain, 0);

    // Optimal costing more is reported, not clamped
    let worse = ComparisonStats::from_lengths(4, 6);
    assert_eq!(worse.saved_ops, -2);
    assert_eq!(worse.efficiency_gain, -50);
}

#[test]
fn test_session_stats_follow_traces() {
    let session = session(Algorithm::TwoSumSorted);
    let stats = session.stats();

    assert_eq!(stats.brute_force_steps, session.brute_force().len());
    assert_eq!(stats.optimal_steps, session.optimal().len());
    assert_eq!(stats.brute_force_ops, session.brute_force().total_operations());
    assert_eq!(stats.optimal_ops, session.optimal().total_operations());
    // 4 pair probes against 2 pointer comparisons
    assert_eq!((stats.brute_force_steps, stats.optimal_steps), (4, 2));
    assert_eq!(stats.efficiency_gain, 50);
}

#[test]
fn test_comparison_timeline_uses_longer_trace() {
    let mut session = session(Algorithm::Container);
    let brute = session.brute_force().len();
    let optimal = session.optimal().len();
    assert!(brute > optimal);
    assert_eq!(session.timeline_len(), brute);

    session.controller_mut().seek(optimal + 3);
    assert_eq!(session.optimal_index(), Some(optimal - 1));
    assert_eq!(session.brute_force_index(), Some(optimal + 3));
    assert_eq!(
        session.current_optimal().map(|s| s.ordinal()),
        Some(optimal - 1)
    );
}

#[test]
fn test_mode_selects_timeline() {
    let mut session = session(Algorithm::FixedWindow);
    session.controller_mut().seek(3);

    session.set_mode(ViewMode::Optimal);
    assert_eq!(session.timeline_len(), session.optimal().len());
    assert_eq!(session.controller().current_index(), 0);

    session.set_mode(ViewMode::BruteForce);
    assert_eq!(session.controller().total_steps(), session.brute_force().len());
}

#[test]
fn test_reconfigure_regenerates_and_rewinds() {
    let start = Instant::now();
    let mut session = session(Algorithm::BinarySearch);
    session.controller_mut().play(start);
    session.controller_mut().tick(start + BASE_INTERVAL);
    assert_eq!(session.controller().current_index(), 1);

    let config = SimulationConfig::new(Algorithm::UpperBound, vec![1, 1, 1], 1);
    session.reconfigure(config.clone());

    let controller = session.controller();
    assert_eq!(controller.state(), PlaybackState::Idle);
    assert_eq!(controller.current_index(), 0);
    assert!(!controller.is_armed());
    assert_eq!(session.config(), &config);
    assert_eq!(controller.total_steps(), session.timeline_len());
    assert_eq!(
        session.stats(),
        &ComparisonStats::between(session.brute_force(), session.optimal())
    );
}

#[test]
fn test_reconfigure_to_degenerate_input() {
    let mut session = session(Algorithm::ExactK);
    session.reconfigure(SimulationConfig::new(Algorithm::ExactK, vec![1, 2], 5));

    assert!(session.optimal().is_empty());
    assert!(session.brute_force().is_empty());
    assert_eq!(session.timeline_len(), 0);
    assert!(session.current_optimal().is_none());
    assert!(session.outcome().is_none());
    assert!(!session.controller_mut().play(Instant::now()));
}

#[test]
fn test_outcome_only_at_the_end() {
    let mut session = session(Algorithm::BinarySearch);
    assert!(session.outcome().is_none());

    session.controller_mut().seek(usize::MAX);
    let outcome = session.outcome().expect("outcome at last index");

    assert_eq!(outcome.algorithm, Algorithm::BinarySearch);
    let optimal = outcome.optimal.expect("optimal outcome");
    assert_eq!(optimal.phase, "found");
    assert!(optimal.terminal);
    assert_eq!(optimal.steps, session.optimal().len());
    let brute = outcome.brute_force.expect("brute force outcome");
    assert_eq!(brute.operations, 4);
}

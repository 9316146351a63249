//! A single simulation run
//!
//! [`Session`] owns the config, both traces, their comparison stats and the
//! playback controller. Every change of algorithm, input or parameter goes
//! through [`Session::reconfigure`], which drops the old traces and rewinds
//! the controller in the same call, so the renderer never sees a controller
//! pointing into a stale trace.

use crate::brute_force::generate_brute_force;
use crate::catalog::Algorithm;
use crate::comparison::ComparisonStats;
use crate::config::SimulationConfig;
use crate::generators::{generate_optimal, Trace};
use crate::model::AlgorithmStep;
use crate::playback::PlaybackController;
use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use std::fmt;

/// Which trace(s) drive the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Optimal,
    BruteForce,
    /// Both traces on one timeline
    Comparison,
}

impl ViewMode {
    /// Cycle order used by the viewer
    pub fn next(self) -> Self {
        match self {
            ViewMode::Comparison => ViewMode::Optimal,
            ViewMode::Optimal => ViewMode::BruteForce,
            ViewMode::BruteForce => ViewMode::Comparison,
        }
    }

    pub fn shows_optimal(self) -> bool {
        self != ViewMode::BruteForce
    }

    pub fn shows_brute_force(self) -> bool {
        self != ViewMode::Optimal
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Optimal => "optimal",
            ViewMode::BruteForce => "brute force",
            ViewMode::Comparison => "comparison",
        };
        f.write_str(name)
    }
}

/// Final state of one trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceOutcome {
    pub steps: usize,
    pub operations: u64,
    pub phase: &'static str,
    pub terminal: bool,
    pub facts: Vec<(&'static str, String)>,
}

impl TraceOutcome {
    fn of(trace: &Trace) -> Option<Self> {
        let last = trace.last()?;
        Some(TraceOutcome {
            steps: trace.len(),
            operations: last.operation_count(),
            phase: last.phase_label(),
            terminal: last.is_terminal(),
            facts: last.facts(),
        })
    }
}

/// What an observer can read once a run has been played to the end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub algorithm: Algorithm,
    pub optimal: Option<TraceOutcome>,
    pub brute_force: Option<TraceOutcome>,
    pub stats: ComparisonStats,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SimulationConfig,
    optimal: Trace,
    brute_force: Trace,
    stats: ComparisonStats,
    controller: PlaybackController,
    mode: ViewMode,
}

impl Session {
    pub fn new(config: SimulationConfig, mode: ViewMode) -> Self {
        let optimal = generate_optimal(&config);
        let brute_force = generate_brute_force(&config);
        let stats = ComparisonStats::between(&brute_force, &optimal);

        let mut session = Session {
            config,
            optimal,
            brute_force,
            stats,
            controller: PlaybackController::default(),
            mode,
        };
        session.controller.load(session.timeline_len());
        session
    }

    /// Replace the config: cancel playback, regenerate both traces,
    /// recompute stats and rewind to `Idle` at index 0
    pub fn reconfigure(&mut self, config: SimulationConfig) {
        self.controller.pause();

        self.optimal = generate_optimal(&config);
        self.brute_force = generate_brute_force(&config);
        self.stats = ComparisonStats::between(&self.brute_force, &self.optimal);
        self.config = config;

        debug!(
            "regenerated {}: optimal {} steps, brute force {} steps",
            self.config.algorithm,
            self.optimal.len(),
            self.brute_force.len()
        );
        self.controller.load(self.timeline_len());
    }

    /// Switch view mode. The timeline length changes, so playback restarts.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.controller.load(self.timeline_len());
    }

    /// Length of the shared timeline for the current mode
    pub fn timeline_len(&self) -> usize {
        match self.mode {
            ViewMode::Optimal => self.optimal.len(),
            ViewMode::BruteForce => self.brute_force.len(),
            ViewMode::Comparison => self.optimal.len().max(self.brute_force.len()),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn optimal(&self) -> &Trace {
        &self.optimal
    }

    pub fn brute_force(&self) -> &Trace {
        &self.brute_force
    }

    pub fn stats(&self) -> &ComparisonStats {
        &self.stats
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlaybackController {
        &mut self.controller
    }

    /// Index the optimal panel shows, frozen on its last step
    pub fn optimal_index(&self) -> Option<usize> {
        self.controller.display_index(self.optimal.len())
    }

    pub fn brute_force_index(&self) -> Option<usize> {
        self.controller.display_index(self.brute_force.len())
    }

    pub fn current_optimal(&self) -> Option<&dyn AlgorithmStep> {
        self.optimal.step(self.optimal_index()?)
    }

    pub fn current_brute_force(&self) -> Option<&dyn AlgorithmStep> {
        self.brute_force.step(self.brute_force_index()?)
    }

    /// Final outcome, available once the timeline has been played (or
    /// stepped) to its last index
    pub fn outcome(&self) -> Option<RunOutcome> {
        let last = self.controller.last_index()?;
        if self.controller.current_index() < last {
            return None;
        }
        Some(RunOutcome {
            algorithm: self.config.algorithm,
            optimal: TraceOutcome::of(&self.optimal),
            brute_force: TraceOutcome::of(&self.brute_force),
            stats: self.stats,
        })
    }
}

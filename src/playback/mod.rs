//! Playback controller
//!
//! A small state machine over a shared timeline index. It owns no thread and
//! no timer: the owner polls [`PlaybackController::tick`] with the current
//! time, and the controller decides whether an auto-advance is due. Disarming
//! the deadline is all it takes to cancel a pending tick.

use log::{debug, info, warn};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Delay between auto-advance ticks at 1x speed
pub const BASE_INTERVAL: Duration = Duration::from_millis(1000);

/// Speeds offered by the viewer, slowest first
pub const SPEED_PRESETS: [f64; 4] = [0.5, 1.0, 2.0, 4.0];

/// Slowest accepted multiplier (a 16 s tick)
pub const MIN_SPEED: f64 = SPEED_PRESETS[0] / 8.0;

/// Fastest accepted multiplier, well under one frame per tick
pub const MAX_SPEED: f64 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// At index 0, never started or just reset
    Idle,
    Playing,
    Paused,
}

#[derive(Debug, Clone)]
pub struct PlaybackController {
    state: PlaybackState,
    current_index: usize,
    total_steps: usize,
    speed: f64,
    /// Time of the last tick (or of `play`), `None` when no timer is pending
    armed_at: Option<Instant>,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PlaybackController {
    pub fn new(total_steps: usize) -> Self {
        PlaybackController {
            state: PlaybackState::Idle,
            current_index: 0,
            total_steps,
            speed: 1.0,
            armed_at: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether a timer tick is pending
    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Last valid index, `None` when there is nothing to play
    pub fn last_index(&self) -> Option<usize> {
        self.total_steps.checked_sub(1)
    }

    pub fn at_end(&self) -> bool {
        self.last_index().map_or(true, |last| self.current_index >= last)
    }

    /// Point the controller at a new timeline length. Always resets.
    pub fn load(&mut self, total_steps: usize) {
        self.total_steps = total_steps;
        self.reset();
    }

    /// Start auto-advancing. Returns `false` (and does nothing) when already
    /// at the last index or when there is nothing to play.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.at_end() {
            debug!("play ignored at index {}", self.current_index);
            return false;
        }
        if self.state != PlaybackState::Playing {
            info!(
                "playing from {} of {} at {}x",
                self.current_index, self.total_steps, self.speed
            );
        }
        self.state = PlaybackState::Playing;
        self.armed_at = Some(now);
        true
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            info!("paused at {}", self.current_index);
            self.state = PlaybackState::Paused;
        }
        self.armed_at = None;
    }

    /// Play if stopped, pause if playing
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            self.pause();
            false
        } else {
            self.play(now)
        }
    }

    /// Back to `Idle` at index 0; cancels any pending tick
    pub fn reset(&mut self) {
        self.state = PlaybackState::Idle;
        self.current_index = 0;
        self.armed_at = None;
    }

    /// Returns whether the index moved
    pub fn step_forward(&mut self) -> bool {
        let Some(last) = self.last_index() else {
            return false;
        };
        self.move_to((self.current_index + 1).min(last))
    }

    /// Returns whether the index moved
    pub fn step_back(&mut self) -> bool {
        self.move_to(self.current_index.saturating_sub(1))
    }

    /// Jump to `index`, clamped into the timeline
    pub fn seek(&mut self, index: usize) -> bool {
        let target = self.last_index().map_or(0, |last| index.min(last));
        self.move_to(target)
    }

    fn move_to(&mut self, index: usize) -> bool {
        if index == self.current_index {
            return false;
        }
        self.current_index = index;
        // Idle only ever means "at 0, untouched"
        if self.state == PlaybackState::Idle {
            self.state = PlaybackState::Paused;
        }
        true
    }

    /// Change the auto-advance multiplier. Values outside
    /// `MIN_SPEED..=MAX_SPEED` (NaN included) are ignored.
    pub fn set_speed(&mut self, speed: f64) -> bool {
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            warn!(
                "ignoring playback speed {}, expected {}..={}",
                speed, MIN_SPEED, MAX_SPEED
            );
            return false;
        }
        debug!("speed {} -> {}", self.speed, speed);
        self.speed = speed;
        true
    }

    /// Next faster preset, if any
    pub fn faster(&mut self) -> bool {
        match SPEED_PRESETS.iter().find(|&&s| s > self.speed) {
            Some(&speed) => self.set_speed(speed),
            None => false,
        }
    }

    /// Next slower preset, if any
    pub fn slower(&mut self) -> bool {
        match SPEED_PRESETS.iter().rev().find(|&&s| s < self.speed) {
            Some(&speed) => self.set_speed(speed),
            None => false,
        }
    }

    /// Current delay between ticks
    pub fn interval(&self) -> Duration {
        BASE_INTERVAL.div_f64(self.speed)
    }

    /// Advance one step if a tick is due at `now`.
    ///
    /// Reaching the last index pauses and disarms the timer, so no further
    /// tick ever fires for a finished timeline.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(armed_at) = self.armed_at else {
            return false;
        };
        if self.state != PlaybackState::Playing
            || now.saturating_duration_since(armed_at) < self.interval()
        {
            return false;
        }

        let advanced = self.step_forward();
        if self.at_end() {
            info!("playback finished at {}", self.current_index);
            self.state = PlaybackState::Paused;
            self.armed_at = None;
        } else {
            self.armed_at = Some(now);
        }
        advanced
    }

    /// Clamp the shared timeline index onto a sequence of `own_len` steps.
    /// A shorter sequence freezes on its last step. `None` when it is empty.
    pub fn display_index(&self, own_len: usize) -> Option<usize> {
        own_len
            .checked_sub(1)
            .map(|last| self.current_index.min(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_scales_with_speed() {
        let mut controller = PlaybackController::new(3);
        assert_eq!(controller.interval(), Duration::from_millis(1000));
        controller.set_speed(4.0);
        assert_eq!(controller.interval(), Duration::from_millis(250));
        controller.set_speed(0.5);
        assert_eq!(controller.interval(), Duration::from_millis(2000));
    }

    #[test]
    fn test_preset_cycling_stops_at_ends() {
        let mut controller = PlaybackController::new(3);
        assert!(controller.faster());
        assert!(controller.faster());
        assert_eq!(controller.speed(), 4.0);
        assert!(!controller.faster());

        while controller.slower() {}
        assert_eq!(controller.speed(), 0.5);
    }

    #[test]
    fn test_speed_range_bounds_interval() {
        let mut controller = PlaybackController::new(3);
        assert!(controller.set_speed(MIN_SPEED));
        assert_eq!(controller.interval(), Duration::from_secs(16));
        assert!(controller.set_speed(MAX_SPEED));
        assert!(!controller.set_speed(MAX_SPEED * 2.0));
        assert_eq!(controller.speed(), MAX_SPEED);
    }

    #[test]
    fn test_step_from_idle_leaves_idle() {
        let mut controller = PlaybackController::new(3);
        controller.step_forward();
        assert_eq!(controller.state(), PlaybackState::Paused);
        controller.step_back();
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.state(), PlaybackState::Paused);
    }
}

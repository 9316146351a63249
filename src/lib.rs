//! # Introduction
//!
//! stepscope replays classic array algorithms as fully materialized
//! sequences of immutable snapshots, pairing each optimal strategy with a
//! naive one over the same input. The two traces are then played on one
//! shared timeline in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! (algorithm, input, param) → Generators ─┐
//!                           → Brute force ─┴→ Stats → Session → TUI / JSON
//! ```
//!
//! 1. [`model`]: the [`model::AlgorithmStep`] render contract, per-family
//!    step records and [`model::StepSequence`].
//! 2. [`generators`]: optimal two-pointer, sliding-window, binary-search and
//!    monotonic-stack generators.
//! 3. [`brute_force`]: the naive counterparts, one probe per step.
//! 4. [`comparison`]: [`comparison::ComparisonStats`] over two traces.
//! 5. [`playback`]: the [`playback::PlaybackController`] state machine.
//! 6. [`session`]: owns a run and regenerates it atomically.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! Generation never fails. Degenerate input (empty array, window larger than
//! the array, non-positive K) yields an empty sequence.

pub mod brute_force;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod error;
pub mod export;
pub mod generators;
pub mod model;
pub mod playback;
pub mod session;
pub mod ui;

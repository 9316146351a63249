//! Command-line configuration
//!
//! [`Cli`] is the `clap` surface of the binary. It resolves into a
//! [`SimulationConfig`], the `(algorithm, input, parameter)` triple every
//! generator is a pure function of. Missing input or parameter fall back to
//! the catalogue presets.

pub mod random;

use crate::catalog::{Algorithm, Parameter};
use crate::error::{AppError, AppResult};
use crate::playback::{MAX_SPEED, MIN_SPEED};
use crate::session::ViewMode;
use clap::Parser;
use log::warn;
use serde::Serialize;
use std::path::PathBuf;

/// Largest accepted input. Brute-force traces copy the array on every probe,
/// so their size grows cubically with the input length.
pub const MAX_INPUT_LEN: usize = 64;

/// Everything a generator needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationConfig {
    pub algorithm: Algorithm,
    pub input: Vec<i64>,
    /// Target, window size or K depending on [`Algorithm::parameter`]
    pub param: i64,
}

impl SimulationConfig {
    pub fn new(algorithm: Algorithm, input: Vec<i64>, param: i64) -> Self {
        SimulationConfig {
            algorithm,
            input,
            param,
        }
    }

    /// The catalogue's preset input and parameter for `algorithm`
    pub fn preset(algorithm: Algorithm) -> Self {
        Self::new(algorithm, algorithm.preset_input(), algorithm.preset_param())
    }

    /// Reject input the viewer cannot reasonably hold; warn about input the
    /// algorithm will process but not answer correctly.
    pub fn validate(&self) -> AppResult<()> {
        if self.input.len() > MAX_INPUT_LEN {
            return Err(AppError::InvalidInput(format!(
                "{} elements given, at most {} supported",
                self.input.len(),
                MAX_INPUT_LEN
            )));
        }

        if self.algorithm.requires_sorted_input()
            && !self.input.windows(2).all(|w| w[0] <= w[1])
        {
            warn!(
                "{} expects ascending input; the trace will follow the algorithm anyway",
                self.algorithm
            );
        }

        if self.algorithm == Algorithm::VariableWindow && self.input.iter().any(|&v| v < 0) {
            warn!("negative values break the shrink invariant of {}", self.algorithm);
        }

        Ok(())
    }

    /// The same run with the parameter moved by `delta`. Window sizes and K
    /// stay within `1..=n`. `None` when the variant has no parameter or the
    /// value cannot move further.
    pub fn step_param(&self, delta: i64) -> Option<Self> {
        let param = match self.algorithm.parameter() {
            Parameter::None => return None,
            Parameter::Target => self.param.saturating_add(delta),
            Parameter::WindowSize | Parameter::DistinctLimit => {
                let max = (self.input.len() as i64).max(1);
                self.param.saturating_add(delta).clamp(1, max)
            }
        };
        (param != self.param).then(|| Self::new(self.algorithm, self.input.clone(), param))
    }

    /// Human-readable description of the parameter, e.g. `target = 13`
    pub fn describe_param(&self) -> Option<String> {
        match self.algorithm.parameter() {
            Parameter::None => None,
            p => Some(format!("{} = {}", p.name(), self.param)),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "stepscope")]
#[command(
    version,
    about = "Step through brute-force and optimal array algorithms side by side"
)]
pub struct Cli {
    /// Algorithm to simulate
    #[arg(value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Input array, comma separated (defaults to the algorithm's preset)
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    pub input: Option<Vec<i64>>,

    /// Target, window size or K (defaults to the algorithm's preset)
    #[arg(short, long, allow_negative_numbers = true)]
    pub param: Option<i64>,

    /// Playback speed multiplier
    #[arg(short, long, default_value_t = 1.0, value_parser = parse_speed)]
    pub speed: f64,

    /// Which trace(s) to show
    #[arg(short, long, value_enum, default_value_t = ViewMode::Comparison)]
    pub mode: ViewMode,

    /// Write both traces and the comparison stats as JSON, then exit
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// List the available algorithms and exit
    #[arg(long)]
    pub list: bool,

    /// Send log output to this file (the terminal UI owns stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_speed(raw: &str) -> Result<f64, String> {
    let speed: f64 = raw.parse().map_err(|e| format!("{}", e))?;
    if (MIN_SPEED..=MAX_SPEED).contains(&speed) {
        Ok(speed)
    } else {
        Err(format!("speed must be between {} and {}", MIN_SPEED, MAX_SPEED))
    }
}

impl Cli {
    /// Resolve the arguments into a validated simulation config
    pub fn simulation(&self) -> AppResult<SimulationConfig> {
        let algorithm = self.algorithm.ok_or(AppError::MissingAlgorithm)?;
        let preset = SimulationConfig::preset(algorithm);

        let config = SimulationConfig::new(
            algorithm,
            self.input.clone().unwrap_or(preset.input),
            self.param.unwrap_or(preset.param),
        );
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_falls_back_to_presets() {
        let cli = Cli::parse_from(["stepscope", "fixed-window"]);
        let config = cli.simulation().unwrap();

        assert_eq!(config, SimulationConfig::preset(Algorithm::FixedWindow));
    }

    #[test]
    fn test_cli_parses_negative_input() {
        let cli = Cli::parse_from([
            "stepscope",
            "variable-window",
            "--input",
            "3,-1,4",
            "--param",
            "-2",
        ]);
        let config = cli.simulation().unwrap();

        assert_eq!(config.input, vec![3, -1, 4]);
        assert_eq!(config.param, -2);
    }

    #[test]
    fn test_speed_outside_range_rejected() {
        assert!(Cli::try_parse_from(["stepscope", "container", "--speed", "1e-20"]).is_err());
        assert!(Cli::try_parse_from(["stepscope", "container", "--speed", "NaN"]).is_err());

        let cli = Cli::try_parse_from(["stepscope", "container", "--speed", "4"]).unwrap();
        assert_eq!(cli.speed, 4.0);
    }

    #[test]
    fn test_missing_algorithm_is_an_error() {
        let cli = Cli::parse_from(["stepscope", "--list"]);
        assert!(matches!(cli.simulation(), Err(AppError::MissingAlgorithm)));
    }

    #[test]
    fn test_step_param_respects_parameter_kind() {
        let target = SimulationConfig::preset(Algorithm::BinarySearch);
        assert_eq!(target.step_param(-10).map(|c| c.param), Some(-2));

        let window = SimulationConfig::preset(Algorithm::FixedWindow);
        assert_eq!(window.step_param(100).map(|c| c.param), Some(7));
        assert!(SimulationConfig::new(Algorithm::AtMostK, vec![1, 2], 1)
            .step_param(-1)
            .is_none());

        assert!(SimulationConfig::preset(Algorithm::Container).step_param(1).is_none());
    }

    #[test]
    fn test_oversized_input_rejected() {
        let config = SimulationConfig::new(Algorithm::Container, vec![1; MAX_INPUT_LEN + 1], 0);
        assert!(matches!(config.validate(), Err(AppError::InvalidInput(_))));
    }
}

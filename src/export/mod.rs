//! JSON export of a whole run
//!
//! Writes the config, both traces and the comparison stats in one document,
//! for inspection outside the terminal viewer.

use crate::catalog::Complexity;
use crate::comparison::ComparisonStats;
use crate::config::SimulationConfig;
use crate::error::AppResult;
use crate::generators::Trace;
use crate::session::Session;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Complete run data for JSON export.
#[derive(Serialize)]
struct RunExport<'a> {
    config: &'a SimulationConfig,
    complexity: Complexity,
    stats: &'a ComparisonStats,
    optimal: &'a Trace,
    brute_force: &'a Trace,
}

impl<'a> RunExport<'a> {
    fn of(session: &'a Session) -> Self {
        RunExport {
            config: session.config(),
            complexity: session.config().algorithm.complexity(),
            stats: session.stats(),
            optimal: session.optimal(),
            brute_force: session.brute_force(),
        }
    }
}

/// Serialize the session's run as pretty-printed JSON
pub fn to_json(session: &Session) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&RunExport::of(session))?)
}

/// Write the session's run to `path`
pub fn write_json(session: &Session, path: &Path) -> AppResult<()> {
    let json = to_json(session)?;
    fs::write(path, json)?;
    info!(
        "exported {} ({} + {} steps) to {}",
        session.config().algorithm,
        session.optimal().len(),
        session.brute_force().len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Algorithm;
    use crate::session::ViewMode;

    #[test]
    fn test_export_shape() {
        let session = Session::new(
            SimulationConfig::preset(Algorithm::BinarySearch),
            ViewMode::Comparison,
        );
        let json: serde_json::Value = serde_json::from_str(&to_json(&session).unwrap()).unwrap();

        assert_eq!(json["config"]["algorithm"], "binary-search");
        assert_eq!(json["optimal"]["kind"], "search");
        assert_eq!(json["brute_force"]["kind"], "scan");
        assert_eq!(
            json["optimal"]["steps"].as_array().map(|s| s.len()),
            Some(session.optimal().len())
        );
        assert_eq!(json["stats"]["optimal_steps"], session.optimal().len());
    }
}

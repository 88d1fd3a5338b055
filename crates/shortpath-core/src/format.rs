//! Output format handling for shortpath
//!
//! - human: one path per query, `Total cost is <cost>` underneath
//! - json: one object per query, for scripts

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::PathError;
use crate::graph::PathResult;

/// Line printed for an unreachable target
pub const PATH_NOT_FOUND: &str = "Path not found";

/// Line printed when the word ladder search fails
pub const NO_LADDER_FOUND: &str = "No word ladder found.";

/// Output format for shortpath commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(PathError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a path result for people.
///
/// Reachability comes from the cost, so the source itself renders as a
/// one-vertex path with cost 0 instead of "Path not found".
pub fn render_path_human(result: &PathResult, delimiter: &str) -> String {
    if !result.is_reachable() {
        return PATH_NOT_FOUND.to_string();
    }

    let vertices: Vec<String> = result.path.iter().map(|v| v.to_string()).collect();
    format!("{}\nTotal cost is {}", vertices.join(delimiter), result.cost)
}

pub fn path_to_json(result: &PathResult) -> Value {
    let reachable = result.is_reachable();
    serde_json::json!({
        "target": result.target,
        "reachable": reachable,
        "cost": if reachable { Some(result.cost.value()) } else { None },
        "path": if reachable { result.path.clone() } else { Vec::new() },
    })
}

pub fn render_ladder_human(ladder: Option<&[String]>) -> String {
    match ladder {
        Some(words) if !words.is_empty() => format!("Word ladder found: {}", words.join(" ")),
        _ => NO_LADDER_FOUND.to_string(),
    }
}

pub fn ladder_to_json(start: &str, end: &str, ladder: Option<&[String]>) -> Value {
    serde_json::json!({
        "start": start,
        "end": end,
        "found": ladder.is_some(),
        "ladder": ladder.unwrap_or_default(),
        "steps": ladder.map(|words| words.len().saturating_sub(1)),
    })
}

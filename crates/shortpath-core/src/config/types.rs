//! Configuration type definitions

use serde::Deserialize;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Shortest-path defaults
    #[serde(default)]
    pub graph: GraphConfig,

    /// Word-ladder defaults
    #[serde(default)]
    pub ladder: LadderConfig,
}

/// Configuration for rendering paths and ladders
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    /// Separator placed between consecutive path vertices
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

/// Configuration for shortest-path queries
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphConfig {
    /// Default source vertex when `--source` is not given
    #[serde(default)]
    pub source: usize,
}

/// Configuration for word-ladder searches
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LadderConfig {
    /// Default dictionary file when `--dictionary` is not given
    #[serde(default = "default_dictionary")]
    pub dictionary: String,

    /// Maximum edit distance between consecutive ladder words
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            max_edit_distance: default_max_edit_distance(),
        }
    }
}

fn default_delimiter() -> String {
    " ".to_string()
}

fn default_dictionary() -> String {
    "words.txt".to_string()
}

fn default_max_edit_distance() -> usize {
    1
}

//! Shortpath Core Library
//!
//! Single-source shortest paths over weighted directed graphs, plus the
//! word-ladder search and the loaders that feed both.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod ladder;
pub mod logging;

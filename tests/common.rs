use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn shortpath() -> Command {
    let mut cmd = cargo_bin_cmd!("shortpath");
    // Keep the user's real config out of the tests
    cmd.env("SHORTPATH_CONFIG_DIR", "/nonexistent/shortpath-test-config")
        .env_remove("SHORTPATH_CONFIG")
        .env_remove("SHORTPATH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a fixture file into `dir` and return its path
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Three vertices where the two-hop route beats the direct edge, plus an
/// isolated vertex 3.
#[allow(dead_code)]
pub const SMALL_GRAPH: &str = "4\n0 1 1\n1 2 2\n0 2 5\n";

#[allow(dead_code)]
pub const WORDS: &str = "cat\ncot\ncog\ndog\ndot\nbat\n";

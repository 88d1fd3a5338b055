//! Integration tests for the shortpath CLI
//!
//! These tests run the shortpath binary against small graph and dictionary
//! fixtures.

mod common;

use common::{shortpath, write_fixture, SMALL_GRAPH, WORDS};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    shortpath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: shortpath"))
        .stdout(predicate::str::contains("paths"))
        .stdout(predicate::str::contains("ladder"));
}

#[test]
fn test_no_command_prints_banner() {
    shortpath()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("shortpath "));
}

// ============================================================================
// paths command
// ============================================================================

#[test]
fn test_paths_all_vertices() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", SMALL_GRAPH);

    shortpath()
        .arg("paths")
        .arg(&graph)
        .assert()
        .success()
        .stdout(
            "0\nTotal cost is 0\n\
             0 1\nTotal cost is 1\n\
             0 1 2\nTotal cost is 3\n\
             Path not found\n",
        );
}

#[test]
fn test_paths_single_target() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", SMALL_GRAPH);

    shortpath()
        .arg("paths")
        .arg(&graph)
        .args(["--target", "2"])
        .assert()
        .success()
        .stdout("0 1 2\nTotal cost is 3\n");
}

#[test]
fn test_paths_source_to_itself_is_found() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", SMALL_GRAPH);

    shortpath()
        .arg("paths")
        .arg(&graph)
        .args(["--source", "2", "--target", "2"])
        .assert()
        .success()
        .stdout("2\nTotal cost is 0\n");
}

#[test]
fn test_paths_custom_delimiter() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", SMALL_GRAPH);

    shortpath()
        .arg("paths")
        .arg(&graph)
        .args(["--target", "2", "--delimiter", " -> "])
        .assert()
        .success()
        .stdout("0 -> 1 -> 2\nTotal cost is 3\n");
}

#[test]
fn test_paths_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", SMALL_GRAPH);

    let output = shortpath()
        .arg("paths")
        .arg(&graph)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], 0);
    assert_eq!(json["vertices"], 4);
    assert_eq!(json["paths"][2]["path"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["paths"][2]["cost"], 3);
    assert_eq!(json["paths"][3]["reachable"], false);
    assert!(json["paths"][3]["cost"].is_null());
}

#[test]
fn test_paths_invalid_source() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", SMALL_GRAPH);

    shortpath()
        .arg("paths")
        .arg(&graph)
        .args(["--source", "9"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("vertex 9 out of range"));
}

#[test]
fn test_paths_invalid_target() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", SMALL_GRAPH);

    shortpath()
        .arg("paths")
        .arg(&graph)
        .args(["--target", "4"])
        .assert()
        .code(2)
        .stdout("");
}

#[test]
fn test_paths_malformed_graph() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", "2\n0 1 -3\n");

    shortpath()
        .arg("paths")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative weight -3"));
}

#[test]
fn test_paths_missing_file() {
    let dir = tempdir().unwrap();

    shortpath()
        .arg("paths")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph file"));
}

#[test]
fn test_paths_error_as_json() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", SMALL_GRAPH);

    let output = shortpath()
        .arg("paths")
        .arg(&graph)
        .args(["--source", "9", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_vertex");
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", SMALL_GRAPH);

    shortpath()
        .arg("--quiet")
        .arg("paths")
        .arg(&graph)
        .args(["--source", "9"])
        .assert()
        .code(2)
        .stderr("");
}

#[test]
fn test_usage_error_as_json_before_parse() {
    let output = shortpath()
        .args(["--format", "json", "paths"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_sets_source_and_delimiter() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", "3\n1 0 4\n1 2 1\n2 0 1\n");
    let config = write_fixture(
        dir.path(),
        "config.toml",
        "[graph]\nsource = 1\n\n[output]\ndelimiter = \",\"\n",
    );

    shortpath()
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .arg(&graph)
        .args(["--target", "0"])
        .assert()
        .success()
        .stdout("1,2,0\nTotal cost is 2\n");
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", SMALL_GRAPH);
    write_fixture(dir.path(), "config.toml", "[output]\ndelimiter = \"-\"\n");

    shortpath()
        .env("SHORTPATH_CONFIG_DIR", dir.path())
        .arg("paths")
        .arg(&graph)
        .args(["--target", "2"])
        .assert()
        .success()
        .stdout("0-1-2\nTotal cost is 3\n");
}

#[test]
fn test_invalid_config_file() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.txt", SMALL_GRAPH);
    let config = write_fixture(dir.path(), "config.toml", "[graph\n");

    shortpath()
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

// ============================================================================
// ladder command
// ============================================================================

#[test]
fn test_ladder_found() {
    let dir = tempdir().unwrap();
    let words = write_fixture(dir.path(), "words.txt", WORDS);

    shortpath()
        .args(["ladder", "cat", "dog", "--dictionary"])
        .arg(&words)
        .assert()
        .success()
        .stdout("Word ladder found: cat cot cog dog\n");
}

#[test]
fn test_ladder_not_found() {
    let dir = tempdir().unwrap();
    let words = write_fixture(dir.path(), "words.txt", WORDS);

    shortpath()
        .args(["ladder", "cat", "zebra", "--dictionary"])
        .arg(&words)
        .assert()
        .success()
        .stdout("No word ladder found.\n");
}

#[test]
fn test_ladder_same_word() {
    let dir = tempdir().unwrap();
    let words = write_fixture(dir.path(), "words.txt", WORDS);

    shortpath()
        .args(["ladder", "cat", "cat", "--dictionary"])
        .arg(&words)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be different"));
}

#[test]
fn test_ladder_default_dictionary_from_config() {
    let dir = tempdir().unwrap();
    let words = write_fixture(dir.path(), "words.txt", WORDS);
    let config = write_fixture(
        dir.path(),
        "config.toml",
        &format!("[ladder]\ndictionary = {:?}\n", words.display().to_string()),
    );

    shortpath()
        .arg("--config")
        .arg(&config)
        .args(["ladder", "bat", "cot"])
        .assert()
        .success()
        .stdout("Word ladder found: bat cat cot\n");
}

#[test]
fn test_ladder_json() {
    let dir = tempdir().unwrap();
    let words = write_fixture(dir.path(), "words.txt", WORDS);

    let output = shortpath()
        .args(["--format", "json", "ladder", "cat", "dot", "--dictionary"])
        .arg(&words)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["ladder"], serde_json::json!(["cat", "cot", "dot"]));
    assert_eq!(json["steps"], 2);
}

#[test]
fn test_ladder_json_echoes_normalized_words() {
    let dir = tempdir().unwrap();
    let words = write_fixture(dir.path(), "words.txt", WORDS);

    let output = shortpath()
        .args(["--format", "json", "ladder", "CAT", "Dot", "--dictionary"])
        .arg(&words)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], "cat");
    assert_eq!(json["end"], "dot");
    assert_eq!(json["ladder"][0], json["start"]);
}

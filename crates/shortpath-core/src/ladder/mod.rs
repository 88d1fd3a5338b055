//! Word ladders: shortest chains of dictionary words, each one edit away
//! from the previous.
//!
//! The search is breadth-first over partial chains and keeps its own
//! visited-word set; it shares nothing with the weighted graph engine.

pub mod edit;

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fs;
use std::path::Path;

use crate::error::{PathError, Result};

pub use edit::{edit_distance, is_adjacent, within_edit_distance};

/// Ordered, deduplicated, lower-cased word set
pub type Dictionary = BTreeSet<String>;

/// Build a dictionary from whitespace-separated words
pub fn parse_words(text: &str) -> Dictionary {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Load a dictionary file
pub fn load_words(path: &Path) -> Result<Dictionary> {
    let text = fs::read_to_string(path)
        .map_err(|e| PathError::io_operation("read dictionary", path.display(), e))?;
    let words = parse_words(&text);
    tracing::debug!(path = %path.display(), words = words.len(), "load_words");
    Ok(words)
}

/// Trim and lower-case a query word, rejecting empty or multi-token input.
/// `which` names the word in error messages.
pub fn normalize_word(word: &str, which: &str) -> Result<String> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err(PathError::InvalidWord {
            reason: format!("{} word is empty", which),
        });
    }
    if word.chars().any(char::is_whitespace) {
        return Err(PathError::InvalidWord {
            reason: format!("{} word '{}' contains whitespace", which, word),
        });
    }
    Ok(word)
}

/// Find a shortest ladder from `start` to `end`.
///
/// Each step moves to a dictionary word within `max_edit_distance` edits of
/// the previous word. Candidates are tried in dictionary order, so the first
/// shortest ladder found is deterministic. `start` does not need to be in the
/// dictionary; `end` must be to be reachable. Returns `Ok(None)` when no
/// ladder exists.
#[tracing::instrument(skip(dictionary), fields(words = dictionary.len()))]
pub fn generate_word_ladder(
    start: &str,
    end: &str,
    dictionary: &Dictionary,
    max_edit_distance: usize,
) -> Result<Option<Vec<String>>> {
    let start = normalize_word(start, "start")?;
    let end = normalize_word(end, "end")?;
    if start == end {
        return Err(PathError::SameWord { word: start });
    }
    if max_edit_distance == 0 {
        crate::bail_usage!("max edit distance must be at least 1");
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<Vec<&str>> = VecDeque::new();
    visited.insert(start.as_str());
    queue.push_back(vec![start.as_str()]);

    let mut expanded = 0usize;
    while let Some(ladder) = queue.pop_front() {
        expanded += 1;
        let Some(&last) = ladder.last() else {
            continue;
        };

        for candidate in dictionary {
            if visited.contains(candidate.as_str())
                || !within_edit_distance(last, candidate, max_edit_distance)
            {
                continue;
            }

            let mut next = ladder.clone();
            next.push(candidate);
            if *candidate == end {
                tracing::debug!(expanded, length = next.len(), "ladder_found");
                return Ok(Some(next.into_iter().map(str::to_string).collect()));
            }

            visited.insert(candidate);
            queue.push_back(next);
        }
    }

    tracing::debug!(expanded, "ladder_not_found");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn dictionary(words: &[&str]) -> Dictionary {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn ladder(start: &str, end: &str, words: &[&str]) -> Option<Vec<String>> {
        generate_word_ladder(start, end, &dictionary(words), 1).unwrap()
    }

    #[test]
    fn test_classic_ladder() {
        let words = ["cat", "cot", "cog", "dog", "dot", "bat"];
        assert_eq!(
            ladder("cat", "dog", &words),
            Some(vec![
                "cat".to_string(),
                "cot".to_string(),
                "cog".to_string(),
                "dog".to_string()
            ])
        );
    }

    #[test]
    fn test_ladder_length_is_minimal() {
        // code -> cade -> cate -> date -> data is the only ladder
        let words = ["cade", "cate", "date", "data", "code"];
        let found = ladder("code", "data", &words).unwrap();
        assert_eq!(found, vec!["code", "cade", "cate", "date", "data"]);
    }

    #[test]
    fn test_ladder_with_insertions() {
        let words = ["car", "cheat", "chat", "cat"];
        assert_eq!(
            ladder("car", "cheat", &words),
            Some(vec![
                "car".to_string(),
                "cat".to_string(),
                "chat".to_string(),
                "cheat".to_string()
            ])
        );
    }

    #[test]
    fn test_no_ladder() {
        let words = ["cat", "cot", "zebra"];
        assert_eq!(ladder("cat", "zebra", &words), None);
    }

    #[test]
    fn test_end_must_be_in_dictionary() {
        let words = ["cat", "cot"];
        assert_eq!(ladder("cat", "cog", &words), None);
    }

    #[test]
    fn test_start_outside_dictionary() {
        let words = ["bot", "dot"];
        assert_eq!(
            ladder("bat", "dot", &words),
            Some(vec!["bat".to_string(), "bot".to_string(), "dot".to_string()])
        );
    }

    #[test]
    fn test_input_is_case_insensitive() {
        let words = ["cat", "cot"];
        assert_eq!(
            ladder("CAT", "Cot", &words),
            Some(vec!["cat".to_string(), "cot".to_string()])
        );
    }

    #[test]
    fn test_same_word_rejected() {
        let err = generate_word_ladder("code", "CODE", &dictionary(&["code"]), 1).unwrap_err();
        assert!(matches!(err, PathError::SameWord { .. }));
    }

    #[test]
    fn test_empty_word_rejected() {
        let err = generate_word_ladder("", "code", &dictionary(&["code"]), 1).unwrap_err();
        assert!(matches!(err, PathError::InvalidWord { .. }));
    }

    #[test]
    fn test_zero_edit_distance_rejected() {
        let err = generate_word_ladder("cat", "cot", &dictionary(&["cot"]), 0).unwrap_err();
        assert!(matches!(err, PathError::UsageError(_)));
    }

    #[test]
    fn test_wider_edit_bound_shortens_ladder() {
        let words = ["cat", "cot", "cog", "dog"];
        let found = generate_word_ladder("cat", "dog", &dictionary(&words), 3)
            .unwrap()
            .unwrap();
        assert_eq!(found, vec!["cat", "dog"]);
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  CaT ", "start").unwrap(), "cat");
        assert!(matches!(
            normalize_word("two words", "end"),
            Err(PathError::InvalidWord { .. })
        ));
    }

    #[test]
    fn test_parse_words_normalizes() {
        let words = parse_words("Apple banana\napple  Cherry\n");
        let collected: Vec<&str> = words.iter().map(String::as_str).collect();
        assert_eq!(collected, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_load_words_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "cat\ncot\ndog\n").unwrap();

        let words = load_words(&path).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains("cot"));
    }

    #[test]
    fn test_load_words_missing_file() {
        let dir = tempdir().unwrap();
        assert!(load_words(&dir.path().join("absent.txt")).is_err());
    }
}

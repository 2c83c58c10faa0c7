//! Deck file parser.
//!
//! Loads decks from `|`-delimited text files and directories, and validates
//! them. A single malformed line fails the whole file; when loading a
//! directory, files that fail are skipped with a warning.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::StudyError;
use crate::model::TaggedQuestion;

/// A named list of questions loaded from one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Display name (the file stem for decks read from disk).
    pub name: String,
    /// Questions in file order.
    pub questions: Vec<TaggedQuestion>,
}

impl Deck {
    /// How many questions carry each tag, most used first, ties by name.
    pub fn tag_counts(&self) -> Vec<(&str, usize)> {
        let mut counts = BTreeMap::new();
        for tag in self.questions.iter().flat_map(|q| q.tags()) {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }

        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

/// Parse deck text. Blank lines and lines starting with `#` are ignored.
pub fn parse_deck_str(content: &str) -> Result<Vec<TaggedQuestion>, StudyError> {
    content
        .lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| TaggedQuestion::parse_line(line, number))
        .collect()
}

/// Read a single deck file, naming it after the file stem.
pub fn load_deck(path: &Path) -> Result<Deck> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deck file: {}", path.display()))?;

    let questions = parse_deck_str(&content)
        .with_context(|| format!("failed to parse deck: {}", path.display()))?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::debug!("loaded deck '{}' ({} questions)", name, questions.len());
    Ok(Deck { name, questions })
}

/// The `.txt` files directly inside `dir`, sorted by file name.
pub fn deck_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Load every deck from [`deck_files`]. Files that fail to load are skipped
/// with a warning.
pub fn load_deck_directory(dir: &Path) -> Result<Vec<Deck>> {
    let mut decks = Vec::new();
    for path in deck_files(dir)? {
        match load_deck(&path) {
            Ok(deck) => decks.push(deck),
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(decks)
}

/// A warning from deck validation.
#[derive(Debug, Clone)]
pub struct DeckWarning {
    /// Question text the warning refers to (if applicable).
    pub question: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a deck for common issues.
pub fn validate_deck(deck: &Deck) -> Vec<DeckWarning> {
    let mut warnings = Vec::new();

    if deck.questions.is_empty() {
        warnings.push(DeckWarning {
            question: None,
            message: "deck has no questions".into(),
        });
    }

    let mut seen = std::collections::HashSet::new();
    for q in &deck.questions {
        if !seen.insert(q.question()) {
            warnings.push(DeckWarning {
                question: Some(q.question().to_owned()),
                message: format!("duplicate question: {}", q.question()),
            });
        }
    }

    for q in &deck.questions {
        if q.tags().is_empty() {
            warnings.push(DeckWarning {
                question: Some(q.question().to_owned()),
                message: "question has no tags".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPITALS: &str = "\
# European capitals
What is the capital of France?|Paris|geography,history,france

What is the capital of Spain?|Madrid|geography,spain
";

    #[test]
    fn parse_skips_comments_and_blanks() {
        let questions = parse_deck_str(CAPITALS).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].answer(), "Paris");
        assert_eq!(questions[1].tags(), ["geography", "spain"]);
    }

    #[test]
    fn malformed_line_reports_file_line_number() {
        let bad = "Q1|A1|t\n\nQ2 without fields\n";
        assert_eq!(
            parse_deck_str(bad),
            Err(StudyError::MalformedLine { line: 3, fields: 1 })
        );
    }

    #[test]
    fn load_names_deck_after_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capitals.txt");
        std::fs::write(&path, CAPITALS).unwrap();

        let deck = load_deck(&path).unwrap();
        assert_eq!(deck.name, "capitals");
        assert_eq!(deck.questions.len(), 2);
    }

    #[test]
    fn load_missing_file_fails() {
        let result = load_deck(Path::new("does-not-exist.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn directory_skips_bad_files_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "Q|A|t\n").unwrap();
        std::fs::write(dir.path().join("a.txt"), CAPITALS).unwrap();
        std::fs::write(dir.path().join("broken.txt"), "no delimiters\n").unwrap();
        std::fs::write(dir.path().join("notes.md"), "Q|A|t\n").unwrap();

        let decks = load_deck_directory(dir.path()).unwrap();
        let names: Vec<&str> = decks.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn deck_files_lists_only_txt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        std::fs::write(dir.path().join("notes.md"), "").unwrap();
        std::fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let files = deck_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);

        assert!(deck_files(&dir.path().join("a.txt")).is_err());
    }

    #[test]
    fn tag_counts_most_used_first() {
        let deck = Deck {
            name: "mixed".into(),
            questions: parse_deck_str("Q1|A|geo,spain
Q2|A|geo,france
Q3|A|history,geo
Q4|A|
")
                .unwrap(),
        };
        assert_eq!(
            deck.tag_counts(),
            vec![("geo", 3), ("france", 1), ("history", 1), ("spain", 1)]
        );
    }

    #[test]
    fn validate_flags_duplicates_and_untagged() {
        let deck = Deck {
            name: "dupes".into(),
            questions: parse_deck_str("Q|A|t\nQ|B|t\nR|C|\n").unwrap(),
        };
        let warnings = validate_deck(&deck);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("no tags")));
    }

    #[test]
    fn validate_flags_empty_deck() {
        let deck = Deck {
            name: "empty".into(),
            questions: vec![],
        };
        let warnings = validate_deck(&deck);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].question.is_none());
    }
}

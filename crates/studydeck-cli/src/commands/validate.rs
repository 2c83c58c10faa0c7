//! The `studydeck validate` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use studydeck_core::parser::{deck_files, load_deck, validate_deck, Deck};

/// Check one deck file, or every `.txt` deck in a directory.
///
/// A single file that fails to parse is an error. In a directory every file
/// is checked; broken ones are reported with their line number and the
/// command fails once all files have been checked.
pub fn execute(deck_path: PathBuf) -> Result<()> {
    if !deck_path.is_dir() {
        let deck = load_deck(&deck_path)?;
        let warnings = report_deck(&deck);
        print_totals(warnings);
        return Ok(());
    }

    let files = deck_files(&deck_path)?;
    if files.is_empty() {
        anyhow::bail!("no .txt decks found in {}", deck_path.display());
    }

    let mut warnings = 0;
    let mut broken = Vec::new();
    for path in &files {
        match load_deck(path) {
            Ok(deck) => warnings += report_deck(&deck),
            Err(e) => {
                println!("Deck: {} (unreadable)", file_label(path));
                println!("  ERROR: {e:#}");
                broken.push(file_label(path));
            }
        }
    }

    if broken.is_empty() {
        print_totals(warnings);
        return Ok(());
    }
    if warnings > 0 {
        println!("\n{warnings} warning(s) found.");
    }
    anyhow::bail!(
        "{} of {} deck file(s) failed to parse: {}",
        broken.len(),
        files.len(),
        broken.join(", ")
    )
}

/// Print a deck's header, tag summary and warnings. Returns the warning count.
fn report_deck(deck: &Deck) -> usize {
    println!("Deck: {} ({} questions)", deck.name, deck.questions.len());

    let tags = deck.tag_counts();
    if !tags.is_empty() {
        let summary: Vec<String> = tags
            .iter()
            .map(|(tag, n)| format!("{tag} ({n})"))
            .collect();
        println!("  Tags: {}", summary.join(", "));
    }

    let warnings = validate_deck(deck);
    for w in &warnings {
        match &w.question {
            Some(q) => println!("  [{q}] WARNING: {}", w.message),
            None => println!("  WARNING: {}", w.message),
        }
    }
    warnings.len()
}

fn print_totals(warnings: usize) {
    if warnings == 0 {
        println!("All decks valid.");
    } else {
        println!("\n{warnings} warning(s) found.");
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

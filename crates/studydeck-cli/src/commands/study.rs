//! The `studydeck study` command.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;

use studydeck_core::bank::{AnyBank, ListBank};
use studydeck_core::config::{load_config_from, StudyConfig};
use studydeck_core::menu::{choose_menu, NamedMenuOption};
use studydeck_core::parser::load_deck_directory;
use studydeck_core::report::SessionReport;
use studydeck_core::sentiment::Classifier;
use studydeck_core::session::{study_session, TextConsole};

pub fn execute(deck_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let deck_dir = deck_dir.unwrap_or_else(|| config.deck_dir.clone());

    let banks = bank_options(&deck_dir, &config)?;
    anyhow::ensure!(
        !banks.is_empty(),
        "no decks found in {} and no generated decks configured",
        deck_dir.display()
    );

    let classifiers: Vec<NamedMenuOption<Classifier>> = Classifier::all()
        .into_iter()
        .map(|c| {
            let name = c.name();
            NamedMenuOption::new(c, name)
        })
        .collect();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        &banks,
        &classifiers,
        &mut stdin.lock(),
        &mut stdout.lock(),
        config.report_dir.as_deref(),
    )
}

/// File decks first (sorted by name), then the configured generated decks.
fn bank_options(deck_dir: &Path, config: &StudyConfig) -> Result<Vec<NamedMenuOption<AnyBank>>> {
    let mut banks = Vec::new();

    if deck_dir.is_dir() {
        for deck in load_deck_directory(deck_dir)? {
            let bank = ListBank::new(deck.questions);
            banks.push(NamedMenuOption::new(AnyBank::from(bank), deck.name));
        }
    } else {
        tracing::warn!("deck directory {} not found", deck_dir.display());
    }

    for generated in &config.generated {
        banks.push(NamedMenuOption::new(
            AnyBank::from(generated.build()),
            generated.title(),
        ));
    }

    Ok(banks)
}

/// Choose a bank, choose a classifier, study; repeat until either menu is
/// quit.
fn run(
    banks: &[NamedMenuOption<AnyBank>],
    classifiers: &[NamedMenuOption<Classifier>],
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    report_dir: Option<&Path>,
) -> Result<()> {
    loop {
        let Some(bank) = choose_menu(banks, &mut *input, &mut *output)? else {
            break;
        };
        let Some(classifier) = choose_menu(classifiers, &mut *input, &mut *output)? else {
            break;
        };

        let started_at = Utc::now();
        let mut console = TextConsole::new(&mut *input, &mut *output);
        let result = study_session(bank.option.clone(), &mut console, |s| {
            classifier.option.is_positive(s)
        })?;

        writeln!(
            output,
            "Studied {} question(s) in {} attempt(s).",
            result.num_questions, result.num_attempts
        )?;
        writeln!(output)?;

        if let Some(dir) = report_dir {
            let report = SessionReport::new(&bank.name, classifier.option.name(), started_at, result);
            let path = report.save_json(dir)?;
            tracing::info!("saved session report to {}", path.display());
        }
    }

    writeln!(output, "Bye.")?;
    Ok(())
}

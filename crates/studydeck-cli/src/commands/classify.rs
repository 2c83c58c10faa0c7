//! The `studydeck classify` command.

use anyhow::Result;

use studydeck_core::sentiment::{SentimentClassifier, NEIGHBORS};

pub fn execute(texts: Vec<String>) -> Result<()> {
    let classifier = SentimentClassifier::new();

    for text in &texts {
        let result = classifier.classify(text);
        let label = if result.label { "positive" } else { "negative" };
        println!("{text}: {label} ({}/{NEIGHBORS})", result.votes);
    }

    Ok(())
}

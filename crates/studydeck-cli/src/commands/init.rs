//! The `studydeck init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("studydeck.toml").exists() {
        println!("studydeck.toml already exists, skipping.");
    } else {
        std::fs::write("studydeck.toml", SAMPLE_CONFIG)?;
        println!("Created studydeck.toml");
    }

    std::fs::create_dir_all("decks")?;
    let example_path = std::path::Path::new("decks/example.txt");
    if example_path.exists() {
        println!("decks/example.txt already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_DECK)?;
        println!("Created decks/example.txt");
    }

    println!("\nNext steps:");
    println!("  1. Add your own question|answer|tags lines under decks/");
    println!("  2. Run: studydeck validate --deck decks");
    println!("  3. Run: studydeck study");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# studydeck configuration

deck_dir = "decks"
# report_dir = "reports"

[[generated]]
kind = "squares"
count = 10

[[generated]]
kind = "cubes"
count = 10

[[generated]]
kind = "times"
factor = 9
count = 12
"#;

const EXAMPLE_DECK: &str = "\
# question|answer|tag1,tag2
What is the capital of France?|Paris|geography,history,france
What is the capital of Spain?|Madrid|geography,spain
What is the capital of Italy?|Rome|geography,italy
";

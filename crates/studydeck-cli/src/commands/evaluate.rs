//! The `studydeck evaluate` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use studydeck_core::sentiment::{dataset, evaluate, Classifier};

pub fn execute() -> Result<()> {
    let data = dataset();
    let evaluations: Vec<_> = Classifier::all()
        .iter()
        .map(|c| evaluate(c, &data))
        .collect();

    let mut header = vec!["Reply".to_string(), "Expected".to_string()];
    header.extend(evaluations.iter().map(|e| e.classifier.clone()));

    let mut table = Table::new();
    table.set_header(header);

    for (idx, example) in data.iter().enumerate() {
        let mut row = vec![
            Cell::new(&example.example),
            Cell::new(verdict(example.label)),
        ];
        for e in &evaluations {
            let p = &e.predictions[idx];
            let mark = if p.is_correct() { "" } else { " ✗" };
            row.push(Cell::new(format!("{}{mark}", verdict(p.predicted))));
        }
        table.add_row(row);
    }

    let mut footer = vec![Cell::new("Accuracy"), Cell::new("")];
    for e in &evaluations {
        footer.push(Cell::new(format!(
            "{}/{} ({:.1}%)",
            e.correct(),
            e.predictions.len(),
            e.accuracy() * 100.0
        )));
    }
    table.add_row(footer);

    println!("{table}");
    Ok(())
}

fn verdict(positive: bool) -> &'static str {
    if positive {
        "yes"
    } else {
        "no"
    }
}

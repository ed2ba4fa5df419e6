//! Basic usage example for sinter-validator

use sinter_validator::prelude::*;

fn report(label: &str, outcome: Outcome) {
    match outcome {
        Ok(()) => println!("✓ {label} is valid"),
        Err(e) => println!("✗ {label} is invalid: {e}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Format rules are optional; `required()` makes the value mandatory
    let username: Rule<str> = required().and(min_length(3)).and(max_length(20));

    for input in ["aiko", "ai", ""] {
        if let Ok(outcome) = username.validate(input, Lang::En).into_ready() {
            report(&format!("'{input}'"), outcome);
        }
    }

    // The same failure in every supported language
    println!();
    for lang in [Lang::En, Lang::Ja, Lang::Vi] {
        if let Ok(outcome) = username.validate("ai", lang).into_ready() {
            report(&format!("'ai' [{lang}]"), outcome);
        }
    }

    // Rules that take configuration report bad configuration up front
    println!();
    let attachments: Rule<Vec<FileMeta>> =
        max_total_file_size("5MB")?.and(file_extension(["pdf", "png"])?);
    let files = vec![
        FileMeta::new("report.pdf", 3_000_000),
        FileMeta::new("scan.tiff", 1_000_000),
    ];
    if let Ok(outcome) = attachments.validate(&files, Lang::En).into_ready() {
        report("attachments", outcome);
    }

    match max_total_file_size::<Vec<FileMeta>>("five megabytes") {
        Ok(_) => println!("✓ size parsed"),
        Err(e) => println!("✗ configuration error: {e}"),
    }

    println!("\nsinter-validator is working correctly!");
    Ok(())
}

//! Combinators example: and, or, not, overrides and deferred conditions

use futures::executor::block_on;
use sinter_validator::prelude::*;

fn show(label: &str, evaluation: Evaluation) {
    match block_on(evaluation.resolve()) {
        Ok(Ok(())) => println!("✓ {label}"),
        Ok(Err(e)) => println!("✗ {label}: {e}"),
        Err(e) => println!("! {label}: condition failed: {e}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Either a decimal amount or the literal "free"
    let price: Rule<str> = decimal().or(rule("Must be \"free\".", |s: &str| s == "free"));
    println!("Testing price (decimal or \"free\"):\n");
    for input in ["12.50", "free", "twelve"] {
        show(&format!("'{input}'"), price.validate(input, Lang::En));
    }

    // Negation with its own message
    let not_placeholder: Rule<str> = month().negate(Message::text(
        "not_month",
        "A reference code cannot look like a month.",
    ));
    println!("\nTesting reference code (not a month):\n");
    for input in ["REF-42", "2024-05"] {
        show(&format!("'{input}'"), not_placeholder.validate(input, Lang::En));
    }

    // One message for the whole composite
    let password: Rule<str> = and([required(), min_length(12)])
        .with_message("Use at least 12 characters.");
    println!("\nTesting password with an overridden message:\n");
    show("'hunter2'", password.validate("hunter2", Lang::Ja));

    // A deferred condition: the outcome is pending until awaited
    let company: Rule<Option<String>> = required_if(Condition::deferred(|| async {
        // Stands in for a lookup of the account type
        Ok(true)
    }));
    let evaluation = company.validate(&None, Lang::Vi);
    println!("\nCompany name pending: {}", evaluation.is_pending());
    show("company name", evaluation);

    // A date split across three inputs
    let birthday: Rule<Ymd> = ymd(YmdPart::ALL)?;
    println!();
    show("2020-02-29", birthday.validate(&Ymd::full(2020, 2, 29), Lang::En));
    show("2021-02-30", birthday.validate(&Ymd::full(2021, 2, 30), Lang::En));

    println!("\nCombinators are working correctly!");
    Ok(())
}

// ⏱️  Day Span CLI - Count the days between two date inputs
// Count mode prints the span, list mode prints each calendar date

use anyhow::Result;
use std::env;

use day_span::{dates_between, span_between, DateInput, InvalidDateError, VERSION};

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum Mode {
    Count(String, String),
    List(String, String),
    Usage,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|arg| arg == "--json");
    let inputs: Vec<String> = args
        .iter()
        .skip(1)
        .filter(|arg| arg.as_str() != "--json")
        .cloned()
        .collect();

    match parse_mode(&inputs) {
        Mode::Count(begin, end) => run_count(&begin, &end, json),
        Mode::List(begin, end) => run_list(&begin, &end, json),
        Mode::Usage => {
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Route the positional arguments to a mode
///
/// A leading "list" always selects list mode, so a wrong argument count
/// there reports usage instead of reading "list" as a date input.
fn parse_mode(inputs: &[String]) -> Mode {
    if !inputs.is_empty() && inputs[0] == "list" {
        if inputs.len() == 3 {
            Mode::List(inputs[1].clone(), inputs[2].clone())
        } else {
            Mode::Usage
        }
    } else if inputs.len() == 2 {
        Mode::Count(inputs[0].clone(), inputs[1].clone())
    } else {
        Mode::Usage
    }
}

fn run_count(begin: &str, end: &str, json: bool) -> Result<()> {
    let span = match span_between(classify(begin), classify(end)) {
        Ok(span) => span,
        Err(err) => return reject(err),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&span)?);
        return Ok(());
    }

    println!("⏱️  Day Span v{}", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("\n{}", span.summary());
    println!("\n✓ Days between: {}", span.days);

    Ok(())
}

fn run_list(begin: &str, end: &str, json: bool) -> Result<()> {
    let dates = match dates_between(classify(begin), classify(end)) {
        Ok(dates) => dates,
        Err(err) => return reject(err),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&dates)?);
        return Ok(());
    }

    println!("📅 Date Range - {} to {}", begin, end);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if dates.is_empty() {
        println!("\n(empty: begin falls after end)");
    } else {
        println!();
        for date in &dates {
            println!("  {}", date);
        }
    }

    println!("\n✓ {} date(s) in range", dates.len());

    Ok(())
}

/// Numeric arguments are epoch milliseconds, everything else is text
fn classify(raw: &str) -> DateInput {
    match raw.trim().parse::<i64>() {
        Ok(millis) => DateInput::EpochMillis(millis),
        Err(_) => DateInput::Text(raw.to_string()),
    }
}

fn reject(err: InvalidDateError) -> Result<()> {
    eprintln!("❌ {}", err);
    eprintln!("   Accepted text formats: ISO-8601 date or date-time, MM/DD/YYYY");
    eprintln!("   Numeric inputs are read as epoch milliseconds");
    std::process::exit(1);
}

fn print_usage() {
    eprintln!("❌ Expected two date inputs!");
    eprintln!("   Usage: day-span <begin> <end>         count the days between");
    eprintln!("          day-span list <begin> <end>    list each calendar date");
    eprintln!("   Flags: --json                         machine-readable output");
    eprintln!("   Inputs: ISO-8601 text, MM/DD/YYYY text, or epoch milliseconds");
}

// ============================================================================
// TESTS
// ============================================================================

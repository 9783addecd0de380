//! Lazy messages: pay for formatting only when someone actually reads it.
//!
//! **Run this demo:** `cargo run --example lazy_messages`
//!
//! Key concepts:
//! - `with_formatter` / `with_data_formatter` defer the message
//! - The formatter runs at most once, on the first read
//! - `describe_with` keeps `Result` adapters lazy too
//! - Overwriting the message cancels a pending formatter for good

use std::sync::atomic::{AtomicUsize, Ordering};

use incident::prelude::*;

static FORMATTER_RUNS: AtomicUsize = AtomicUsize::new(0);

fn expensive_summary(rows: usize) -> String {
    FORMATTER_RUNS.fetch_add(1, Ordering::SeqCst);
    // Imagine formatting a large query plan here.
    format!("import aborted after scanning {rows} rows")
}

fn import(rows: usize) -> incident::Result<()> {
    Err(Incident::named("ImportAborted").with_formatter(move || expensive_summary(rows)))
}

fn parse_quota(raw: &str) -> incident::Result<u64> {
    raw.parse::<u64>()
        .describe_with({
            let raw = raw.to_string();
            move || format!("quota {raw:?} is not a number")
        })
        .map(|quota| quota * 2)
}

fn main() {
    let failure = import(1_048_576).unwrap_err();
    println!("constructed; formatter runs so far: {}", FORMATTER_RUNS.load(Ordering::SeqCst));

    println!("first read : {}", failure.message());
    println!("second read: {}", failure.message());
    println!("formatter runs after two reads: {}", FORMATTER_RUNS.load(Ordering::SeqCst));

    // Overwriting before any read means the formatter never runs at all.
    let mut silenced = import(42).unwrap_err();
    silenced.set_message("import aborted");
    println!("\nsilenced   : {}", silenced.message());
    println!("formatter runs overall: {}", FORMATTER_RUNS.load(Ordering::SeqCst));

    // The happy path never pays for the failure message.
    match parse_quota("1024") {
        Ok(quota) => println!("\nquota ok   : {quota}"),
        Err(failure) => println!("\nquota error: {failure}"),
    }
    match parse_quota("over 9000") {
        Ok(quota) => println!("quota ok   : {quota}"),
        Err(failure) => println!("quota error: {failure}"),
    }
}

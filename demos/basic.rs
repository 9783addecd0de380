//! A hands-on introduction to incidents.
//!
//! **Run this demo:** `cargo run --example basic`
//!
//! Key concepts:
//! - Building incidents from a name, a payload, and a cause
//! - Reading the tag, the payload, and the message back
//! - Walking the cause chain through the standard `Error::source`

use std::error::Error;

use incident::prelude::*;

fn fetch(uri: &str) -> incident::Result<String> {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    Err(Incident::from_data(Data::new().with("uri", uri.to_string()))
        .with_name("Network")
        .caused_by(io)
        .with_message("Unable to connect"))
}

fn sync_catalog() -> incident::Result<()> {
    let failure = fetch("https://example.com/catalog").unwrap_err();
    Err(Incident::propagate(failure))
}

fn main() {
    let failure = sync_catalog().unwrap_err();

    println!("display : {failure}");
    println!("debug   : {failure:?}");
    println!("name    : {}", failure.name());
    println!("uri     : {:?}", failure.data().get::<String>("uri"));
    println!("trace   : {}", failure.trace());

    // Walk the chain the same way any generic error-handling layer would.
    println!("\ncause chain:");
    let mut source: Option<&(dyn Error + 'static)> = failure.source();
    while let Some(error) = source {
        println!("  caused by: {error}");
        source = error.source();
    }

    // Recovery code branches on the tag.
    match failure.name() {
        "Network" => println!("\nrecovery: scheduling a retry"),
        other => println!("\nrecovery: giving up on {other}"),
    }
}

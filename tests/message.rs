//! Message mutation: writes win over formatters, permanently.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use incident::Incident;

#[test]
fn message_string_is_mutable() {
    let mut incident = Incident::named("SomeError").with_message("This message will mutate");
    let old_message = incident.message().to_string();

    incident.set_message("This is a new message");
    assert_eq!(incident.message(), "This is a new message");
    assert_ne!(incident.message(), old_message);
}

#[test]
fn resolved_formatter_message_is_mutable() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut incident = Incident::named("SomeError").with_formatter({
        let count = Arc::clone(&count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
            "This message will mutate".to_string()
        }
    });

    assert_eq!(incident.message(), "This message will mutate");
    incident.set_message("This is a new message");
    assert_eq!(incident.message(), "This is a new message");
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn overwrite_before_any_read_suppresses_the_formatter() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut incident = Incident::named("SomeError").with_formatter({
        let count = Arc::clone(&count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
            "never observed".to_string()
        }
    });

    incident.set_message("This is a new message");
    assert_eq!(incident.message(), "This is a new message");
    assert_eq!(incident.message(), "This is a new message");
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn rendered_trace_keeps_the_message_it_embedded() {
    let mut incident = Incident::named("Disk").with_message("disk full");
    assert!(incident.trace().starts_with("Disk: disk full"));

    incident.set_message("replaced");
    assert_eq!(incident.message(), "replaced");
    // The trace was rendered and cached before the overwrite.
    assert!(incident.trace().starts_with("Disk: disk full"));
}

#[test]
fn trace_rendered_after_an_overwrite_embeds_the_new_message() {
    let mut incident = Incident::named("Disk").with_formatter(|| unreachable!());
    incident.set_message("replaced");
    assert!(incident.trace().starts_with("Disk: replaced"));
}

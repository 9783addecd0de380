//! Constructor surface: every supported combination of cause, name, data,
//! and message source normalizes the same way.

use std::sync::{Arc, Mutex};

use incident::{DEFAULT_NAME, Data, Incident};

#[test]
fn bare() {
    let incident = Incident::new();
    assert_eq!(incident.name(), DEFAULT_NAME);
    assert!(incident.data().is_empty());
    assert_eq!(incident.message(), "");
    assert!(incident.cause().is_none());
}

#[test]
fn message_only() {
    let incident = Incident::from_message("Unable to fire the reactor!");
    assert_eq!(incident.name(), DEFAULT_NAME);
    assert!(incident.data().is_empty());
    assert_eq!(incident.message(), "Unable to fire the reactor!");
}

#[test]
fn formatter_only() {
    let incident = Incident::from_formatter(|| "The reactor is on fire!".to_string());
    assert_eq!(incident.name(), DEFAULT_NAME);
    assert!(incident.data().is_empty());
    assert_eq!(incident.message(), "The reactor is on fire!");
}

#[test]
fn name_and_message() {
    let incident = Incident::named("paradoxError").with_message("This is not an error");
    assert_eq!(incident.name(), "paradoxError");
    assert!(incident.data().is_empty());
    assert_eq!(incident.message(), "This is not an error");
}

#[test]
fn name_and_formatter() {
    let incident = Incident::named("paradoxError").with_formatter(|| "This is not an error".to_string());
    assert_eq!(incident.name(), "paradoxError");
    assert_eq!(incident.message(), "This is not an error");
}

#[test]
fn name_and_data() {
    let incident = Incident::from_data(Data::new().with("timeForMessages", 0_u32))
        .with_name("AintNobodyGotTimeForMessages");
    assert_eq!(incident.name(), "AintNobodyGotTimeForMessages");
    assert_eq!(incident.data().get::<u32>("timeForMessages"), Some(&0));
    assert_eq!(incident.message(), "");
}

#[test]
fn name_data_and_message() {
    let incident = Incident::from_data(Data::new().with("pattern", "<html>"))
        .with_name("Pattern")
        .with_message("Now you have two errors");
    assert_eq!(incident.name(), "Pattern");
    assert_eq!(incident.data().get::<&str>("pattern"), Some(&"<html>"));
    assert_eq!(incident.message(), "Now you have two errors");
}

#[test]
fn name_data_and_formatter() {
    let incident = Incident::from_data(Data::new().with("pattern", "[^]"))
        .with_name("Pattern")
        .with_data_formatter(|data| {
            format!(
                "The pattern {:?} does not want to cooperate",
                data.get::<&str>("pattern").unwrap()
            )
        });
    assert_eq!(incident.name(), "Pattern");
    assert_eq!(
        incident.message(),
        "The pattern \"[^]\" does not want to cooperate"
    );
}

#[test]
fn data_only() {
    let incident = Incident::from_data(Data::new().with("port", 50313_u32));
    assert_eq!(incident.name(), DEFAULT_NAME);
    assert_eq!(incident.data().get::<u32>("port"), Some(&50313));
    assert_eq!(incident.message(), "");
}

#[test]
fn data_and_message() {
    let incident = Incident::from_data(Data::new().with("foo", "bar")).with_message("Foo/Bar");
    assert_eq!(incident.name(), DEFAULT_NAME);
    assert_eq!(incident.data().get::<&str>("foo"), Some(&"bar"));
    assert_eq!(incident.message(), "Foo/Bar");
}

#[test]
fn data_and_formatter() {
    let incident =
        Incident::from_data(Data::new().with("bar", "foo")).with_formatter(|| "Bar/Foo".to_string());
    assert_eq!(incident.name(), DEFAULT_NAME);
    assert_eq!(incident.data().get::<&str>("bar"), Some(&"foo"));
    assert_eq!(incident.message(), "Bar/Foo");
}

#[test]
fn cause_and_message() {
    let cause = Incident::named("QuantumEffect").with_message("What is even a cause?");
    let incident = Incident::from_message("Quantum stuff is rad but weird").caused_by(cause);

    assert_eq!(incident.name(), DEFAULT_NAME);
    assert!(incident.data().is_empty());
    assert_eq!(incident.message(), "Quantum stuff is rad but weird");
    let cause = incident.downcast_cause::<Incident>().unwrap();
    assert_eq!(cause.name(), "QuantumEffect");
    assert_eq!(cause.message(), "What is even a cause?");
}

#[test]
fn cause_and_formatter_closing_over_live_state() {
    let number_box = Arc::new(Mutex::new(f64::NAN));
    let cause = Incident::from_data(Data::new().with("value", f64::NAN))
        .with_name("NotANumber")
        .with_message("The number box contains NaN");
    let incident = Incident::from_formatter({
        let number_box = Arc::clone(&number_box);
        move || {
            format!(
                "Error with the number box containing {}",
                number_box.lock().unwrap()
            )
        }
    })
    .caused_by(cause);

    // The formatter closes over the live box, not a snapshot.
    *number_box.lock().unwrap() = 0.0;

    assert_eq!(incident.name(), DEFAULT_NAME);
    assert!(incident.data().is_empty());
    assert_eq!(incident.message(), "Error with the number box containing 0");
}

#[test]
fn cause_name_and_message() {
    let cause = Incident::named("Hardware").with_message("This is a hardware issue");
    let incident = Incident::named("LightBulb")
        .caused_by(cause)
        .with_message("Unable to change light bulb");

    assert_eq!(incident.name(), "LightBulb");
    assert!(incident.data().is_empty());
    assert_eq!(incident.message(), "Unable to change light bulb");
    assert_eq!(
        incident.downcast_cause::<Incident>().unwrap().name(),
        "Hardware"
    );
}

#[test]
fn cause_name_and_formatter() {
    let cause = Incident::named("CauseNotFound").with_message("Unable to find a cause to test with");
    let incident = Incident::named("CauseFound")
        .caused_by(cause)
        .with_formatter(|| "Found a cause".to_string());

    assert_eq!(incident.name(), "CauseFound");
    assert_eq!(incident.message(), "Found a cause");
}

#[test]
fn cause_name_and_data() {
    let cause = Incident::named("WrapMe").with_message("This error just draws attention to itself");
    let incident = Incident::from_data(Data::new().with("simple", true))
        .with_name("SimpleWrapper")
        .caused_by(cause);

    assert_eq!(incident.name(), "SimpleWrapper");
    assert_eq!(incident.data().get::<bool>("simple"), Some(&true));
    assert_eq!(incident.message(), "");
}

#[test]
fn cause_name_data_and_message() {
    let cause = Incident::named("ConnectionLost").with_message("Lost connection");
    let incident = Incident::from_data(Data::new().with("uri", "example.com"))
        .with_name("Network")
        .caused_by(cause)
        .with_message("Unable to connect");

    assert_eq!(incident.name(), "Network");
    assert_eq!(incident.data().get::<&str>("uri"), Some(&"example.com"));
    assert_eq!(incident.message(), "Unable to connect");
    assert_eq!(
        incident.downcast_cause::<Incident>().unwrap().name(),
        "ConnectionLost"
    );
}

#[test]
fn cause_name_data_and_formatter() {
    let cause = Incident::from_data(Data::new().with("minLength", 59_u32))
        .with_name("MinLength")
        .with_message("Value must have `.length` >= 59");
    let incident = Incident::from_data(
        Data::new().with("value", "Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch"),
    )
    .with_name("InvalidCityName")
    .caused_by(cause)
    .with_data_formatter(|data| {
        format!(
            "The value {:?} is an invalid city name",
            data.get::<&str>("value").unwrap()
        )
    });

    assert_eq!(incident.name(), "InvalidCityName");
    assert_eq!(
        incident.message(),
        "The value \"Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch\" is an invalid city name"
    );
}

#[test]
fn cause_and_data() {
    let cause = Incident::named("NeedForEasyErrorManagement");
    let incident = Incident::from_data(
        Data::new()
            .with("homepage", "https://example.com/incident")
            .with("author", "Demurgos"),
    )
    .caused_by(cause);

    assert_eq!(incident.name(), DEFAULT_NAME);
    assert_eq!(incident.data().get::<&str>("author"), Some(&"Demurgos"));
    assert_eq!(incident.message(), "");
}

#[test]
fn cause_data_and_message() {
    let cause = Incident::from_data(Data::new().with("status", 200_u16))
        .with_name("Http")
        .with_message("200 - OK");
    let incident = Incident::from_data(Data::new().with("time", 1_234_567_890_u64))
        .caused_by(cause)
        .with_message("Surprise error");

    assert_eq!(incident.name(), DEFAULT_NAME);
    assert_eq!(incident.data().get::<u64>("time"), Some(&1_234_567_890));
    assert_eq!(incident.message(), "Surprise error");
}

#[test]
fn cause_data_and_formatter() {
    let cause = Incident::from_data(Data::new().with("temperature", -273.15_f64))
        .with_name("Temperature")
        .with_message("It's 0K");
    let incident = Incident::from_data(Data::new().with("endOfTheWorld", true))
        .caused_by(cause)
        .with_data_formatter(|data| {
            if *data.get::<bool>("endOfTheWorld").unwrap() {
                "Seems pretty serious".to_string()
            } else {
                "Could be worse".to_string()
            }
        });

    assert_eq!(incident.name(), DEFAULT_NAME);
    assert_eq!(incident.message(), "Seems pretty serious");
}

#[test]
fn native_error_cause() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let incident = Incident::wrap(io);

    assert_eq!(incident.name(), DEFAULT_NAME);
    assert!(incident.data().is_empty());
    assert_eq!(incident.message(), "no such file");
    assert!(incident.downcast_cause::<std::io::Error>().is_some());
}

#[test]
fn incident_cause_copy_construction() {
    let base = Incident::from_data(Data::new().with("simple", true))
        .with_name("SimpleWrapper")
        .with_message("already resolved");
    let copy = Incident::propagate(base);

    assert_eq!(copy.name(), "SimpleWrapper");
    assert_eq!(copy.data().get::<bool>("simple"), Some(&true));
    assert_eq!(copy.message(), "already resolved");
    assert_eq!(
        copy.downcast_cause::<Incident>().unwrap().name(),
        "SimpleWrapper"
    );
}

#[test]
fn trailing_message_wins_over_formatter() {
    let incident = Incident::named("Network")
        .with_formatter(|| unreachable!("replaced before any read"))
        .with_message("Unable to connect");
    assert_eq!(incident.message(), "Unable to connect");
}

use anyhow::{anyhow, Result};
use rescue::kit::*;
use std::error::Error;
use std::io;

#[test]
fn test_static_str_payload() {
    let value = PanicValue::from_payload(Box::new("boom"));
    assert_eq!(value, PanicValue::from("boom"));
    assert_eq!(value.message(), Some("boom"));
    assert_eq!(value.to_string(), "boom");
}

#[test]
fn test_string_payload() {
    let value = PanicValue::from_payload(Box::new(format!("index {}", 3)));
    assert_eq!(value, PanicValue::Message("index 3".into()));
}

#[test]
fn test_anyhow_payload() {
    let value = PanicValue::from_payload(Box::new(anyhow!("disk is full")));
    assert!(value.is_error());
    assert_eq!(value.to_string(), "disk is full");
    assert_eq!(value, PanicValue::from(anyhow!("disk is full")));
    assert_ne!(value, PanicValue::from("disk is full"));
}

#[test]
fn test_boxed_error_payload() -> Result<()> {
    let err: Box<dyn Error + Send + Sync> =
        Box::new(io::Error::new(io::ErrorKind::Other, "broken pipe"));
    let value = PanicValue::from_payload(Box::new(err));
    let err = value.as_error().ok_or_else(|| anyhow!("not an error"))?;
    assert_eq!(err.to_string(), "broken pipe");
    Ok(())
}

#[test]
fn test_opaque_payload() {
    let value = PanicValue::from_payload(Box::new(42_u32));
    assert_eq!(value.to_string(), "Box<dyn Any>");
    assert_eq!(value.downcast::<u32>(), Some(42));
    assert_eq!(value.downcast::<i64>(), None);
    assert_eq!(value, value.clone());

    let other = PanicValue::from_payload(Box::new(42_u32));
    assert_ne!(value, other);
}

#[test]
fn test_prototype_rendering() {
    assert_eq!(PANIC_RECOVERED.to_string(), "panic in task recovered");
    assert_eq!(
        RECOVER_PANICKED.to_string(),
        "panic in recover function of task recovered"
    );
}

#[test]
fn test_rendering_with_value() {
    let failure = PANIC_RECOVERED.with_value("attempt to divide by zero");
    assert_eq!(
        failure.to_string(),
        "panic in task recovered: attempt to divide by zero"
    );
    let failure = RECOVER_PANICKED.with_value(anyhow!("worse"));
    assert_eq!(
        failure.to_string(),
        "panic in recover function of task recovered: worse"
    );
}

#[test]
fn test_with_value_keeps_prototype() {
    let prototype = CapturedFailure::new(FailureKind::WorkPanicked);
    let first = prototype.with_value("first");
    let second = prototype.with_value("second");
    assert_eq!(prototype.value(), None);
    assert_eq!(first.value(), Some(&PanicValue::from("first")));
    assert_eq!(second.value(), Some(&PanicValue::from("second")));
    assert_eq!(PANIC_RECOVERED, prototype);
}

#[test]
fn test_equality() {
    assert_eq!(PANIC_RECOVERED.with_value("x"), PANIC_RECOVERED.with_value("x"));
    assert_ne!(PANIC_RECOVERED.with_value("x"), PANIC_RECOVERED.with_value("y"));
    assert_ne!(PANIC_RECOVERED.with_value("x"), RECOVER_PANICKED.with_value("x"));
    assert_ne!(PANIC_RECOVERED.with_value("x"), PANIC_RECOVERED);
}

#[test]
fn test_error_source() -> Result<()> {
    let failure = PANIC_RECOVERED.with_value(anyhow!("disk is full"));
    let source = failure.source().ok_or_else(|| anyhow!("no source"))?;
    assert_eq!(source.to_string(), "disk is full");
    assert!(PANIC_RECOVERED.with_value("text").source().is_none());
    Ok(())
}

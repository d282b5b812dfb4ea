//! Recover functions.
//!
//! A recover function receives the value a task panicked with and a sink.
//! Whatever it writes into the sink is what the consumer of the task
//! observes. Writing nothing makes the panic indistinguishable from a
//! clean finish, which is supported but easy to do by accident.

use rescue_core::{PanicValue, PANIC_RECOVERED};
use rescue_signal::Sink;
use std::fmt;
use std::sync::Arc;

pub trait RecoverFn: Fn(PanicValue, &mut Sink) + Send + Sync + 'static {}

impl<F> RecoverFn for F where F: Fn(PanicValue, &mut Sink) + Send + Sync + 'static {}

/// A shared recover function.
///
/// Clones point to the same function.
#[derive(Clone)]
pub struct Recover {
    func: Arc<dyn RecoverFn>,
}

impl Recover {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(PanicValue, &mut Sink) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// The built-in default: reports the value as a failure of the work.
    pub fn report() -> Self {
        Self::new(|value, sink| {
            sink.put(PANIC_RECOVERED.with_value(value)).ok();
        })
    }

    /// Swallows a panic. The task looks like it finished cleanly.
    pub fn silent() -> Self {
        Self::new(|_value, _sink| {})
    }

    /// Writes the value to the log and reports nothing.
    pub fn log() -> Self {
        Self::new(|value, _sink| match &value {
            PanicValue::Error(err) => log::error!("Task failed with an error: {err}"),
            other => log::error!("Task panic recovered: {other}"),
        })
    }

    /// Calls the function.
    pub fn call(&self, value: PanicValue, sink: &mut Sink) {
        (self.func)(value, sink)
    }

    /// Checks if both values share the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Default for Recover {
    fn default() -> Self {
        Self::report()
    }
}

impl fmt::Debug for Recover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Recover")
    }
}

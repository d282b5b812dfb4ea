//! The supervision boundary around a task.
//!
//! ```text
//! perform() ──ok──────────────────────────────┐
//!     │                                       │
//!   panic ─► fallback(value, sink) ──ok───────┤
//!                  │                          ├─► sink finalized
//!                panic ─► RECOVER_PANICKED ───┘
//! ```
//!
//! Neither a panic of the work nor a panic of its recover function
//! leaves the thread. Requires `panic = "unwind"`.

use crate::error::LaunchError;
use crate::global::RESCUE;
use rescue_core::{PanicValue, RECOVER_PANICKED};
use rescue_signal::{channel, Completion, Sink};
use std::panic::{self, AssertUnwindSafe};
use std::thread;

pub const DEFAULT_LABEL: &str = "task";

/// An activity that can be run under supervision.
pub trait Supervised: Send + 'static {
    /// A name used for logging and for the thread.
    fn label(&self) -> &str {
        DEFAULT_LABEL
    }

    /// Overrides the stack size of the thread.
    fn stack_size(&self) -> Option<usize> {
        None
    }

    /// Does the work. Called once.
    fn perform(&mut self);

    /// Handles a panic of [`Supervised::perform`].
    fn fallback(&mut self, value: PanicValue, sink: &mut Sink);
}

/// Runs the activity on the current thread.
///
/// The sink is finalized when this function returns, on every path.
pub fn supervise<S: Supervised>(mut supervised: S, mut sink: Sink) {
    let label = supervised.label().to_string();
    log::debug!("Task {label} started.");
    let result = panic::catch_unwind(AssertUnwindSafe(|| supervised.perform()));
    if let Err(payload) = result {
        let value = PanicValue::from_payload(payload);
        contain(&label, value, &mut sink, |value, sink| {
            supervised.fallback(value, sink)
        });
    }
    log::debug!("Task {label} finished.");
}

/// Calls a recover function and turns its own panic into a failure.
pub(crate) fn contain<F>(label: &str, value: PanicValue, sink: &mut Sink, recover: F)
where
    F: FnOnce(PanicValue, &mut Sink),
{
    log_guarded(|| log::warn!("Task {label} panicked: {value}"));
    let result = panic::catch_unwind(AssertUnwindSafe(|| recover(value, &mut *sink)));
    if let Err(payload) = result {
        let value = PanicValue::from_payload(payload);
        log_guarded(|| log::error!("Recover function of task {label} panicked: {value}"));
        sink.overwrite(RECOVER_PANICKED.with_value(value));
    }
}

/// Writes a log record that renders a panic value.
///
/// The value's `Display` is user code and may panic itself.
fn log_guarded<F: FnOnce()>(write: F) {
    if panic::catch_unwind(AssertUnwindSafe(write)).is_err() {
        log::error!("A panic value can't be rendered for the log.");
    }
}

/// Spawns a thread that supervises the activity.
///
/// Returns as soon as the thread is started. The label becomes the
/// thread name, so it can't contain a NUL byte.
pub fn launch<S: Supervised>(supervised: S) -> Result<Completion, LaunchError> {
    let label = supervised.label().to_string();
    if label.contains('\0') {
        return Err(LaunchError::InvalidLabel { label });
    }
    let (sink, completion) = channel();
    let mut builder = thread::Builder::new().name(label.clone());
    if let Some(bytes) = supervised.stack_size().or_else(|| RESCUE.get_stack_size()) {
        builder = builder.stack_size(bytes);
    }
    builder
        .spawn(move || supervise(supervised, sink))
        .map_err(|source| LaunchError::Spawn { label, source })?;
    Ok(completion)
}

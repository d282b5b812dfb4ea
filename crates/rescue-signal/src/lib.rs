//! A crate with the completion signal of a task.
//!
//! The signal carries at most one [`CapturedFailure`](rescue_core::CapturedFailure).
//! The absence of a failure means the task has finished cleanly.

pub mod signal;

pub use signal::{channel, Completion, Sink, SinkError};

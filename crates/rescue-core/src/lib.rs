//! Outcome types shared by all the `rescue` crates.
//!
//! A panic captured inside a task is turned into a [`CapturedFailure`]
//! that tells where it happened and carries the [`PanicValue`].

pub mod failure;
pub mod value;

pub use failure::{CapturedFailure, FailureKind, PANIC_RECOVERED, RECOVER_PANICKED};
pub use value::{ErrorValue, OpaqueValue, PanicValue};

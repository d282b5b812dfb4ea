//! Routines and typed calls that run as supervised tasks.

pub mod invoke;
pub mod routine;

pub use invoke::{go_with, signature, task_with, Invoke};
pub use routine::Routine;

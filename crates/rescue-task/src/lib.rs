//! Tasks that never let a panic escape their thread.
//!
//! A [`Task`] is launched on its own thread. If the work panics, the
//! task's [`Recover`] function decides what to report through the
//! [`Completion`](rescue_signal::Completion). If the recover function
//! panics as well, the second panic is reported as
//! [`FailureKind::RecoverPanicked`](rescue_core::FailureKind).

pub mod async_task;
pub mod error;
pub mod global;
pub mod recover;
pub mod supervisor;
pub mod task;

pub use async_task::{go_async, AsyncTask};
pub use error::LaunchError;
pub use global::{get_default_recover, set_default_recover, Global, RESCUE};
pub use recover::{Recover, RecoverFn};
pub use supervisor::{launch, supervise, Supervised};
pub use task::{go, AnyWork, Task};

//! Panic-safe tasks.
//!
//! ```no_run
//! use rescue::kit::*;
//!
//! let mut completion = Task::new(|| {
//!     let values = [1, 2, 3];
//!     let index = std::hint::black_box(3);
//!     println!("{}", values[index]);
//! })
//! .go();
//! if let Err(failure) = completion.wait() {
//!     println!("{failure}");
//! }
//! ```

pub mod core {
    pub use rescue_core::*;
}

pub mod signal {
    pub use rescue_signal::*;
}

pub mod task {
    pub use rescue_task::*;
}

pub mod routine {
    pub use rescue_routine::*;
}

pub mod kit {
    pub use rescue_core::{
        CapturedFailure, FailureKind, PanicValue, PANIC_RECOVERED, RECOVER_PANICKED,
    };
    pub use rescue_routine::{go_with, signature, task_with, Invoke, Routine};
    pub use rescue_signal::{channel, Completion, Sink, SinkError};
    pub use rescue_task::{
        get_default_recover, go, go_async, set_default_recover, AsyncTask, LaunchError, Recover,
        RecoverFn, Task, RESCUE,
    };
}

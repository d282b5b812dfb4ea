//! Tasks that run on the tokio runtime instead of a dedicated thread.

use crate::global::get_default_recover;
use crate::recover::Recover;
use crate::supervisor::{contain, DEFAULT_LABEL};
use futures::future::{BoxFuture, FutureExt};
use rescue_core::PanicValue;
use rescue_signal::{channel, Completion, Sink};
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// A future paired with a recover function.
///
/// The recover function is synchronous and is protected the same way
/// as for a [`Task`](crate::task::Task).
pub struct AsyncTask {
    future: BoxFuture<'static, ()>,
    recover: Recover,
    label: String,
}

impl AsyncTask {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            future: future.boxed(),
            recover: get_default_recover(),
            label: DEFAULT_LABEL.into(),
        }
    }

    pub fn with_recover(mut self, recover: Recover) -> Self {
        self.recover = recover;
        self
    }

    pub fn with_recover_fn<F>(self, func: F) -> Self
    where
        F: Fn(PanicValue, &mut Sink) + Send + Sync + 'static,
    {
        self.with_recover(Recover::new(func))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Spawns the task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn go(self) -> Completion {
        let (mut sink, completion) = channel();
        let Self {
            future,
            recover,
            label,
        } = self;
        tokio::spawn(async move {
            log::debug!("Task {label} started.");
            if let Err(payload) = AssertUnwindSafe(future).catch_unwind().await {
                let value = PanicValue::from_payload(payload);
                contain(&label, value, &mut sink, |value, sink| {
                    recover.call(value, sink)
                });
            }
            log::debug!("Task {label} finished.");
        });
        completion
    }
}

impl fmt::Debug for AsyncTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncTask")
            .field("label", &self.label)
            .finish()
    }
}

/// Spawns `future` with the default recover function.
pub fn go_async<F>(future: F) -> Completion
where
    F: Future<Output = ()> + Send + 'static,
{
    AsyncTask::new(future).go()
}

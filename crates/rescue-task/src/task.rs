use crate::error::LaunchError;
use crate::global::get_default_recover;
use crate::recover::Recover;
use crate::supervisor::{launch, Supervised, DEFAULT_LABEL};
use rescue_core::PanicValue;
use rescue_signal::{Completion, Sink};
use std::fmt;

pub trait AnyWork: FnOnce() + Send + 'static {}

impl<F> AnyWork for F where F: FnOnce() + Send + 'static {}

/// A unit of work paired with a recover function.
pub struct Task {
    work: Option<Box<dyn AnyWork>>,
    recover: Recover,
    label: String,
    stack_size: Option<usize>,
}

impl Task {
    /// Creates a task that uses the current default recover function.
    pub fn new<F: AnyWork>(work: F) -> Self {
        Self {
            work: Some(Box::new(work)),
            recover: get_default_recover(),
            label: DEFAULT_LABEL.into(),
            stack_size: None,
        }
    }

    /// Overrides the recover function of the task.
    ///
    /// Use [`Recover::silent`] to swallow panics.
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

    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    pub fn recover_fn(&self) -> &Recover {
        &self.recover
    }

    /// Starts the task on a new thread and returns immediately.
    ///
    /// # Panics
    ///
    /// Panics if the thread can't be created, as `std::thread::spawn` does,
    /// or if the label contains a NUL byte.
    pub fn go(self) -> Completion {
        match self.try_go() {
            Ok(completion) => completion,
            Err(err) => panic!("{err}"),
        }
    }

    /// Starts the task on a new thread and returns immediately.
    pub fn try_go(self) -> Result<Completion, LaunchError> {
        launch(self)
    }
}

impl Supervised for Task {
    fn label(&self) -> &str {
        &self.label
    }

    fn stack_size(&self) -> Option<usize> {
        self.stack_size
    }

    fn perform(&mut self) {
        if let Some(work) = self.work.take() {
            work();
        }
    }

    fn fallback(&mut self, value: PanicValue, sink: &mut Sink) {
        self.recover.call(value, sink);
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("label", &self.label)
            .field("stack_size", &self.stack_size)
            .finish()
    }
}

/// Starts `work` on a new thread with the default recover function.
pub fn go<F: AnyWork>(work: F) -> Completion {
    Task::new(work).go()
}

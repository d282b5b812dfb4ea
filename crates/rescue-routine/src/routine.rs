//! Routines are objects that carry both the work and the way to recover.

use rescue_core::{PanicValue, PANIC_RECOVERED};
use rescue_signal::{Completion, Sink};
use rescue_task::supervisor::DEFAULT_LABEL;
use rescue_task::{launch, LaunchError, Supervised};

/// An object that runs on its own thread and handles its own panics.
///
/// A panic in [`Routine::recover`] is contained the same way as for a task.
pub trait Routine: Sized + Send + 'static {
    fn label(&self) -> &str {
        DEFAULT_LABEL
    }

    fn run(&mut self);

    /// Reports the panic as a failure of the work by default.
    fn recover(&mut self, value: PanicValue, sink: &mut Sink) {
        sink.put(PANIC_RECOVERED.with_value(value)).ok();
    }

    /// Starts the routine on a new thread.
    ///
    /// # Panics
    ///
    /// Panics if the thread can't be created.
    fn go(self) -> Completion {
        match self.try_go() {
            Ok(completion) => completion,
            Err(err) => panic!("{err}"),
        }
    }

    fn try_go(self) -> Result<Completion, LaunchError> {
        launch(RoutineRunner { routine: self })
    }
}

struct RoutineRunner<R> {
    routine: R,
}

impl<R: Routine> Supervised for RoutineRunner<R> {
    fn label(&self) -> &str {
        self.routine.label()
    }

    fn perform(&mut self) {
        self.routine.run();
    }

    fn fallback(&mut self, value: PanicValue, sink: &mut Sink) {
        self.routine.recover(value, sink);
    }
}

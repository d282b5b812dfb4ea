//! A single-use completion signal.
//!
//! The producer side ([`Sink`]) holds at most one outcome and delivers it
//! when dropped, so the signal is closed on every exit path of a task.
//! The consumer side ([`Completion`]) remembers the outcome once observed.

use futures::FutureExt;
use rescue_core::CapturedFailure;
use std::future::{Future, IntoFuture};
use std::mem;
use std::pin::Pin;
use thiserror::Error;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Creates a connected pair of a sink and a completion handle.
pub fn channel() -> (Sink, Completion) {
    let (sender, receiver) = oneshot::channel();
    let sink = Sink {
        pending: None,
        sender: Some(sender),
    };
    let completion = Completion {
        state: State::Waiting(receiver),
    };
    (sink, completion)
}

/// The sink has an outcome already. The rejected failure is returned back.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("The sink has an outcome already")]
pub struct SinkError(pub CapturedFailure);

/// The writing end of a completion signal.
#[derive(Debug)]
pub struct Sink {
    pending: Option<CapturedFailure>,
    sender: Option<oneshot::Sender<CapturedFailure>>,
}

impl Sink {
    /// Writes the outcome. Only the first write is accepted.
    pub fn put(&mut self, failure: CapturedFailure) -> Result<(), SinkError> {
        if self.pending.is_some() {
            Err(SinkError(failure))
        } else {
            self.pending = Some(failure);
            Ok(())
        }
    }

    /// Replaces the outcome and returns the previous one.
    pub fn overwrite(&mut self, failure: CapturedFailure) -> Option<CapturedFailure> {
        self.pending.replace(failure)
    }

    /// Checks if an outcome has been written.
    pub fn is_filled(&self) -> bool {
        self.pending.is_some()
    }

    /// A reference to the written outcome.
    pub fn pending(&self) -> Option<&CapturedFailure> {
        self.pending.as_ref()
    }

    /// Delivers the outcome (if any) and closes the signal.
    ///
    /// Dropping the sink does the same.
    pub fn finalize(mut self) {
        self.close();
    }

    fn close(&mut self) {
        if let Some(sender) = self.sender.take() {
            if let Some(failure) = self.pending.take() {
                // The consumer may have gone away.
                sender.send(failure).ok();
            }
        }
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        self.close();
    }
}

#[derive(Debug)]
enum State {
    Waiting(oneshot::Receiver<CapturedFailure>),
    Done(Option<CapturedFailure>),
}

/// The reading end of a completion signal.
///
/// `Ok(())` means the signal was closed without a failure.
#[derive(Debug)]
pub struct Completion {
    state: State,
}

impl Completion {
    /// Blocks the current thread until the signal is closed.
    ///
    /// # Panics
    ///
    /// Panics if called inside an asynchronous execution context,
    /// use [`Completion::join`] there.
    pub fn wait(&mut self) -> Result<(), CapturedFailure> {
        let state = mem::replace(&mut self.state, State::Done(None));
        let outcome = match state {
            State::Waiting(receiver) => receiver.blocking_recv().ok(),
            State::Done(outcome) => outcome,
        };
        self.settle(outcome)
    }

    /// Waits asynchronously until the signal is closed.
    pub async fn join(&mut self) -> Result<(), CapturedFailure> {
        let outcome = match &mut self.state {
            State::Waiting(receiver) => receiver.await.ok(),
            State::Done(outcome) => outcome.take(),
        };
        self.settle(outcome)
    }

    /// Checks the signal without blocking.
    pub fn is_finished(&mut self) -> bool {
        self.try_outcome().is_some()
    }

    /// Returns the outcome if the signal is closed already.
    pub fn try_outcome(&mut self) -> Option<Result<(), CapturedFailure>> {
        let outcome = match &mut self.state {
            State::Waiting(receiver) => match receiver.try_recv() {
                Ok(failure) => Some(failure),
                Err(TryRecvError::Closed) => None,
                Err(TryRecvError::Empty) => return None,
            },
            State::Done(outcome) => outcome.take(),
        };
        Some(self.settle(outcome))
    }

    fn settle(&mut self, outcome: Option<CapturedFailure>) -> Result<(), CapturedFailure> {
        let result = match &outcome {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        };
        self.state = State::Done(outcome);
        result
    }
}

impl IntoFuture for Completion {
    type Output = Result<(), CapturedFailure>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(mut self) -> Self::IntoFuture {
        async move { self.join().await }.boxed()
    }
}

//! Failures reported through a completion signal.

use crate::value::PanicValue;
use derive_more::Display;
use std::error::Error as StdError;
use std::fmt;

/// Where a panic was captured.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The task's work panicked.
    #[display("panic in task recovered")]
    WorkPanicked,
    /// The recover function panicked while handling a panic of the work.
    #[display("panic in recover function of task recovered")]
    RecoverPanicked,
}

/// A prototype of a failure of the work.
pub const PANIC_RECOVERED: CapturedFailure = CapturedFailure::new(FailureKind::WorkPanicked);

/// A prototype of a failure of a recover function.
pub const RECOVER_PANICKED: CapturedFailure = CapturedFailure::new(FailureKind::RecoverPanicked);

/// A captured panic with the place it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFailure {
    kind: FailureKind,
    value: Option<PanicValue>,
}

impl CapturedFailure {
    /// Creates a failure without a value.
    pub const fn new(kind: FailureKind) -> Self {
        Self { kind, value: None }
    }

    /// Returns a new failure of the same kind that carries `value`.
    ///
    /// `self` is left untouched, so the prototypes can be shared freely.
    pub fn with_value(&self, value: impl Into<PanicValue>) -> Self {
        Self {
            kind: self.kind,
            value: Some(value.into()),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn value(&self) -> Option<&PanicValue> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<PanicValue> {
        self.value
    }

    pub fn is_work_panicked(&self) -> bool {
        self.kind == FailureKind::WorkPanicked
    }

    pub fn is_recover_panicked(&self) -> bool {
        self.kind == FailureKind::RecoverPanicked
    }
}

impl fmt::Display for CapturedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl StdError for CapturedFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let err = self.value.as_ref()?.as_error()?;
        Some(err.error())
    }
}

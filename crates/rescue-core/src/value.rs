//! A captured panic payload.
//!
//! `std::panic::catch_unwind` hands out a `Box<dyn Any + Send>`.
//! The module sorts it into a few shapes that can be compared,
//! rendered, and shared between threads.

use derive_more::{Display, From};
use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// A value a task or a recover function panicked with.
#[derive(Display, Debug, Clone, PartialEq, From)]
pub enum PanicValue {
    /// A textual payload, e.g. produced by `panic!("...")`.
    #[display("{_0}")]
    Message(String),
    /// An error passed to `std::panic::panic_any`.
    #[display("{_0}")]
    Error(ErrorValue),
    /// Any other payload.
    #[display("Box<dyn Any>")]
    Opaque(OpaqueValue),
}

impl PanicValue {
    /// Sorts a raw payload returned by `catch_unwind`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<&'static str>() {
            Ok(message) => return Self::Message((*message).to_string()),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(message) => return Self::Message(*message),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<anyhow::Error>() {
            Ok(err) => return Self::Error(ErrorValue::from(*err)),
            Err(payload) => payload,
        };
        match payload.downcast::<Box<dyn StdError + Send + Sync>>() {
            Ok(err) => Self::Error(ErrorValue::from(*err)),
            Err(payload) => Self::Opaque(OpaqueValue::new(payload)),
        }
    }

    /// Returns the text if the payload was a message.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the error if the payload was error-like.
    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Tries to get a copy of an opaque payload of type `T`.
    pub fn downcast<T: Clone + 'static>(&self) -> Option<T> {
        match self {
            Self::Opaque(value) => value.downcast(),
            _ => None,
        }
    }
}

impl From<&str> for PanicValue {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<anyhow::Error> for PanicValue {
    fn from(err: anyhow::Error) -> Self {
        Self::Error(ErrorValue::from(err))
    }
}

/// An error-like payload.
///
/// Two values are equal if they render the same message.
#[derive(Debug, Clone)]
pub struct ErrorValue {
    error: Arc<dyn StdError + Send + Sync>,
}

impl ErrorValue {
    /// A reference to the captured error.
    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.error.as_ref()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for ErrorValue {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        Self {
            error: Arc::from(error),
        }
    }
}

impl From<anyhow::Error> for ErrorValue {
    fn from(error: anyhow::Error) -> Self {
        let boxed: Box<dyn StdError + Send + Sync> = error.into();
        Self::from(boxed)
    }
}

impl PartialEq for ErrorValue {
    fn eq(&self, other: &Self) -> bool {
        self.error.to_string() == other.error.to_string()
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

/// A payload of an arbitrary type.
///
/// The payload is shared by all clones, so two values are equal
/// only if they were captured from the same panic.
#[derive(Clone)]
pub struct OpaqueValue {
    payload: Arc<Mutex<Box<dyn Any + Send>>>,
}

impl OpaqueValue {
    fn new(payload: Box<dyn Any + Send>) -> Self {
        Self {
            payload: Arc::new(Mutex::new(payload)),
        }
    }

    /// Checks the type of the payload.
    pub fn is<T: 'static>(&self) -> bool {
        self.payload
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is::<T>()
    }

    /// Clones the payload out if it has the type `T`.
    pub fn downcast<T: Clone + 'static>(&self) -> Option<T> {
        self.payload
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .downcast_ref::<T>()
            .cloned()
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpaqueValue")
    }
}

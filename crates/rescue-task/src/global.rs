//! Process-wide settings of tasks.

use crate::recover::Recover;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

pub static RESCUE: Global = Global::new();

/// Settings applied to tasks that don't override them.
///
/// Values are read when a task is created or launched, so a change
/// never affects tasks created before it.
pub struct Global {
    default_recover: RwLock<Option<Recover>>,
    stack_size: AtomicUsize,
}

impl Global {
    pub const fn new() -> Self {
        Self {
            default_recover: RwLock::new(None),
            stack_size: AtomicUsize::new(0),
        }
    }

    pub fn set_default_recover(&self, recover: Recover) {
        let mut slot = self
            .default_recover
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(recover);
    }

    /// Returns the installed recover function or [`Recover::report`].
    pub fn get_default_recover(&self) -> Recover {
        self.default_recover
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_default()
    }

    /// Sets the stack size of task threads. `0` means the platform default.
    pub fn set_stack_size(&self, bytes: usize) {
        self.stack_size.store(bytes, Ordering::Relaxed);
    }

    pub fn get_stack_size(&self) -> Option<usize> {
        match self.stack_size.load(Ordering::Relaxed) {
            0 => None,
            bytes => Some(bytes),
        }
    }
}

impl Default for Global {
    fn default() -> Self {
        Self::new()
    }
}

/// Replaces the recover function used by tasks created afterwards.
pub fn set_default_recover(recover: Recover) {
    RESCUE.set_default_recover(recover);
}

/// Returns the current default recover function.
///
/// Useful to restore it after a temporary change.
pub fn get_default_recover() -> Recover {
    RESCUE.get_default_recover()
}

#![forbid(unsafe_code)]

//! Mutex-serialized handle for hosts that invoke commands from several threads.
//!
//! Truncate-then-append and cursor read-then-write are not individually safe
//! to interleave, so every operation holds one lock over the whole
//! [`Commander`] for its full duration.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::command::Command;
use crate::commander::Commander;
use crate::error::Result;
use crate::history::StepOutcome;

/// Clonable, thread-safe handle to one [`Commander`].
pub struct SharedCommander<A = ()> {
    inner: Arc<Mutex<Commander<A>>>,
}

impl<A> Clone for SharedCommander<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> fmt::Debug for SharedCommander<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCommander")
            .field("inner", &*self.lock())
            .finish()
    }
}

impl<A> From<Commander<A>> for SharedCommander<A> {
    fn from(commander: Commander<A>) -> Self {
        Self::new(commander)
    }
}

impl<A> SharedCommander<A> {
    #[must_use]
    pub fn new(commander: Commander<A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(commander)),
        }
    }

    // A panicking effect leaves the bookkeeping consistent, so a poisoned
    // lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Commander<A>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn register(&self, command: Command<A>) -> Result<()> {
        self.lock().register(command)
    }

    pub fn invoke(&self, name: &str, args: A) -> Result<()> {
        self.lock().invoke(name, args)
    }

    pub fn undo(&self) -> StepOutcome {
        self.lock().undo()
    }

    pub fn redo(&self) -> StepOutcome {
        self.lock().redo()
    }

    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.lock().current()
    }

    /// Run `f` with exclusive access to the queue.
    pub fn with<R>(&self, f: impl FnOnce(&mut Commander<A>) -> R) -> R {
        f(&mut self.lock())
    }
}

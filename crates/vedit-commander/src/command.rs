#![forbid(unsafe_code)]

//! Command descriptors and the reversible effects they produce.
//!
//! A [`Command`] is a named factory: every invocation hands the caller's
//! arguments to the factory, which returns a [`CommandExecute`] holding a
//! mandatory `redo` effect and an optional `undo` effect. Effects close over
//! whatever application state they mutate; the queue only calls them.
//!
//! # Invariants
//!
//! - A command name is never empty once registered.
//! - `redo` may run many times (once per invocation, once per redo step).
//! - A `CommandExecute` without `undo` is irreversible once recorded.

use std::fmt;

/// A zero-argument effect that applies or reverts one change.
pub type Effect = Box<dyn FnMut() + Send>;

/// Factory turning invocation arguments into a reversible effect pair.
pub type ExecuteFn<A> = Box<dyn FnMut(A) -> CommandExecute + Send>;

/// The result of invoking a command's factory.
pub struct CommandExecute {
    pub(crate) redo: Effect,
    pub(crate) undo: Option<Effect>,
}

impl fmt::Debug for CommandExecute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandExecute")
            .field("has_undo", &self.undo.is_some())
            .finish()
    }
}

impl CommandExecute {
    /// Create an effect pair with only a forward action.
    ///
    /// Recorded entries built from this are irreversible until an undo is
    /// attached with [`with_undo`](Self::with_undo).
    #[must_use]
    pub fn new<R>(redo: R) -> Self
    where
        R: FnMut() + Send + 'static,
    {
        Self {
            redo: Box::new(redo),
            undo: None,
        }
    }

    /// Create an effect pair with both directions.
    #[must_use]
    pub fn reversible<R, U>(redo: R, undo: U) -> Self
    where
        R: FnMut() + Send + 'static,
        U: FnMut() + Send + 'static,
    {
        Self::new(redo).with_undo(undo)
    }

    /// A pair whose effects do nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Attach the reverting action.
    #[must_use]
    pub fn with_undo<U>(mut self, undo: U) -> Self
    where
        U: FnMut() + Send + 'static,
    {
        self.undo = Some(Box::new(undo));
        self
    }

    /// Whether an undo action is present.
    #[must_use]
    pub fn is_reversible(&self) -> bool {
        self.undo.is_some()
    }
}

/// What runs when a registered command is invoked.
pub(crate) enum CommandKind<A> {
    /// Step the history cursor back.
    Undo,
    /// Step the history cursor forward.
    Redo,
    /// Call a caller-supplied factory.
    Execute(ExecuteFn<A>),
}

/// A registrable, named unit of behaviour.
pub struct Command<A> {
    pub(crate) name: String,
    pub(crate) keyboard: Vec<String>,
    pub(crate) follow_queue: bool,
    pub(crate) kind: CommandKind<A>,
}

impl<A> fmt::Debug for Command<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            CommandKind::Undo => "undo",
            CommandKind::Redo => "redo",
            CommandKind::Execute(_) => "execute",
        };
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("keyboard", &self.keyboard)
            .field("follow_queue", &self.follow_queue)
            .field("kind", &kind)
            .finish()
    }
}

impl<A> Command<A> {
    /// Create a command that records its effects in history.
    pub fn new<F>(name: impl Into<String>, execute: F) -> Self
    where
        F: FnMut(A) -> CommandExecute + Send + 'static,
    {
        Self {
            name: name.into(),
            keyboard: Vec::new(),
            follow_queue: true,
            kind: CommandKind::Execute(Box::new(execute)),
        }
    }

    pub(crate) fn builtin_undo(keyboard: Vec<String>) -> Self {
        Self {
            name: crate::UNDO.to_owned(),
            keyboard,
            follow_queue: false,
            kind: CommandKind::Undo,
        }
    }

    pub(crate) fn builtin_redo(keyboard: Vec<String>) -> Self {
        Self {
            name: crate::REDO.to_owned(),
            keyboard,
            follow_queue: false,
            kind: CommandKind::Redo,
        }
    }

    /// Add one shortcut identifier.
    #[must_use]
    pub fn with_shortcut(mut self, key: impl Into<String>) -> Self {
        self.keyboard.push(key.into());
        self
    }

    /// Add several shortcut identifiers.
    #[must_use]
    pub fn with_keyboard<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyboard.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Choose whether invocations are recorded in history.
    ///
    /// Commands that must not themselves become undoable (selection
    /// changes, meta commands) pass `false`.
    #[must_use]
    pub fn follow_queue(mut self, follow: bool) -> Self {
        self.follow_queue = follow;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn keyboard(&self) -> &[String] {
        &self.keyboard
    }

    #[must_use]
    pub fn follows_queue(&self) -> bool {
        self.follow_queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn command_defaults_to_following_the_queue() {
        let cmd: Command<()> = Command::new("noop", |_| CommandExecute::noop());
        assert_eq!(cmd.name(), "noop");
        assert!(cmd.follows_queue());
        assert!(cmd.keyboard().is_empty());
    }

    #[test]
    fn builder_collects_shortcuts() {
        let cmd: Command<()> = Command::new("delete", |_| CommandExecute::noop())
            .with_shortcut("backspace")
            .with_keyboard(["delete", "ctrl+d"])
            .follow_queue(false);
        assert_eq!(cmd.keyboard(), ["backspace", "delete", "ctrl+d"]);
        assert!(!cmd.follows_queue());
    }

    #[test]
    fn builtins_do_not_follow_the_queue() {
        let undo: Command<()> = Command::builtin_undo(vec!["ctrl+z".into()]);
        let redo: Command<()> = Command::builtin_redo(Vec::new());
        assert_eq!(undo.name(), "undo");
        assert_eq!(redo.name(), "redo");
        assert!(!undo.follows_queue());
        assert!(!redo.follows_queue());
        assert!(format!("{undo:?}").contains("\"undo\""));
    }

    #[test]
    fn execute_pair_reports_reversibility() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let mut pair = CommandExecute::new(move || {
            h.fetch_add(1, Ordering::SeqCst);
        });
        assert!(!pair.is_reversible());
        (pair.redo)();
        (pair.redo)();
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        let pair = pair.with_undo(|| {});
        assert!(pair.is_reversible());
        assert_eq!(format!("{pair:?}"), "CommandExecute { has_undo: true }");
    }
}

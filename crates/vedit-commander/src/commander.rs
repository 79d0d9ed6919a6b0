#![forbid(unsafe_code)]

//! The command queue: a name-keyed registry in front of a [`History`].
//!
//! Every invocation follows the same protocol:
//!
//! 1. look the command up by name,
//! 2. build its effect pair from the caller's arguments,
//! 3. run `redo` once, synchronously,
//! 4. if the command follows the queue, truncate the redo branch and record
//!    the pair at the cursor.
//!
//! `undo` and `redo` are pre-registered and never recorded themselves.

use std::collections::HashMap;
use std::fmt;

use crate::command::{Command, CommandExecute, CommandKind};
use crate::config::CommanderConfig;
use crate::error::{CommanderError, Result};
use crate::history::{History, HistoryEntry, StepOutcome};

const TRACE_TARGET: &str = "vedit.commander";

/// What an invocation resolved to once the registry borrow is released.
enum Pending {
    Undo,
    Redo,
    Apply(CommandExecute),
}

/// Registry of named commands plus their shared undo/redo history.
///
/// `A` is the argument type every command of this queue accepts.
pub struct Commander<A = ()> {
    commands: HashMap<String, Command<A>>,
    history: History,
    config: CommanderConfig,
}

impl<A> fmt::Debug for Commander<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commander")
            .field("commands", &self.command_names())
            .field("history", &self.history)
            .finish()
    }
}

impl<A> Default for Commander<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Commander<A> {
    /// Create a queue with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CommanderConfig::default())
    }

    /// Create a queue, pre-registering `undo` and `redo`.
    #[must_use]
    pub fn with_config(config: CommanderConfig) -> Self {
        let mut commands = HashMap::new();
        for builtin in [
            Command::builtin_undo(config.undo_keyboard.clone()),
            Command::builtin_redo(config.redo_keyboard.clone()),
        ] {
            commands.insert(builtin.name.clone(), builtin);
        }

        Self {
            commands,
            history: History::new(config.max_depth),
            config,
        }
    }

    // ========================================================================
    // Registry
    // ========================================================================

    /// Store `command` under its name, replacing any previous registration.
    ///
    /// Nothing runs until the command is invoked.
    ///
    /// # Errors
    ///
    /// [`CommanderError::EmptyName`] if the name is empty.
    pub fn register(&mut self, command: Command<A>) -> Result<()> {
        if command.name.is_empty() {
            return Err(CommanderError::EmptyName);
        }

        let name = command.name.clone();
        let follow_queue = command.follow_queue;
        if self.commands.insert(name.clone(), command).is_some() {
            tracing::debug!(
                target: TRACE_TARGET,
                command = %name,
                follow_queue,
                "command registration overwritten"
            );
        } else {
            tracing::debug!(
                target: TRACE_TARGET,
                command = %name,
                follow_queue,
                "command registered"
            );
        }
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Shortcut metadata of a registered command.
    #[must_use]
    pub fn keyboard(&self, name: &str) -> Option<&[String]> {
        self.commands.get(name).map(Command::keyboard)
    }

    /// Whether invoking `name` records history; `None` if unregistered.
    #[must_use]
    pub fn follows_queue(&self, name: &str) -> Option<bool> {
        self.commands.get(name).map(Command::follows_queue)
    }

    // ========================================================================
    // Invocation
    // ========================================================================

    /// Invoke a registered command by name.
    ///
    /// The command's `redo` always runs exactly once before this returns.
    /// Built-in `undo`/`redo` ignore `args`.
    ///
    /// # Errors
    ///
    /// [`CommanderError::UnknownCommand`] if nothing is registered under
    /// `name`. Boundary undo/redo are not errors.
    pub fn invoke(&mut self, name: &str, args: A) -> Result<()> {
        let Some(command) = self.commands.get_mut(name) else {
            tracing::debug!(target: TRACE_TARGET, command = %name, "unknown command invoked");
            return Err(CommanderError::unknown(name));
        };

        let _span = tracing::debug_span!(
            "commander.invoke",
            command = %name,
            follow_queue = command.follow_queue,
        )
        .entered();

        let follow_queue = command.follow_queue;
        let pending = match &mut command.kind {
            CommandKind::Undo => Pending::Undo,
            CommandKind::Redo => Pending::Redo,
            CommandKind::Execute(factory) => Pending::Apply(factory(args)),
        };

        let mut entry = match pending {
            Pending::Undo => {
                self.undo();
                return Ok(());
            }
            Pending::Redo => {
                self.redo();
                return Ok(());
            }
            Pending::Apply(execute) => HistoryEntry::new(name, execute),
        };
        entry.apply();

        if !follow_queue {
            tracing::debug!(target: TRACE_TARGET, command = %name, "command applied");
            return Ok(());
        }

        let discarded = self.history.record(entry);
        tracing::debug!(
            target: TRACE_TARGET,
            command = %name,
            cursor = ?self.history.cursor(),
            len = self.history.len(),
            discarded,
            "history entry recorded"
        );
        Ok(())
    }

    /// Step back over the entry at the cursor.
    ///
    /// Does nothing at the start of history, and stays put on an entry that
    /// has no undo action.
    pub fn undo(&mut self) -> StepOutcome {
        let label = self.history.next_undo_label().map(str::to_owned);
        let outcome = self.history.step_back();
        self.trace_step("undo", label.as_deref(), outcome);
        outcome
    }

    /// Re-apply the entry after the cursor, if there is one.
    pub fn redo(&mut self) -> StepOutcome {
        let label = self.history.next_redo_label().map(str::to_owned);
        let outcome = self.history.step_forward();
        self.trace_step("redo", label.as_deref(), outcome);
        outcome
    }

    fn trace_step(&self, direction: &'static str, label: Option<&str>, outcome: StepOutcome) {
        let cursor = self.history.cursor();
        match outcome {
            StepOutcome::Applied => tracing::debug!(
                target: TRACE_TARGET,
                direction,
                entry = label.unwrap_or_default(),
                cursor = ?cursor,
                "{direction} applied"
            ),
            StepOutcome::Blocked => tracing::debug!(
                target: TRACE_TARGET,
                direction,
                entry = label.unwrap_or_default(),
                cursor = ?cursor,
                "undo blocked by irreversible entry"
            ),
            StepOutcome::AtBoundary => tracing::trace!(
                target: TRACE_TARGET,
                direction,
                cursor = ?cursor,
                "{direction} at history boundary"
            ),
        }
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Index of the most recently applied entry; `None` is the empty cursor.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.history.cursor()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &CommanderConfig {
        &self.config
    }

    /// Forget every recorded entry; registered commands stay.
    pub fn clear_history(&mut self) {
        self.history.clear();
        tracing::debug!(target: TRACE_TARGET, "history cleared");
    }
}

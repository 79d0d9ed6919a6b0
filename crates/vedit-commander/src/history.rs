#![forbid(unsafe_code)]

//! Linear, cursor-addressed history of recorded effects.
//!
//! [`History`] keeps every recorded [`HistoryEntry`] in invocation order and
//! a single cursor marking how many of them are currently applied.
//!
//! # Invariants
//!
//! 1. `applied <= entries.len()` after any operation, so the reported
//!    cursor stays in `[-1, len - 1]`.
//! 2. `entries[..applied]` have had their redo applied and not undone.
//! 3. `entries[applied..]` were undone and not yet overwritten; recording a
//!    new entry discards them.
//! 4. `entries.len() <= max_depth` when a depth bound is set.
//!
//! ```text
//! record(A) record(B) record(C)
//! ┌──────────────────────────────────────┐
//! │ Entries: [A, B, C]     cursor = 2    │
//! └──────────────────────────────────────┘
//!
//! step_back() x2
//! ┌──────────────────────────────────────┐
//! │ Entries: [A, B, C]     cursor = 0    │
//! │          applied ^  redo branch ^^^^ │
//! └──────────────────────────────────────┘
//!
//! record(D)  <-- truncates the redo branch
//! ┌──────────────────────────────────────┐
//! │ Entries: [A, D]        cursor = 1    │
//! └──────────────────────────────────────┘
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::command::{CommandExecute, Effect};

/// One recorded invocation.
pub struct HistoryEntry {
    label: String,
    redo: Effect,
    undo: Option<Effect>,
}

impl fmt::Debug for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryEntry")
            .field("label", &self.label)
            .field("has_undo", &self.undo.is_some())
            .finish()
    }
}

impl HistoryEntry {
    /// Snapshot an effect pair under the name of the command that made it.
    #[must_use]
    pub fn new(label: impl Into<String>, execute: CommandExecute) -> Self {
        Self {
            label: label.into(),
            redo: execute.redo,
            undo: execute.undo,
        }
    }

    /// Name of the command that produced this entry.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_reversible(&self) -> bool {
        self.undo.is_some()
    }

    /// Run the forward effect once.
    pub(crate) fn apply(&mut self) {
        (self.redo)();
    }
}

/// Result of one undo or redo step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// An effect ran and the cursor moved.
    Applied,
    /// Nothing to step over in that direction.
    AtBoundary,
    /// The entry at the cursor has no undo; the cursor did not move.
    Blocked,
}

impl StepOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Ordered history with a single cursor.
pub struct History {
    entries: VecDeque<HistoryEntry>,
    /// Number of applied entries; the public cursor is `applied - 1`.
    applied: usize,
    max_depth: Option<usize>,
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("len", &self.entries.len())
            .field("cursor", &self.cursor())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(None)
    }
}

impl History {
    /// Create an empty history, optionally bounded to `max_depth` entries.
    #[must_use]
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            applied: 0,
            max_depth,
        }
    }

    // ========================================================================
    // Core Operations
    // ========================================================================

    /// Record an entry whose redo has already run.
    ///
    /// Drops the redo branch past the cursor, appends, and advances the
    /// cursor onto the new entry. Returns how many entries were discarded,
    /// counting both the truncated branch and any depth eviction.
    pub fn record(&mut self, entry: HistoryEntry) -> usize {
        let mut discarded = self.entries.len() - self.applied;
        self.entries.truncate(self.applied);
        self.entries.push_back(entry);
        self.applied += 1;

        if let Some(max) = self.max_depth {
            while self.entries.len() > max.max(1) {
                self.entries.pop_front();
                self.applied -= 1;
                discarded += 1;
            }
        }

        discarded
    }

    /// Revert the entry at the cursor and move the cursor back.
    ///
    /// An entry without an undo action blocks the step: nothing runs and
    /// the cursor stays on it.
    pub fn step_back(&mut self) -> StepOutcome {
        let Some(index) = self.applied.checked_sub(1) else {
            return StepOutcome::AtBoundary;
        };
        let Some(entry) = self.entries.get_mut(index) else {
            return StepOutcome::AtBoundary;
        };
        let Some(undo) = entry.undo.as_mut() else {
            return StepOutcome::Blocked;
        };
        undo();
        self.applied = index;
        StepOutcome::Applied
    }

    /// Re-apply the entry after the cursor and move the cursor onto it.
    pub fn step_forward(&mut self) -> StepOutcome {
        let Some(entry) = self.entries.get_mut(self.applied) else {
            return StepOutcome::AtBoundary;
        };
        (entry.redo)();
        self.applied += 1;
        StepOutcome::Applied
    }

    // ========================================================================
    // Info
    // ========================================================================

    /// Index of the most recently applied entry; `None` when nothing is applied.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Whether [`step_back`](Self::step_back) would apply something.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor()
            .and_then(|i| self.entries.get(i))
            .is_some_and(HistoryEntry::is_reversible)
    }

    /// Whether [`step_forward`](Self::step_forward) would apply something.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.applied < self.entries.len()
    }

    /// Entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// All entries in invocation order.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Labels of applied entries, most recent first.
    pub fn undo_labels(&self, limit: usize) -> Vec<&str> {
        self.entries
            .range(..self.applied)
            .rev()
            .take(limit)
            .map(HistoryEntry::label)
            .collect()
    }

    /// Labels of the redo branch, nearest first.
    pub fn redo_labels(&self, limit: usize) -> Vec<&str> {
        self.entries
            .range(self.applied..)
            .take(limit)
            .map(HistoryEntry::label)
            .collect()
    }

    #[must_use]
    pub fn next_undo_label(&self) -> Option<&str> {
        self.cursor()
            .and_then(|i| self.entries.get(i))
            .map(HistoryEntry::label)
    }

    #[must_use]
    pub fn next_redo_label(&self) -> Option<&str> {
        self.entries.get(self.applied).map(HistoryEntry::label)
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Drop every entry and reset the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.applied = 0;
    }
}

#![forbid(unsafe_code)]

//! Editor commands registered on the page's [`Commander`].
//!
//! Every reversible command captures the block list before and after the
//! change when it is invoked; `redo` installs the after-snapshot and `undo`
//! reinstates the before-snapshot. Selection changes are applied but never
//! recorded.
//!
//! | Command | Recorded | Shortcuts |
//! |---------|----------|-----------|
//! | `drag` | yes | |
//! | `move` | yes | |
//! | `delete` | yes | `backspace`, `delete`, `ctrl+d` |
//! | `clear` | yes | |
//! | `select_all` | no | `ctrl+a` |
//! | `clear_focus` | no | |

use vedit_commander::{Command, CommandExecute, Commander};

use crate::document::Document;
use crate::error::Result;
use crate::model::{BlockData, create_new_block};

pub(crate) const TRACE_TARGET: &str = "vedit.editor";

pub const DRAG: &str = "drag";
pub const MOVE: &str = "move";
pub const DELETE: &str = "delete";
pub const CLEAR: &str = "clear";
pub const SELECT_ALL: &str = "select_all";
pub const CLEAR_FOCUS: &str = "clear_focus";

/// Arguments accepted by editor commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorArgs {
    #[default]
    None,
    /// A palette component released on the canvas at (`left`, `top`).
    Drop {
        component_key: String,
        left: i32,
        top: i32,
    },
    /// A move gesture finished. `before` is the block list captured when the
    /// gesture started; the document already holds the moved positions.
    Moved { before: Vec<BlockData> },
}

/// Whether `args` is the variant `command` reads. Commands that ignore their
/// arguments accept anything.
#[must_use]
pub fn accepts(command: &str, args: &EditorArgs) -> bool {
    match command {
        DRAG => matches!(args, EditorArgs::Drop { .. }),
        MOVE => matches!(args, EditorArgs::Moved { .. }),
        _ => true,
    }
}

/// Effect pair that swaps the document's blocks between two snapshots.
fn swap_blocks(doc: &Document, before: Vec<BlockData>, after: Vec<BlockData>) -> CommandExecute {
    let (redo_doc, undo_doc) = (doc.clone(), doc.clone());
    CommandExecute::reversible(
        move || redo_doc.set_blocks(after.clone()),
        move || undo_doc.set_blocks(before.clone()),
    )
}

// Reached only when a command is invoked on the raw queue; `Editor::invoke`
// rejects mismatched arguments before dispatch.
fn mismatched(command: &'static str, args: &EditorArgs) -> CommandExecute {
    tracing::warn!(
        target: TRACE_TARGET,
        command,
        args = ?args,
        "editor command invoked with mismatched arguments"
    );
    CommandExecute::noop()
}

/// Insert a new block for a dropped palette component.
pub fn drag_command(doc: &Document) -> Command<EditorArgs> {
    let doc = doc.clone();
    Command::new(DRAG, move |args: EditorArgs| {
        let (component_key, left, top) = match args {
            EditorArgs::Drop {
                component_key,
                left,
                top,
            } => (component_key, left, top),
            other => return mismatched(DRAG, &other),
        };

        let before = doc.blocks();
        let mut after = before.clone();
        for block in &mut after {
            block.focus = false;
        }
        after.push(create_new_block(component_key, left, top));
        tracing::debug!(
            target: TRACE_TARGET,
            command = DRAG,
            blocks_before = before.len(),
            blocks_after = after.len(),
            "block dropped"
        );
        swap_blocks(&doc, before, after)
    })
}

/// Record a finished move gesture.
pub fn move_command(doc: &Document) -> Command<EditorArgs> {
    let doc = doc.clone();
    Command::new(MOVE, move |args: EditorArgs| {
        let before = match args {
            EditorArgs::Moved { before } => before,
            other => return mismatched(MOVE, &other),
        };

        let after = doc.blocks();
        tracing::debug!(
            target: TRACE_TARGET,
            command = MOVE,
            blocks = after.len(),
            "blocks moved"
        );
        swap_blocks(&doc, before, after)
    })
}

/// Remove every selected block.
pub fn delete_command(doc: &Document) -> Command<EditorArgs> {
    let doc = doc.clone();
    Command::new(DELETE, move |_| {
        let before = doc.blocks();
        let after: Vec<BlockData> = before.iter().filter(|b| !b.focus).cloned().collect();
        tracing::debug!(
            target: TRACE_TARGET,
            command = DELETE,
            blocks_before = before.len(),
            blocks_after = after.len(),
            "focused blocks deleted"
        );
        swap_blocks(&doc, before, after)
    })
    .with_keyboard(["backspace", "delete", "ctrl+d"])
}

/// Remove every block.
pub fn clear_command(doc: &Document) -> Command<EditorArgs> {
    let doc = doc.clone();
    Command::new(CLEAR, move |_| {
        let before = doc.blocks();
        tracing::debug!(
            target: TRACE_TARGET,
            command = CLEAR,
            blocks_before = before.len(),
            "canvas cleared"
        );
        swap_blocks(&doc, before, Vec::new())
    })
}

/// Select every block. Not recorded.
pub fn select_all_command(doc: &Document) -> Command<EditorArgs> {
    focus_command(doc, SELECT_ALL, true).with_shortcut("ctrl+a")
}

/// Deselect every block. Not recorded.
pub fn clear_focus_command(doc: &Document) -> Command<EditorArgs> {
    focus_command(doc, CLEAR_FOCUS, false)
}

fn focus_command(doc: &Document, name: &'static str, focus: bool) -> Command<EditorArgs> {
    let doc = doc.clone();
    Command::new(name, move |_| {
        let doc = doc.clone();
        CommandExecute::new(move || doc.update(|m| m.set_focus_all(focus)))
    })
    .follow_queue(false)
}

/// Register every editor command on `commander`, bound to `doc`.
pub fn register_editor_commands(
    commander: &mut Commander<EditorArgs>,
    doc: &Document,
) -> Result<()> {
    for command in [
        drag_command(doc),
        move_command(doc),
        delete_command(doc),
        clear_command(doc),
        select_all_command(doc),
        clear_focus_command(doc),
    ] {
        commander.register(command)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EditorModel;

    fn setup() -> (Document, Commander<EditorArgs>) {
        let doc = Document::new(EditorModel::default());
        let mut commander = Commander::new();
        register_editor_commands(&mut commander, &doc).unwrap();
        (doc, commander)
    }

    fn drop_args(key: &str, left: i32, top: i32) -> EditorArgs {
        EditorArgs::Drop {
            component_key: key.into(),
            left,
            top,
        }
    }

    #[test]
    fn registers_all_commands_with_shortcuts() {
        let (_, commander) = setup();
        for name in [DRAG, MOVE, DELETE, CLEAR, SELECT_ALL, CLEAR_FOCUS] {
            assert!(commander.contains(name), "{name} missing");
        }
        assert_eq!(commander.keyboard(DELETE).map(<[String]>::len), Some(3));
        assert_eq!(commander.follows_queue(SELECT_ALL), Some(false));
        assert_eq!(commander.follows_queue(DRAG), Some(true));
    }

    #[test]
    fn drag_inserts_and_undo_removes() {
        let (doc, mut commander) = setup();
        commander.invoke(DRAG, drop_args("button", 5, 6)).unwrap();

        let blocks = doc.blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], create_new_block("button", 5, 6));

        commander.undo();
        assert!(doc.blocks().is_empty());
        commander.redo();
        assert_eq!(doc.blocks().len(), 1);
    }

    #[test]
    fn drag_clears_previous_selection() {
        let (doc, mut commander) = setup();
        commander.invoke(DRAG, drop_args("a", 0, 0)).unwrap();
        commander.invoke(SELECT_ALL, EditorArgs::None).unwrap();
        commander.invoke(DRAG, drop_args("b", 0, 0)).unwrap();

        assert!(doc.blocks().iter().all(|b| !b.focus));
    }

    #[test]
    fn move_restores_gesture_start() {
        let (doc, mut commander) = setup();
        commander.invoke(DRAG, drop_args("a", 0, 0)).unwrap();

        let before = doc.blocks();
        doc.update(|m| {
            m.blocks[0].left = 50;
            m.blocks[0].top = 70;
        });
        commander
            .invoke(MOVE, EditorArgs::Moved { before })
            .unwrap();
        assert_eq!((doc.blocks()[0].left, doc.blocks()[0].top), (50, 70));

        commander.undo();
        assert_eq!((doc.blocks()[0].left, doc.blocks()[0].top), (0, 0));
        commander.redo();
        assert_eq!((doc.blocks()[0].left, doc.blocks()[0].top), (50, 70));
    }

    #[test]
    fn delete_removes_only_focused_blocks() {
        let (doc, mut commander) = setup();
        commander.invoke(DRAG, drop_args("a", 0, 0)).unwrap();
        commander.invoke(DRAG, drop_args("b", 0, 0)).unwrap();
        doc.update(|m| m.blocks[1].focus = true);

        commander.invoke(DELETE, EditorArgs::None).unwrap();
        let keys: Vec<_> = doc.blocks().into_iter().map(|b| b.component_key).collect();
        assert_eq!(keys, vec!["a"]);

        commander.undo();
        assert_eq!(doc.blocks().len(), 2);
    }

    #[test]
    fn clear_empties_and_undo_restores() {
        let (doc, mut commander) = setup();
        commander.invoke(DRAG, drop_args("a", 0, 0)).unwrap();
        commander.invoke(DRAG, drop_args("b", 0, 0)).unwrap();

        commander.invoke(CLEAR, EditorArgs::None).unwrap();
        assert!(doc.blocks().is_empty());
        commander.undo();
        assert_eq!(doc.blocks().len(), 2);
    }

    #[test]
    fn selection_commands_are_not_recorded() {
        let (doc, mut commander) = setup();
        commander.invoke(DRAG, drop_args("a", 0, 0)).unwrap();

        commander.invoke(SELECT_ALL, EditorArgs::None).unwrap();
        assert!(doc.blocks()[0].focus);
        commander.invoke(CLEAR_FOCUS, EditorArgs::None).unwrap();
        assert!(!doc.blocks()[0].focus);

        assert_eq!(commander.history().len(), 1);
        assert_eq!(commander.current(), Some(0));
    }

    #[test]
    fn accepts_checks_argument_variant() {
        assert!(accepts(DRAG, &drop_args("a", 0, 0)));
        assert!(!accepts(DRAG, &EditorArgs::None));
        assert!(accepts(MOVE, &EditorArgs::Moved { before: Vec::new() }));
        assert!(!accepts(MOVE, &drop_args("a", 0, 0)));
        assert!(accepts(DELETE, &drop_args("a", 0, 0)));
        assert!(accepts("publish", &EditorArgs::None));
    }

    #[test]
    fn mismatched_arguments_record_a_noop() {
        let (doc, mut commander) = setup();
        commander.invoke(DRAG, EditorArgs::None).unwrap();
        assert!(doc.blocks().is_empty());
        assert_eq!(commander.history().len(), 1);

        commander
            .invoke(MOVE, drop_args("a", 0, 0))
            .unwrap();
        assert!(doc.blocks().is_empty());
    }
}

#![forbid(unsafe_code)]

//! One editing session: a document plus the command queue that mutates it.

use vedit_commander::{Commander, CommanderConfig, StepOutcome};

use crate::commands::{
    CLEAR, CLEAR_FOCUS, DELETE, DRAG, EditorArgs, MOVE, SELECT_ALL, TRACE_TARGET, accepts,
    register_editor_commands,
};
use crate::document::Document;
use crate::error::{EditorError, Result};
use crate::model::{BlockData, EditorModel};

/// Entry point for UI action handlers.
///
/// Every mutating method goes through the session's [`Commander`], so it
/// can be undone with [`undo`](Self::undo).
#[derive(Debug)]
pub struct Editor {
    document: Document,
    commander: Commander<EditorArgs>,
}

impl Editor {
    /// Start a session on `model` with the default queue configuration.
    pub fn new(model: EditorModel) -> Result<Self> {
        Self::with_config(model, CommanderConfig::default())
    }

    pub fn with_config(model: EditorModel, config: CommanderConfig) -> Result<Self> {
        let document = Document::new(model);
        let mut commander = Commander::with_config(config);
        register_editor_commands(&mut commander, &document)?;
        Ok(Self {
            document,
            commander,
        })
    }

    /// A palette component was released on the canvas.
    pub fn drop_component(&mut self, component_key: &str, left: i32, top: i32) -> Result<()> {
        self.invoke(
            DRAG,
            EditorArgs::Drop {
                component_key: component_key.to_owned(),
                left,
                top,
            },
        )
    }

    /// A move gesture ended; `before` is the block list at gesture start.
    pub fn commit_move(&mut self, before: Vec<BlockData>) -> Result<()> {
        self.invoke(MOVE, EditorArgs::Moved { before })
    }

    pub fn delete_focused(&mut self) -> Result<()> {
        self.invoke(DELETE, EditorArgs::None)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.invoke(CLEAR, EditorArgs::None)
    }

    pub fn select_all(&mut self) -> Result<()> {
        self.invoke(SELECT_ALL, EditorArgs::None)
    }

    pub fn clear_focus(&mut self) -> Result<()> {
        self.invoke(CLEAR_FOCUS, EditorArgs::None)
    }

    pub fn undo(&mut self) -> StepOutcome {
        self.commander.undo()
    }

    pub fn redo(&mut self) -> StepOutcome {
        self.commander.redo()
    }

    /// Invoke any registered command by name.
    ///
    /// Arguments of the wrong variant for an editor command are rejected
    /// with [`EditorError::MismatchedArgs`]; nothing runs and the history,
    /// redo branch included, is left as it was.
    pub fn invoke(&mut self, name: &str, args: EditorArgs) -> Result<()> {
        if !accepts(name, &args) {
            tracing::warn!(
                target: TRACE_TARGET,
                command = name,
                args = ?args,
                "editor command rejected mismatched arguments"
            );
            return Err(EditorError::MismatchedArgs {
                command: name.to_owned(),
            });
        }
        Ok(self.commander.invoke(name, args)?)
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Copy of the current page value.
    #[must_use]
    pub fn model(&self) -> EditorModel {
        self.document.snapshot()
    }

    #[must_use]
    pub fn commander(&self) -> &Commander<EditorArgs> {
        &self.commander
    }

    /// Mutable access, e.g. to register host-specific commands.
    pub fn commander_mut(&mut self) -> &mut Commander<EditorArgs> {
        &mut self.commander
    }
}

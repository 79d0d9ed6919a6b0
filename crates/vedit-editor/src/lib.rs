#![forbid(unsafe_code)]

//! vedit editor core
//!
//! The page value edited by the vedit builder and the undoable commands that
//! change it. Rendering, drag gestures and the component palette live in the
//! host; this crate only sees their outcomes (a component dropped at a
//! position, a move gesture finished, a delete requested).
//!
//! # Key Components
//!
//! - [`EditorModel`] / [`BlockData`] - The page value and its blocks
//! - [`Document`] - Shared handle command effects close over
//! - [`register_editor_commands`] - `drag`, `move`, `delete`, `clear`,
//!   `select_all`, `clear_focus`
//! - [`Editor`] - Session facade for UI action handlers
//!
//! # Example
//!
//! ```
//! use vedit_editor::{Editor, EditorModel};
//!
//! let mut editor = Editor::new(EditorModel::default()).unwrap();
//! editor.drop_component("button", 40, 20).unwrap();
//! editor.select_all().unwrap();
//! editor.delete_focused().unwrap();
//! assert!(editor.model().blocks.is_empty());
//!
//! editor.undo();
//! assert_eq!(editor.model().blocks.len(), 1);
//! ```

pub mod commands;
pub mod document;
pub mod editor;
pub mod error;
pub mod model;

pub use commands::{EditorArgs, accepts, register_editor_commands};
pub use document::Document;
pub use editor::Editor;
pub use error::{EditorError, Result};
pub use model::{BlockData, ContainerSize, EditorModel, create_new_block};

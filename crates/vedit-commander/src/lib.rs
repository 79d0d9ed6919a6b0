#![forbid(unsafe_code)]

//! vedit command queue
//!
//! Every mutating action of the vedit page builder (dropping a component on
//! the canvas, moving blocks, deleting them) goes through a [`Commander`]: a
//! registry of named commands in front of one linear undo/redo history.
//!
//! # Key Components
//!
//! - [`Command`] - Named factory producing a [`CommandExecute`] effect pair
//! - [`Commander`] - Registry, invoke protocol, built-in `undo`/`redo`
//! - [`History`] - Cursor-addressed timeline of recorded [`HistoryEntry`]s
//! - [`SharedCommander`] - Mutex-serialized handle for multi-threaded hosts
//! - [`CommanderConfig`] - Depth bound and built-in shortcut metadata
//!
//! # Quick Start
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use vedit_commander::{Command, CommandExecute, Commander};
//!
//! let list = Arc::new(Mutex::new(Vec::new()));
//! let mut commander = Commander::new();
//!
//! let target = list.clone();
//! commander
//!     .register(Command::new("add", move |x: i32| {
//!         let push = target.clone();
//!         let pop = target.clone();
//!         CommandExecute::reversible(
//!             move || push.lock().unwrap().push(x),
//!             move || {
//!                 pop.lock().unwrap().pop();
//!             },
//!         )
//!     }))
//!     .unwrap();
//!
//! commander.invoke("add", 1).unwrap();
//! commander.invoke("add", 2).unwrap();
//! commander.invoke("undo", 0).unwrap();
//!
//! assert_eq!(*list.lock().unwrap(), vec![1]);
//! assert_eq!(commander.current(), Some(0));
//! ```
//!
//! # Design Notes
//!
//! The queue never inspects application state. Effects close over whatever
//! they mutate, and the queue only decides when they run: `redo` exactly
//! once per invocation, `undo` at most once per undo step.
//!
//! Undo stops at an entry recorded without an undo action. The cursor stays
//! on that entry until a redo or a new recorded invocation moves it.

pub mod command;
pub mod commander;
pub mod config;
pub mod error;
pub mod history;
pub mod shared;

pub use command::{Command, CommandExecute, Effect, ExecuteFn};
pub use commander::Commander;
pub use config::CommanderConfig;
pub use error::{CommanderError, ConfigError, Result};
pub use history::{History, HistoryEntry, StepOutcome};
pub use shared::SharedCommander;

/// Name of the built-in command that steps the history back.
pub const UNDO: &str = "undo";
/// Name of the built-in command that steps the history forward.
pub const REDO: &str = "redo";

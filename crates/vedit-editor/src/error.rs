#![forbid(unsafe_code)]

use thiserror::Error;
use vedit_commander::CommanderError;

pub type Result<T> = std::result::Result<T, EditorError>;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("model JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The arguments are not the variant the named editor command reads.
    #[error("command `{command}` invoked with mismatched arguments")]
    MismatchedArgs { command: String },

    #[error(transparent)]
    Command(#[from] CommanderError),
}

#![forbid(unsafe_code)]

//! Shared handle to the page value.
//!
//! Command effects outlive the call that created them, so they hold a
//! [`Document`] clone rather than a borrow of the model.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::model::{BlockData, EditorModel};

/// Clonable handle to one [`EditorModel`].
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<Mutex<EditorModel>>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.lock();
        f.debug_struct("Document")
            .field("container", &model.container)
            .field("blocks", &model.blocks.len())
            .finish()
    }
}

impl From<EditorModel> for Document {
    fn from(model: EditorModel) -> Self {
        Self::new(model)
    }
}

impl Document {
    #[must_use]
    pub fn new(model: EditorModel) -> Self {
        Self {
            inner: Arc::new(Mutex::new(model)),
        }
    }

    /// Parse a model value from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let model: EditorModel = serde_json::from_str(json)?;
        Ok(Self::new(model))
    }

    /// Serialize the current model value.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&*self.lock())?)
    }

    fn lock(&self) -> MutexGuard<'_, EditorModel> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Copy of the whole model.
    #[must_use]
    pub fn snapshot(&self) -> EditorModel {
        self.lock().clone()
    }

    /// Copy of the block list.
    #[must_use]
    pub fn blocks(&self) -> Vec<BlockData> {
        self.lock().blocks.clone()
    }

    pub fn set_blocks(&self, blocks: Vec<BlockData>) {
        self.lock().blocks = blocks;
    }

    /// Mutate the model in place.
    pub fn update<R>(&self, f: impl FnOnce(&mut EditorModel) -> R) -> R {
        f(&mut self.lock())
    }
}

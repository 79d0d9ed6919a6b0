#![forbid(unsafe_code)]

//! The page value being edited: a fixed-size container holding positioned
//! blocks.
//!
//! The JSON shape matches what the host page binds to the editor:
//!
//! ```json
//! {
//!   "container": { "width": 800, "height": 600 },
//!   "blocks": [
//!     { "componentKey": "button", "top": 40, "left": 120,
//!       "adjustpositon": false, "focus": true }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// One component placed on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockData {
    /// Key of the registered component this block renders.
    pub component_key: String,
    pub top: i32,
    pub left: i32,
    /// Set on a freshly dropped block; the renderer recentres it under the
    /// pointer once and clears the flag. Serialized under the host page's
    /// key `adjustpositon`; `adjustPosition` is accepted on input.
    #[serde(rename = "adjustpositon", alias = "adjustPosition")]
    pub adjust_position: bool,
    /// Whether the block is selected.
    pub focus: bool,
}

/// Build the block for a component dropped at (`left`, `top`).
#[must_use]
pub fn create_new_block(component_key: impl Into<String>, left: i32, top: i32) -> BlockData {
    BlockData {
        component_key: component_key.into(),
        top,
        left,
        adjust_position: true,
        focus: false,
    }
}

/// The whole editable page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorModel {
    pub container: ContainerSize,
    #[serde(default)]
    pub blocks: Vec<BlockData>,
}

impl EditorModel {
    #[must_use]
    pub fn new(container: ContainerSize) -> Self {
        Self {
            container,
            blocks: Vec::new(),
        }
    }

    /// Blocks currently selected.
    pub fn focused(&self) -> impl Iterator<Item = &BlockData> {
        self.blocks.iter().filter(|b| b.focus)
    }

    /// Blocks currently not selected.
    pub fn unfocused(&self) -> impl Iterator<Item = &BlockData> {
        self.blocks.iter().filter(|b| !b.focus)
    }

    /// Select or deselect every block.
    pub fn set_focus_all(&mut self, focus: bool) {
        for block in &mut self.blocks {
            block.focus = focus;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_block_needs_position_adjustment() {
        let block = create_new_block("text", 10, 20);
        assert_eq!(block.component_key, "text");
        assert_eq!((block.left, block.top), (10, 20));
        assert!(block.adjust_position);
        assert!(!block.focus);
    }

    #[test]
    fn json_uses_camel_case_and_defaults_blocks() {
        let model: EditorModel =
            serde_json::from_str(r#"{"container": {"width": 400, "height": 300}}"#).unwrap();
        assert_eq!(model.container, ContainerSize { width: 400, height: 300 });
        assert!(model.blocks.is_empty());

        let mut model = model;
        model.blocks.push(create_new_block("button", 1, 2));
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["blocks"][0]["componentKey"], "button");
        assert_eq!(json["blocks"][0]["adjustpositon"], true);
        assert!(json["blocks"][0].get("adjustPosition").is_none());
    }

    #[test]
    fn focus_helpers_partition_blocks() {
        let mut model = EditorModel::default();
        model.blocks.push(create_new_block("a", 0, 0));
        model.blocks.push(create_new_block("b", 0, 0));
        model.blocks[1].focus = true;

        assert_eq!(model.focused().count(), 1);
        assert_eq!(model.unfocused().next().map(|b| b.component_key.as_str()), Some("a"));

        model.set_focus_all(true);
        assert_eq!(model.focused().count(), 2);
    }
}

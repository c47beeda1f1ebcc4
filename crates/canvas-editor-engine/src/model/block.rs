use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Attribute every rendered block element carries so it can be found again
/// for focus and caret placement.
pub const BLOCK_ID_ATTRIBUTE: &str = "data-block-id";

/// Stable identifier for a block, shared between local and remote copies of
/// the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// CSS attribute selector matching the element rendered for this block
    pub fn selector(&self) -> String {
        format!("[{BLOCK_ID_ATTRIBUTE}=\"{}\"]", self.0)
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single editable content unit within a canvas.
///
/// Blocks are created either by the realtime sync layer (remote edits) or
/// locally when the user splits off a new block. Equality compares identity
/// and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub content: String,
}

impl Block {
    /// Create a block with a fresh id
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            content: content.into(),
        }
    }

    pub fn with_id(id: BlockId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// An empty block, as inserted when the user presses Enter
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_ids_are_unique() {
        let a = Block::new("a");
        let b = Block::new("a");

        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_selector_uses_block_id_attribute() {
        let id = BlockId(Uuid::nil());

        assert_eq!(
            id.selector(),
            "[data-block-id=\"00000000-0000-0000-0000-000000000000\"]"
        );
    }

    #[test]
    fn test_block_id_serializes_as_plain_uuid() {
        let block = Block::with_id(BlockId(Uuid::nil()), "hello");
        let json = serde_json::to_string(&block).unwrap();

        assert_eq!(
            json,
            r#"{"id":"00000000-0000-0000-0000-000000000000","content":"hello"}"#
        );
    }

    #[test]
    fn test_empty_block() {
        assert!(Block::empty().is_empty());
        assert!(!Block::new("text").is_empty());
    }
}

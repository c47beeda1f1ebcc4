use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::model::block::{Block, BlockId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CanvasError {
    #[error("Block not found in canvas: {0}")]
    BlockNotFound(BlockId),
    #[error("Block already present in canvas: {0}")]
    DuplicateBlock(BlockId),
    #[error("Insertion index {index} out of bounds for canvas of {len} blocks")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanvasId(pub Uuid);

impl CanvasId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CanvasId {
    fn default() -> Self {
        Self::new()
    }
}

/// The full ordered document: a sequence of blocks in document order.
///
/// The canvas is shared between the editor component and the realtime layer.
/// Local edits go through [`Canvas::insert_block`] and
/// [`Canvas::update_content`]; remote edits use the same operations plus
/// [`Canvas::remove_block`]. Block ids are unique within a canvas.
///
/// `version` is bumped on every mutation so renderers can tell when the
/// canvas changed without diffing blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub id: CanvasId,
    blocks: Vec<Block>,
    #[serde(skip)]
    version: u64,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            id: CanvasId::new(),
            blocks: Vec::new(),
            version: 0,
        }
    }

    /// Build a canvas from blocks already in document order
    pub fn with_blocks(blocks: Vec<Block>) -> Result<Self, CanvasError> {
        let canvas = Self {
            id: CanvasId::new(),
            blocks,
            version: 0,
        };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check the unique-id invariant, e.g. after deserializing
    pub fn validate(&self) -> Result<(), CanvasError> {
        let mut seen = HashSet::with_capacity(self.blocks.len());
        for block in &self.blocks {
            if !seen.insert(block.id) {
                return Err(CanvasError::DuplicateBlock(block.id));
            }
        }
        Ok(())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn index_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == *id)
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == *id)
    }

    pub fn block_at(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.index_of(id).is_some()
    }

    /// Block immediately after `id`, or `None` when `id` is the last block
    pub fn next_block(&self, id: &BlockId) -> Result<Option<&Block>, CanvasError> {
        let index = self.require_index(id)?;
        Ok(self.blocks.get(index + 1))
    }

    /// Block immediately before `id`, or `None` when `id` is the first block
    pub fn previous_block(&self, id: &BlockId) -> Result<Option<&Block>, CanvasError> {
        let index = self.require_index(id)?;
        Ok(index.checked_sub(1).and_then(|i| self.blocks.get(i)))
    }

    /// Splice `block` into the sequence at `index`, shifting later blocks down
    pub fn insert_block(&mut self, index: usize, block: Block) -> Result<(), CanvasError> {
        if index > self.blocks.len() {
            return Err(CanvasError::IndexOutOfBounds {
                index,
                len: self.blocks.len(),
            });
        }
        if self.contains(&block.id) {
            return Err(CanvasError::DuplicateBlock(block.id));
        }

        self.blocks.insert(index, block);
        self.version += 1;
        Ok(())
    }

    pub fn push_block(&mut self, block: Block) -> Result<(), CanvasError> {
        self.insert_block(self.blocks.len(), block)
    }

    pub fn remove_block(&mut self, id: &BlockId) -> Result<Block, CanvasError> {
        let index = self.require_index(id)?;
        let removed = self.blocks.remove(index);
        self.version += 1;
        Ok(removed)
    }

    pub fn update_content(
        &mut self,
        id: &BlockId,
        content: impl Into<String>,
    ) -> Result<(), CanvasError> {
        let index = self.require_index(id)?;
        let content = content.into();
        if self.blocks[index].content != content {
            self.blocks[index].content = content;
            self.version += 1;
        }
        Ok(())
    }

    fn require_index(&self, id: &BlockId) -> Result<usize, CanvasError> {
        self.index_of(id).ok_or(CanvasError::BlockNotFound(*id))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Canvas {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

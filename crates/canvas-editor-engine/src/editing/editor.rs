use crate::editing::selection::{BlockFocuser, RangeRect, SelectionNavigator};
use crate::model::block::{Block, BlockId};
use crate::model::canvas::{Canvas, CanvasError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Outcome of an up/down navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Caret handed to the selection navigator for this block
    Moved(BlockId),
    /// Already on the first/last block; nothing happened
    AtBoundary,
}

type InsertCallback = Box<dyn FnMut(usize, &Block)>;

/// Keyboard navigation and local block insertion for a canvas.
///
/// The editor does not own the canvas it edits. It owns the selection
/// collaborator, the insertion callback and at most one pending focus
/// request, which the frontend flushes with [`CanvasEditor::after_render`].
pub struct CanvasEditor<S: SelectionNavigator> {
    selection: S,
    on_new_block_inserted_locally: InsertCallback,
    pending_focus: Option<BlockId>,
}

impl<S: SelectionNavigator> CanvasEditor<S> {
    pub fn new(selection: S) -> Self {
        Self {
            selection,
            on_new_block_inserted_locally: Box::new(|_, _| {}),
            pending_focus: None,
        }
    }

    pub fn with_on_new_block_inserted_locally(
        mut self,
        callback: impl FnMut(usize, &Block) + 'static,
    ) -> Self {
        self.set_on_new_block_inserted_locally(callback);
        self
    }

    /// Replace the insertion callback. The default does nothing.
    pub fn set_on_new_block_inserted_locally(&mut self, callback: impl FnMut(usize, &Block) + 'static) {
        self.on_new_block_inserted_locally = Box::new(callback);
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    /// Block that will receive focus on the next [`CanvasEditor::after_render`]
    pub fn pending_focus(&self) -> Option<BlockId> {
        self.pending_focus
    }

    /// Move the caret from `block` into the block below it
    pub fn navigate_down(
        &mut self,
        canvas: &Canvas,
        block: &BlockId,
        range_rect: &RangeRect,
    ) -> Result<Navigation, EditorError> {
        let Some(next_block) = canvas.next_block(block)? else {
            log::debug!("navigate_down from last block {block}, ignoring");
            return Ok(Navigation::AtBoundary);
        };

        log::debug!("navigate_down {block} -> {}", next_block.id);
        self.selection.navigate_down_to_block(next_block, range_rect);
        Ok(Navigation::Moved(next_block.id))
    }

    /// Move the caret from `block` into the block above it
    pub fn navigate_up(
        &mut self,
        canvas: &Canvas,
        block: &BlockId,
        range_rect: &RangeRect,
    ) -> Result<Navigation, EditorError> {
        let Some(prev_block) = canvas.previous_block(block)? else {
            log::debug!("navigate_up from first block {block}, ignoring");
            return Ok(Navigation::AtBoundary);
        };

        log::debug!("navigate_up {block} -> {}", prev_block.id);
        self.selection.navigate_up_to_block(prev_block, range_rect);
        Ok(Navigation::Moved(prev_block.id))
    }

    /// Insert `new_block` directly after `prev_block`.
    ///
    /// Calls the insertion callback with the new index before returning, and
    /// schedules focus on the new block for the next render pass.
    pub fn new_block_inserted_locally(
        &mut self,
        canvas: &mut Canvas,
        prev_block: &BlockId,
        new_block: Block,
    ) -> Result<usize, EditorError> {
        let index = canvas
            .index_of(prev_block)
            .ok_or(CanvasError::BlockNotFound(*prev_block))?
            + 1;
        self.insert_locally(canvas, index, new_block)
    }

    /// Insert `new_block` at the top of the canvas. Used when there is no
    /// block to insert after, e.g. the canvas is empty.
    pub fn new_block_inserted_at_start(
        &mut self,
        canvas: &mut Canvas,
        new_block: Block,
    ) -> Result<usize, EditorError> {
        self.insert_locally(canvas, 0, new_block)
    }

    /// Focus the rendered element for `block` immediately
    pub fn focus_block(&self, block: &BlockId, focuser: &mut impl BlockFocuser) {
        focuser.focus(&block.selector());
    }

    /// Run the focus transfer scheduled since the last render, if any
    pub fn after_render(&mut self, canvas: &Canvas, focuser: &mut impl BlockFocuser) {
        let Some(block) = self.pending_focus.take() else {
            return;
        };

        if !canvas.contains(&block) {
            log::warn!("block {block} was removed before it could be focused");
            return;
        }

        self.focus_block(&block, focuser);
    }

    fn insert_locally(
        &mut self,
        canvas: &mut Canvas,
        index: usize,
        new_block: Block,
    ) -> Result<usize, EditorError> {
        let new_id = new_block.id;

        canvas.insert_block(index, new_block)?;
        log::debug!("inserted block {new_id} at index {index}");

        if let Some(inserted) = canvas.block_at(index) {
            (self.on_new_block_inserted_locally)(index, inserted);
        }
        self.schedule_focus(new_id);

        Ok(index)
    }

    fn schedule_focus(&mut self, block: BlockId) {
        if let Some(replaced) = self.pending_focus.replace(block) {
            log::debug!("focus on {replaced} superseded by {block}");
        }
    }
}

/*!
 * # Editing Core Module
 *
 * The editor controller for a block canvas, independent of any UI framework.
 *
 * ## Architecture Overview
 *
 * ### 1. The canvas belongs to the caller
 * - `CanvasEditor` never owns a `Canvas`; every operation borrows it
 * - Remote edits from the realtime layer mutate the same canvas directly
 *
 * ### 2. DOM work goes through collaborators
 * - **`SelectionNavigator`** places the caret in an adjacent block, keeping the
 *   visual column described by a `RangeRect`
 * - **`BlockFocuser`** moves input focus to the element for a block
 * - Frontends implement both against their own DOM; tests use recorders
 *
 * ### 3. Focus transfer runs after render
 * - Inserting a block schedules focus on it
 * - The frontend calls `after_render` once the new element exists
 *
 * ## Usage Pattern
 *
 * ```rust
 * use canvas_editor_engine::{Block, BlockFocuser, Canvas, CanvasEditor, RangeRect, SelectionNavigator};
 *
 * struct NoDom;
 * impl SelectionNavigator for NoDom {
 *     fn navigate_down_to_block(&mut self, _: &Block, _: &RangeRect) {}
 *     fn navigate_up_to_block(&mut self, _: &Block, _: &RangeRect) {}
 * }
 * impl BlockFocuser for NoDom {
 *     fn focus(&mut self, _: &str) {}
 * }
 *
 * let first = Block::new("Hello");
 * let first_id = first.id;
 * let mut canvas = Canvas::with_blocks(vec![first]).unwrap();
 * let mut editor = CanvasEditor::new(NoDom)
 *     .with_on_new_block_inserted_locally(|index, block| println!("{index}: {}", block.id));
 *
 * let index = editor
 *     .new_block_inserted_locally(&mut canvas, &first_id, Block::empty())
 *     .unwrap();
 * assert_eq!(index, 1);
 *
 * // once the frontend has rendered the new block
 * editor.after_render(&canvas, &mut NoDom);
 * ```
 */

pub mod editor;
pub mod selection;

pub use editor::{CanvasEditor, EditorError, Navigation};
pub use selection::{BlockFocuser, RangeRect, SelectionNavigator};

pub mod block;
pub mod canvas;

pub use block::{BLOCK_ID_ATTRIBUTE, Block, BlockId};
pub use canvas::{Canvas, CanvasError, CanvasId};

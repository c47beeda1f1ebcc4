pub mod canvas_block;
pub mod canvas_editor;
pub mod empty_canvas;
pub mod error_screen;

pub use canvas_block::CanvasBlock;
pub use canvas_editor::CanvasEditor;
pub use empty_canvas::EmptyCanvas;
pub use error_screen::ErrorScreen;

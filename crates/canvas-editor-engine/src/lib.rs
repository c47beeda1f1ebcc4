pub mod editing;
pub mod io;
pub mod model;

// Re-export key types for easier usage
pub use editing::{editor::*, selection::*};
pub use io::*;
pub use model::{block::*, canvas::*};

use crate::model::{Block, Canvas, CanvasError};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse canvas file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid canvas in {path}: {source}")]
    InvalidCanvas { path: PathBuf, source: CanvasError },
}

/// Read a canvas saved with [`write_canvas`]
pub fn read_canvas(path: &Path) -> Result<Canvas, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let canvas: Canvas = serde_json::from_str(&content).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    canvas.validate().map_err(|source| IoError::InvalidCanvas {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(canvas)
}

/// Read a canvas, or start a new one holding a single empty block if the
/// file does not exist yet
pub fn read_canvas_or_new(path: &Path) -> Result<Canvas, IoError> {
    match read_canvas(path) {
        Err(IoError::NotFound(_)) => {
            let mut canvas = Canvas::new();
            canvas
                .push_block(Block::empty())
                .map_err(|source| IoError::InvalidCanvas {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(canvas)
        }
        other => other,
    }
}

/// Write a canvas as pretty-printed JSON
pub fn write_canvas(path: &Path, canvas: &Canvas) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(canvas).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockId;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_preserves_order_and_ids() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/canvas.json");
        let canvas =
            Canvas::with_blocks(vec![Block::new("first"), Block::new("second")]).unwrap();

        write_canvas(&path, &canvas).unwrap();
        let loaded = read_canvas(&path).unwrap();

        assert_eq!(loaded.id, canvas.id);
        assert_eq!(loaded.blocks(), canvas.blocks());
    }

    #[test]
    fn test_read_missing_canvas() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        assert!(matches!(read_canvas(&path), Err(IoError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_read_canvas_or_new_starts_with_one_empty_block() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let canvas = read_canvas_or_new(&path).unwrap();

        assert_eq!(canvas.len(), 1);
        assert!(canvas.block_at(0).unwrap().is_empty());
    }

    #[test]
    fn test_read_malformed_canvas() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(read_canvas(&path), Err(IoError::Parse { .. })));
    }

    #[test]
    fn test_read_canvas_with_duplicate_ids_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dupes.json");
        let id = BlockId::new();
        let json = format!(
            r#"{{"id":"{}","blocks":[{{"id":"{id}","content":"a"}},{{"id":"{id}","content":"b"}}]}}"#,
            BlockId::new()
        );
        std::fs::write(&path, json).unwrap();

        assert!(matches!(
            read_canvas(&path),
            Err(IoError::InvalidCanvas {
                source: CanvasError::DuplicateBlock(dup),
                ..
            }) if dup == id
        ));
    }
}

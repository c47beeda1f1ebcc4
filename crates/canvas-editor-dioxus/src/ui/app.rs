use crate::ui::components::{CanvasEditor, ErrorScreen};
use canvas_editor_engine::{Block, Canvas, io};
use dioxus::prelude::*;
use std::path::PathBuf;

const CANVAS_EDITOR_CSS: &str = include_str!("../../assets/canvas-editor.css");

/// Settings resolved at startup and handed to the root component
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchSettings {
    pub canvas_path: PathBuf,
    pub autosave: bool,
}

/// Loads the canvas once. A file that exists but cannot be read or parsed is
/// reported and left alone: no editor and no autosave.
#[component]
pub fn App(canvas_path: PathBuf, autosave: bool) -> Element {
    let loaded = use_hook({
        let canvas_path = canvas_path.clone();
        move || {
            io::read_canvas_or_new(&canvas_path).map_err(|e| {
                log::error!("Error loading canvas {}: {e}", canvas_path.display());
                e.to_string()
            })
        }
    });
    let location = canvas_path.display().to_string();

    rsx! {
        style { {CANVAS_EDITOR_CSS} }
        match loaded {
            Ok(initial) => rsx! {
                CanvasSession { canvas_path, autosave, initial }
            },
            Err(details) => rsx! {
                ErrorScreen {
                    title: "Could not open canvas",
                    message: location,
                    details: Some(details),
                }
            },
        }
    }
}

#[component]
fn CanvasSession(canvas_path: PathBuf, autosave: bool, initial: Canvas) -> Element {
    let canvas = use_signal(|| initial);

    // Persist after every change; the initial load is version 0
    use_effect({
        let canvas_path = canvas_path.clone();
        move || {
            let canvas = canvas.read();
            if !autosave || canvas.version() == 0 {
                return;
            }
            if let Err(e) = io::write_canvas(&canvas_path, &canvas) {
                log::warn!("Error auto-saving canvas {}: {e}", canvas_path.display());
            }
        }
    });

    let title = canvas_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "canvas".to_string());
    let block_count = canvas.read().len();

    rsx! {
        div {
            class: "app-container",
            header {
                class: "canvas-header",
                h1 { "{title}" }
                span { class: "block-count", "{block_count} blocks" }
            }
            CanvasEditor {
                canvas,
                on_new_block_inserted_locally: Some(EventHandler::new(move |(index, block): (usize, Block)| {
                    // Stand-in for realtime propagation
                    log::info!("Block {} inserted locally at index {index}", block.id);
                })),
            }
        }
    }
}

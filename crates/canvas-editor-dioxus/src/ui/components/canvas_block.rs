use crate::dom::Direction;
use canvas_editor_engine::{Block, BlockId};
use dioxus::html::Key;
use dioxus::prelude::*;

/// What a keypress inside a block asks the editor to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Navigate(Direction),
    NewBlock,
}

/// Map a key to an editor action. Shift+Enter stays a plain newline.
pub fn key_intent(key: &Key, shift: bool) -> Option<KeyIntent> {
    match key {
        Key::ArrowUp => Some(KeyIntent::Navigate(Direction::Up)),
        Key::ArrowDown => Some(KeyIntent::Navigate(Direction::Down)),
        Key::Enter if !shift => Some(KeyIntent::NewBlock),
        _ => None,
    }
}

/// One editable block, rendered as a textarea tagged with its block id
#[component]
pub fn CanvasBlock(
    block: Block,
    on_navigate: EventHandler<(BlockId, Direction)>,
    on_new_block: EventHandler<BlockId>,
    on_input: EventHandler<(BlockId, String)>,
) -> Element {
    let block_id = block.id;

    rsx! {
        textarea {
            class: "canvas-block",
            "data-block-id": "{block_id}",
            value: "{block.content}",
            spellcheck: false,
            rows: calculate_textarea_rows(&block.content),

            oninput: move |event: Event<FormData>| {
                on_input.call((block_id, event.value()));
            },

            onkeydown: move |event: Event<KeyboardData>| {
                match key_intent(&event.key(), event.modifiers().shift()) {
                    // Default handling for edge lines is suppressed by the caret tracker
                    Some(KeyIntent::Navigate(direction)) => on_navigate.call((block_id, direction)),
                    Some(KeyIntent::NewBlock) => {
                        event.prevent_default();
                        on_new_block.call(block_id);
                    }
                    None => {}
                }
            },
        }
    }
}

/// Calculate appropriate number of rows for textarea based on content
fn calculate_textarea_rows(content: &str) -> u32 {
    let line_count = content.split('\n').count().max(1);
    (line_count as u32).min(20)
}

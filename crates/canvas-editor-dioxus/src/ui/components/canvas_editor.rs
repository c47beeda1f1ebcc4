use crate::dom::{self, Direction, DomFocus, DomSelection};
use crate::ui::components::{CanvasBlock, EmptyCanvas};
use canvas_editor_engine::{
    Block, BlockId, Canvas, CanvasEditor as EditorController, EditorError,
};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

type SharedController = Rc<RefCell<EditorController<DomSelection>>>;
type Inserted = Rc<RefCell<Vec<(usize, Block)>>>;

/// Realtime canvas editor.
///
/// Renders every block of `canvas` in document order and handles moving the
/// caret between blocks and splitting off new ones. The canvas signal stays
/// owned by the parent, which also receives `on_new_block_inserted_locally`
/// after each local insertion so it can propagate the change. The handler
/// runs once the canvas write has finished and may read the canvas.
#[component]
pub fn CanvasEditor(
    canvas: Signal<Canvas>,
    on_new_block_inserted_locally: Option<EventHandler<(usize, Block)>>,
) -> Element {
    let mut canvas = canvas;
    let root_id = use_hook(|| format!("canvas-editor-{}", Uuid::new_v4()));
    let inserted: Inserted = use_hook(|| Rc::new(RefCell::new(Vec::new())));
    let controller: SharedController = use_hook(|| {
        let inserted = inserted.clone();
        let controller = EditorController::new(DomSelection::new(root_id.clone()))
            .with_on_new_block_inserted_locally(move |index, block: &Block| {
                inserted.borrow_mut().push((index, block.clone()));
            });
        Rc::new(RefCell::new(controller))
    });

    // Deferred focus runs once the blocks from this render are in the DOM
    use_effect({
        let controller = controller.clone();
        let root_id = root_id.clone();
        move || {
            let canvas = canvas.read();
            controller
                .borrow_mut()
                .after_render(&canvas, &mut DomFocus::new(&root_id));
        }
    });

    let navigate = {
        let controller = controller.clone();
        let root_id = root_id.clone();
        move |(block_id, direction): (BlockId, Direction)| {
            let controller = controller.clone();
            let root_id = root_id.clone();
            spawn(async move {
                navigate_from(canvas, &controller, &root_id, block_id, direction).await;
            });
        }
    };

    let insert_after = {
        let controller = controller.clone();
        let inserted = inserted.clone();
        move |prev_block: BlockId| {
            let result = insert_locally(
                canvas,
                &controller,
                &inserted,
                on_new_block_inserted_locally,
                |canvas, controller| {
                    controller.new_block_inserted_locally(canvas, &prev_block, Block::empty())
                },
            );
            if let Err(e) = result {
                log::error!("Failed to insert block after {prev_block}: {e}");
            }
        }
    };

    let insert_first = {
        let controller = controller.clone();
        let inserted = inserted.clone();
        move |_: ()| {
            let result = insert_locally(
                canvas,
                &controller,
                &inserted,
                on_new_block_inserted_locally,
                |canvas, controller| controller.new_block_inserted_at_start(canvas, Block::empty()),
            );
            if let Err(e) = result {
                log::error!("Failed to insert first block: {e}");
            }
        }
    };

    let update_content = move |(block_id, content): (BlockId, String)| {
        if let Err(e) = canvas.write().update_content(&block_id, content) {
            log::warn!("Dropped input for block {block_id}: {e}");
        }
    };

    let blocks = canvas.read().blocks().to_vec();

    rsx! {
        div {
            class: "canvas-editor",
            id: "{root_id}",
            onmounted: {
                let root_id = root_id.clone();
                move |_| dom::install_caret_tracker(&root_id)
            },
            if blocks.is_empty() {
                EmptyCanvas { on_start: insert_first }
            }
            for block in blocks.iter() {
                CanvasBlock {
                    key: "{block.id}",
                    block: block.clone(),
                    on_navigate: navigate.clone(),
                    on_new_block: insert_after.clone(),
                    on_input: update_content,
                }
            }
        }
    }
}

/// Run a local insertion, then notify the parent once both the canvas and
/// the controller are released
fn insert_locally(
    mut canvas: Signal<Canvas>,
    controller: &SharedController,
    inserted: &Inserted,
    on_new_block_inserted_locally: Option<EventHandler<(usize, Block)>>,
    insert: impl FnOnce(
        &mut Canvas,
        &mut EditorController<DomSelection>,
    ) -> Result<usize, EditorError>,
) -> Result<usize, EditorError> {
    let result = {
        let mut canvas_ref = canvas.write();
        insert(&mut canvas_ref, &mut controller.borrow_mut())
    };

    let pending: Vec<_> = inserted.borrow_mut().drain(..).collect();
    if let Some(handler) = on_new_block_inserted_locally {
        for (index, block) in pending {
            handler.call((index, block));
        }
    }
    result
}

async fn navigate_from(
    canvas: Signal<Canvas>,
    controller: &SharedController,
    root_id: &str,
    block_id: BlockId,
    direction: Direction,
) {
    let caret = match dom::read_caret(root_id).await {
        Ok(Some(caret)) => caret,
        Ok(None) => return,
        Err(e) => {
            log::warn!("Could not read caret position: {e}");
            return;
        }
    };

    // Caret moved within the block; the browser already handled it
    if !caret.at_edge(direction) {
        return;
    }

    let canvas = canvas.read();
    let mut controller = controller.borrow_mut();
    let result = match direction {
        Direction::Down => controller.navigate_down(&canvas, &block_id, &caret.rect),
        Direction::Up => controller.navigate_up(&canvas, &block_id, &caret.rect),
    };
    if let Err(e) = result {
        log::warn!("Navigation from block {block_id} failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_ssr::render;

    // Inserts X after A during the first render; the handler reads the canvas
    // and records what it saw
    #[allow(non_snake_case)]
    fn HandlerReadsCanvas() -> Element {
        let canvas =
            use_signal(|| Canvas::with_blocks(vec![Block::new("A"), Block::new("B")]).unwrap());
        let mut seen = use_signal(Vec::<String>::new);

        use_hook(|| {
            let inserted: Inserted = Rc::new(RefCell::new(Vec::new()));
            let controller: SharedController = Rc::new(RefCell::new(
                EditorController::new(DomSelection::new("root")).with_on_new_block_inserted_locally({
                    let inserted = inserted.clone();
                    move |index, block: &Block| inserted.borrow_mut().push((index, block.clone()))
                }),
            ));
            let handler = EventHandler::new(move |(index, block): (usize, Block)| {
                let canvas = canvas.read();
                let order: Vec<_> = canvas.iter().map(|b| b.content.as_str()).collect();
                seen.write()
                    .push(format!("{index}:{}:{}", block.content, order.join(",")));
            });
            let first = canvas.read().blocks()[0].id;

            insert_locally(canvas, &controller, &inserted, Some(handler), |canvas, controller| {
                controller.new_block_inserted_locally(canvas, &first, Block::new("X"))
            })
            .unwrap();
        });

        rsx! {
            for entry in seen.read().iter() {
                p { "{entry}" }
            }
        }
    }

    #[test]
    fn test_insert_handler_can_read_the_canvas() {
        let mut dom = VirtualDom::new(HandlerReadsCanvas);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("1:X:A,X,B"), "{html}");
        assert_eq!(html.matches("<p>").count(), 1, "{html}");
    }

    #[test]
    fn test_failed_insert_does_not_notify() {
        #[allow(non_snake_case)]
        fn UnknownPredecessor() -> Element {
            let canvas = use_signal(|| Canvas::with_blocks(vec![Block::new("A")]).unwrap());
            let mut calls = use_signal(|| 0);

            use_hook(|| {
                let inserted: Inserted = Rc::new(RefCell::new(Vec::new()));
                let controller: SharedController = Rc::new(RefCell::new(EditorController::new(
                    DomSelection::new("root"),
                )));
                let handler = EventHandler::new(move |_: (usize, Block)| *calls.write() += 1);

                let result = insert_locally(
                    canvas,
                    &controller,
                    &inserted,
                    Some(handler),
                    |canvas, controller| {
                        controller.new_block_inserted_locally(canvas, &BlockId::new(), Block::empty())
                    },
                );
                assert!(result.is_err());
            });

            let blocks = canvas.read().len();
            rsx! { "calls={calls} blocks={blocks}" }
        }

        let mut dom = VirtualDom::new(UnknownPredecessor);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("calls=0 blocks=1"), "{html}");
    }
}

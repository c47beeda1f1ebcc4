//! Server-side rendering of the canvas editor, checking the DOM contract the
//! selection and focus scripts rely on.

use canvas_editor_dioxus::ui::components::CanvasEditor;
use canvas_editor_engine::{Block, Canvas};
use dioxus::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    canvas: Canvas,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    let canvas = use_signal(|| props.canvas.clone());

    rsx! {
        CanvasEditor { canvas }
    }
}

fn render(canvas: Canvas) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { canvas });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn block_id_positions(html: &str, canvas: &Canvas) -> Vec<usize> {
    canvas
        .iter()
        .map(|block| {
            html.find(&format!("data-block-id=\"{}\"", block.id))
                .unwrap_or_else(|| panic!("block {} missing from render:\n{html}", block.id))
        })
        .collect()
}

#[test]
fn renders_one_tagged_element_per_block() {
    let canvas = Canvas::with_blocks(vec![
        Block::new("first"),
        Block::new("second"),
        Block::new("third"),
    ])
    .unwrap();

    let html = render(canvas.clone());

    assert_eq!(html.matches("data-block-id=").count(), 3);
    assert_eq!(html.matches("<textarea").count(), 3);
    block_id_positions(&html, &canvas);
}

#[test]
fn renders_blocks_in_document_order() {
    let canvas = Canvas::with_blocks(vec![
        Block::new("A"),
        Block::new("B"),
        Block::new("C"),
        Block::new("D"),
    ])
    .unwrap();

    let html = render(canvas.clone());
    let positions = block_id_positions(&html, &canvas);

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn root_element_carries_scoping_id() {
    let canvas = Canvas::with_blocks(vec![Block::new("only")]).unwrap();

    let html = render(canvas);

    assert!(html.contains("class=\"canvas-editor\""), "{html}");
    assert!(html.contains("id=\"canvas-editor-"), "{html}");
}

#[test]
fn empty_canvas_offers_a_way_to_start() {
    let html = render(Canvas::new());

    assert_eq!(html.matches("data-block-id=").count(), 0);
    assert!(html.contains("empty-canvas"), "{html}");
    assert!(html.contains("Start writing"), "{html}");
}

#[test]
fn two_editors_get_distinct_roots() {
    #[allow(non_snake_case)]
    fn TwoEditors() -> Element {
        let left = use_signal(|| Canvas::with_blocks(vec![Block::new("left")]).unwrap());
        let right = use_signal(|| Canvas::with_blocks(vec![Block::new("right")]).unwrap());

        rsx! {
            CanvasEditor { canvas: left }
            CanvasEditor { canvas: right }
        }
    }

    let mut dom = VirtualDom::new(TwoEditors);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    let root_ids: Vec<_> = html
        .match_indices("id=\"canvas-editor-")
        .map(|(start, _)| {
            let rest = &html[start + 4..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect();
    assert_eq!(root_ids.len(), 2);
    assert_ne!(root_ids[0], root_ids[1]);
}

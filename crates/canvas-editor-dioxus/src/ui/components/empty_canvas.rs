use dioxus::prelude::*;

/// Shown when the canvas has no blocks to place a caret in
#[component]
pub fn EmptyCanvas(on_start: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "empty-canvas",
            p { "This canvas is empty." }
            button {
                class: "start-writing",
                onclick: move |_| on_start.call(()),
                "Start writing"
            }
        }
    }
}

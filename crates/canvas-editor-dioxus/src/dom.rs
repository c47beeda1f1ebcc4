//! DOM side of the canvas editor.
//!
//! Everything here runs JavaScript in the webview through
//! `document::eval`. Scripts are scoped to the editor's root element so
//! several editors can live on one page.

use canvas_editor_engine::{Block, BlockFocuser, RangeRect, SelectionNavigator};
use dioxus::prelude::*;
use serde::Deserialize;

/// Vertical direction of an arrow-key navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn as_js(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Caret state captured by the keydown tracker before the browser moved it
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CaretSnapshot {
    pub first_line: bool,
    pub last_line: bool,
    pub rect: RangeRect,
}

impl CaretSnapshot {
    /// Whether the caret sits on the edge line the user is arrowing past
    pub fn at_edge(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.first_line,
            Direction::Down => self.last_line,
        }
    }
}

// Records the caret line and rect of the focused block on ArrowUp/ArrowDown,
// and swallows the key when the caret is about to leave the block.
const CARET_TRACKER_JS: &str = r#"
if (!root || root.dataset.caretTracker) return false;
root.dataset.caretTracker = "1";
const measure = (el) => {
  const value = el.value;
  const before = value.slice(0, el.selectionStart);
  const line = before.split("\n").length - 1;
  const lastLine = value.split("\n").length - 1;
  const style = getComputedStyle(el);
  const ctx = document.createElement("canvas").getContext("2d");
  ctx.font = style.font;
  const lineHeight = parseFloat(style.lineHeight) || parseFloat(style.fontSize) * 1.2;
  const box = el.getBoundingClientRect();
  const column = before.slice(before.lastIndexOf("\n") + 1);
  return {
    first_line: line === 0,
    last_line: line === lastLine,
    rect: {
      left: box.left + parseFloat(style.paddingLeft) + parseFloat(style.borderLeftWidth) + ctx.measureText(column).width,
      top: box.top + parseFloat(style.paddingTop) + line * lineHeight,
      width: 0,
      height: lineHeight,
    },
  };
};
root.addEventListener("keydown", (event) => {
  const el = event.target;
  if (!el.dataset || !el.dataset.blockId) return;
  if (event.key !== "ArrowUp" && event.key !== "ArrowDown") return;
  const caret = measure(el);
  root.__canvasCaret = caret;
  if ((event.key === "ArrowUp" && caret.first_line) || (event.key === "ArrowDown" && caret.last_line)) {
    event.preventDefault();
  }
}, true);
return true;
"#;

const READ_CARET_JS: &str = r#"
return root && root.__canvasCaret ? root.__canvasCaret : null;
"#;

// Soft-wrapped lines count as one line; only hard newlines are considered.
const PLACE_CARET_JS: &str = r#"
if (!root) return false;
const el = root.querySelector(selector);
if (!el) return false;
el.focus();
const value = el.value;
const lines = value.split("\n");
const lineIndex = direction === "down" ? 0 : lines.length - 1;
const line = lines[lineIndex];
const lineStart = direction === "down" ? 0 : value.length - line.length;
const style = getComputedStyle(el);
const ctx = document.createElement("canvas").getContext("2d");
ctx.font = style.font;
const origin = el.getBoundingClientRect().left + parseFloat(style.paddingLeft) + parseFloat(style.borderLeftWidth);
const target = rect.left - origin;
let column = 0;
while (column < line.length) {
  const middle = ctx.measureText(line.slice(0, column)).width + ctx.measureText(line[column]).width / 2;
  if (middle > target) break;
  column += 1;
}
el.setSelectionRange(lineStart + column, lineStart + column);
return true;
"#;

const FOCUS_JS: &str = r#"
if (!root) return false;
const el = root.querySelector(selector);
if (!el) return false;
el.focus();
el.setSelectionRange(0, 0);
return true;
"#;

/// Prefix `body` with `const` bindings for the root element and each value
fn script(root_id: &str, bindings: &[(&str, serde_json::Value)], body: &str) -> String {
    let mut js = format!(
        "const root = document.getElementById({});\n",
        serde_json::Value::from(root_id)
    );
    for (name, value) in bindings {
        js.push_str(&format!("const {name} = {value};\n"));
    }
    js.push_str(body);
    js
}

pub fn caret_tracker_script(root_id: &str) -> String {
    script(root_id, &[], CARET_TRACKER_JS)
}

pub fn read_caret_script(root_id: &str) -> String {
    script(root_id, &[], READ_CARET_JS)
}

pub fn place_caret_script(
    root_id: &str,
    block: &Block,
    range_rect: &RangeRect,
    direction: Direction,
) -> String {
    let rect = serde_json::json!({
        "left": range_rect.left,
        "top": range_rect.top,
        "width": range_rect.width,
        "height": range_rect.height,
    });
    script(
        root_id,
        &[
            ("selector", block.id.selector().into()),
            ("rect", rect),
            ("direction", direction.as_js().into()),
        ],
        PLACE_CARET_JS,
    )
}

pub fn focus_script(root_id: &str, selector: &str) -> String {
    script(root_id, &[("selector", selector.into())], FOCUS_JS)
}

/// Install the keydown caret tracker on the editor root. Safe to call more
/// than once.
pub fn install_caret_tracker(root_id: &str) {
    let _ = document::eval(&caret_tracker_script(root_id));
}

/// Caret state recorded by the tracker for the most recent arrow key
pub async fn read_caret(root_id: &str) -> Result<Option<CaretSnapshot>, document::EvalError> {
    document::eval(&read_caret_script(root_id))
        .join::<Option<CaretSnapshot>>()
        .await
}

/// [`SelectionNavigator`] that places the caret inside block textareas
#[derive(Debug, Clone, PartialEq)]
pub struct DomSelection {
    root_id: String,
}

impl DomSelection {
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root_id: root_id.into(),
        }
    }

    fn place_caret(&self, block: &Block, range_rect: &RangeRect, direction: Direction) {
        let _ = document::eval(&place_caret_script(
            &self.root_id,
            block,
            range_rect,
            direction,
        ));
    }
}

impl SelectionNavigator for DomSelection {
    fn navigate_down_to_block(&mut self, block: &Block, range_rect: &RangeRect) {
        self.place_caret(block, range_rect, Direction::Down);
    }

    fn navigate_up_to_block(&mut self, block: &Block, range_rect: &RangeRect) {
        self.place_caret(block, range_rect, Direction::Up);
    }
}

/// [`BlockFocuser`] that focuses an element under the editor root
#[derive(Debug, Clone, PartialEq)]
pub struct DomFocus<'a> {
    root_id: &'a str,
}

impl<'a> DomFocus<'a> {
    pub fn new(root_id: &'a str) -> Self {
        Self { root_id }
    }
}

impl BlockFocuser for DomFocus<'_> {
    fn focus(&mut self, selector: &str) {
        let _ = document::eval(&focus_script(self.root_id, selector));
    }
}

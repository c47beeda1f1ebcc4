use serde::{Deserialize, Serialize};

use crate::model::block::Block;

/// Client rectangle of the user's caret, in viewport pixels.
///
/// Only the horizontal position matters when moving between blocks: the
/// navigator uses it to land the caret in the same visual column.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl RangeRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Places the caret inside a block when the user arrows out of its neighbour.
///
/// Implementations hold their own reference to the editor's root element.
pub trait SelectionNavigator {
    /// Caret enters `block` from above: land on its first line
    fn navigate_down_to_block(&mut self, block: &Block, range_rect: &RangeRect);

    /// Caret enters `block` from below: land on its last line
    fn navigate_up_to_block(&mut self, block: &Block, range_rect: &RangeRect);
}

/// Moves input focus to the element matching a selector.
pub trait BlockFocuser {
    fn focus(&mut self, selector: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_rect_edges() {
        let rect = RangeRect::new(10.0, 20.0, 2.0, 16.0);

        assert!((rect.right() - 12.0).abs() < f64::EPSILON);
        assert!((rect.bottom() - 36.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_range_rect_deserializes_from_client_rect_json() {
        let json = r#"{"left":4.5,"top":100.0,"width":0.0,"height":18.0}"#;

        let rect: RangeRect = serde_json::from_str(json).unwrap();

        assert_eq!(rect, RangeRect::new(4.5, 100.0, 0.0, 18.0));
    }
}

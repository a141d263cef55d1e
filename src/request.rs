//! One-shot bounds computation from a serialised description.
//!
//! Used by the CLI and the `compute_bounds_json` export, where the caller has
//! already resolved the cell rectangle and the visible area.

use serde::{Deserialize, Serialize};

use crate::cell_ref::CellPosition;
use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::{compute_bounds, EditorLayout};

/// Everything needed to place an editor once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsRequest {
    /// Tracked cell; absent indices mean unset.
    #[serde(default)]
    pub position: CellPosition,
    /// The tracked cell's rectangle.
    pub cell: Rect,
    /// Visible client area of the grid.
    pub clip: Rect,
    #[serde(default)]
    pub layout: EditorLayout,
}

/// Result of evaluating a [`BoundsRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsResponse {
    pub bounds: Rect,
    /// False when the editor should not be shown at all.
    pub visible: bool,
}

impl BoundsRequest {
    /// # Errors
    /// Returns [`GridEditError::Config`](crate::error::GridEditError::Config)
    /// for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn evaluate(&self) -> BoundsResponse {
        let cell = self.cell;
        let bounds = compute_bounds(
            self.position,
            &move |_: u32, _: u32| cell,
            self.clip,
            &self.layout,
        );
        BoundsResponse {
            bounds,
            visible: self.position.is_set() && !bounds.is_empty(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::GridEditError;

    #[test]
    fn test_layout_defaults_when_omitted() {
        let req = BoundsRequest::from_json(
            r#"{
                "position": {"column": 0, "row": 0},
                "cell": {"x": 10, "y": 10, "width": 50, "height": 30},
                "clip": {"x": 0, "y": 0, "width": 800, "height": 600}
            }"#,
        )
        .unwrap();
        assert_eq!(req.layout, EditorLayout::default());
        // default layout: no horizontal grab, minimum width 0, centered
        let resp = req.evaluate();
        assert_eq!(resp.bounds, Rect::new(35, 10, 0, 30));
        assert!(!resp.visible);
    }

    #[test]
    fn test_missing_position_is_unset() {
        let req = BoundsRequest::from_json(
            r#"{"cell": {"x": 1, "y": 1, "width": 5, "height": 5},
                "clip": {"x": 0, "y": 0, "width": 10, "height": 10}}"#,
        )
        .unwrap();
        assert_eq!(req.position, CellPosition::UNSET);
        assert_eq!(req.evaluate().bounds, Rect::EMPTY);
    }

    #[test]
    fn test_missing_cell_is_error() {
        let err = BoundsRequest::from_json(r#"{"clip": {"x":0,"y":0,"width":1,"height":1}}"#)
            .unwrap_err();
        assert!(matches!(err, GridEditError::Config(_)));
    }
}

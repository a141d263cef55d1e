//! Size and alignment settings for an overlay editor.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Horizontal placement of the editor inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical placement of the editor inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

/// How an overlay editor is sized and aligned relative to the cell it tracks.
///
/// Without grab, the editor takes exactly its minimum size on that axis.
/// With grab, it stretches to the cell but never below the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorLayout {
    pub minimum_width: u32,
    pub minimum_height: u32,
    pub grab_horizontal: bool,
    /// On by default: an in-place editor normally fills the row height.
    pub grab_vertical: bool,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
}

impl Default for EditorLayout {
    fn default() -> Self {
        Self {
            minimum_width: 0,
            minimum_height: 0,
            grab_horizontal: false,
            grab_vertical: true,
            horizontal_alignment: HorizontalAlignment::Center,
            vertical_alignment: VerticalAlignment::Center,
        }
    }
}

impl EditorLayout {
    /// Parse a layout from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`GridEditError::Config`](crate::error::GridEditError::Config)
    /// for malformed JSON or unknown alignment names.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Layout that fills the whole cell on both axes.
    pub fn fill() -> Self {
        Self {
            grab_horizontal: true,
            grab_vertical: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_minimum_size(mut self, width: u32, height: u32) -> Self {
        self.minimum_width = width;
        self.minimum_height = height;
        self
    }

    #[must_use]
    pub fn with_grab(mut self, horizontal: bool, vertical: bool) -> Self {
        self.grab_horizontal = horizontal;
        self.grab_vertical = vertical;
        self
    }

    #[must_use]
    pub fn with_alignment(
        mut self,
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
    ) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    /// Minimum width in signed pixel space.
    pub(crate) fn min_width_px(&self) -> i32 {
        i32::try_from(self.minimum_width).unwrap_or(i32::MAX)
    }

    /// Minimum height in signed pixel space.
    pub(crate) fn min_height_px(&self) -> i32 {
        i32::try_from(self.minimum_height).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::GridEditError;

    #[test]
    fn test_defaults_grab_vertically() {
        let layout = EditorLayout::default();
        assert!(layout.grab_vertical);
        assert!(!layout.grab_horizontal);
        assert_eq!(layout.minimum_width, 0);
        assert_eq!(layout.horizontal_alignment, HorizontalAlignment::Center);
        assert_eq!(layout.vertical_alignment, VerticalAlignment::Center);
    }

    #[test]
    fn test_from_json_partial() {
        let layout =
            EditorLayout::from_json(r#"{"minimumWidth": 40, "horizontalAlignment": "right"}"#)
                .unwrap();
        assert_eq!(layout.minimum_width, 40);
        assert_eq!(layout.horizontal_alignment, HorizontalAlignment::Right);
        // untouched fields keep their defaults
        assert!(layout.grab_vertical);
        assert_eq!(layout.vertical_alignment, VerticalAlignment::Center);
    }

    #[test]
    fn test_from_json_rejects_unknown_alignment() {
        let err = EditorLayout::from_json(r#"{"verticalAlignment": "middle"}"#).unwrap_err();
        assert!(matches!(err, GridEditError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_negative_minimum() {
        assert!(EditorLayout::from_json(r#"{"minimumHeight": -5}"#).is_err());
    }

    #[test]
    fn test_builders() {
        let layout = EditorLayout::fill()
            .with_minimum_size(10, 12)
            .with_alignment(HorizontalAlignment::Left, VerticalAlignment::Bottom);
        assert!(layout.grab_horizontal && layout.grab_vertical);
        assert_eq!((layout.minimum_width, layout.minimum_height), (10, 12));
        assert_eq!(layout.vertical_alignment, VerticalAlignment::Bottom);
        let layout = layout.with_grab(false, false);
        assert!(!layout.grab_horizontal && !layout.grab_vertical);
    }

    #[test]
    fn test_huge_minimum_saturates() {
        let layout = EditorLayout::default().with_minimum_size(u32::MAX, 3);
        assert_eq!(layout.min_width_px(), i32::MAX);
        assert_eq!(layout.min_height_px(), 3);
    }
}

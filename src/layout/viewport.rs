//! Viewport state management for scrolling.

use super::bounds::ClientArea;
use super::grid_layout::{clamp_px, GridLayout};
use crate::geometry::Rect;

/// Viewport state - represents the visible area of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// Horizontal scroll position in content coordinates
    pub scroll_x: i32,
    /// Vertical scroll position in content coordinates
    pub scroll_y: i32,
    /// Viewport width in pixels (headers included)
    pub width: i32,
    /// Viewport height in pixels (headers included)
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl Viewport {
    /// Create an unscrolled viewport of the given size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            scroll_x: 0,
            scroll_y: 0,
            width,
            height,
        }
    }

    /// Width left for cells once the row header band is taken out
    pub fn content_width(&self, layout: &GridLayout) -> i64 {
        (i64::from(self.width) - i64::from(layout.header_width())).max(0)
    }

    /// Height left for cells once the column header band is taken out
    pub fn content_height(&self, layout: &GridLayout) -> i64 {
        (i64::from(self.height) - i64::from(layout.header_height())).max(0)
    }

    /// Visible logical columns, leftmost and rightmost (inclusive).
    pub fn visible_columns(&self, layout: &GridLayout) -> Option<(u32, u32)> {
        let span = self.content_width(layout);
        if span == 0 {
            return None;
        }
        let start = i64::from(self.scroll_x);
        let end = start + span - 1;
        let first = layout.column_at_x(start)?;
        let last = layout
            .column_at_x(end.min(layout.total_width() - 1))
            .unwrap_or(first);
        Some((first, last))
    }

    /// Visible rows, first and last (inclusive).
    pub fn visible_rows(&self, layout: &GridLayout) -> Option<(u32, u32)> {
        let span = self.content_height(layout);
        if span == 0 {
            return None;
        }
        let start = i64::from(self.scroll_y);
        let end = start + span - 1;
        let first = layout.row_at_y(start)?;
        let last = layout
            .row_at_y(end.min(layout.total_height() - 1))
            .unwrap_or(first);
        Some((first, last))
    }

    /// Convert content coordinates to screen coordinates
    pub fn to_screen(&self, x: i64, y: i64, layout: &GridLayout) -> (i32, i32) {
        (
            clamp_px(x - i64::from(self.scroll_x) + i64::from(layout.header_width())),
            clamp_px(y - i64::from(self.scroll_y) + i64::from(layout.header_height())),
        )
    }

    /// Convert screen coordinates to content coordinates
    pub fn to_content(&self, screen_x: i32, screen_y: i32, layout: &GridLayout) -> (i64, i64) {
        (
            i64::from(screen_x) + i64::from(self.scroll_x) - i64::from(layout.header_width()),
            i64::from(screen_y) + i64::from(self.scroll_y) - i64::from(layout.header_height()),
        )
    }

    /// Clamp scroll position to valid range.
    ///
    /// The maximum scroll brings the last column/row flush with the far edge.
    pub fn clamp_scroll(&mut self, layout: &GridLayout) {
        let max_x = (layout.total_width() - self.content_width(layout)).max(0);
        let max_y = (layout.total_height() - self.content_height(layout)).max(0);

        self.scroll_x = clamp_px(i64::from(self.scroll_x).clamp(0, max_x));
        self.scroll_y = clamp_px(i64::from(self.scroll_y).clamp(0, max_y));
    }

    /// Scroll by delta amounts
    pub fn scroll_by(&mut self, delta_x: i32, delta_y: i32, layout: &GridLayout) {
        self.scroll_x = self.scroll_x.saturating_add(delta_x);
        self.scroll_y = self.scroll_y.saturating_add(delta_y);
        self.clamp_scroll(layout);
    }

    /// Set absolute scroll position
    pub fn set_scroll(&mut self, x: i32, y: i32, layout: &GridLayout) {
        self.scroll_x = x;
        self.scroll_y = y;
        self.clamp_scroll(layout);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
    }
}

impl ClientArea for Viewport {
    fn client_area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

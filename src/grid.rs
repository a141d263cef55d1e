//! A scrollable grid: column/row layout plus the viewport showing it.
//!
//! Every operation that can move a cell on screen returns the [`GridEvent`]
//! that an attached [`GridEditor`](crate::editor::GridEditor) must be given.

use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::{CellGeometry, ClientArea, GridLayout, Viewport};

/// What an overlay editor needs from the grid hosting it.
pub trait GridSurface: CellGeometry + ClientArea {
    /// Number of explicit columns. Zero means a single implicit column.
    fn column_count(&self) -> u32;
    /// Number of rows.
    fn row_count(&self) -> u32;
}

/// Geometry change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// The grid's client area changed size.
    Resized,
    /// The grid scrolled on either axis.
    Scrolled,
    /// A column changed width.
    ColumnResized(u32),
    /// A column changed display position.
    ColumnMoved(u32),
}

#[derive(Debug, Clone)]
pub struct Grid {
    pub layout: GridLayout,
    pub viewport: Viewport,
}

impl Grid {
    pub fn new(layout: GridLayout, viewport: Viewport) -> Self {
        let mut grid = Self { layout, viewport };
        grid.viewport.clamp_scroll(&grid.layout);
        grid
    }

    /// Resize the visible area, re-clamping scroll.
    pub fn resize(&mut self, width: i32, height: i32) -> GridEvent {
        self.viewport.resize(width, height);
        self.viewport.clamp_scroll(&self.layout);
        GridEvent::Resized
    }

    /// Scroll by a delta. Returns `None` if clamping left the position unchanged.
    pub fn scroll_by(&mut self, delta_x: i32, delta_y: i32) -> Option<GridEvent> {
        let before = (self.viewport.scroll_x, self.viewport.scroll_y);
        self.viewport.scroll_by(delta_x, delta_y, &self.layout);
        self.scrolled_since(before)
    }

    /// Scroll to an absolute position. Returns `None` if nothing moved.
    pub fn scroll_to(&mut self, x: i32, y: i32) -> Option<GridEvent> {
        let before = (self.viewport.scroll_x, self.viewport.scroll_y);
        self.viewport.set_scroll(x, y, &self.layout);
        self.scrolled_since(before)
    }

    fn scrolled_since(&self, before: (i32, i32)) -> Option<GridEvent> {
        ((self.viewport.scroll_x, self.viewport.scroll_y) != before).then_some(GridEvent::Scrolled)
    }

    /// Change a column's width.
    ///
    /// # Errors
    /// Returns [`GridEditError::ColumnOutOfRange`](crate::error::GridEditError::ColumnOutOfRange)
    /// for an unknown column.
    pub fn resize_column(&mut self, column: u32, width: u32) -> Result<GridEvent> {
        self.layout.resize_column(column, width)?;
        self.viewport.clamp_scroll(&self.layout);
        Ok(GridEvent::ColumnResized(column))
    }

    /// Move a column to another display slot.
    ///
    /// # Errors
    /// Returns [`GridEditError::ColumnOutOfRange`](crate::error::GridEditError::ColumnOutOfRange)
    /// if the column or target slot does not exist.
    pub fn move_column(&mut self, column: u32, to_index: u32) -> Result<GridEvent> {
        self.layout.move_column(column, to_index)?;
        Ok(GridEvent::ColumnMoved(column))
    }

    /// Cell bounds in screen coordinates, or `None` for an unknown cell.
    pub fn screen_cell_rect(&self, column: u32, row: u32) -> Option<Rect> {
        let cell = self.layout.cell_rect(column, row)?;
        let (x, y) =
            self.viewport
                .to_screen(i64::from(cell.x), i64::from(cell.y), &self.layout);
        Some(Rect { x, y, ..cell })
    }

    /// Cell under a screen point, skipping the header bands.
    pub fn cell_at(&self, screen_x: i32, screen_y: i32) -> Option<(u32, u32)> {
        if screen_x < 0
            || screen_y < 0
            || i64::from(screen_x) < i64::from(self.layout.header_width())
            || i64::from(screen_y) < i64::from(self.layout.header_height())
        {
            return None;
        }
        let (x, y) = self.viewport.to_content(screen_x, screen_y, &self.layout);
        Some((self.layout.column_at_x(x)?, self.layout.row_at_y(y)?))
    }
}

impl CellGeometry for Grid {
    /// Unknown cells resolve to [`Rect::EMPTY`].
    fn cell_bounds(&self, column: u32, row: u32) -> Rect {
        self.screen_cell_rect(column, row).unwrap_or(Rect::EMPTY)
    }
}

impl ClientArea for Grid {
    fn client_area(&self) -> Rect {
        self.viewport.client_area()
    }
}

impl GridSurface for Grid {
    fn column_count(&self) -> u32 {
        self.layout.column_count()
    }

    fn row_count(&self) -> u32 {
        self.layout.row_count()
    }
}

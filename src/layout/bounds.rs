//! Placement of an overlay editor over a grid cell.
//!
//! The computation is pure: callers recompute whenever the grid resizes,
//! scrolls, or the tracked column moves or changes width.

use crate::cell_ref::CellPosition;
use crate::geometry::Rect;

use super::editor_layout::{EditorLayout, HorizontalAlignment, VerticalAlignment};

/// Source of cell rectangles, in the same coordinate space as the clip rectangle.
pub trait CellGeometry {
    fn cell_bounds(&self, column: u32, row: u32) -> Rect;
}

impl<F> CellGeometry for F
where
    F: Fn(u32, u32) -> Rect,
{
    fn cell_bounds(&self, column: u32, row: u32) -> Rect {
        self(column, row)
    }
}

/// Source of the visible client area of the hosting container.
pub trait ClientArea {
    fn client_area(&self) -> Rect;
}

impl ClientArea for Rect {
    fn client_area(&self) -> Rect {
        *self
    }
}

/// Trim a cell that starts left of the clip's right edge so it ends there.
///
/// Only the right edge is considered. A cell starting at or beyond the clip's
/// right edge is returned untouched.
pub fn clip_cell(cell: Rect, clip: Rect) -> Rect {
    let clip_right = clip.right();
    if cell.x < clip_right && cell.right() > clip_right {
        Rect {
            width: clip_right.saturating_sub(cell.x),
            ..cell
        }
    } else {
        cell
    }
}

/// Compute where an overlay editor tracking `position` should be placed.
///
/// Returns [`Rect::EMPTY`] when either index of `position` is unset.
pub fn compute_bounds<G>(
    position: CellPosition,
    cells: &G,
    clip: Rect,
    layout: &EditorLayout,
) -> Rect
where
    G: CellGeometry + ?Sized,
{
    let Some((column, row)) = position.resolved() else {
        return Rect::EMPTY;
    };

    let cell = clip_cell(cells.cell_bounds(column, row), clip);
    let min_width = layout.min_width_px();
    let min_height = layout.min_height_px();

    let mut editor = Rect::new(cell.x, cell.y, min_width, min_height);

    if layout.grab_horizontal {
        editor.width = cell.width.max(min_width);
    }
    if layout.grab_vertical {
        editor.height = cell.height.max(min_height);
    }

    let spare_width = cell.width.saturating_sub(editor.width);
    editor.x = match layout.horizontal_alignment {
        HorizontalAlignment::Left => editor.x,
        HorizontalAlignment::Center => editor.x.saturating_add(spare_width / 2),
        HorizontalAlignment::Right => editor.x.saturating_add(spare_width),
    };

    let spare_height = cell.height.saturating_sub(editor.height);
    editor.y = match layout.vertical_alignment {
        VerticalAlignment::Top => editor.y,
        VerticalAlignment::Center => editor.y.saturating_add(spare_height / 2),
        VerticalAlignment::Bottom => editor.y.saturating_add(spare_height),
    };

    tracing::trace!(%position, ?cell, ?editor, "computed editor bounds");
    editor
}

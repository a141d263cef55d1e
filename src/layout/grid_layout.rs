//! Column and row geometry for a data grid.
//!
//! Column positions are pre-computed in display order so that cell lookups and
//! hit testing are O(log n). Rows share a default height with sparse overrides,
//! which keeps very tall result sets cheap.

use std::collections::BTreeMap;

use crate::error::{GridEditError, Result};
use crate::geometry::Rect;

/// Default column width in pixels
pub const DEFAULT_COLUMN_WIDTH: u32 = 64;

/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: u32 = 20;

/// Pre-computed layout data for a grid
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Column widths by logical column (0 for hidden columns)
    column_widths: Vec<u32>,
    /// Logical column shown at each display slot
    column_order: Vec<u32>,
    /// Cumulative left edges by display slot, plus the final right edge
    column_positions: Vec<i64>,
    /// Number of rows
    row_count: u32,
    /// Height used by rows without an override
    default_row_height: u32,
    /// Per-row height overrides
    row_heights: BTreeMap<u32, u32>,
    /// Width of row headers in pixels (0 if headers not shown)
    row_header_width: u32,
    /// Height of column headers in pixels (0 if headers not shown)
    column_header_height: u32,
}

impl GridLayout {
    /// Create a layout with the given column widths (in logical order),
    /// `row_count` rows and a uniform row height.
    pub fn new(column_widths: &[u32], row_count: u32, row_height: u32) -> Self {
        let column_order = (0..to_u32(column_widths.len())).collect();
        let mut layout = Self {
            column_widths: column_widths.to_vec(),
            column_order,
            column_positions: Vec::new(),
            row_count,
            default_row_height: row_height,
            row_heights: BTreeMap::new(),
            row_header_width: 0,
            column_header_height: 0,
        };
        layout.recompute_columns();
        layout
    }

    /// Create a layout of `columns` x `rows` cells at the default sizes.
    pub fn uniform(columns: u32, rows: u32) -> Self {
        let widths = vec![DEFAULT_COLUMN_WIDTH; columns as usize];
        Self::new(&widths, rows, DEFAULT_ROW_HEIGHT)
    }

    fn recompute_columns(&mut self) {
        self.column_positions.clear();
        self.column_positions.reserve(self.column_order.len() + 1);
        let mut x: i64 = 0;
        for &col in &self.column_order {
            self.column_positions.push(x);
            x += i64::from(self.column_widths.get(col as usize).copied().unwrap_or(0));
        }
        self.column_positions.push(x); // Final edge
    }

    /// Get the width of row headers (0 if not shown)
    pub fn header_width(&self) -> u32 {
        self.row_header_width
    }

    /// Get the height of column headers (0 if not shown)
    pub fn header_height(&self) -> u32 {
        self.column_header_height
    }

    /// Set header dimensions
    pub fn set_header_dimensions(&mut self, row_header_width: u32, column_header_height: u32) {
        self.row_header_width = row_header_width;
        self.column_header_height = column_header_height;
    }

    pub fn column_count(&self) -> u32 {
        to_u32(self.column_widths.len())
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Change the number of rows, dropping height overrides past the end.
    pub fn set_row_count(&mut self, row_count: u32) {
        self.row_count = row_count;
        self.row_heights.retain(|&row, _| row < row_count);
    }

    /// Get column width for a logical column
    pub fn column_width(&self, column: u32) -> Option<u32> {
        self.column_widths.get(column as usize).copied()
    }

    /// Get row height at index
    pub fn row_height(&self, row: u32) -> Option<u32> {
        if row >= self.row_count {
            return None;
        }
        Some(
            self.row_heights
                .get(&row)
                .copied()
                .unwrap_or(self.default_row_height),
        )
    }

    /// Override the height of one row. Ignored for rows past the end.
    pub fn set_row_height(&mut self, row: u32, height: u32) {
        if row >= self.row_count {
            return;
        }
        if height == self.default_row_height {
            self.row_heights.remove(&row);
        } else {
            self.row_heights.insert(row, height);
        }
    }

    /// Display slot currently showing a logical column
    pub fn display_index(&self, column: u32) -> Option<u32> {
        self.column_order
            .iter()
            .position(|&c| c == column)
            .map(to_u32)
    }

    /// Left edge of a logical column in content coordinates
    pub fn column_x(&self, column: u32) -> Option<i64> {
        let slot = self.display_index(column)?;
        self.column_positions.get(slot as usize).copied()
    }

    /// Top edge of a row in content coordinates
    pub fn row_y(&self, row: u32) -> Option<i64> {
        if row >= self.row_count {
            return None;
        }
        Some(self.row_top(row))
    }

    fn row_top(&self, row: u32) -> i64 {
        let base = i64::from(row) * i64::from(self.default_row_height);
        let delta: i64 = self
            .row_heights
            .range(..row)
            .map(|(_, &h)| i64::from(h) - i64::from(self.default_row_height))
            .sum();
        base + delta
    }

    /// Get cell bounds in content coordinates (no headers, no scroll)
    pub fn cell_rect(&self, column: u32, row: u32) -> Option<Rect> {
        let x = self.column_x(column)?;
        let y = self.row_y(row)?;
        let width = self.column_width(column)?;
        let height = self.row_height(row)?;
        Some(Rect::new(
            clamp_px(x),
            clamp_px(y),
            clamp_px(i64::from(width)),
            clamp_px(i64::from(height)),
        ))
    }

    /// Find the logical column at content x position (binary search)
    pub fn column_at_x(&self, x: i64) -> Option<u32> {
        if x < 0 || x >= self.total_width() {
            return None;
        }
        // last edge at or before x; zero-width columns share their edge with the next one
        let slot = self
            .column_positions
            .partition_point(|&pos| pos <= x)
            .saturating_sub(1);
        self.column_order.get(slot).copied()
    }

    /// Find row at content y position (binary search)
    pub fn row_at_y(&self, y: i64) -> Option<u32> {
        if y < 0 || y >= self.total_height() {
            return None;
        }
        let (mut lo, mut hi) = (0u32, self.row_count);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.row_top(mid) <= y {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Some(lo)
    }

    /// Get total width of all columns
    pub fn total_width(&self) -> i64 {
        self.column_positions.last().copied().unwrap_or(0)
    }

    /// Get total height of all rows
    pub fn total_height(&self) -> i64 {
        self.row_top(self.row_count)
    }

    /// Change the width of a logical column. A width of 0 hides it.
    ///
    /// # Errors
    /// Returns [`GridEditError::ColumnOutOfRange`] for an unknown column.
    pub fn resize_column(&mut self, column: u32, width: u32) -> Result<()> {
        let count = self.column_count();
        let slot = self
            .column_widths
            .get_mut(column as usize)
            .ok_or(GridEditError::ColumnOutOfRange { column, count })?;
        *slot = width;
        self.recompute_columns();
        Ok(())
    }

    /// Move a logical column to another display slot, shifting the others.
    ///
    /// # Errors
    /// Returns [`GridEditError::ColumnOutOfRange`] if either the column or the
    /// target slot does not exist.
    pub fn move_column(&mut self, column: u32, to_index: u32) -> Result<()> {
        let count = self.column_count();
        let from = self
            .display_index(column)
            .ok_or(GridEditError::ColumnOutOfRange { column, count })?;
        if to_index >= count {
            return Err(GridEditError::ColumnOutOfRange {
                column: to_index,
                count,
            });
        }
        let moved = self.column_order.remove(from as usize);
        self.column_order.insert(to_index as usize, moved);
        self.recompute_columns();
        Ok(())
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Saturate a content coordinate into pixel range.
pub(crate) fn clamp_px(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_layout() {
        let layout = GridLayout::uniform(6, 11);

        assert_eq!(layout.column_count(), 6);
        assert_eq!(layout.row_count(), 11);
        assert_eq!(layout.total_width(), i64::from(DEFAULT_COLUMN_WIDTH) * 6);
        assert_eq!(layout.total_height(), i64::from(DEFAULT_ROW_HEIGHT) * 11);
    }

    #[test]
    fn test_cell_rect() {
        let layout = GridLayout::uniform(6, 11);

        let rect = layout.cell_rect(0, 0).unwrap();
        assert_eq!(rect, Rect::new(0, 0, 64, 20));

        let rect = layout.cell_rect(2, 1).unwrap();
        assert_eq!(rect.x, 128);
        assert_eq!(rect.y, 20);

        assert!(layout.cell_rect(6, 0).is_none());
        assert!(layout.cell_rect(0, 11).is_none());
    }

    #[test]
    fn test_row_height_overrides() {
        let mut layout = GridLayout::uniform(2, 5);
        layout.set_row_height(1, 50);
        layout.set_row_height(9, 50); // past the end, ignored

        assert_eq!(layout.row_y(2), Some(20 + 50));
        assert_eq!(layout.total_height(), 20 * 4 + 50);
        assert_eq!(layout.row_at_y(69), Some(1));
        assert_eq!(layout.row_at_y(70), Some(2));

        layout.set_row_height(1, DEFAULT_ROW_HEIGHT);
        assert_eq!(layout.total_height(), 100);
    }

    #[test]
    fn test_set_row_count_drops_overrides() {
        let mut layout = GridLayout::uniform(1, 10);
        layout.set_row_height(8, 40);
        layout.set_row_count(5);
        layout.set_row_count(10);
        assert_eq!(layout.row_height(8), Some(DEFAULT_ROW_HEIGHT));
    }

    #[test]
    fn test_row_at_y() {
        let layout = GridLayout::uniform(6, 11);

        assert_eq!(layout.row_at_y(0), Some(0));
        assert_eq!(layout.row_at_y(10), Some(0));
        assert_eq!(layout.row_at_y(20), Some(1));
        assert_eq!(layout.row_at_y(50), Some(2));
        assert_eq!(layout.row_at_y(220), None);
        assert_eq!(layout.row_at_y(-1), None);
    }

    #[test]
    fn test_column_at_x() {
        let layout = GridLayout::uniform(6, 11);

        assert_eq!(layout.column_at_x(0), Some(0));
        assert_eq!(layout.column_at_x(32), Some(0));
        assert_eq!(layout.column_at_x(64), Some(1));
        assert_eq!(layout.column_at_x(160), Some(2));
        assert_eq!(layout.column_at_x(384), None);
    }

    #[test]
    fn test_column_at_x_skips_hidden() {
        let mut layout = GridLayout::new(&[30, 40, 50], 1, 20);
        layout.resize_column(1, 0).unwrap();
        assert_eq!(layout.column_at_x(30), Some(2));
        assert_eq!(layout.column_at_x(29), Some(0));
    }

    #[test]
    fn test_resize_column() {
        let mut layout = GridLayout::new(&[30, 40, 50], 1, 20);
        layout.resize_column(0, 100).unwrap();
        assert_eq!(layout.column_x(1), Some(100));
        assert_eq!(layout.total_width(), 190);

        let err = layout.resize_column(3, 10).unwrap_err();
        assert!(matches!(
            err,
            GridEditError::ColumnOutOfRange { column: 3, count: 3 }
        ));
    }

    #[test]
    fn test_move_column() {
        let mut layout = GridLayout::new(&[30, 40, 50], 1, 20);
        layout.move_column(0, 2).unwrap();

        assert_eq!(layout.display_index(0), Some(2));
        assert_eq!(layout.display_index(1), Some(0));
        assert_eq!(layout.column_x(1), Some(0));
        assert_eq!(layout.column_x(2), Some(40));
        assert_eq!(layout.column_x(0), Some(90));
        assert_eq!(layout.cell_rect(0, 0), Some(Rect::new(90, 0, 30, 20)));

        assert!(layout.move_column(0, 3).is_err());
        assert!(layout.move_column(7, 0).is_err());
    }

    #[test]
    fn test_headers() {
        let mut layout = GridLayout::uniform(1, 1);
        layout.set_header_dimensions(40, 24);
        assert_eq!(layout.header_width(), 40);
        assert_eq!(layout.header_height(), 24);
    }

    #[test]
    fn test_empty_grid() {
        let layout = GridLayout::new(&[], 0, 20);
        assert_eq!(layout.column_count(), 0);
        assert_eq!(layout.total_width(), 0);
        assert_eq!(layout.total_height(), 0);
        assert_eq!(layout.column_at_x(0), None);
        assert_eq!(layout.row_at_y(0), None);
    }

    #[test]
    fn test_clamp_px() {
        assert_eq!(clamp_px(5), 5);
        assert_eq!(clamp_px(i64::MAX), i32::MAX);
        assert_eq!(clamp_px(i64::MIN), i32::MIN);
    }
}

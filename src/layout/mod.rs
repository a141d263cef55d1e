//! Layout engine for grid geometry and overlay editor placement.
//!
//! This module handles:
//! - Editor size/alignment settings and the bounds calculation
//! - Pre-computing cell positions from column widths and row heights
//! - Managing viewport state (scroll position, visible range, client area)

mod bounds;
mod editor_layout;
mod grid_layout;
mod viewport;

pub use bounds::{clip_cell, compute_bounds, CellGeometry, ClientArea};
pub use editor_layout::{EditorLayout, HorizontalAlignment, VerticalAlignment};
pub use grid_layout::{GridLayout, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
pub use viewport::Viewport;

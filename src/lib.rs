//! gridedit - overlay editor placement for data grids
//!
//! Keeps an in-place editor control sized and aligned over a grid cell while
//! the grid resizes, scrolls and reorders columns:
//! - Pure bounds calculation (minimum size, grab, alignment, right-edge clip)
//! - Column/row layout with headers, hidden and reordered columns
//! - A cell tracker that repositions its control on every geometry change
//! - A DOM `<input>` overlay when built for the browser
//!
//! # Usage (Rust)
//!
//! ```
//! use gridedit::{CellPosition, EditorLayout, Rect, compute_bounds};
//!
//! let cell = Rect::new(100, 50, 40, 20);
//! let clip = Rect::new(0, 0, 800, 600);
//! let layout = EditorLayout::fill().with_minimum_size(10, 10);
//! let bounds = compute_bounds(CellPosition::new(2, 3), &|_: u32, _: u32| cell, clip, &layout);
//! assert_eq!(bounds, cell);
//! ```

pub mod cell_ref;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod request;

use wasm_bindgen::prelude::*;

pub use cell_ref::CellPosition;
pub use editor::{GridEditor, OverlayControl};
pub use error::{GridEditError, Result};
pub use geometry::Rect;
pub use grid::{Grid, GridEvent, GridSurface};
pub use layout::{
    compute_bounds, CellGeometry, ClientArea, EditorLayout, GridLayout, HorizontalAlignment,
    VerticalAlignment, Viewport,
};
pub use request::{BoundsRequest, BoundsResponse};

/// Evaluate a JSON [`BoundsRequest`] and return a JSON [`BoundsResponse`].
///
/// # Errors
/// Returns an error if the request is malformed.
#[wasm_bindgen]
pub fn compute_bounds_json(request: &str) -> std::result::Result<String, JsValue> {
    let request = BoundsRequest::from_json(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&request.evaluate())
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

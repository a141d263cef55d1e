//! Browser entry point: a grid plus an `<input>` overlay that follows one cell.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::{GridEditor, InputOverlay};
use crate::grid::{Grid, GridEvent};
use crate::layout::{EditorLayout, GridLayout, Viewport};

/// The editor exported to JavaScript.
///
/// The host forwards its resize/scroll/column events here; each one
/// repositions the input if a cell is being edited.
#[wasm_bindgen]
pub struct WebGridEditor {
    grid: Grid,
    editor: GridEditor<InputOverlay>,
}

#[wasm_bindgen]
impl WebGridEditor {
    /// Create an editor over a grid with the given column widths and rows.
    #[wasm_bindgen(constructor)]
    pub fn new(
        column_widths: Vec<u32>,
        row_count: u32,
        row_height: u32,
        width: i32,
        height: i32,
        container: HtmlElement,
    ) -> WebGridEditor {
        let grid = Grid::new(
            GridLayout::new(&column_widths, row_count, row_height),
            Viewport::new(width, height),
        );
        let mut editor = GridEditor::new(EditorLayout::fill());
        editor.set_editor(InputOverlay::new(Some(container)), None, None, &grid);
        WebGridEditor { grid, editor }
    }

    /// Replace the editor's size/alignment settings from JSON.
    #[wasm_bindgen]
    pub fn set_layout_json(&mut self, json: &str) -> Result<(), JsValue> {
        let layout = EditorLayout::from_json(json)?;
        self.editor.set_editor_layout(layout, &self.grid);
        Ok(())
    }

    /// Set header band sizes.
    #[wasm_bindgen]
    pub fn set_headers(&mut self, row_header_width: u32, column_header_height: u32) {
        self.grid
            .layout
            .set_header_dimensions(row_header_width, column_header_height);
        self.editor.handle_event(GridEvent::Resized, &self.grid);
    }

    /// Begin editing a cell, showing `value` in the input.
    #[wasm_bindgen]
    pub fn begin_edit(&mut self, column: u32, row: u32, value: &str) {
        self.editor.set_cell(Some(column), Some(row), &self.grid);
        if let Some(input) = self.editor.control_mut() {
            input.set_value(value);
        }
    }

    /// Finish editing; returns the text that was in the input.
    #[wasm_bindgen]
    pub fn end_edit(&mut self) -> Option<String> {
        self.editor.set_cell(None, None, &self.grid);
        let input = self.editor.control_mut()?;
        let value = input.value();
        input.hide();
        value
    }

    /// Check if currently editing a cell.
    #[wasm_bindgen]
    pub fn is_editing(&self) -> bool {
        self.editor.position().is_set()
    }

    /// Resize the viewport.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: i32, height: i32) {
        let event = self.grid.resize(width, height);
        self.editor.handle_event(event, &self.grid);
    }

    /// Scroll by a delta.
    #[wasm_bindgen]
    pub fn scroll_by(&mut self, delta_x: i32, delta_y: i32) {
        if let Some(event) = self.grid.scroll_by(delta_x, delta_y) {
            self.editor.handle_event(event, &self.grid);
        }
    }

    /// Change a column's width.
    #[wasm_bindgen]
    pub fn resize_column(&mut self, column: u32, width: u32) -> Result<(), JsValue> {
        let event = self.grid.resize_column(column, width)?;
        self.editor.handle_event(event, &self.grid);
        Ok(())
    }

    /// Move a column to another display slot.
    #[wasm_bindgen]
    pub fn move_column(&mut self, column: u32, to_index: u32) -> Result<(), JsValue> {
        let event = self.grid.move_column(column, to_index)?;
        self.editor.handle_event(event, &self.grid);
        Ok(())
    }

    /// Hit-test: which cell is at the given viewport point? `[column, row]`.
    #[wasm_bindgen]
    pub fn cell_at_point(&self, x: i32, y: i32) -> Option<Vec<u32>> {
        self.grid.cell_at(x, y).map(|(c, r)| vec![c, r])
    }
}

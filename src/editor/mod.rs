//! Overlay editor tracking for grid cells.
//!
//! [`GridEditor`] keeps a control (a text input, a button that opens a
//! dialog, ...) positioned over one grid cell. The host grid tells it about
//! every geometry change through [`GridEditor::handle_event`]; there are no
//! listeners or back-references to tear down.

#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod web;

use crate::cell_ref::CellPosition;
use crate::geometry::Rect;
use crate::grid::{GridEvent, GridSurface};
use crate::layout::{compute_bounds, EditorLayout};

#[cfg(target_arch = "wasm32")]
pub use input::InputOverlay;
#[cfg(target_arch = "wasm32")]
pub use web::WebGridEditor;

/// The control an editor positions. Implemented by whatever widget the host
/// shows above the cell.
pub trait OverlayControl {
    /// Move and resize the control.
    fn set_bounds(&mut self, bounds: Rect);
    fn is_visible(&self) -> bool;
    fn is_focused(&self) -> bool;
    fn set_focus(&mut self);
}

/// Keeps an overlay control sized and aligned over a grid cell.
#[derive(Debug)]
pub struct GridEditor<C> {
    position: CellPosition,
    layout: EditorLayout,
    control: Option<C>,
}

impl<C> Default for GridEditor<C> {
    fn default() -> Self {
        Self::new(EditorLayout::default())
    }
}

impl<C> GridEditor<C> {
    /// Create an editor tracking no cell and holding no control.
    pub fn new(layout: EditorLayout) -> Self {
        Self {
            position: CellPosition::UNSET,
            layout,
            control: None,
        }
    }

    pub fn position(&self) -> CellPosition {
        self.position
    }

    /// Tracked column, if any.
    pub fn column(&self) -> Option<u32> {
        self.position.column
    }

    /// Tracked row, if any.
    pub fn row(&self) -> Option<u32> {
        self.position.row
    }

    pub fn editor_layout(&self) -> &EditorLayout {
        &self.layout
    }

    /// Mutable layout settings. Call [`GridEditor::layout`] afterwards to apply.
    pub fn editor_layout_mut(&mut self) -> &mut EditorLayout {
        &mut self.layout
    }

    pub fn control(&self) -> Option<&C> {
        self.control.as_ref()
    }

    pub fn control_mut(&mut self) -> Option<&mut C> {
        self.control.as_mut()
    }

    /// Stop tracking and hand the control back. The control is not destroyed.
    pub fn detach(&mut self) -> Option<C> {
        tracing::debug!(position = %self.position, "detaching grid editor");
        self.position = CellPosition::UNSET;
        self.control.take()
    }

    /// Bounds the control would get right now, without applying them.
    ///
    /// A row past the end of the grid (left over after rows were removed)
    /// gives [`Rect::EMPTY`].
    pub fn bounds<G>(&self, grid: &G) -> Rect
    where
        G: GridSurface + ?Sized,
    {
        if !row_valid(self.position.row, grid.row_count()) {
            return Rect::EMPTY;
        }
        compute_bounds(self.position, grid, grid.client_area(), &self.layout)
    }
}

impl<C: OverlayControl> GridEditor<C> {
    /// Track a new row and relayout.
    pub fn set_row<G>(&mut self, row: Option<u32>, grid: &G)
    where
        G: GridSurface + ?Sized,
    {
        self.position.row = row;
        self.layout(grid);
    }

    /// Track a new column and relayout.
    ///
    /// A grid with no explicit columns has a single implicit column 0. In a
    /// grid with columns, an out-of-range column leaves the editor with no
    /// column and does not relayout.
    pub fn set_column<G>(&mut self, column: Option<u32>, grid: &G)
    where
        G: GridSurface + ?Sized,
    {
        let count = grid.column_count();
        if count == 0 {
            self.position.column = (column == Some(0)).then_some(0);
            self.layout(grid);
            return;
        }

        self.position.column = None;
        match column {
            Some(c) if c < count => {
                self.position.column = Some(c);
                self.layout(grid);
            }
            _ => tracing::debug!(?column, count, "column rejected, editor left without a column"),
        }
    }

    /// Move to another cell with a single relayout.
    ///
    /// The old column is dropped before the row changes, so the control is
    /// never placed over a mix of the old and new cell.
    pub fn set_cell<G>(&mut self, column: Option<u32>, row: Option<u32>, grid: &G)
    where
        G: GridSurface + ?Sized,
    {
        self.position.column = None;
        self.position.row = row;
        self.set_column(column, grid);
    }

    /// Attach a control to the cell at `(column, row)` and position it.
    pub fn set_editor<G>(&mut self, control: C, column: Option<u32>, row: Option<u32>, grid: &G)
    where
        G: GridSurface + ?Sized,
    {
        self.set_row(row, grid);
        self.set_column(column, grid);
        self.control = Some(control);
        self.layout(grid);
    }

    /// Replace the layout settings and relayout.
    pub fn set_editor_layout<G>(&mut self, layout: EditorLayout, grid: &G)
    where
        G: GridSurface + ?Sized,
    {
        self.layout = layout;
        self.layout(grid);
    }

    /// React to a geometry change in the grid.
    ///
    /// Every event relayouts: resizing or moving any column can shift the
    /// tracked one, not only changes to the tracked column itself.
    pub fn handle_event<G>(&mut self, event: GridEvent, grid: &G)
    where
        G: GridSurface + ?Sized,
    {
        tracing::trace!(?event, position = %self.position, "grid geometry changed");
        self.layout(grid);
    }

    /// Recompute the control's bounds and push them to it.
    ///
    /// Skipped while the row is unset, the column is not valid for the grid,
    /// or no control is attached. A row the grid no longer has hides the
    /// control with [`Rect::EMPTY`]. Focus survives the move.
    pub fn layout<G>(&mut self, grid: &G)
    where
        G: GridSurface + ?Sized,
    {
        if self.position.row.is_none() || !column_valid(self.position.column, grid.column_count())
        {
            tracing::trace!(position = %self.position, "layout skipped");
            return;
        }

        let bounds = self.bounds(grid);
        let Some(control) = self.control.as_mut() else {
            return;
        };

        let had_focus = control.is_visible() && control.is_focused();
        control.set_bounds(bounds);
        if had_focus {
            control.set_focus();
        }
    }
}

fn row_valid(row: Option<u32>, count: u32) -> bool {
    row.is_some_and(|r| r < count)
}

fn column_valid(column: Option<u32>, count: u32) -> bool {
    match column {
        Some(c) if count == 0 => c == 0,
        Some(c) => c < count,
        None => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::layout::{GridLayout, Viewport};

    #[derive(Debug, Default)]
    struct MockControl {
        placed: Vec<Rect>,
        visible: bool,
        focused: bool,
        refocused: u32,
    }

    impl OverlayControl for MockControl {
        fn set_bounds(&mut self, bounds: Rect) {
            self.placed.push(bounds);
            // moving a native control steals focus
            self.focused = false;
        }
        fn is_visible(&self) -> bool {
            self.visible
        }
        fn is_focused(&self) -> bool {
            self.focused
        }
        fn set_focus(&mut self) {
            self.focused = true;
            self.refocused += 1;
        }
    }

    fn grid() -> Grid {
        Grid::new(GridLayout::uniform(4, 10), Viewport::new(400, 300))
    }

    #[test]
    fn test_column_valid() {
        assert!(column_valid(Some(0), 0));
        assert!(!column_valid(Some(1), 0));
        assert!(column_valid(Some(3), 4));
        assert!(!column_valid(Some(4), 4));
        assert!(!column_valid(None, 4));
    }

    #[test]
    fn test_row_valid() {
        assert!(row_valid(Some(9), 10));
        assert!(!row_valid(Some(10), 10));
        assert!(!row_valid(Some(0), 0));
        assert!(!row_valid(None, 10));
    }

    #[test]
    fn test_set_cell_places_once() {
        let g = grid();
        let mut editor = GridEditor::new(EditorLayout::fill());
        editor.set_editor(MockControl::default(), Some(1), Some(2), &g);
        let before = editor.control().unwrap().placed.len();

        editor.set_cell(Some(3), Some(5), &g);

        let control = editor.control().unwrap();
        assert_eq!(control.placed.len(), before + 1);
        assert_eq!(control.placed.last(), Some(&Rect::new(192, 100, 64, 20)));
    }

    #[test]
    fn test_set_editor_places_control() {
        let g = grid();
        let mut editor = GridEditor::new(EditorLayout::fill());
        editor.set_editor(MockControl::default(), Some(1), Some(2), &g);

        assert_eq!(editor.position(), CellPosition::new(1, 2));
        let control = editor.control().unwrap();
        assert_eq!(control.placed.last(), Some(&Rect::new(64, 40, 64, 20)));
    }

    #[test]
    fn test_focus_restored_after_move() {
        let g = grid();
        let mut editor = GridEditor::new(EditorLayout::fill());
        let control = MockControl {
            visible: true,
            focused: true,
            ..MockControl::default()
        };
        editor.set_editor(control, Some(0), Some(0), &g);
        let control = editor.control().unwrap();
        assert!(control.focused);
        assert_eq!(control.refocused, 1);
    }

    #[test]
    fn test_hidden_control_not_refocused() {
        let g = grid();
        let mut editor = GridEditor::new(EditorLayout::fill());
        let control = MockControl {
            visible: false,
            focused: true,
            ..MockControl::default()
        };
        editor.set_editor(control, Some(0), Some(0), &g);
        assert_eq!(editor.control().unwrap().refocused, 0);
    }

    #[test]
    fn test_detach_resets_position() {
        let g = grid();
        let mut editor = GridEditor::new(EditorLayout::fill());
        editor.set_editor(MockControl::default(), Some(1), Some(1), &g);

        let control = editor.detach().unwrap();
        assert!(!control.placed.is_empty());
        assert_eq!(editor.position(), CellPosition::UNSET);
        assert!(editor.control().is_none());
        assert_eq!(editor.bounds(&g), Rect::EMPTY);
    }
}

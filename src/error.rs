//! Structured error types for gridedit.
//!
//! Bounds computation itself never fails; these cover configuration loading,
//! cell reference parsing and grid mutation.

/// All errors that can occur while configuring or driving a grid editor.
#[derive(Debug, thiserror::Error)]
pub enum GridEditError {
    /// Malformed JSON configuration or request.
    #[error("Configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Invalid cell reference.
    #[error("Invalid cell reference: {0}")]
    CellRef(String),

    /// A column index outside the grid.
    #[error("Column {column} out of range (grid has {count} columns)")]
    ColumnOutOfRange { column: u32, count: u32 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridEditError>;

#[cfg(target_arch = "wasm32")]
impl From<GridEditError> for wasm_bindgen::JsValue {
    fn from(e: GridEditError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

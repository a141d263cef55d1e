//! Tracked cell positions and A1-style cell references.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridEditError;

/// The grid cell an overlay editor is tracking.
///
/// Either index may be absent; a position with any absent index is "unset" and
/// always lays out to [`Rect::EMPTY`](crate::geometry::Rect::EMPTY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellPosition {
    /// Zero-based logical column index.
    #[serde(default)]
    pub column: Option<u32>,
    /// Zero-based row index.
    #[serde(default)]
    pub row: Option<u32>,
}

impl CellPosition {
    /// No column and no row.
    pub const UNSET: CellPosition = CellPosition {
        column: None,
        row: None,
    };

    pub const fn new(column: u32, row: u32) -> Self {
        Self {
            column: Some(column),
            row: Some(row),
        }
    }

    #[must_use]
    pub fn with_column(self, column: Option<u32>) -> Self {
        Self { column, ..self }
    }

    #[must_use]
    pub fn with_row(self, row: Option<u32>) -> Self {
        Self { row, ..self }
    }

    /// True when both indices are present.
    pub fn is_set(&self) -> bool {
        self.column.is_some() && self.row.is_some()
    }

    /// `(column, row)` when both indices are present.
    pub fn resolved(&self) -> Option<(u32, u32)> {
        Some((self.column?, self.row?))
    }

    /// Build a position from raw indices where any negative value means unset.
    pub fn from_raw(column: i64, row: i64) -> Self {
        Self {
            column: u32::try_from(column).ok(),
            row: u32::try_from(row).ok(),
        }
    }

    /// Raw `(column, row)` pair with `-1` standing in for an absent index.
    pub fn to_raw(&self) -> (i64, i64) {
        (
            self.column.map_or(-1, i64::from),
            self.row.map_or(-1, i64::from),
        )
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolved() {
            Some((column, row)) => {
                write!(f, "{}{}", column_name(column), u64::from(row) + 1)
            }
            None => f.write_str("unset"),
        }
    }
}

impl FromStr for CellPosition {
    type Err = GridEditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unset") {
            return Ok(Self::UNSET);
        }
        parse_cell_ref(trimmed)
            .map(|(column, row)| Self::new(column, row))
            .ok_or_else(|| GridEditError::CellRef(trimmed.to_string()))
    }
}

/// Parse a cell reference like "A1" into (col, row) where col and row are 0-indexed.
///
/// `$` anchors are ignored and letters are case-insensitive. Letters must come
/// before digits and the row number starts at 1.
pub fn parse_cell_ref(cell_ref: &str) -> Option<(u32, u32)> {
    let mut col: u32 = 0;
    let mut row: u32 = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for ch in cell_ref.trim().chars() {
        if ch == '$' {
            continue;
        }
        if ch.is_ascii_alphabetic() {
            if saw_row {
                return None;
            }
            let digit = u32::from(ch.to_ascii_uppercase()) - u32::from('A') + 1;
            col = col.checked_mul(26)?.checked_add(digit)?;
            saw_col = true;
        } else if let Some(digit) = ch.to_digit(10) {
            row = row.checked_mul(10)?.checked_add(digit)?;
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row || row == 0 {
        return None;
    }

    Some((col - 1, row - 1))
}

/// Column letters for a 0-indexed column ("A", "B", ..., "Z", "AA", ...).
pub fn column_name(column: u32) -> String {
    let mut letters = Vec::new();
    let mut n = u64::from(column) + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + u8::try_from(rem).unwrap_or(0)));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

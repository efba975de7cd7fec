//! In-memory snapshot of a schedule workbook.
//!
//! A `Grid` is an ordered list of sheets, each a 2-D table of cells addressed
//! by zero-based (row, column). Loading a workbook into a grid happens outside
//! this crate; everything here is read-only once built.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Empty cells and whitespace-only text count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// The cell rendered as text (numbers without a trailing `.0` when whole).
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// One named sheet of the workbook.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Sheet {
            name: name.into(),
            rows,
        }
    }

    /// Cell at (row, col); ragged rows and out-of-range coordinates read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_ref(&self, row: usize, col: usize) -> CellRef {
        CellRef {
            sheet: self.name.clone(),
            row,
            col,
        }
    }
}

/// All sheets of a workbook, in iteration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Grid {
    pub sheets: Vec<Sheet>,
}

impl Grid {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Grid { sheets }
    }
}

/// Zero-based address of a cell within a named sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub sheet: String,
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}!{}{} (row {}, column {})",
            self.sheet,
            col_letter(self.col),
            self.row + 1,
            self.row,
            self.col
        )
    }
}

/// Spreadsheet column letters for a zero-based index (0 -> "A", 27 -> "AB").
pub fn col_letter(col: usize) -> String {
    let mut n = col + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_letter() {
        assert_eq!(col_letter(0), "A");
        assert_eq!(col_letter(25), "Z");
        assert_eq!(col_letter(26), "AA");
        assert_eq!(col_letter(27), "AB");
    }

    #[test]
    fn test_cell_ref_display_names_sheet_and_coordinates() {
        let cell = CellRef {
            sheet: "May".to_string(),
            row: 4,
            col: 2,
        };
        assert_eq!(cell.to_string(), "May!C5 (row 4, column 2)");
    }

    #[test]
    fn test_ragged_rows_read_as_empty() {
        let sheet = Sheet::new("S", vec![vec![Cell::from("a")], vec![]]);
        assert_eq!(sheet.cell(0, 0), &Cell::text("a"));
        assert_eq!(sheet.cell(0, 5), &Cell::Empty);
        assert_eq!(sheet.cell(1, 0), &Cell::Empty);
        assert_eq!(sheet.cell(9, 9), &Cell::Empty);
    }

    #[test]
    fn test_number_cells_render_without_fraction() {
        assert_eq!(Cell::Number(42.0).as_text(), "42");
        assert_eq!(Cell::Number(1.5).as_text(), "1.5");
        assert!(!Cell::Number(0.0).is_blank());
        assert!(Cell::text("   ").is_blank());
    }
}

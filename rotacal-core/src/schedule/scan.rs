//! Walking the grid for cells that carry one of your aliases.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::RotaResult;
use crate::grid::{Cell, CellRef, Grid, Sheet};
use crate::schedule::resolve::resolve_date;
use crate::schedule::weekday::validate_weekday;

/// Column holding the role name for every row.
pub const ROLE_COLUMN: usize = 0;

/// One shift found in the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub date: NaiveDate,
    pub role: String,
    pub cell: CellRef,
}

/// Finds assignments in a borrowed grid.
#[derive(Debug, Clone, Copy)]
pub struct GridScanner<'a> {
    grid: &'a Grid,
    aliases: &'a [String],
}

impl<'a> GridScanner<'a> {
    pub fn new(grid: &'a Grid, aliases: &'a [String]) -> Self {
        GridScanner { grid, aliases }
    }

    /// Start a fresh pass over the grid: sheets in order, then row-major.
    pub fn scan(&self) -> Assignments<'a> {
        Assignments {
            grid: self.grid,
            aliases: self.aliases,
            sheet: 0,
            row: 0,
            col: 0,
        }
    }
}

/// Iterator over the assignments of one scan.
///
/// Yields an error for the first entry whose date cannot be resolved or
/// validated; collecting into a `Result` stops there.
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    grid: &'a Grid,
    aliases: &'a [String],
    sheet: usize,
    row: usize,
    col: usize,
}

impl Assignments<'_> {
    /// Exact match after trimming the cell, so stray spaces typed around a
    /// name still count. Number cells never match.
    fn is_alias(&self, cell: &Cell) -> bool {
        match cell {
            Cell::Text(s) => {
                let s = s.trim();
                self.aliases.iter().any(|alias| alias == s)
            }
            _ => false,
        }
    }
}

impl Iterator for Assignments<'_> {
    type Item = RotaResult<Assignment>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(sheet) = self.grid.sheets.get(self.sheet) {
            while let Some(cells) = sheet.rows.get(self.row) {
                while let Some(cell) = cells.get(self.col) {
                    let (row, col) = (self.row, self.col);
                    self.col += 1;

                    if self.is_alias(cell) {
                        return Some(resolve_assignment(sheet, row, col));
                    }
                }
                self.row += 1;
                self.col = 0;
            }
            self.sheet += 1;
            self.row = 0;
        }
        None
    }
}

fn resolve_assignment(sheet: &Sheet, row: usize, col: usize) -> RotaResult<Assignment> {
    let cell = sheet.cell_ref(row, col);
    let role = sheet.cell(row, ROLE_COLUMN).as_text().trim().to_string();

    let resolved = resolve_date(sheet, col, row, &cell)?;
    validate_weekday(sheet, &resolved, col, &cell)?;

    debug!(%cell, %role, date = %resolved.date, "found assignment");

    Ok(Assignment {
        date: resolved.date,
        role,
        cell,
    })
}

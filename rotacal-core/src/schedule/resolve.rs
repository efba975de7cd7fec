//! Finding the date a schedule entry belongs to.
//!
//! Dates sit somewhere above the entries of their day, possibly with free-form
//! labels in between. Resolution walks up the column and takes the first cell
//! that parses as a date.

use chrono::NaiveDate;
use tracing::trace;

use crate::error::{RotaError, RotaResult};
use crate::grid::{Cell, CellRef, Sheet};
use crate::schedule::time::parse_sheet_date;

/// A date found in the sheet together with the row it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    pub row: usize,
}

/// How a cell looks to the upward scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reading {
    Blank,
    Text,
    Date(NaiveDate),
}

fn read(cell: &Cell) -> Reading {
    if cell.is_blank() {
        return Reading::Blank;
    }
    match cell {
        Cell::Text(s) => match parse_sheet_date(s) {
            Some(date) => Reading::Date(date),
            None => Reading::Text,
        },
        _ => Reading::Text,
    }
}

/// Find the nearest date above `entry_row` in column `col`.
///
/// Blank cells and text that is not a date are both skipped; the scan only
/// stops at a date or at the top of the sheet. `entry` is the matched cell,
/// reported back when nothing is found.
pub fn resolve_date(
    sheet: &Sheet,
    col: usize,
    entry_row: usize,
    entry: &CellRef,
) -> RotaResult<ResolvedDate> {
    for row in (0..entry_row).rev() {
        match read(sheet.cell(row, col)) {
            Reading::Blank => continue,
            Reading::Text => {
                trace!(row, col, "skipping non-date text above entry");
                continue;
            }
            Reading::Date(date) => return Ok(ResolvedDate { date, row }),
        }
    }

    Err(RotaError::DateNotFound {
        cell: entry.clone(),
    })
}

//! Loading the schedule workbook into a grid.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use rotacal_core::grid::{Cell, Grid, Sheet};
use rotacal_core::schedule::time::SHEET_DATE_FORMAT;
use tracing::debug;

/// Read the given sheets (all of them when `sheet_names` is empty) into a grid.
///
/// Cells keep their spreadsheet address: row 0 / column 0 is A1 even when the
/// used range starts further down.
pub fn load_grid(path: &Path, sheet_names: &[String]) -> Result<Grid> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook at {}", path.display()))?;

    let names: Vec<String> = if sheet_names.is_empty() {
        workbook.sheet_names().to_vec()
    } else {
        sheet_names.to_vec()
    };

    let mut sheets = Vec::with_capacity(names.len());
    for name in &names {
        let range = workbook
            .worksheet_range(name)
            .with_context(|| format!("Failed to read sheet '{}' from {}", name, path.display()))?;

        let sheet = sheet_from_range(name, &range);
        debug!(sheet = %name, rows = sheet.height(), "loaded sheet");
        sheets.push(sheet);
    }

    Ok(Grid::new(sheets))
}

fn sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];

    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(cell_from_data));
        rows.push(cells);
    }

    Sheet::new(name, rows)
}

/// Strings are trimmed; date cells become `MM/DD/YYYY` text like typed dates.
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.to_owned())
            }
        }
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(_) | Data::DateTimeIso(_) => match data.as_date() {
            Some(date) => Cell::Text(date.format(SHEET_DATE_FORMAT).to_string()),
            None => Cell::Empty,
        },
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) => Cell::Empty,
        Data::Empty => Cell::Empty,
    }
}

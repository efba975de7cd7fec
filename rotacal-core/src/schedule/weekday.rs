//! Sanity check: the label above a date cell must name that date's weekday.

use crate::error::{RotaError, RotaResult};
use crate::grid::{CellRef, Sheet};
use crate::schedule::resolve::ResolvedDate;
use crate::schedule::time::weekday_name;

/// Compare the cell directly above the resolved date with the date's weekday.
///
/// Catches dates typed into the wrong column or copied forward without being
/// updated. Surrounding whitespace in the label is ignored.
pub fn validate_weekday(
    sheet: &Sheet,
    resolved: &ResolvedDate,
    col: usize,
    entry: &CellRef,
) -> RotaResult<()> {
    let expected = weekday_name(resolved.date);

    let found = match resolved.row.checked_sub(1) {
        Some(label_row) => sheet.cell(label_row, col).as_text().trim().to_string(),
        None => String::new(),
    };

    if found == expected {
        Ok(())
    } else {
        Err(RotaError::DayMismatch {
            cell: entry.clone(),
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use chrono::NaiveDate;

    fn sheet_with_label(label: Cell) -> Sheet {
        Sheet::new(
            "Week",
            vec![vec![label], vec![Cell::text("05/25/2022")], vec![Cell::text("Alice")]],
        )
    }

    fn may_25() -> ResolvedDate {
        ResolvedDate {
            date: NaiveDate::from_ymd_opt(2022, 5, 25).unwrap(),
            row: 1,
        }
    }

    #[test]
    fn test_matching_label_passes() {
        let sheet = sheet_with_label(Cell::text("Wednesday"));
        let entry = sheet.cell_ref(2, 0);
        assert!(validate_weekday(&sheet, &may_25(), 0, &entry).is_ok());
    }

    #[test]
    fn test_label_whitespace_is_ignored() {
        let sheet = sheet_with_label(Cell::text(" Wednesday "));
        let entry = sheet.cell_ref(2, 0);
        assert!(validate_weekday(&sheet, &may_25(), 0, &entry).is_ok());
    }

    #[test]
    fn test_wrong_label_reports_both_days() {
        let sheet = sheet_with_label(Cell::text("Thursday"));
        let entry = sheet.cell_ref(2, 0);

        let err = validate_weekday(&sheet, &may_25(), 0, &entry).unwrap_err();

        match err {
            RotaError::DayMismatch {
                cell,
                expected,
                found,
            } => {
                assert_eq!(cell, entry);
                assert_eq!(expected, "Wednesday");
                assert_eq!(found, "Thursday");
            }
            other => panic!("expected DayMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_abbreviated_label_is_a_mismatch() {
        let sheet = sheet_with_label(Cell::text("Wed"));
        let entry = sheet.cell_ref(2, 0);
        assert!(matches!(
            validate_weekday(&sheet, &may_25(), 0, &entry),
            Err(RotaError::DayMismatch { .. })
        ));
    }

    #[test]
    fn test_date_in_first_row_has_no_label() {
        let sheet = Sheet::new("Week", vec![vec![Cell::text("05/25/2022")], vec![Cell::text("Alice")]]);
        let entry = sheet.cell_ref(1, 0);
        let resolved = ResolvedDate {
            date: NaiveDate::from_ymd_opt(2022, 5, 25).unwrap(),
            row: 0,
        };

        match validate_weekday(&sheet, &resolved, 0, &entry) {
            Err(RotaError::DayMismatch { found, .. }) => assert_eq!(found, ""),
            other => panic!("expected DayMismatch, got {:?}", other),
        }
    }
}

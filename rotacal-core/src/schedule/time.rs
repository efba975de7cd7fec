//! Date and time-of-day formats used by schedules and config files.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{RotaError, RotaResult};

/// Dates in the sheet and in recurring schedules, e.g. `05/25/2022`.
pub const SHEET_DATE_FORMAT: &str = "%m/%d/%Y";

/// Times of day in the config, e.g. `07:00 AM`.
pub const CLOCK_TIME_FORMAT: &str = "%I:%M %p";

/// Timestamp in the description stamp, e.g. `05/28/2021 at 09:00 AM`.
pub const STAMP_FORMAT: &str = "%m/%d/%Y at %I:%M %p";

/// RRULE `UNTIL` value, e.g. `20221231`.
pub const UNTIL_FORMAT: &str = "%Y%m%d";

/// UTC date-time as written in ICS, e.g. `20221231T235959Z`.
pub const UTC_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Parse a sheet date, returning `None` for anything that is not one.
pub fn parse_sheet_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), SHEET_DATE_FORMAT).ok()
}

/// Parse a `MM/DD/YYYY` date from the config.
pub fn parse_config_date(s: &str) -> RotaResult<NaiveDate> {
    parse_sheet_date(s).ok_or_else(|| RotaError::InvalidDate {
        value: s.to_string(),
    })
}

/// Parse an `HH:MM AM/PM` time of day.
pub fn parse_clock_time(s: &str) -> RotaResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), CLOCK_TIME_FORMAT).map_err(|_| RotaError::InvalidTime {
        value: s.to_string(),
    })
}

/// Full English weekday name, e.g. `Wednesday`.
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

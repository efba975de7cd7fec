//! Weekly recurring events from the config.
//!
//! Each recurring schedule becomes a single master event on its first
//! qualifying date, carrying an RRULE for the rest of the range.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use rrule::RRuleSet;

use crate::config::RecurringScheduleEntry;
use crate::error::{RotaError, RotaResult};
use crate::event::EventDescriptor;
use crate::schedule::assemble::timed_event;
use crate::schedule::stamp::UpdateStamp;
use crate::schedule::time::{
    UNTIL_FORMAT, UTC_DATETIME_FORMAT, parse_config_date, weekday_name,
};

/// Weekday names accepted in `days`, as produced by `%A`.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// First date on or after `start` whose weekday is listed in `days`.
///
/// Only a week of candidates is checked, so a list with no valid weekday
/// names gives `None` instead of looping.
pub fn first_occurrence(start: NaiveDate, days: &[String]) -> Option<NaiveDate> {
    (0..7)
        .map(|offset| start + Duration::days(offset))
        .find(|date| {
            let name = weekday_name(*date);
            days.iter().any(|day| *day == name)
        })
}

/// e.g. `RRULE:FREQ=WEEKLY;BYDAY=MO,WE;UNTIL=20221231`
pub fn build_rrule(days: &[String], until: NaiveDate) -> String {
    let by_day: Vec<String> = days
        .iter()
        .map(|day| day.chars().take(2).collect::<String>().to_uppercase())
        .collect();

    format!(
        "RRULE:FREQ=WEEKLY;BYDAY={};UNTIL={}",
        by_day.join(","),
        until.format(UNTIL_FORMAT)
    )
}

/// Builds recurring events for the config's `recurring_schedules`.
pub struct RecurrenceBuilder<'a> {
    stamp: &'a UpdateStamp,
}

impl<'a> RecurrenceBuilder<'a> {
    pub fn new(stamp: &'a UpdateStamp) -> Self {
        RecurrenceBuilder { stamp }
    }

    pub fn build(&self, entry: &RecurringScheduleEntry) -> RotaResult<EventDescriptor> {
        let invalid = |reason: String| RotaError::InvalidRecurrence {
            title: entry.title.clone(),
            reason,
        };

        if entry.days.is_empty() {
            return Err(invalid("no days given".to_string()));
        }
        if let Some(day) = entry
            .days
            .iter()
            .find(|day| !WEEKDAY_NAMES.contains(&day.as_str()))
        {
            return Err(invalid(format!(
                "'{}' is not a weekday name (expected e.g. 'Monday')",
                day
            )));
        }

        let start_date = parse_config_date(&entry.start_date)?;
        let end_date = parse_config_date(&entry.end_date)?;

        let first_date = first_occurrence(start_date, &entry.days).ok_or_else(|| {
            invalid(format!(
                "none of {:?} falls within a week of {}",
                entry.days, entry.start_date
            ))
        })?;

        let mut event = timed_event(
            &entry.title,
            &entry.location,
            self.stamp,
            first_date,
            &entry.start_time,
            &entry.end_time,
        )?;
        event.recurrence_rule = Some(build_rrule(&entry.days, end_date));

        Ok(event)
    }

    /// Build every entry in config order, stopping at the first failure.
    pub fn build_all(&self, entries: &[RecurringScheduleEntry]) -> RotaResult<Vec<EventDescriptor>> {
        entries.iter().map(|entry| self.build(entry)).collect()
    }
}

/// Rewrite a date-only `UNTIL` as the last second of that day in `tz`, given
/// in UTC. A `DTSTART` with a timezone only accepts a UTC `UNTIL`.
pub(crate) fn utc_until(rule: &str, tz: Tz) -> String {
    rule.split(';')
        .map(|part| {
            let date = part
                .strip_prefix("UNTIL=")
                .and_then(|v| NaiveDate::parse_from_str(v, UNTIL_FORMAT).ok());
            match date {
                Some(date) => format!(
                    "UNTIL={}",
                    end_of_day_utc(date, tz).format(UTC_DATETIME_FORMAT)
                ),
                None => part.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn end_of_day_utc(date: NaiveDate, tz: Tz) -> NaiveDateTime {
    let local = date.and_time(NaiveTime::MIN) + Duration::seconds(86_399);
    tz.from_local_datetime(&local)
        .latest()
        .map(|dt| dt.naive_utc())
        .unwrap_or(local)
}

/// Concrete start times of an event, at most `limit` of them.
///
/// Times are wall-clock, like the event itself. One-off events yield their
/// own start.
pub fn expand_occurrences(event: &EventDescriptor, limit: u16) -> RotaResult<Vec<NaiveDateTime>> {
    let rule = match &event.recurrence_rule {
        Some(r) => r,
        None => return Ok(vec![event.start]),
    };

    let rule = rule.strip_prefix("RRULE:").unwrap_or(rule);

    // Wall-clock times are treated as UTC so no offset shifts them
    let rrule_str = format!(
        "DTSTART:{}Z\nRRULE:{}",
        event.start.format("%Y%m%dT%H%M%S"),
        utc_until(rule, chrono_tz::UTC)
    );

    let rrule_set: RRuleSet = rrule_str.parse().map_err(|e| RotaError::InvalidRecurrence {
        title: event.title.clone(),
        reason: format!("Failed to parse RRULE: {}", e),
    })?;

    let result = rrule_set.all(limit);

    Ok(result.dates.iter().map(|dt| dt.naive_utc()).collect())
}

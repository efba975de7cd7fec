//! ICS file generation.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use icalendar::{Calendar, Component, EventLike, Property};

use crate::config::CalendarSettings;
use crate::error::RotaResult;
use crate::event::EventDescriptor;
use crate::recurrence::utc_until;
use crate::schedule::time::UTC_DATETIME_FORMAT;

const PRODID: &str = "-//rotacal//rotacal//EN";

/// Generate one .ics calendar holding every event.
///
/// Start and end carry the configured TZID, and a date-only `UNTIL` becomes
/// the end of that day in the same zone, written in UTC. `stamped_at` is when
/// the schedule was built, used for DTSTAMP so the output only depends on its
/// inputs.
pub fn generate_ics(
    events: &[EventDescriptor],
    settings: &CalendarSettings,
    stamped_at: DateTime<Utc>,
) -> RotaResult<String> {
    let tz = settings.tz()?;

    let dtstamp = stamped_at.format(UTC_DATETIME_FORMAT).to_string();

    let mut cal = Calendar::new();
    let mut uids = UidGenerator::default();

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&uids.next(event));
        ics_event.summary(&event.title);
        ics_event.add_property("DTSTAMP", &dtstamp);

        add_local_datetime_property(&mut ics_event, "DTSTART", &event.start, &settings.timezone);
        add_local_datetime_property(&mut ics_event, "DTEND", &event.end, &settings.timezone);

        if !event.description.is_empty() {
            ics_event.description(&event.description);
        }

        if !event.location.is_empty() {
            ics_event.location(&event.location);
        }

        if let Some(ref rule) = event.recurrence_rule {
            let rule = rule.strip_prefix("RRULE:").unwrap_or(rule);
            ics_event.add_property("RRULE", utc_until(rule, tz));
        }

        cal.push(ics_event.done());
    }

    let cal = cal.done();

    Ok(finish_ics(&cal.to_string(), settings))
}

/// Deterministic UIDs: title slug plus start, with a counter for repeats.
#[derive(Default)]
struct UidGenerator {
    seen: HashMap<String, usize>,
}

impl UidGenerator {
    fn next(&mut self, event: &EventDescriptor) -> String {
        let base = format!(
            "{}-{}",
            slug::slugify(&event.title),
            event.start.format("%Y%m%dT%H%M%S")
        );

        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            format!("{}@rotacal", base)
        } else {
            format!("{}-{}@rotacal", base, count)
        }
    }
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with our own
/// - Name the calendar and its timezone right after PRODID
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn finish_ics(ics: &str, settings: &CalendarSettings) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{}\r\n", PRODID));
            result.push_str(&format!("X-WR-CALNAME:{}\r\n", settings.name));
            result.push_str(&format!("X-WR-TIMEZONE:{}\r\n", settings.timezone));
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Add a wall-clock datetime with a TZID parameter
fn add_local_datetime_property(
    ics_event: &mut icalendar::Event,
    name: &str,
    datetime: &NaiveDateTime,
    tzid: &str,
) {
    let mut prop = Property::new(name, datetime.format("%Y%m%dT%H%M%S").to_string());
    prop.add_parameter("TZID", tzid);
    ics_event.append_property(prop);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use rrule::RRuleSet;

    fn make_test_settings() -> CalendarSettings {
        CalendarSettings {
            name: "Work Shifts".to_string(),
            timezone: "America/New_York".to_string(),
            creator_name: "Alice".to_string(),
            source: None,
        }
    }

    fn make_test_event() -> EventDescriptor {
        let date = NaiveDate::from_ymd_opt(2022, 5, 25).unwrap();
        EventDescriptor {
            title: "Resident shift".to_string(),
            location: "Main Hospital".to_string(),
            description: "Last updated".to_string(),
            start: date.and_hms_opt(7, 0, 0).unwrap(),
            end: date.and_hms_opt(17, 0, 0).unwrap(),
            recurrence_rule: None,
        }
    }

    fn stamped_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 5, 20, 13, 0, 0).unwrap()
    }

    #[test]
    fn test_generate_ics_uses_tzid_for_start_and_end() {
        let ics = generate_ics(&[make_test_event()], &make_test_settings(), stamped_at()).unwrap();

        assert!(
            ics.contains("DTSTART;TZID=America/New_York:20220525T070000"),
            "DTSTART should carry TZID. ICS:\n{}",
            ics
        );
        assert!(
            ics.contains("DTEND;TZID=America/New_York:20220525T170000"),
            "DTEND should carry TZID. ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_generate_ics_dtstamp_does_not_depend_on_calendar_timezone() {
        let mut settings = make_test_settings();
        let new_york = generate_ics(&[make_test_event()], &settings, stamped_at()).unwrap();
        settings.timezone = "Asia/Tokyo".to_string();
        let tokyo = generate_ics(&[make_test_event()], &settings, stamped_at()).unwrap();

        for ics in [&new_york, &tokyo] {
            assert!(
                ics.contains("DTSTAMP:20220520T130000Z"),
                "DTSTAMP should be the build instant in UTC. ICS:\n{}",
                ics
            );
        }
    }

    #[test]
    fn test_generate_ics_calendar_header() {
        let ics = generate_ics(&[], &make_test_settings(), stamped_at()).unwrap();

        assert!(ics.contains("PRODID:-//rotacal//rotacal//EN"));
        assert!(ics.contains("X-WR-CALNAME:Work Shifts"));
        assert!(ics.contains("X-WR-TIMEZONE:America/New_York"));
        assert!(!ics.contains("CALSCALE"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn test_generate_ics_recurring_event_has_rrule_line() {
        let mut event = make_test_event();
        event.recurrence_rule = Some("RRULE:FREQ=WEEKLY;BYDAY=MO;UNTIL=20221231".to_string());

        let ics = generate_ics(&[event], &make_test_settings(), stamped_at()).unwrap();

        let rrule_lines: Vec<&str> = ics.lines().filter(|l| l.starts_with("RRULE")).collect();
        assert_eq!(rrule_lines.len(), 1, "ICS:\n{}", ics);
        assert!(
            !rrule_lines[0].starts_with("RRULE:RRULE"),
            "Rule prefix should not be doubled: {}",
            rrule_lines[0]
        );
        assert!(rrule_lines[0].contains("FREQ=WEEKLY"));
    }

    #[test]
    fn test_generate_ics_recurring_event_parses_back() {
        let date = NaiveDate::from_ymd_opt(2022, 5, 4).unwrap();
        let mut event = make_test_event();
        event.start = date.and_hms_opt(13, 0, 0).unwrap();
        event.end = date.and_hms_opt(17, 0, 0).unwrap();
        event.recurrence_rule = Some("RRULE:FREQ=WEEKLY;BYDAY=MO,WE;UNTIL=20221231".to_string());

        let ics = generate_ics(&[event], &make_test_settings(), stamped_at()).unwrap();

        // 23:59:59 EST on Dec 31 is 04:59:59 UTC on Jan 1
        assert!(
            ics.contains("UNTIL=20230101T045959Z"),
            "UNTIL should be a UTC date-time. ICS:\n{}",
            ics
        );

        let rule_lines: Vec<&str> = ics
            .lines()
            .filter(|l| l.starts_with("DTSTART") || l.starts_with("RRULE"))
            .collect();
        let rrule_set: RRuleSet = rule_lines
            .join("\n")
            .parse()
            .unwrap_or_else(|e| panic!("rrule rejected {:?}: {}", rule_lines, e));

        let dates: Vec<String> = rrule_set
            .all(200)
            .dates
            .iter()
            .map(|dt| dt.naive_local().format("%Y-%m-%d %H:%M").to_string())
            .collect();
        assert_eq!(dates.first().map(String::as_str), Some("2022-05-04 13:00"));
        assert_eq!(dates.last().map(String::as_str), Some("2022-12-28 13:00"));
    }

    #[test]
    fn test_generate_ics_uids_are_unique_and_stable() {
        let events = vec![make_test_event(), make_test_event()];

        let first = generate_ics(&events, &make_test_settings(), stamped_at()).unwrap();
        let second = generate_ics(&events, &make_test_settings(), stamped_at()).unwrap();
        assert_eq!(first, second);

        let uids: Vec<&str> = first.lines().filter(|l| l.starts_with("UID:")).collect();
        assert_eq!(
            uids,
            vec![
                "UID:resident-shift-20220525T070000@rotacal",
                "UID:resident-shift-20220525T070000-2@rotacal",
            ]
        );
    }
}

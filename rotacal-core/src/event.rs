//! Event descriptors produced from the schedule.
//!
//! An `EventDescriptor` is the only output unit of the schedule pipeline.
//! Start and end are local wall-clock times; the timezone is attached later
//! by whoever creates the event.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Wire format for local date-times, e.g. `2022-05-28T09:00:00`.
pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A calendar event ready to be handed to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDescriptor {
    pub title: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "start_datetime", with = "local_datetime")]
    pub start: NaiveDateTime,
    #[serde(rename = "end_datetime", with = "local_datetime")]
    pub end: NaiveDateTime,
    /// Full rule line, e.g. `RRULE:FREQ=WEEKLY;BYDAY=MO,WE;UNTIL=20221231`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_rule: Option<String>,
}

impl EventDescriptor {
    pub fn start_datetime(&self) -> String {
        self.start.format(LOCAL_DATETIME_FORMAT).to_string()
    }

    pub fn end_datetime(&self) -> String {
        self.end.format(LOCAL_DATETIME_FORMAT).to_string()
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence_rule.is_some()
    }
}

impl fmt::Display for EventDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

mod local_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::LOCAL_DATETIME_FORMAT;

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.format(LOCAL_DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, LOCAL_DATETIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

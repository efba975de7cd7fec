//! Google Calendar API request bodies.
//!
//! Only the fields rotacal fills in are modelled. Field names follow the
//! Calendar v3 JSON representation.

use serde::{Deserialize, Serialize};

/// Body of `events.insert`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEvent {
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub start: GoogleEventDateTime,
    pub end: GoogleEventDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<GoogleCreator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<GoogleSource>,
    /// RRULE lines, passed through verbatim
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recurrence: Vec<String>,
}

/// Local wall-clock time plus the IANA zone it is in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEventDateTime {
    pub date_time: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCreator {
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleSource {
    pub title: String,
    pub url: String,
}

/// Body of `calendars.insert`, used when the target calendar does not exist yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCalendar {
    pub summary: String,
    pub time_zone: String,
}

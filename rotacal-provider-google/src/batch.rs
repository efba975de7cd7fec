//! Request bodies for creating a whole schedule in one go.

use rotacal_core::config::CalendarSettings;
use rotacal_core::event::EventDescriptor;
use serde::{Deserialize, Serialize};

use crate::convert::ToGoogle;
use crate::types::{GoogleCalendar, GoogleEvent};

/// The calendar to create (if missing) and the events to insert into it, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertBatch {
    pub calendar: GoogleCalendar,
    pub events: Vec<GoogleEvent>,
}

impl InsertBatch {
    pub fn new(settings: &CalendarSettings, events: &[EventDescriptor]) -> Self {
        InsertBatch {
            calendar: GoogleCalendar {
                summary: settings.name.clone(),
                time_zone: settings.timezone.clone(),
            },
            events: events.iter().map(|e| e.to_google(settings)).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

use rotacal_core::config::{CalendarSettings, SourceAttribution};
use rotacal_core::event::EventDescriptor;

use super::ToGoogle;
use crate::types::{GoogleCreator, GoogleEvent, GoogleEventDateTime, GoogleSource};

impl ToGoogle<GoogleEvent> for EventDescriptor {
    fn to_google(&self, settings: &CalendarSettings) -> GoogleEvent {
        let start = GoogleEventDateTime {
            date_time: self.start_datetime(),
            time_zone: settings.timezone.clone(),
        };
        let end = GoogleEventDateTime {
            date_time: self.end_datetime(),
            time_zone: settings.timezone.clone(),
        };

        let creator = if settings.creator_name.is_empty() {
            None
        } else {
            Some(GoogleCreator {
                display_name: settings.creator_name.clone(),
            })
        };

        let recurrence = self.recurrence_rule.iter().cloned().collect();

        GoogleEvent {
            summary: self.title.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            start,
            end,
            creator,
            source: settings.source.as_ref().map(source_to_google),
            recurrence,
        }
    }
}

fn source_to_google(source: &SourceAttribution) -> GoogleSource {
    GoogleSource {
        title: source.title.clone(),
        url: source.url.clone(),
    }
}

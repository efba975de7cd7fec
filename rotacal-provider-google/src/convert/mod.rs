mod to_google;

use rotacal_core::config::CalendarSettings;

/// Convert to Google API types from rotacal types
pub trait ToGoogle<T> {
    fn to_google(&self, settings: &CalendarSettings) -> T;
}

//! Settings for the calendar that receives the generated events.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{RotaError, RotaResult};

static DEFAULT_TIMEZONE: &str = "UTC";

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

/// The `[calendar]` table of the config file.
///
/// Passed explicitly to anything that stamps or exports events; nothing reads
/// these values from global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSettings {
    /// Calendar to create the events in
    pub name: String,

    /// IANA timezone attached to every start/end time
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Name used in the "Last updated by ..." description stamp
    pub creator_name: String,

    #[serde(default)]
    pub source: Option<SourceAttribution>,
}

/// Where the events came from (shown by Google Calendar as the event source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAttribution {
    pub title: String,
    pub url: String,
}

impl CalendarSettings {
    pub fn tz(&self) -> RotaResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| RotaError::Config(format!("Unknown timezone '{}'", self.timezone)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_defaults_to_utc() {
        let settings: CalendarSettings = toml::from_str(
            r#"
            name = "Shifts"
            creator_name = "Alice"
            "#,
        )
        .unwrap();

        assert_eq!(settings.timezone, "UTC");
        assert_eq!(settings.tz().unwrap(), chrono_tz::UTC);
        assert!(settings.source.is_none());
    }

    #[test]
    fn test_unknown_timezone_is_config_error() {
        let settings = CalendarSettings {
            name: "Shifts".to_string(),
            timezone: "Mars/Olympus_Mons".to_string(),
            creator_name: "Alice".to_string(),
            source: None,
        };

        let err = settings.tz().unwrap_err();
        assert!(matches!(err, RotaError::Config(_)), "got {:?}", err);
    }
}

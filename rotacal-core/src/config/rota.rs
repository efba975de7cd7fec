//! The rotacal config file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::CalendarSettings;
use crate::error::{RotaError, RotaResult};
use crate::schedule::time::{parse_clock_time, parse_config_date};

/// Environment variable pointing at the directory holding config.toml and the workbook
pub const ROTACAL_PATH_ENV: &str = "ROTACAL_PATH";

static CONFIG_FILE_NAME: &str = "config.toml";

/// How a role found in column 0 of the sheet becomes an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleInfo {
    pub title: String,
    pub location: String,
    /// `HH:MM AM/PM`
    pub start_time: String,
    /// `HH:MM AM/PM`
    pub end_time: String,
}

/// A weekly event defined directly in the config instead of the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringScheduleEntry {
    pub title: String,
    pub location: String,
    /// Full English weekday names; order is kept for BYDAY
    pub days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    /// `MM/DD/YYYY`
    pub start_date: String,
    /// `MM/DD/YYYY`
    pub end_date: String,
}

/// Everything read from config.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotaConfig {
    /// Workbook path, relative to the config directory unless absolute
    pub file_name: String,

    /// Sheets to scan, in order. Empty means every sheet in workbook order.
    #[serde(default)]
    pub sheets: Vec<String>,

    /// Cell values that mark a shift as yours
    pub aliases: Vec<String>,

    pub calendar: CalendarSettings,

    #[serde(default)]
    pub role_info: BTreeMap<String, RoleInfo>,

    #[serde(default)]
    pub recurring_schedules: Vec<RecurringScheduleEntry>,
}

impl RotaConfig {
    pub fn from_toml_str(content: &str) -> RotaResult<Self> {
        let config: RotaConfig =
            toml::from_str(content).map_err(|e| RotaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> RotaResult<Self> {
        if !path.exists() {
            return Err(RotaError::Config(format!(
                "Config file not found at {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Default config location: `$ROTACAL_PATH/config.toml`, falling back to
    /// the platform config directory (`~/.config/rotacal/config.toml` on Linux).
    pub fn default_path() -> RotaResult<PathBuf> {
        if let Ok(dir) = std::env::var(ROTACAL_PATH_ENV) {
            return Ok(expand_path(&dir).join(CONFIG_FILE_NAME));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| RotaError::Config("Could not determine config directory".into()))?
            .join("rotacal");

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// Workbook path, resolved against the directory the config was loaded from.
    pub fn workbook_path(&self, config_dir: &Path) -> PathBuf {
        let path = expand_path(&self.file_name);
        if path.is_absolute() {
            path
        } else {
            config_dir.join(path)
        }
    }

    /// Check the values that would otherwise only fail halfway through a run.
    pub fn validate(&self) -> RotaResult<()> {
        if self.aliases.iter().all(|a| a.trim().is_empty()) {
            return Err(RotaError::Config(
                "At least one alias is required to find your shifts".into(),
            ));
        }

        self.calendar.tz()?;

        for (role, info) in &self.role_info {
            if info.title.trim().is_empty() {
                return Err(RotaError::Config(format!("Role '{}' has an empty title", role)));
            }
            parse_clock_time(&info.start_time)?;
            parse_clock_time(&info.end_time)?;
        }

        for entry in &self.recurring_schedules {
            if entry.title.trim().is_empty() {
                return Err(RotaError::Config(
                    "Recurring schedule with an empty title".into(),
                ));
            }
            parse_clock_time(&entry.start_time)?;
            parse_clock_time(&entry.end_time)?;
            parse_config_date(&entry.start_date)?;
            parse_config_date(&entry.end_date)?;
        }

        Ok(())
    }
}

/// Expand `~` and environment variables in a path.
pub fn expand_path(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
file_name = "schedule.xlsx"
sheets = ["May", "June"]
aliases = ["Alice", "A. Smith"]

[calendar]
name = "Work Shifts"
timezone = "America/New_York"
creator_name = "Alice"

[calendar.source]
title = "Shift schedule"
url = "https://example.com/schedule.xlsx"

[role_info.Resident]
title = "Resident shift"
location = "Main Hospital"
start_time = "07:00 AM"
end_time = "05:00 PM"

[role_info.Night]
title = "Night float"
location = "Main Hospital"
start_time = "07:00 PM"
end_time = "07:00 AM"

[[recurring_schedules]]
title = "Clinic"
location = "Clinic B"
days = ["Wednesday", "Monday"]
start_time = "01:00 PM"
end_time = "05:00 PM"
start_date = "05/02/2022"
end_date = "12/31/2022"
"#;

    #[test]
    fn test_parse_sample_config() {
        let config = RotaConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.file_name, "schedule.xlsx");
        assert_eq!(config.sheets, vec!["May", "June"]);
        assert_eq!(config.aliases, vec!["Alice", "A. Smith"]);
        assert_eq!(config.calendar.timezone, "America/New_York");
        assert_eq!(
            config.calendar.source.as_ref().map(|s| s.title.as_str()),
            Some("Shift schedule")
        );
        assert_eq!(config.role_info.len(), 2);
        assert_eq!(config.role_info["Resident"].start_time, "07:00 AM");

        // Day order is preserved as written
        assert_eq!(
            config.recurring_schedules[0].days,
            vec!["Wednesday", "Monday"]
        );
    }

    #[test]
    fn test_optional_tables_default_to_empty() {
        let config = RotaConfig::from_toml_str(
            r#"
            file_name = "schedule.xlsx"
            aliases = ["Alice"]

            [calendar]
            name = "Shifts"
            creator_name = "Alice"
            "#,
        )
        .unwrap();

        assert!(config.sheets.is_empty());
        assert!(config.role_info.is_empty());
        assert!(config.recurring_schedules.is_empty());
    }

    #[test]
    fn test_empty_role_title_is_rejected() {
        let content = SAMPLE.replace("title = \"Night float\"", "title = \"  \"");
        let err = RotaConfig::from_toml_str(&content).unwrap_err();
        assert!(
            err.to_string().contains("Role 'Night' has an empty title"),
            "got: {}",
            err
        );
    }

    #[test]
    fn test_bad_time_is_rejected_up_front() {
        let content = SAMPLE.replace("\"07:00 PM\"", "\"19:00\"");
        let err = RotaConfig::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, RotaError::InvalidTime { .. }), "got {:?}", err);
    }

    #[test]
    fn test_bad_recurring_date_is_rejected_up_front() {
        let content = SAMPLE.replace("\"12/31/2022\"", "\"2022-12-31\"");
        let err = RotaConfig::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, RotaError::InvalidDate { .. }), "got {:?}", err);
    }

    #[test]
    fn test_missing_aliases_is_rejected() {
        let content = SAMPLE.replace("aliases = [\"Alice\", \"A. Smith\"]", "aliases = []");
        let err = RotaConfig::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, RotaError::Config(_)), "got {:?}", err);
    }

    #[test]
    fn test_workbook_path_is_relative_to_config_dir() {
        let config = RotaConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(
            config.workbook_path(Path::new("/srv/rota")),
            PathBuf::from("/srv/rota/schedule.xlsx")
        );

        let mut absolute = config.clone();
        absolute.file_name = "/data/shifts.xlsx".to_string();
        assert_eq!(
            absolute.workbook_path(Path::new("/srv/rota")),
            PathBuf::from("/data/shifts.xlsx")
        );
    }
}

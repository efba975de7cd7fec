//! Everything a command needs: the config, the loaded workbook and the time
//! the run started.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;
use rotacal_core::config::RotaConfig;
use rotacal_core::event::EventDescriptor;
use rotacal_core::grid::Grid;
use rotacal_core::schedule::build_schedule;
use tracing::info;

use crate::render::failure_hint;
use crate::workbook;

pub struct Session {
    pub config: RotaConfig,
    pub grid: Grid,
    /// When the run started
    pub now: DateTime<Local>,
}

impl Session {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => RotaConfig::default_path()?,
        };

        let config = load_config(&path)?;

        let config_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let workbook_path = config.workbook_path(&config_dir);
        info!(workbook = %workbook_path.display(), "loading workbook");

        let grid = workbook::load_grid(&workbook_path, &config.sheets)?;

        Ok(Session {
            config,
            grid,
            now: Local::now(),
        })
    }

    /// The run's start instant, for DTSTAMP.
    pub fn stamped_at(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }

    /// Build the full schedule; nothing is returned if any entry is invalid.
    pub fn schedule(&self) -> Result<Vec<EventDescriptor>> {
        match build_schedule(&self.grid, &self.config, self.now.naive_local()) {
            Ok(events) => Ok(events),
            Err(err) => {
                if let Some(hint) = failure_hint(&err) {
                    eprintln!("{} {}", "hint:".yellow(), hint);
                }
                Err(anyhow::Error::new(err).context("Schedule is invalid, no events were produced"))
            }
        }
    }
}

fn load_config(path: &Path) -> Result<RotaConfig> {
    if !path.exists() {
        anyhow::bail!(
            "Config file not found at {}\n\n\
            Create it next to your schedule workbook:\n\n\
            file_name = \"schedule.xlsx\"\n\
            aliases = [\"Your Name\"]\n\n\
            [calendar]\n\
            name = \"Shifts\"\n\
            timezone = \"America/New_York\"\n\
            creator_name = \"Your Name\"\n\n\
            [role_info.Resident]\n\
            title = \"Resident shift\"\n\
            location = \"Main Hospital\"\n\
            start_time = \"07:00 AM\"\n\
            end_time = \"05:00 PM\"\n\n\
            Or point ROTACAL_PATH at the directory holding config.toml.",
            path.display()
        );
    }

    let config = RotaConfig::load(path)
        .with_context(|| format!("Failed to load config file at {}", path.display()))?;

    Ok(config)
}

//! From a loaded grid and config to the full list of events.
//!
//! Grid-derived events come first (sheet order, then row-major), followed by
//! the recurring schedules in config order. Any failure aborts the whole run,
//! so callers never see a partial schedule.

pub mod assemble;
pub mod resolve;
pub mod scan;
pub mod stamp;
pub mod time;
pub mod weekday;

use chrono::NaiveDateTime;
use tracing::info;

use crate::config::RotaConfig;
use crate::error::RotaResult;
use crate::event::EventDescriptor;
use crate::grid::Grid;
use crate::recurrence::RecurrenceBuilder;

pub use assemble::EventAssembler;
pub use scan::{Assignment, GridScanner};
pub use stamp::UpdateStamp;

/// Events for every alias match in the grid.
pub fn grid_events(
    grid: &Grid,
    config: &RotaConfig,
    stamp: &UpdateStamp,
) -> RotaResult<Vec<EventDescriptor>> {
    let scanner = GridScanner::new(grid, &config.aliases);
    let assembler = EventAssembler::new(&config.role_info, stamp);

    scanner
        .scan()
        .map(|assignment| assembler.assemble(&assignment?))
        .collect()
}

/// Events for the config's recurring schedules.
pub fn recurring_events(
    config: &RotaConfig,
    stamp: &UpdateStamp,
) -> RotaResult<Vec<EventDescriptor>> {
    RecurrenceBuilder::new(stamp).build_all(&config.recurring_schedules)
}

/// The complete schedule, stamped as generated by the configured creator at `now`.
pub fn build_schedule(
    grid: &Grid,
    config: &RotaConfig,
    now: NaiveDateTime,
) -> RotaResult<Vec<EventDescriptor>> {
    let stamp = UpdateStamp::new(&config.calendar.creator_name, now);

    let mut events = grid_events(grid, config, &stamp)?;
    let shift_count = events.len();

    events.extend(recurring_events(config, &stamp)?);

    info!(
        shifts = shift_count,
        recurring = events.len() - shift_count,
        "built schedule"
    );

    Ok(events)
}

//! Configuration types for rotacal.

mod calendar;
mod rota;

pub use calendar::{CalendarSettings, SourceAttribution};
pub use rota::{RecurringScheduleEntry, RoleInfo, RotaConfig};

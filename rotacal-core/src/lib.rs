//! Core types for rotacal.
//!
//! This crate turns a shift spreadsheet, already loaded into a [`grid::Grid`],
//! plus the config file into calendar [`event::EventDescriptor`]s:
//! - `schedule` finds your shifts in the grid and dates them
//! - `recurrence` builds weekly events from the config
//! - `ics` exports the result as an .ics file

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod ics;
pub mod recurrence;
pub mod schedule;

pub use error::{RotaError, RotaResult};
pub use event::EventDescriptor;
pub use schedule::build_schedule;

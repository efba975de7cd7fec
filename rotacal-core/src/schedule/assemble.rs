use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::RoleInfo;
use crate::error::{RotaError, RotaResult};
use crate::event::EventDescriptor;
use crate::schedule::scan::Assignment;
use crate::schedule::stamp::UpdateStamp;
use crate::schedule::time::parse_clock_time;

/// Turns assignments into events using the configured roles.
pub struct EventAssembler<'a> {
    roles: &'a BTreeMap<String, RoleInfo>,
    stamp: &'a UpdateStamp,
}

impl<'a> EventAssembler<'a> {
    pub fn new(roles: &'a BTreeMap<String, RoleInfo>, stamp: &'a UpdateStamp) -> Self {
        EventAssembler { roles, stamp }
    }

    pub fn assemble(&self, assignment: &Assignment) -> RotaResult<EventDescriptor> {
        let info = self
            .roles
            .get(&assignment.role)
            .ok_or_else(|| RotaError::UnknownRole {
                role: assignment.role.clone(),
                cell: assignment.cell.clone(),
            })?;

        timed_event(
            &info.title,
            &info.location,
            self.stamp,
            assignment.date,
            &info.start_time,
            &info.end_time,
        )
    }
}

/// Build a one-day event from config time strings.
///
/// An end time at or before the start time is kept as written.
pub(crate) fn timed_event(
    title: &str,
    location: &str,
    stamp: &UpdateStamp,
    date: NaiveDate,
    start_time: &str,
    end_time: &str,
) -> RotaResult<EventDescriptor> {
    let start = date.and_time(parse_clock_time(start_time)?);
    let end = date.and_time(parse_clock_time(end_time)?);

    Ok(EventDescriptor {
        title: title.to_string(),
        location: location.to_string(),
        description: stamp.description(),
        start,
        end,
        recurrence_rule: None,
    })
}

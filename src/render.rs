//! TUI rendering traits for rotacal types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to rotacal-core types using owo_colors.

use owo_colors::OwoColorize;
use rotacal_core::error::RotaError;
use rotacal_core::event::EventDescriptor;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventDescriptor {
    fn render(&self) -> String {
        let time = format!(
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        );

        let mut line = format!("{} {}", time, self.title.bold());

        if !self.location.is_empty() {
            line.push_str(&format!(" {}", format!("@ {}", self.location).dimmed()));
        }

        if let Some(ref rule) = self.recurrence_rule {
            line.push_str(&format!(" {}", describe_rule(rule).cyan()));
        }

        line
    }
}

/// Short label for a weekly rule, e.g. "weekly MO,WE until 20221231"
fn describe_rule(rule: &str) -> String {
    let rule = rule.strip_prefix("RRULE:").unwrap_or(rule);

    let mut by_day = None;
    let mut until = None;
    for part in rule.split(';') {
        if let Some(v) = part.strip_prefix("BYDAY=") {
            by_day = Some(v);
        } else if let Some(v) = part.strip_prefix("UNTIL=") {
            until = Some(v);
        }
    }

    match (by_day, until) {
        (Some(days), Some(until)) => format!("(weekly {} until {})", days, until),
        (Some(days), None) => format!("(weekly {})", days),
        _ => format!("({})", rule),
    }
}

/// Date heading for a group of events, e.g. "Wed May 25"
pub fn date_label(event: &EventDescriptor) -> String {
    event.start.format("%a %b %-d %Y").to_string()
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// One-line hint about where in the sheet a failure came from
pub fn failure_hint(err: &RotaError) -> Option<String> {
    match err {
        RotaError::DateNotFound { cell } => Some(format!(
            "Add a MM/DD/YYYY date somewhere above {} in the same column",
            cell
        )),
        RotaError::DayMismatch { expected, .. } => Some(format!(
            "The cell above the date should read '{}'",
            expected
        )),
        RotaError::UnknownRole { role, .. } => Some(format!(
            "Add a [role_info.\"{}\"] table to the config",
            role
        )),
        _ => None,
    }
}

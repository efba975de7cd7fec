use anyhow::Result;
use owo_colors::OwoColorize;
use rotacal_core::recurrence::expand_occurrences;

use crate::render::Render;
use crate::session::Session;

/// Print the concrete dates each recurring schedule expands to.
pub fn run(session: &Session, limit: u16) -> Result<()> {
    let events = session.schedule()?;
    let recurring: Vec<_> = events.iter().filter(|e| e.is_recurring()).collect();

    if recurring.is_empty() {
        println!("{}", "No recurring schedules configured".dimmed());
        return Ok(());
    }

    for (i, event) in recurring.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", event.render());

        let occurrences = expand_occurrences(event, limit)?;
        for start in &occurrences {
            println!("  {}", start.format("%a %b %-d %Y %H:%M"));
        }
        if occurrences.len() == limit as usize {
            println!("  {}", "...".dimmed());
        }
    }

    Ok(())
}

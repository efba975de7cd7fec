use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::render::{Render, date_label};
use crate::session::Session;

pub fn run(session: &Session, json: bool) -> Result<()> {
    let events = session.schedule()?;

    if json {
        let output = serde_json::to_string_pretty(&events).context("Failed to serialize events")?;
        println!("{}", output);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Events stay in schedule order; a new heading starts whenever the date changes
    let mut current_date: Option<String> = None;

    for event in &events {
        let label = date_label(event);

        if current_date.as_ref() != Some(&label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", label.bold());
            current_date = Some(label);
        }

        println!("  {}", event.render());
    }

    Ok(())
}

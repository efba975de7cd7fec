use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use rotacal_core::ics::generate_ics;

use super::write_output;
use crate::render::pluralize;
use crate::session::Session;

pub fn run(session: &Session, output: &Path) -> Result<()> {
    let events = session.schedule()?;

    let ics = generate_ics(&events, &session.config.calendar, session.stamped_at())?;
    write_output(Some(output), &ics)?;

    println!(
        "{} Wrote {} {} to {}",
        "✓".green(),
        events.len(),
        pluralize("event", events.len()),
        output.display()
    );

    Ok(())
}

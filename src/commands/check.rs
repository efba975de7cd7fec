use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::pluralize;
use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    let events = session.schedule()?;

    let recurring = events.iter().filter(|e| e.is_recurring()).count();
    let shifts = events.len() - recurring;
    let sheets = session.grid.sheets.len();

    println!(
        "{} {} {} across {} {}, {} recurring {}",
        "✓".green(),
        shifts,
        pluralize("shift", shifts),
        sheets,
        pluralize("sheet", sheets),
        recurring,
        pluralize("schedule", recurring),
    );

    Ok(())
}

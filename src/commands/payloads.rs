use std::path::Path;

use anyhow::{Context, Result};
use rotacal_provider_google::InsertBatch;
use tracing::info;

use super::write_output;
use crate::session::Session;

pub fn run(session: &Session, output: Option<&Path>) -> Result<()> {
    let events = session.schedule()?;

    let batch = InsertBatch::new(&session.config.calendar, &events);
    let json = batch
        .to_json()
        .context("Failed to serialize Google Calendar payloads")?;

    info!(events = batch.events.len(), calendar = %batch.calendar.summary, "built insert batch");

    write_output(output, &json)
}

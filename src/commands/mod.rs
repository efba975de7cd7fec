pub mod check;
pub mod events;
pub mod export;
pub mod payloads;
pub mod preview;

use std::path::Path;

use anyhow::{Context, Result};

/// Write to `output`, or stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

//! ICS export.
//!
//! Writes the generated schedule as a single .ics file (RFC 5545) for
//! calendars that import files instead of taking API calls.

mod generate;

pub use generate::generate_ics;

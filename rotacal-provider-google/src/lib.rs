//! rotacal-provider-google - Google Calendar payloads for rotacal
//!
//! Converts event descriptors into Calendar v3 request bodies. Sending them
//! (and the OAuth flow that requires) is left to the caller.

pub mod batch;
pub mod convert;
pub mod types;

pub use batch::InsertBatch;
pub use convert::ToGoogle;

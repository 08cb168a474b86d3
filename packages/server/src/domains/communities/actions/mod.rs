//! Community actions - the server-side operations behind the API.
//!
//! Each action takes the pool explicitly, logs a diagnostic at its boundary
//! on failure, and propagates the error unchanged.

pub mod mutations;
pub mod queries;

pub use mutations::*;
pub use queries::*;

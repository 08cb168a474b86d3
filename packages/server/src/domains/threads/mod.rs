//! Threads domain - posts inside communities and their replies.

pub mod data;
pub mod models;

pub use models::*;

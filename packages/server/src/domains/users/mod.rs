//! Users domain - the people who create communities, join them, and post.

pub mod data;
pub mod models;

pub use models::*;

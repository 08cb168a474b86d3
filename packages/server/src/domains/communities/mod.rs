//! Communities domain - creating communities, membership, and the directory.

pub mod actions;
pub mod data;
pub mod error;
pub mod models;

pub use error::CommunityError;
pub use models::*;

// Community Hub - API Core
//
// This crate provides the backend API for social communities: creating
// communities, resolving their creators/members/threads, and searching
// the community directory.
//
// SQL lives in domains/*/models, GraphQL types in domains/*/data, and
// operations in domains/*/actions.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;

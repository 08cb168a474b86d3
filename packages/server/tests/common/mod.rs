// Shared test infrastructure: container harness, data fixtures, and an
// in-process GraphQL client.

pub mod fixtures;
pub mod graphql;
pub mod harness;

pub use fixtures::*;
pub use graphql::*;
pub use harness::*;

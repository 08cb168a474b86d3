//! In-process GraphQL client for integration tests.
//!
//! Runs operations straight against the schema, no HTTP in between.

use serde_json::Value;
use server_core::server::graphql::{create_schema, GraphQLContext, Schema};
use sqlx::PgPool;

pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// Outcome of one GraphQL operation: serialized data plus any field errors.
#[derive(Debug)]
pub struct GraphQLResponse {
    pub data: Value,
    pub errors: Vec<String>,
}

impl GraphQLResponse {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl GraphQLClient {
    pub fn new(pool: PgPool) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::new(pool),
        }
    }

    /// Run an operation, keeping field errors in the response.
    pub async fn execute(&self, operation: &str) -> GraphQLResponse {
        let (data, errors) = juniper::execute(
            operation,
            None,
            &self.schema,
            &juniper::Variables::new(),
            &self.context,
        )
        .await
        .expect("GraphQL execution failed");

        GraphQLResponse {
            data: serde_json::to_value(&data).expect("GraphQL value is not valid JSON"),
            errors: errors
                .iter()
                .map(|e| e.error().message().to_string())
                .collect(),
        }
    }

    /// Run an operation that must succeed; panics on any field error.
    pub async fn query(&self, operation: &str) -> Value {
        let response = self.execute(operation).await;
        if !response.is_ok() {
            panic!("GraphQL errors: {:?}", response.errors);
        }
        response.data
    }
}

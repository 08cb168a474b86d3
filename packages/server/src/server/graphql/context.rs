use sqlx::PgPool;

/// GraphQL request context
///
/// Contains shared resources available to all resolvers.
#[derive(Clone)]
pub struct GraphQLContext {
    pub pool: PgPool,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

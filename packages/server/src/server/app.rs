//! Router assembly: GraphQL endpoint, health check, and middleware.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::routes::{graphql_handler, health_handler};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Attach a fresh `GraphQLContext` to each incoming request.
async fn attach_graphql_context(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    request
        .extensions_mut()
        .insert(GraphQLContext::new(state.db_pool.clone()));
    next.run(request).await
}

/// Assemble the application router around a database pool.
///
/// The schema is built once and shared; the GraphiQL playground is only
/// mounted in debug builds.
pub fn build_app(pool: PgPool) -> Router {
    let schema = Arc::new(create_schema());
    let app_state = AppState { db_pool: pool };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let mut router = Router::new().route("/graphql", post(graphql_handler));

    #[cfg(debug_assertions)]
    {
        use crate::server::routes::graphql_playground;
        router = router.route("/graphql", get(graphql_playground));
    }

    router
        .route("/health", get(health_handler))
        .layer(middleware::from_fn(attach_graphql_context))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

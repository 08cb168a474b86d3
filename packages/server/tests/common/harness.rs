//! Testcontainers harness for integration tests.
//!
//! One Postgres container serves the whole test run; every harness carves
//! out its own database inside it and migrates that, so concurrent tests
//! never see each other's rows.

use anyhow::{Context, Result};
use sqlx::PgPool;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use uuid::Uuid;

use super::GraphQLClient;

/// The container shared by every test in the run.
struct SharedPostgres {
    base_url: String,
    // Dropping this would stop the container
    _container: ContainerAsync<Postgres>,
}

static SHARED_POSTGRES: OnceCell<SharedPostgres> = OnceCell::const_new();

impl SharedPostgres {
    /// Boot the container. Runs once, on whichever test gets here first.
    async fn start() -> Result<Self> {
        // Honor RUST_LOG during test runs; try_init because another test
        // binary section may have installed a subscriber already
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let container = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("starting Postgres container")?;

        let host = container.get_host().await?;
        let port = container.get_host_port_ipv4(5432).await?;

        Ok(Self {
            base_url: format!("postgresql://postgres:postgres@{}:{}", host, port),
            _container: container,
        })
    }

    async fn get() -> &'static Self {
        SHARED_POSTGRES
            .get_or_init(|| async { Self::start().await.expect("shared Postgres failed to start") })
            .await
    }
}

/// Per-test context: a pool onto a database only this test touches.
///
/// ```ignore
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let client = ctx.graphql();
/// }
/// ```
pub struct TestHarness {
    pub db_pool: PgPool,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("test harness setup failed")
    }

    async fn teardown(self) {
        // The throwaway database dies with the container at the end of
        // the run; nothing to clean up per test
    }
}

impl TestHarness {
    /// Carve a fresh database out of the shared container and migrate it.
    pub async fn new() -> Result<Self> {
        let shared = SharedPostgres::get().await;

        let db_name = format!("test_{}", Uuid::new_v4().simple());

        let admin = PgPool::connect(&format!("{}/postgres", shared.base_url))
            .await
            .context("connecting to the admin database")?;
        sqlx::query(&format!(r#"CREATE DATABASE "{}""#, db_name))
            .execute(&admin)
            .await
            .context("creating the per-test database")?;
        admin.close().await;

        let db_pool = PgPool::connect(&format!("{}/{}", shared.base_url, db_name))
            .await
            .context("connecting to the per-test database")?;

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("migrating the per-test database")?;

        Ok(Self { db_pool })
    }

    /// An in-process GraphQL client over this test's database.
    pub fn graphql(&self) -> GraphQLClient {
        GraphQLClient::new(self.db_pool.clone())
    }
}

use std::time::{Duration, Instant};

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

const DB_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
pub struct HealthReport {
    healthy: bool,
    database: DatabaseProbe,
    pool: PoolStats,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DatabaseProbe {
    Ok { latency_ms: u64 },
    Error { detail: String },
}

#[derive(Serialize)]
pub struct PoolStats {
    connections: u32,
    idle: usize,
}

/// Health check endpoint
///
/// Probes the database with a trivial query and reports pool utilization.
/// 200 when the probe succeeds within the timeout, 503 otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthReport>) {
    let started = Instant::now();
    let probe = tokio::time::timeout(
        DB_PROBE_TIMEOUT,
        sqlx::query("SELECT 1").execute(&state.db_pool),
    )
    .await;

    let database = match probe {
        Ok(Ok(_)) => DatabaseProbe::Ok {
            latency_ms: started.elapsed().as_millis() as u64,
        },
        Ok(Err(e)) => DatabaseProbe::Error {
            detail: e.to_string(),
        },
        Err(_) => DatabaseProbe::Error {
            detail: format!("probe timed out after {:?}", DB_PROBE_TIMEOUT),
        },
    };

    let healthy = matches!(database, DatabaseProbe::Ok { .. });
    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let report = HealthReport {
        healthy,
        database,
        pool: PoolStats {
            connections: state.db_pool.size(),
            idle: state.db_pool.num_idle(),
        },
    };

    (code, Json(report))
}

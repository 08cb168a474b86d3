use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Required.
    pub database_url: String,
    /// Listen port. Defaults to 8080.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // A .env file is a development convenience; absence is fine
        let _ = dotenv();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a valid port number")?,
            Err(_) => 8080,
        };

        Ok(Self { database_url, port })
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment};
use serde::Deserialize;

/// Runtime settings, read from `TRIVIA_*` environment variables (a `.env`
/// file is honoured) on top of built-in defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_source(Environment::with_prefix("TRIVIA").try_parsing(true))
    }

    fn from_source(env: Environment) -> anyhow::Result<Self> {
        Config::builder()
            .set_default("db_path", "trivia.db")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .add_source(env)
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

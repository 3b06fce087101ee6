use anyhow::{Context, Result};
use std::time::Duration;
use storage::BackendConfig;

const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub backend_api_key: String,
    pub backend_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend_timeout_secs = match var("BACKEND_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .context("BACKEND_TIMEOUT_SECS must be a number of seconds")?,
            None => DEFAULT_BACKEND_TIMEOUT_SECS,
        };

        Ok(Self {
            host: var("HOST").context("Cannot load HOST env variable")?,
            port: var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            backend_url: var("BACKEND_URL").context("Cannot load BACKEND_URL env variable")?,
            backend_api_key: var("BACKEND_API_KEY")
                .context("Cannot load BACKEND_API_KEY env variable")?,
            backend_timeout: Duration::from_secs(backend_timeout_secs),
        })
    }

    pub fn backend(&self) -> BackendConfig {
        BackendConfig {
            timeout: self.backend_timeout,
            ..BackendConfig::new(&self.backend_url, &self.backend_api_key)
        }
    }
}

//! # configs
//!
//! Typed configuration for Clipshelf binaries. Layering, lowest to
//! highest precedence: built-in defaults, an optional `clipshelf.toml`
//! next to the working directory, then `CLIPSHELF_*` environment
//! variables (with `.env` loaded first via dotenvy).

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Where the JSON store lives on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub store_file: String,
}

impl StoreConfig {
    /// Loads the configuration with the standard layering. Call once at
    /// binary startup.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env is the normal case outside development.
        if dotenvy::dotenv().is_ok() {
            tracing::debug!("loaded environment from .env");
        }

        let settings = config::Config::builder()
            .set_default("data_dir", "./data")?
            .set_default("store_file", "store.json")?
            .add_source(config::File::with_name("clipshelf").required(false))
            .add_source(config::Environment::with_prefix("CLIPSHELF"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Full path of the backing store file.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.store_file)
    }
}

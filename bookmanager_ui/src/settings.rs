use anyhow::Context;
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
pub struct Settings {
    /// Base url of the remote book api, endpoints are appended to it
    pub base_url: String,
}

impl Settings {
    /// Loads `bookmanager.toml` from the working directory if present,
    /// `BOOKMANAGER_BASE_URL` overrides it
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from("bookmanager")
    }

    pub fn load_from(file_name: &str) -> anyhow::Result<Self> {
        Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .add_source(File::with_name(file_name).required(false))
            .add_source(Environment::with_prefix("BOOKMANAGER"))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}

use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    pub const DEFAULT_PATH: &'static str = "config/Dashboard.toml";
    pub const ENV_PREFIX: &'static str = "BIZDASH_";

    /// Loads configuration from the default TOML location.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> Result<AppConfig> {
        Self::load_from(Self::DEFAULT_PATH)
    }

    /// Loads application configuration by merging built-in defaults, a TOML file,
    /// environment variables, and an optional JSON file.
    ///
    /// Missing files are skipped. Nested keys in the environment are separated by
    /// `__`, e.g. `BIZDASH_FORECAST__STRATEGY=linear`.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or a value has the wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig> {
        let config: AppConfig = Self::figment(path.as_ref()).extract()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(Self::ENV_PREFIX).split("__"))
            .join(Json::file(path.with_extension("json")))
    }
}

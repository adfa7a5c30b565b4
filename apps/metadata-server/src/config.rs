//! Application configuration.
//!
//! Layered: defaults -> YAML file (if provided) -> env (`APP__*`) -> CLI overrides.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context as _;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Per-module sections; a module reads `modules.<name>.config`.
    pub modules: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Loads the layered configuration.
    ///
    /// # Errors
    /// Returns an error if a layer cannot be parsed or does not match the schema.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("APP__").split("__"))
            .extract()
            .context("failed to load configuration (yaml/env)")
    }

    /// Applies `--port` and `-v` overrides.
    ///
    /// # Errors
    /// Returns an error if the configured bind address cannot be parsed.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) -> anyhow::Result<()> {
        if let Some(port) = port {
            let mut addr = self.bind_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }
        match verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if `server.bind_addr` is not a socket address.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.server.bind_addr))
    }

    /// Reads `modules.<name>.config`, falling back to `T::default()`.
    ///
    /// # Errors
    /// Returns an error if the section exists but does not deserialize into `T`.
    pub fn module_config_or_default<T>(&self, name: &str) -> anyhow::Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.modules.get(name).and_then(|module| module.get("config")) {
            Some(value) => serde_json::from_value(value.clone())
                .with_context(|| format!("invalid config for module '{name}'")),
            None => Ok(T::default()),
        }
    }

    /// # Errors
    /// Returns an error if the configuration cannot be rendered.
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}

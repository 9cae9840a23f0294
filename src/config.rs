use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::controller::DEFAULT_TIMEOUT;
use crate::error::{Gns3Error, Result};
use crate::types::ServerAddr;

pub const SERVER_ENV: &str = "GNS3_SERVER";

#[derive(Deserialize, Serialize, Default, Debug)]
pub struct Config {
    pub server: Option<ServerAddr>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| Gns3Error::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| Gns3Error::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        let write_err = |e| Gns3Error::ConfigWrite {
            path: config_path.clone(),
            source: e,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = self.to_toml()?;
        std::fs::write(&config_path, contents).map_err(write_err)?;

        Ok(config_path)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "gns3tui")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(Gns3Error::NoConfigDir)
    }

    /// Resolve the server: explicit flag, then `GNS3_SERVER`, then the config file.
    pub fn resolve_server(&self, explicit: Option<&str>) -> Result<Option<ServerAddr>> {
        if let Some(raw) = explicit {
            return raw.parse().map(Some);
        }

        if let Ok(raw) = std::env::var(SERVER_ENV) {
            if !raw.trim().is_empty() {
                return raw.parse().map(Some);
            }
        }

        Ok(self.server.clone())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}

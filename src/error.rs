use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Gns3Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid server address '{0}', expected host:port")]
    InvalidServer(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Project name must not be empty")]
    InvalidName,

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error(
        "No server configured. Pass --server host:port, set GNS3_SERVER or add server to ~/.config/gns3tui/config.toml"
    )]
    NotConnected,
}

impl Gns3Error {
    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Gns3Error::Api { status, .. } => Some(*status),
            Gns3Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Gns3Error>;

//! Server configuration
//!
//! Values come from (lowest to highest precedence) built-in defaults, an
//! optional YAML file, environment variables and finally the command line.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::error::FatalError;

/// Port used when none (or an invalid one) is configured.
pub const DEFAULT_PORT: u16 = 8000;

/// Receive buffer size in bytes; also the maximum accepted request size.
pub const DEFAULT_BUFFER_CAPACITY: usize = 2048;

/// Environment variable naming a YAML config file.
pub const CONFIG_ENV: &str = "DOCSERVE_CONFIG";
pub const PORT_ENV: &str = "DOCSERVE_PORT";
pub const DIR_ENV: &str = "DOCSERVE_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TCP port to listen on (all interfaces, IPv4 and IPv6)
    pub port: u16,
    /// Directory to serve, relative to the working directory
    pub root_dir: PathBuf,
    /// Capacity of the single per-connection receive buffer
    pub buffer_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root_dir: PathBuf::from("."),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl Config {
    /// Parses a (possibly partial) YAML document.
    ///
    /// ```
    /// # use docserve::config::Config;
    /// let cfg = Config::from_yaml_str("port: 9000").unwrap();
    /// assert_eq!(cfg.port, 9000);
    /// assert_eq!(cfg.buffer_capacity, 2048);
    /// ```
    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(text).context("invalid YAML configuration")?;
        Ok(cfg.sanitized())
    }

    /// Reads a YAML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
    }

    /// Loads the configuration from `DOCSERVE_CONFIG` (if set) and applies the
    /// `DOCSERVE_PORT` / `DOCSERVE_DIR` overrides.
    pub fn load() -> anyhow::Result<Self> {
        let cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        cfg.with_env_overrides()
    }

    /// Applies environment variable overrides on top of `self`.
    pub fn with_env_overrides(mut self) -> anyhow::Result<Self> {
        if let Ok(port) = std::env::var(PORT_ENV) {
            let port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{PORT_ENV} is not a valid port: {port:?}"))?;
            self = self.with_port(port);
        }

        if let Ok(dir) = std::env::var(DIR_ENV) {
            self.root_dir = PathBuf::from(dir);
        }

        Ok(self)
    }

    /// Sets the listening port. Port 0 is rejected and the current port kept.
    pub fn with_port(mut self, port: u16) -> Self {
        if port == 0 {
            tracing::warn!("Invalid listen port specified, keeping port {}", self.port);
        } else {
            self.port = port;
        }
        self
    }

    /// Resolves the serving directory against `cwd`.
    ///
    /// Absolute and home-relative (`~`) directories are rejected.
    pub fn resolve_root(&self, cwd: &Path) -> Result<PathBuf, FatalError> {
        let dir = self.root_dir.as_path();

        if dir.is_absolute() || dir.has_root() || dir.to_string_lossy().starts_with('~') {
            return Err(FatalError::Args(format!(
                "serving directory must be relative: {}",
                dir.display()
            )));
        }

        Ok(cwd.join(dir))
    }

    fn sanitized(self) -> Self {
        let port = self.port;
        let mut cfg = Self {
            port: DEFAULT_PORT,
            ..self
        }
        .with_port(port);

        if cfg.buffer_capacity == 0 {
            cfg.buffer_capacity = DEFAULT_BUFFER_CAPACITY;
        }
        cfg
    }
}

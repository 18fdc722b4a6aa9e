//! Dashboard configuration file support.
//!
//! Settings are read from a TOML file with every field defaulted, then
//! selected values can be overridden from the environment.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [data]
//! path = "day.csv"
//! dataset_name = "Bike Sharing Dataset"
//!
//! [sidebar]
//! name = "Jonathan Lokianto"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{DashboardError, DashboardResult};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "DASHBOARD_CONFIG";

/// Environment variable overriding `data.path`.
pub const DATA_PATH_ENV: &str = "DASHBOARD_DATA";

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub sidebar: SidebarSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Input dataset settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    /// CSV file, resolved relative to the working directory
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Name shown in the sidebar and reported by `/health`
    #[serde(default = "default_dataset_name")]
    pub dataset_name: String,
}

/// Static sidebar content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarSettings {
    #[serde(default = "default_logo_url")]
    pub logo_url: String,
    #[serde(default = "default_author_name")]
    pub name: String,
    #[serde(default = "default_author_handle")]
    pub email: String,
    #[serde(default = "default_author_handle")]
    pub dicoding_id: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_path() -> PathBuf {
    PathBuf::from("day.csv")
}

fn default_dataset_name() -> String {
    "Bike Sharing Dataset".to_string()
}

fn default_logo_url() -> String {
    "https://png.pngtree.com/png-vector/20240515/ourmid/pngtree-illustration-of-a-bicycle-logo-png-image_12473420.png".to_string()
}

fn default_author_name() -> String {
    "Jonathan Lokianto".to_string()
}

fn default_author_handle() -> String {
    "jonathanlokianto".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            dataset_name: default_dataset_name(),
        }
    }
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            logo_url: default_logo_url(),
            name: default_author_name(),
            email: default_author_handle(),
            dicoding_id: default_author_handle(),
        }
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> DashboardResult<Self> {
        toml::from_str(content)
            .map_err(|e| DashboardError::config(format!("Failed to parse config file: {}", e)))
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DashboardError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> DashboardResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                info!(path = %path.display(), "Reading dashboard configuration");
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Resolve the configuration the server runs with: the file named by
    /// `DASHBOARD_CONFIG`, else the default location, else built-in defaults;
    /// then environment overrides.
    pub fn load() -> DashboardResult<Self> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT` and `DASHBOARD_DATA` overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> DashboardResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| DashboardError::config(format!("PORT must be a valid port number, got '{}'", port)))?;
        }
        if let Some(path) = lookup(DATA_PATH_ENV) {
            self.data.path = PathBuf::from(path);
        }
        Ok(())
    }

    /// Socket address built from `server.host` and `server.port`.
    pub fn bind_address(&self) -> DashboardResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| DashboardError::config(format!("Invalid bind address: {}", e)))
    }
}

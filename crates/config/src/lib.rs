//! Layered configuration.
//!
//! Values are merged, later sources winning:
//!
//! 1. Built-in defaults ([`Config::default()`]).
//! 2. `config.{toml,yaml,json}` in the platform config directory, if present.
//! 3. An explicitly requested file (format picked from its extension).
//! 4. Environment variables prefixed with `FOLIO_`, nested keys separated by
//!    `__` (e.g. `FOLIO_LATENCY__MUTATION_MS=0`).

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const ENV_PREFIX: &str = "FOLIO_";
const FILE_STEM: &str = "config";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub latency: LatencyConfig,
    pub cache: CacheConfig,
    pub view: ViewConfig,
}

/// Upstream listing used to seed the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    pub api_key: String,
    /// Number of records loaded on first read.
    pub per_page: usize,
}
impl Default for SourceConfig {
    fn default() -> Self {
        Self { base_url: "https://reqres.in/api".to_string(), api_key: "reqres-free-v1".to_string(), per_page: 12 }
    }
}

/// Artificial latency of the simulated backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub initial_load_ms: u64,
    pub mutation_ms: u64,
}
impl LatencyConfig {
    pub fn initial_load(&self) -> Duration {
        Duration::from_millis(self.initial_load_ms)
    }

    pub fn mutation(&self) -> Duration {
        Duration::from_millis(self.mutation_ms)
    }
}
impl Default for LatencyConfig {
    fn default() -> Self {
        Self { initial_load_ms: 500, mutation_ms: 300 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long a fetched collection is served without refetching.
    pub stale_after_secs: u64,
    pub retry: RetryConfig,
}
impl CacheConfig {
    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }
}
impl Default for CacheConfig {
    fn default() -> Self {
        Self { stale_after_secs: 5 * 60, retry: RetryConfig::default() }
    }
}

/// Bounded exponential backoff for the initial load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}
impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_attempts: 4, base_delay_ms: 1000, max_delay_ms: 30_000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub table_page_size: usize,
    pub grid_page_size: usize,
}
impl Default for ViewConfig {
    fn default() -> Self {
        Self { table_page_size: 10, grid_page_size: 9 }
    }
}

impl Config {
    /// Load configuration from every layer, optionally including an explicit
    /// file which must exist.
    pub fn load(explicit: Option<impl AsRef<Path>>) -> Result<Self> {
        let user_dir = ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().to_path_buf());
        Self::load_from(user_dir.as_deref(), explicit.as_ref().map(AsRef::as_ref))
    }

    fn load_from(user_dir: Option<&Path>, explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(dir) = user_dir {
            for ext in ["toml", "yaml", "yml", "json"] {
                let path = dir.join(FILE_STEM).with_extension(ext);
                if path.is_file() {
                    tracing::debug!(path = %path.display(), "Merging user configuration");
                    figment = merge_file(figment, &path)?;
                }
            }
        }
        if let Some(path) = explicit {
            if !path.is_file() {
                exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
            }
            figment = merge_file(figment, path)?;
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        figment.extract().or_raise(|| ErrorKind::Invalid)
    }
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    Ok(match ext.as_deref() {
        Some("toml") => figment.merge(Toml::file(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        Some("json") => figment.merge(Json::file(path)),
        _ => exn::bail!(ErrorKind::UnsupportedFormat(PathBuf::from(path))),
    })
}

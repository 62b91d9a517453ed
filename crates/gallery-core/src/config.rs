use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::transform::DEFAULT_RESPONSIVE_WIDTHS;

/// Upload limits and transfer timeouts (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Largest file accepted by pre-flight validation, in bytes.
    pub max_file_bytes: u64,
    /// Whole-transfer timeout in milliseconds.
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 10 * 1024 * 1024,
            timeout_ms: 60_000,
            connect_timeout_ms: 15_000,
        }
    }
}

impl UploadConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

/// Global configuration loaded from `~/.config/gallery/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Hosting account name; part of the upload endpoint path.
    pub cloud_name: String,
    /// Unsigned upload preset sent with every upload.
    pub upload_preset: String,
    /// Destination folder hint sent with every upload.
    pub folder: String,
    /// Upload API base, without the account segment.
    pub api_base: String,
    /// Host serving delivery URLs; only URLs on this host are transformed.
    pub delivery_host: String,
    /// Catalog location: local path or http(s) URL.
    pub catalog_source: String,
    /// Widths used for responsive sets when none are given.
    #[serde(default = "default_responsive_widths")]
    pub responsive_widths: Vec<u32>,
    #[serde(default)]
    pub upload: UploadConfig,
}

fn default_responsive_widths() -> Vec<u32> {
    DEFAULT_RESPONSIVE_WIDTHS.to_vec()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            cloud_name: "demo".to_string(),
            upload_preset: "unsigned".to_string(),
            folder: "gallery".to_string(),
            api_base: "https://api.cloudinary.com/v1_1".to_string(),
            delivery_host: crate::transform::DEFAULT_DELIVERY_HOST.to_string(),
            catalog_source: "images.json".to_string(),
            responsive_widths: default_responsive_widths(),
            upload: UploadConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Upload endpoint: `{api_base}/{cloud_name}/image/upload`.
    pub fn upload_endpoint(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.api_base.trim_end_matches('/'),
            self.cloud_name
        )
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gallery")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GalleryConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<GalleryConfig> {
    if !path.exists() {
        let default_cfg = GalleryConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GalleryConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

//! CLI for the gallery toolkit.

mod clipboard;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gallery_core::config;
use gallery_core::transform::{Crop, Format, Quality};
use std::path::PathBuf;

use commands::{run_catalog, run_config_path, run_srcset, run_transform, run_upload};

/// Top-level CLI for the gallery toolkit.
#[derive(Debug, Parser)]
#[command(name = "gallery")]
#[command(about = "Image gallery toolkit: uploads, delivery URLs, catalog checks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload an image and print its catalog entry as JSON.
    Upload {
        /// Path of the image to upload.
        path: PathBuf,
        /// Declared content type; sniffed from the file when omitted.
        #[arg(long, value_name = "MIME")]
        content_type: Option<String>,
        /// Also copy the catalog entry to the clipboard.
        #[arg(long)]
        copy: bool,
        /// Also write the catalog entry to this file.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Print the delivery URL for a canonical image URL.
    Transform {
        /// Canonical storage URL.
        url: String,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        /// fill, limit, pad, scale or thumb (default limit).
        #[arg(long)]
        crop: Option<Crop>,
        /// auto, auto:best, auto:good, auto:eco, auto:low or 1-100 (default auto).
        #[arg(long)]
        quality: Option<Quality>,
        /// auto, webp, avif, jpg, png or gif (default auto).
        #[arg(long)]
        format: Option<Format>,
    },

    /// Print a srcset value (or the responsive set as JSON) for an image URL.
    Srcset {
        /// Canonical storage URL.
        url: String,
        /// Comma-separated widths; defaults to `responsive_widths` from the config.
        #[arg(long, value_delimiter = ',', value_name = "W,W,...")]
        widths: Vec<u32>,
        /// Print `[{width, url}, ...]` instead of a srcset string.
        #[arg(long)]
        json: bool,
    },

    /// Inspect the static catalog.
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
        /// Catalog path or URL; defaults to `catalog_source` from the config.
        #[arg(long, global = true, value_name = "PATH_OR_URL")]
        source: Option<String>,
    },

    /// Print the path of the config file.
    ConfigPath,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CatalogAction {
    /// List all images.
    List,
    /// Show one image with its delivery URLs and related images.
    Show {
        /// Image id.
        id: String,
    },
    /// Report duplicate ids, zero dimensions and dangling related ids.
    Check,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Upload {
                path,
                content_type,
                copy,
                out,
            } => run_upload(&cfg, &path, content_type.as_deref(), copy, out.as_deref()).await?,
            CliCommand::Transform {
                url,
                width,
                height,
                crop,
                quality,
                format,
            } => {
                let options = gallery_core::transform::TransformOptions {
                    width,
                    height,
                    crop,
                    quality,
                    format,
                };
                run_transform(&cfg, &url, &options)?;
            }
            CliCommand::Srcset { url, widths, json } => run_srcset(&cfg, &url, &widths, json)?,
            CliCommand::Catalog { action, source } => {
                let source = source.unwrap_or_else(|| cfg.catalog_source.clone());
                run_catalog(&cfg, &source, action).await?;
            }
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

//! `gallery transform <url>` – print a delivery URL.

use anyhow::Result;
use gallery_core::config::GalleryConfig;
use gallery_core::transform::{TransformOptions, UrlTransformer};

pub fn run_transform(cfg: &GalleryConfig, url: &str, options: &TransformOptions) -> Result<()> {
    let transformer = UrlTransformer::new(cfg.delivery_host.as_str());
    let out = transformer.transform(url, options);
    if out == url {
        tracing::debug!(url, host = transformer.host(), "url passed through unchanged");
    }
    println!("{out}");
    Ok(())
}

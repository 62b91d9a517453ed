//! `gallery srcset <url>` – print responsive variants of an image.

use anyhow::Result;
use gallery_core::config::GalleryConfig;
use gallery_core::transform::UrlTransformer;

pub fn run_srcset(cfg: &GalleryConfig, url: &str, widths: &[u32], json: bool) -> Result<()> {
    let widths = if widths.is_empty() {
        cfg.responsive_widths.as_slice()
    } else {
        widths
    };
    let transformer = UrlTransformer::new(cfg.delivery_host.as_str());
    if json {
        let set = transformer.derive_responsive_set(url, widths);
        println!("{}", serde_json::to_string_pretty(&set)?);
    } else {
        println!("{}", transformer.build_source_set(url, widths));
    }
    Ok(())
}

//! Responsive image sets and `srcset` descriptors.

use serde::Serialize;

use super::{Crop, TransformOptions, UrlTransformer};

/// One entry of a responsive set: the width and the delivery URL for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsiveImage {
    pub width: u32,
    pub url: String,
}

impl UrlTransformer {
    /// One `fill`-cropped delivery URL per width, in input order (duplicates kept).
    pub fn derive_responsive_set(&self, url: &str, widths: &[u32]) -> Vec<ResponsiveImage> {
        widths
            .iter()
            .map(|&width| ResponsiveImage {
                width,
                url: self.transform(url, &TransformOptions::new().width(width).crop(Crop::Fill)),
            })
            .collect()
    }

    /// `srcset` value: `"<url> <width>w"` pairs joined with `", "`.
    pub fn build_source_set(&self, url: &str, widths: &[u32]) -> String {
        self.derive_responsive_set(url, widths)
            .iter()
            .map(|img| format!("{} {}w", img.url, img.width))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

//! Catalog entry types, as stored in the static JSON file.

use serde::{Deserialize, Serialize};

/// Reference from one catalog entry to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedImage {
    pub id: String,
}

/// One image in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Opaque, unique within the catalog.
    pub id: String,
    /// Canonical storage URL (untransformed).
    pub url: String,
    pub description: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub related_images: Vec<RelatedImage>,
}

impl ImageRecord {
    /// Width / height, or `None` when the height is zero.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height == 0 {
            return None;
        }
        Some(self.width as f64 / self.height as f64)
    }
}

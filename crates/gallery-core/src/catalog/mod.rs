//! Static image catalog.
//!
//! The catalog is a JSON array of [`ImageRecord`]s maintained by hand and
//! served next to the site. It is read-only here: lookups, related-image
//! resolution, and a consistency check to run before publishing edits.

mod check;
mod load;
mod record;

pub use check::CatalogIssue;
pub use record::{ImageRecord, RelatedImage};

use std::collections::HashMap;

/// Failure to obtain or parse the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("read {source_name}: {error}")]
    Read {
        source_name: String,
        #[source]
        error: std::io::Error,
    },
    #[error("fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("catalog is not a JSON array of images: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parsed catalog with an id index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    images: Vec<ImageRecord>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(images: Vec<ImageRecord>) -> Self {
        let mut by_id = HashMap::with_capacity(images.len());
        for (i, img) in images.iter().enumerate() {
            // First occurrence wins; duplicates are reported by `check`.
            by_id.entry(img.id.clone()).or_insert(i);
        }
        Self { images, by_id }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let images: Vec<ImageRecord> = serde_json::from_str(json)?;
        Ok(Self::new(images))
    }

    /// Loads the catalog from a local path or an http(s) URL.
    ///
    /// Blocking; call from `spawn_blocking` if used from async code.
    pub fn load(source: &str) -> Result<Self, CatalogError> {
        let text = load::read_source(source)?;
        let catalog = Self::from_json(&text)?;
        tracing::info!(source, images = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ImageRecord> {
        self.by_id.get(id).map(|&i| &self.images[i])
    }

    /// Resolves the related images of `id`, in listed order.
    ///
    /// Related ids that are not in the catalog are skipped. Returns an empty
    /// list when `id` itself is unknown.
    pub fn related(&self, id: &str) -> Vec<&ImageRecord> {
        let Some(image) = self.get(id) else {
            return Vec::new();
        };
        image
            .related_images
            .iter()
            .filter_map(|r| {
                let found = self.get(&r.id);
                if found.is_none() {
                    tracing::debug!(image = id, related = %r.id, "related image not in catalog");
                }
                found
            })
            .collect()
    }
}

//! Option sets used by the gallery views.

use super::{Quality, TransformOptions};

/// Masonry grid card.
pub fn grid_thumbnail() -> TransformOptions {
    TransformOptions::new().width(800)
}

/// Main image on the detail view.
pub fn detail() -> TransformOptions {
    TransformOptions::new().width(1200).quality(Quality::AutoBest)
}

/// Card in the related-images strip of the detail view.
pub fn related_card() -> TransformOptions {
    TransformOptions::new().width(400)
}

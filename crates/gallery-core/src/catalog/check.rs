//! Consistency check for a hand-edited catalog.

use std::collections::HashSet;
use std::fmt;

use super::Catalog;

/// Problem found by [`Catalog::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateId(String),
    ZeroDimension { id: String },
    DanglingRelated { id: String, related: String },
    SelfRelated(String),
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateId(id) => write!(f, "duplicate id {:?}", id),
            CatalogIssue::ZeroDimension { id } => write!(f, "{:?} has a zero width or height", id),
            CatalogIssue::DanglingRelated { id, related } => {
                write!(f, "{:?} lists related image {:?} which is not in the catalog", id, related)
            }
            CatalogIssue::SelfRelated(id) => write!(f, "{:?} lists itself as related", id),
        }
    }
}

impl Catalog {
    /// Returns every issue found, in catalog order. Empty means the catalog is consistent.
    pub fn check(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        for img in self.images() {
            if !seen.insert(img.id.as_str()) {
                issues.push(CatalogIssue::DuplicateId(img.id.clone()));
            }
            if img.width == 0 || img.height == 0 {
                issues.push(CatalogIssue::ZeroDimension { id: img.id.clone() });
            }
            for rel in &img.related_images {
                if rel.id == img.id {
                    issues.push(CatalogIssue::SelfRelated(img.id.clone()));
                } else if self.get(&rel.id).is_none() {
                    issues.push(CatalogIssue::DanglingRelated {
                        id: img.id.clone(),
                        related: rel.id.clone(),
                    });
                }
            }
        }
        issues
    }
}

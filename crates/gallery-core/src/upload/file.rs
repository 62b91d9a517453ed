//! The file handed to the pipeline: payload, declared type, name.

use anyhow::{Context, Result};
use std::path::Path;

const OCTET_STREAM: &str = "application/octet-stream";

/// A selected file. The content type is what the caller declares; it is not re-checked
/// against the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Reads `path`. Without a declared type, the type is sniffed from the leading bytes.
    pub fn from_path(path: &Path, declared_type: Option<&str>) -> Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let content_type = match declared_type.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => t.to_ascii_lowercase(),
            None => sniff_content_type(&bytes).to_string(),
        };
        Ok(Self {
            name,
            content_type,
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// MIME type detected from magic bytes, or `application/octet-stream`.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    infer::get(bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or(OCTET_STREAM)
}

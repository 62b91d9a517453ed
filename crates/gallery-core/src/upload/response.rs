//! Interpret the provider's reply and normalize it into a catalog candidate.

use serde::Deserialize;

use crate::catalog::ImageRecord;

use super::{TransportResponse, UploadError};

/// Description used when the provider does not echo the original filename.
pub const FALLBACK_DESCRIPTION: &str = "Newly uploaded image";

/// Fields of a successful upload reply that the gallery uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedAsset {
    pub secure_url: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub public_id: Option<String>,
}

impl UploadedAsset {
    /// Catalog candidate with a fresh `img-…` id and no related images.
    pub fn into_record(self) -> ImageRecord {
        let description = self
            .original_filename
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());
        ImageRecord {
            id: new_record_id(),
            url: self.secure_url,
            description,
            width: self.width,
            height: self.height,
            related_images: Vec::new(),
        }
    }
}

fn new_record_id() -> String {
    format!("img-{}", uuid::Uuid::new_v4().simple())
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Maps a completed HTTP exchange to the uploaded asset or an error.
///
/// 2xx with the expected JSON is success; 2xx with anything else is `Parse`.
/// Other statuses are `Server`, carrying `error.message` from the body when present.
pub fn interpret(response: &TransportResponse) -> Result<UploadedAsset, UploadError> {
    if (200..300).contains(&response.status) {
        return serde_json::from_slice::<UploadedAsset>(&response.body).map_err(|e| {
            UploadError::Parse {
                detail: e.to_string(),
            }
        });
    }
    let message = serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()
        .map(|b| b.error.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("upload failed (HTTP {}), please try again", response.status));
    Err(UploadError::Server {
        status: response.status,
        message,
    })
}

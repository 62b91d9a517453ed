//! Upload error taxonomy.

use std::time::Duration;

/// Why an upload session failed.
///
/// `InvalidType` and `FileTooLarge` are raised before any transfer starts.
/// The rest end an in-flight transfer. The `Display` text is the message
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("please select an image file (got {content_type:?})")]
    InvalidType { content_type: String },
    #[error("image is {size} bytes, over the {limit} byte limit")]
    FileTooLarge { size: u64, limit: u64 },
    /// Connection, DNS, or send/receive failure. `detail` is for logs only.
    #[error("network error, please try again")]
    Network { detail: String },
    /// Connect or transfer deadline passed. Carries the transfer limit in force;
    /// curl reports both deadlines the same way, so the message names neither.
    #[error("upload timed out, please try again")]
    Timeout(Duration),
    /// Non-success HTTP status; `message` is the server's own when it sent one.
    #[error("{message}")]
    Server { status: u32, message: String },
    /// Success status but the body is not the expected JSON.
    #[error("unreadable response from upload server")]
    Parse { detail: String },
}

impl UploadError {
    /// True for the local checks that run before a transfer.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            UploadError::InvalidType { .. } | UploadError::FileTooLarge { .. }
        )
    }
}

/// Returned by `select_file` when a transfer is already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineBusy;

impl std::fmt::Display for PipelineBusy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "an upload is already in progress")
    }
}

impl std::error::Error for PipelineBusy {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            UploadError::Timeout(Duration::from_millis(60_000)).to_string(),
            "upload timed out, please try again"
        );
        assert_eq!(
            UploadError::Server {
                status: 400,
                message: "preset not found".into()
            }
            .to_string(),
            "preset not found"
        );
        assert_eq!(
            UploadError::Network { detail: "couldn't connect".into() }.to_string(),
            "network error, please try again"
        );
    }

    #[test]
    fn preflight_classes() {
        assert!(UploadError::InvalidType { content_type: "text/plain".into() }.is_preflight());
        assert!(UploadError::FileTooLarge { size: 2, limit: 1 }.is_preflight());
        assert!(!UploadError::Parse { detail: String::new() }.is_preflight());
    }
}

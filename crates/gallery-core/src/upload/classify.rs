//! Classify transport failures into upload errors.

use std::time::Duration;

use super::UploadError;

/// Timeouts become `Timeout`; every other curl failure is a `Network` error.
pub(crate) fn classify_curl_error(e: &curl::Error, timeout: Duration) -> UploadError {
    if e.is_operation_timedout() {
        return UploadError::Timeout(timeout);
    }
    UploadError::Network {
        detail: e.to_string(),
    }
}

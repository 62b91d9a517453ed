//! Multipart upload transport.
//!
//! The pipeline talks to the provider through [`UploadTransport`] so the state
//! machine can be driven without a network. [`CurlTransport`] is the real
//! implementation: one blocking libcurl POST with an upload progress callback.

use std::time::Duration;

use super::classify::classify_curl_error;
use super::{UploadError, UploadFile};

/// Everything sent for one upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub endpoint: String,
    pub file: UploadFile,
    pub upload_preset: String,
    pub folder: String,
}

/// Status and raw body of a completed HTTP exchange (any status).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Sends one upload request, reporting `(bytes_sent, bytes_total)` as it goes.
///
/// Blocking; the pipeline runs it on the blocking thread pool. An `Err` means
/// no HTTP response was obtained (network failure, timeout).
pub trait UploadTransport: Send + Sync {
    fn send(
        &self,
        request: &UploadRequest,
        progress: &mut dyn FnMut(u64, u64),
    ) -> Result<TransportResponse, UploadError>;
}

/// libcurl-backed transport.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    timeout: Duration,
    connect_timeout: Duration,
}

impl CurlTransport {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Self {
        Self {
            timeout,
            connect_timeout,
        }
    }
}

impl UploadTransport for CurlTransport {
    fn send(
        &self,
        request: &UploadRequest,
        progress: &mut dyn FnMut(u64, u64),
    ) -> Result<TransportResponse, UploadError> {
        let classify = |e: curl::Error| classify_curl_error(&e, self.timeout);
        let form_failed = |e: curl::FormError| UploadError::Network {
            detail: format!("building multipart body: {}", e),
        };

        let mut form = curl::easy::Form::new();
        form.part("file")
            .buffer(&request.file.name, request.file.bytes.clone())
            .content_type(&request.file.content_type)
            .add()
            .map_err(form_failed)?;
        form.part("upload_preset")
            .contents(request.upload_preset.as_bytes())
            .add()
            .map_err(form_failed)?;
        form.part("folder")
            .contents(request.folder.as_bytes())
            .add()
            .map_err(form_failed)?;

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.endpoint).map_err(classify)?;
        easy.httppost(form).map_err(classify)?;
        easy.connect_timeout(self.connect_timeout).map_err(classify)?;
        easy.timeout(self.timeout).map_err(classify)?;
        easy.progress(true).map_err(classify)?;

        // Skip the 100-continue round trip on large bodies.
        let mut list = curl::easy::List::new();
        list.append("Expect:").map_err(classify)?;
        easy.http_headers(list).map_err(classify)?;

        let mut body: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(classify)?;
            transfer
                .progress_function(|_dl_total, _dl_now, ul_total, ul_now| {
                    if ul_total > 0.0 {
                        progress(ul_now as u64, ul_total as u64);
                    }
                    true
                })
                .map_err(classify)?;
            transfer.perform().map_err(|e| {
                tracing::warn!(endpoint = %request.endpoint, "upload transfer failed: {}", e);
                classify(e)
            })?;
        }

        let status = easy.response_code().map_err(classify)?;
        tracing::debug!(
            endpoint = %request.endpoint,
            status,
            bytes = body.len(),
            "upload response received"
        );
        Ok(TransportResponse { status, body })
    }
}

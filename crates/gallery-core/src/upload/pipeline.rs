//! Upload pipeline: owns the session, runs validation and the transfer.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::catalog::ImageRecord;
use crate::config::GalleryConfig;

use super::response::interpret;
use super::session::{UploadSession, UploadStatus};
use super::transport::{CurlTransport, UploadRequest, UploadTransport};
use super::validate::validate;
use super::{PipelineBusy, UploadError, UploadFile, UploadedAsset};

/// Room for every distinct percentage plus slack; ticks are deduplicated before sending.
const PROGRESS_BUFFER: usize = 128;

/// Fixed parameters of every upload.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub endpoint: String,
    pub upload_preset: String,
    pub folder: String,
    pub max_file_bytes: u64,
}

impl From<&GalleryConfig> for PipelineSettings {
    fn from(cfg: &GalleryConfig) -> Self {
        Self {
            endpoint: cfg.upload_endpoint(),
            upload_preset: cfg.upload_preset.clone(),
            folder: cfg.folder.clone(),
            max_file_bytes: cfg.upload.max_file_bytes,
        }
    }
}

/// Validates and uploads one file at a time, publishing session snapshots.
///
/// Observers get snapshots through [`subscribe`](Self::subscribe). Progress
/// only grows while uploading, reaches 100 before a success is published, and
/// a terminal snapshot is the last one of a session.
pub struct UploadPipeline {
    settings: PipelineSettings,
    transport: Arc<dyn UploadTransport>,
    state: Arc<watch::Sender<UploadSession>>,
}

impl UploadPipeline {
    pub fn new(settings: PipelineSettings, transport: Arc<dyn UploadTransport>) -> Self {
        let (state, _) = watch::channel(UploadSession::default());
        Self {
            settings,
            transport,
            state: Arc::new(state),
        }
    }

    /// Pipeline using the curl transport and the limits from `cfg`.
    pub fn from_config(cfg: &GalleryConfig) -> Self {
        let transport = CurlTransport::new(cfg.upload.timeout(), cfg.upload.connect_timeout());
        Self::new(PipelineSettings::from(cfg), Arc::new(transport))
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn subscribe(&self) -> watch::Receiver<UploadSession> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> UploadSession {
        self.state.borrow().clone()
    }

    /// Validates `file` and, if it passes, uploads it. Resolves with the terminal snapshot.
    ///
    /// Validation failures end the session as Failed without starting a transfer.
    /// A selection made while another one is still validating or uploading is
    /// refused with [`PipelineBusy`] and leaves the running session untouched.
    ///
    /// The transfer runs on its own task: dropping the returned future stops
    /// the wait, not the upload, and the session still reaches a terminal state.
    pub async fn select_file(&self, file: UploadFile) -> Result<UploadSession, PipelineBusy> {
        let started = self.state.send_if_modified(|s| {
            if s.status().is_busy() {
                return false;
            }
            s.begin(&file);
            true
        });
        if !started {
            tracing::warn!(file = %file.name, "selection refused: upload in progress");
            return Err(PipelineBusy);
        }

        if let Err(e) = validate(&file, self.settings.max_file_bytes) {
            tracing::info!(
                file = %file.name,
                content_type = %file.content_type,
                size = file.size(),
                "file rejected: {}",
                e
            );
            return Ok(finish(&self.state, Err(e)));
        }

        tracing::info!(
            file = %file.name,
            size = file.size(),
            endpoint = %self.settings.endpoint,
            "upload started"
        );
        self.state.send_modify(|s| s.start_upload());

        let request = UploadRequest {
            endpoint: self.settings.endpoint.clone(),
            file,
            upload_preset: self.settings.upload_preset.clone(),
            folder: self.settings.folder.clone(),
        };
        let state = Arc::clone(&self.state);
        let transport = Arc::clone(&self.transport);
        let task = tokio::spawn(async move {
            let outcome = transfer(&state, transport, request).await;
            if outcome.is_ok() && state.send_if_modified(|s| s.advance(100)) {
                // Let observers see the completed progress before the terminal snapshot.
                tokio::task::yield_now().await;
            }
            finish(&state, outcome.map(UploadedAsset::into_record))
        });

        match task.await {
            Ok(session) => Ok(session),
            Err(e) => Ok(finish(
                &self.state,
                Err(UploadError::Network {
                    detail: format!("upload task failed: {}", e),
                }),
            )),
        }
    }

    /// Pretty JSON of the candidate record, ready to paste into the catalog.
    ///
    /// `None` unless the current session succeeded. Never changes the session.
    pub fn export_result(&self) -> Option<String> {
        let session = self.state.borrow();
        if session.status() != UploadStatus::Succeeded {
            return None;
        }
        session
            .result()
            .and_then(|record| serde_json::to_string_pretty(record).ok())
    }

    /// Returns to Idle, dropping the last outcome. Refused while busy.
    pub fn reset(&self) -> Result<(), PipelineBusy> {
        let mut refused = false;
        self.state.send_if_modified(|s| {
            if s.status().is_busy() {
                refused = true;
                return false;
            }
            let changed = s.status() != UploadStatus::Idle;
            *s = UploadSession::default();
            changed
        });
        if refused {
            Err(PipelineBusy)
        } else {
            Ok(())
        }
    }
}

/// Runs the blocking transport and applies its progress ticks to the session.
async fn transfer(
    state: &watch::Sender<UploadSession>,
    transport: Arc<dyn UploadTransport>,
    request: UploadRequest,
) -> Result<UploadedAsset, UploadError> {
    let (progress_tx, mut progress_rx) = mpsc::channel::<u8>(PROGRESS_BUFFER);

    let worker = tokio::task::spawn_blocking(move || {
        let mut last: Option<u8> = None;
        let mut on_progress = |sent: u64, total: u64| {
            if total == 0 {
                return;
            }
            let percent = (sent.min(total) * 100 / total) as u8;
            if last.map_or(true, |l| percent > l) {
                last = Some(percent);
                let _ = progress_tx.try_send(percent);
            }
        };
        transport.send(&request, &mut on_progress)
    });

    // Ends once the worker drops its sender.
    while let Some(percent) = progress_rx.recv().await {
        state.send_if_modified(|s| s.advance(percent));
    }

    let response = match worker.await {
        Ok(result) => result?,
        Err(e) => {
            return Err(UploadError::Network {
                detail: format!("upload worker failed: {}", e),
            })
        }
    };
    interpret(&response)
}

fn finish(
    state: &watch::Sender<UploadSession>,
    outcome: Result<ImageRecord, UploadError>,
) -> UploadSession {
    match outcome {
        Ok(record) => {
            tracing::info!(id = %record.id, url = %record.url, "upload succeeded");
            state.send_modify(|s| s.succeed(record));
        }
        Err(e) => {
            if !e.is_preflight() {
                tracing::warn!("upload failed: {:?}", e);
            }
            state.send_modify(|s| s.fail(e));
        }
    }
    state.borrow().clone()
}

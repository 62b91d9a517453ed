//! Upload session state machine.
//!
//! One session covers one selected file: Idle → Validating → Uploading →
//! Succeeded | Failed (or Validating → Failed on a pre-flight error).
//! `result` is set only in Succeeded and `error` only in Failed; progress
//! never moves backwards.

use std::fmt;

use crate::catalog::ImageRecord;

use super::{UploadError, UploadFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Validating,
    Uploading,
    Succeeded,
    Failed,
}

impl UploadStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStatus::Succeeded | UploadStatus::Failed)
    }

    /// True while a new selection must be refused.
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadStatus::Validating | UploadStatus::Uploading)
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UploadStatus::Idle => "idle",
            UploadStatus::Validating => "validating",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Succeeded => "succeeded",
            UploadStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Metadata of the selected file kept on the session (the payload itself is not).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

impl From<&UploadFile> for SelectedFile {
    fn from(file: &UploadFile) -> Self {
        Self {
            name: file.name.clone(),
            content_type: file.content_type.clone(),
            size: file.size(),
        }
    }
}

/// Snapshot of one upload session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadSession {
    file: Option<SelectedFile>,
    status: UploadStatus,
    progress: u8,
    result: Option<ImageRecord>,
    error: Option<UploadError>,
}

impl UploadSession {
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    /// Percentage 0–100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn result(&self) -> Option<&ImageRecord> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    /// User-facing failure text; present iff the session failed.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Starts a fresh session for `file`, discarding any previous outcome.
    pub(crate) fn begin(&mut self, file: &UploadFile) {
        *self = UploadSession {
            file: Some(file.into()),
            status: UploadStatus::Validating,
            ..UploadSession::default()
        };
    }

    pub(crate) fn start_upload(&mut self) {
        self.status = UploadStatus::Uploading;
        self.progress = 0;
    }

    /// Records a progress tick; ignored unless uploading, and never lowers progress.
    /// Returns whether the snapshot changed.
    pub(crate) fn advance(&mut self, percent: u8) -> bool {
        let percent = percent.min(100);
        if self.status != UploadStatus::Uploading || percent <= self.progress {
            return false;
        }
        self.progress = percent;
        true
    }

    pub(crate) fn succeed(&mut self, record: ImageRecord) {
        self.progress = 100;
        self.status = UploadStatus::Succeeded;
        self.error = None;
        self.result = Some(record);
    }

    pub(crate) fn fail(&mut self, error: UploadError) {
        self.status = UploadStatus::Failed;
        self.result = None;
        self.error = Some(error);
    }
}

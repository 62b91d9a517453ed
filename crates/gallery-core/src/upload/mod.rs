//! Upload pipeline.
//!
//! Turns a selected file into a hosted image and a catalog candidate record:
//! local validation (image type, size limit), a multipart POST to the
//! provider with progress reporting, and normalization of the reply. Each
//! failure is terminal for its session; nothing is retried or resumed.

mod classify;
mod error;
mod file;
mod pipeline;
mod response;
mod session;
mod transport;
mod validate;

pub use error::{PipelineBusy, UploadError};
pub use file::{sniff_content_type, UploadFile};
pub use pipeline::{PipelineSettings, UploadPipeline};
pub use response::{interpret, UploadedAsset, FALLBACK_DESCRIPTION};
pub use session::{SelectedFile, UploadSession, UploadStatus};
pub use transport::{CurlTransport, TransportResponse, UploadRequest, UploadTransport};
pub use validate::validate;

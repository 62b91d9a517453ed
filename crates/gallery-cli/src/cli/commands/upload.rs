//! `gallery upload <path>` – upload an image and print its catalog entry.

use anyhow::{Context, Result};
use gallery_core::config::GalleryConfig;
use gallery_core::upload::{UploadFile, UploadPipeline, UploadStatus};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::cli::clipboard;

const PROGRESS_INTERVAL: Duration = Duration::from_millis(250);

pub async fn run_upload(
    cfg: &GalleryConfig,
    path: &Path,
    content_type: Option<&str>,
    copy: bool,
    out: Option<&Path>,
) -> Result<()> {
    let file = UploadFile::from_path(path, content_type)?;
    let pipeline = UploadPipeline::from_config(cfg);

    let mut rx = pipeline.subscribe();
    let progress_handle = tokio::spawn(async move {
        let mut printed = false;
        let mut last_print: Option<Instant> = None;
        while rx.changed().await.is_ok() {
            let session = rx.borrow_and_update().clone();
            if session.status() == UploadStatus::Uploading {
                let due = last_print.map_or(true, |t| t.elapsed() >= PROGRESS_INTERVAL);
                if due || session.progress() == 100 {
                    eprint!("\ruploading {:>3}%", session.progress());
                    printed = true;
                    last_print = Some(Instant::now());
                }
            }
            if session.status().is_terminal() {
                break;
            }
        }
        if printed {
            eprintln!();
        }
    });

    let session = pipeline.select_file(file).await?;
    let _ = progress_handle.await;

    if session.status() != UploadStatus::Succeeded {
        let reason = session
            .error_message()
            .unwrap_or_else(|| "unknown error".to_string());
        anyhow::bail!("upload of {} failed: {}", path.display(), reason);
    }

    let json = pipeline
        .export_result()
        .context("upload succeeded but produced no catalog entry")?;
    println!("{json}");

    if let Some(out) = out {
        std::fs::write(out, format!("{json}\n"))
            .with_context(|| format!("write {}", out.display()))?;
        eprintln!("catalog entry written to {}", out.display());
    }

    if copy {
        match clipboard::copy(&json) {
            Ok(tool) => eprintln!("catalog entry copied to clipboard ({tool}); paste it into the catalog"),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {:#}", e);
                eprintln!("warning: could not copy to clipboard: {e:#}");
            }
        }
    }
    Ok(())
}

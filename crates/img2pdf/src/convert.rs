//! Async conversion entry point

use std::path::PathBuf;

use crate::error::{ConvertError, Result};
use crate::geometry::PageGeometry;
use crate::job::ConversionJob;
use crate::pdf::assemble_pdf_bytes;

/// Run a conversion job to completion.
///
/// Returns `Ok(Some(path))` with the persisted output path, or `Ok(None)`
/// for an empty job: nothing is produced, no file is written, and
/// `on_page` never fires. Document assembly is CPU-bound and runs on a
/// blocking task; the final bytes are written to disk in one async write.
///
/// There is no cancellation: once started, the job runs until it either
/// persists the document or fails. On failure the in-memory document is
/// dropped and nothing reaches the filesystem.
pub async fn run<F>(job: ConversionJob, on_page: F) -> Result<Option<PathBuf>>
where
    F: FnMut(usize) + Send + 'static,
{
    if job.is_empty() {
        log::debug!("conversion requested with no images, nothing to do");
        return Ok(None);
    }

    let output_path = job.output_path();
    let sources = job.into_images();

    let bytes = tokio::task::spawn_blocking(move || {
        assemble_pdf_bytes(&sources, &PageGeometry::LETTER, on_page)
    })
    .await??;

    tokio::fs::write(&output_path, bytes)
        .await
        .map_err(|source| ConvertError::DocumentWrite {
            path: output_path.clone(),
            source,
        })?;

    log::info!("wrote {}", output_path.display());
    Ok(Some(output_path))
}

//! Booklet export
//!
//! Requests the compiled PDF for a non-empty selection and saves it under the
//! fixed file name. One export runs at a time per exporter; a second request
//! while one is pending is refused rather than queued. Failures are never
//! retried automatically.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::client::{BackendClient, ClientError};

/// File name every saved booklet gets
pub const BOOKLET_FILE_NAME: &str = "not_a_house_but_a_home.pdf";

/// Booklet export errors
#[derive(Debug, Error)]
pub enum BookletError {
    /// Nothing selected; no request was made
    #[error("No designs selected")]
    EmptySelection,

    /// Another export is still in flight
    #[error("A booklet export is already in progress")]
    InProgress,

    /// Backend failed to produce the booklet
    #[error("Booklet generation failed: {0}")]
    Generation(#[from] ClientError),

    /// Saving the PDF failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Single-flight booklet requester
#[derive(Debug, Default)]
pub struct BookletExporter {
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the export ends, success or failure
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl BookletExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an export is currently running
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Fetch the booklet PDF for `ids`
    ///
    /// An empty `ids` fails with [`BookletError::EmptySelection`] before any
    /// network call.
    pub async fn request_booklet(
        &self,
        client: &BackendClient,
        ids: &[i64],
    ) -> Result<Vec<u8>, BookletError> {
        if ids.is_empty() {
            return Err(BookletError::EmptySelection);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Booklet export refused: another export in flight");
            return Err(BookletError::InProgress);
        }
        let _guard = InFlightGuard(&self.in_flight);

        tracing::info!(design_ids = ?ids, "Generating booklet");

        client.download_booklet(ids).await.map_err(|e| {
            tracing::error!(error = %e, "Booklet generation failed");
            BookletError::Generation(e)
        })
    }
}

/// Write `pdf` to `dir/not_a_house_but_a_home.pdf`
///
/// The bytes land in a temporary sibling first and are renamed into place,
/// so a partially written file never carries the final name.
pub fn save_booklet(dir: &Path, pdf: &[u8]) -> Result<PathBuf, BookletError> {
    std::fs::create_dir_all(dir)?;

    let target = dir.join(BOOKLET_FILE_NAME);
    let partial = dir.join(format!(".{}.part", BOOKLET_FILE_NAME));

    if let Err(e) = std::fs::write(&partial, pdf).and_then(|_| std::fs::rename(&partial, &target)) {
        let _ = std::fs::remove_file(&partial);
        return Err(e.into());
    }

    tracing::info!(path = %target.display(), bytes = pdf.len(), "Booklet saved");
    Ok(target)
}

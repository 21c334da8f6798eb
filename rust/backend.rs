use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use gag::Gag;
use tracing::{debug, warn};

use crate::error::BackendError;

/// A PDF parser that can turn raw document bytes into per-page text.
pub trait PdfBackend {
    /// Text of every page, in document order. Pages without recoverable
    /// text yield an empty string rather than being skipped.
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>, BackendError>;

    fn page_count(&self, data: &[u8]) -> Result<usize, BackendError> {
        Ok(self.extract_pages(data)?.len())
    }
}

/// [`PdfBackend`] built on the `pdf-extract` crate.
#[derive(Clone, Debug)]
pub struct PdfExtractBackend {
    silence_parser: bool,
}

impl Default for PdfExtractBackend {
    fn default() -> Self {
        Self {
            silence_parser: true,
        }
    }
}

impl PdfExtractBackend {
    pub fn new(silence_parser: bool) -> Self {
        Self { silence_parser }
    }

    fn quiet<T>(&self, f: impl FnOnce() -> T) -> Result<T, BackendError> {
        // pdf-extract prints diagnostics straight to stdout/stderr.
        let _gag_out = self.silence_parser.then(|| Gag::stdout().ok()).flatten();
        let _gag_err = self.silence_parser.then(|| Gag::stderr().ok()).flatten();
        panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
            let message = panic_message(payload.as_ref());
            warn!(panic = %message, "PDF parser panicked");
            BackendError::Panicked(message)
        })
    }
}

impl PdfBackend for PdfExtractBackend {
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>, BackendError> {
        let pages = self.quiet(|| pdf_extract::extract_text_from_mem_by_pages(data))??;
        debug!(page_count = pages.len(), "pdf-extract recovered pages");
        Ok(pages)
    }

    fn page_count(&self, data: &[u8]) -> Result<usize, BackendError> {
        let document = self.quiet(|| lopdf::Document::load_mem(data))??;
        Ok(document.get_pages().len())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    backend::{PdfBackend, PdfExtractBackend},
    config::ExtractorConfig,
    error::{BackendError, ExtractionError},
};

/// Per-page text of one document, in page order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pages: Vec<String>,
}

impl ExtractedText {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every page followed by a single `\n`; no pages renders as `""`.
    pub fn render(&self) -> String {
        let capacity = self.pages.iter().map(|page| page.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for page in &self.pages {
            out.push_str(page);
            out.push('\n');
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub page_count: usize,
    pub bytes_written: usize,
}

pub struct TextExtractor<B = PdfExtractBackend> {
    backend: B,
}

impl TextExtractor<PdfExtractBackend> {
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(PdfExtractBackend::new(config.silence_parser))
    }
}

impl<B: PdfBackend> TextExtractor<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Extract the text of `input` and write it to `output`.
    ///
    /// `output` is only touched once every page has been extracted, so a
    /// failed run leaves whatever was there before in place.
    pub fn extract_text_from_pdf(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<ExtractionSummary, ExtractionError> {
        let text = self.extract_pages(input)?;
        let rendered = text.render();

        fs::write(output, rendered.as_bytes()).map_err(|source| ExtractionError::WriteOutput {
            path: output.to_path_buf(),
            source,
        })?;

        let summary = ExtractionSummary {
            page_count: text.page_count(),
            bytes_written: rendered.len(),
        };
        info!(
            input = %input.display(),
            output = %output.display(),
            page_count = summary.page_count,
            bytes_written = summary.bytes_written,
            "extracted PDF text"
        );
        Ok(summary)
    }

    pub fn extract_pages(&self, input: &Path) -> Result<ExtractedText, ExtractionError> {
        let data = read_input(input)?;
        let pages = self
            .backend
            .extract_pages(&data)
            .map_err(|source| parse_error(input, source))?;
        Ok(ExtractedText::new(pages))
    }

    pub fn page_count(&self, input: &Path) -> Result<usize, ExtractionError> {
        let data = read_input(input)?;
        self.backend
            .page_count(&data)
            .map_err(|source| parse_error(input, source))
    }
}

// fs::read closes the handle before returning, ahead of any parsing.
fn read_input(input: &Path) -> Result<Vec<u8>, ExtractionError> {
    let data = fs::read(input).map_err(|source| ExtractionError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(input = %input.display(), bytes = data.len(), "read PDF input");
    Ok(data)
}

fn parse_error(input: &Path, source: BackendError) -> ExtractionError {
    ExtractionError::Parse {
        path: PathBuf::from(input),
        source,
    }
}

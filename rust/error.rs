use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure of a single extraction run.
///
/// Callers treat every variant the same way (one `Error: ...` line), but the
/// underlying cause stays reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {} as PDF: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error(transparent)]
    Pdf(#[from] pdf_extract::OutputError),
    #[error(transparent)]
    Load(#[from] lopdf::Error),
    #[error("PDF parser panicked: {0}")]
    Panicked(String),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn read_error_names_path_and_cause() {
        let err = ExtractionError::ReadInput {
            path: PathBuf::from("missing.pdf"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        assert_eq!(
            err.to_string(),
            "failed to read missing.pdf: No such file or directory"
        );
        let cause = err.source().expect("source is kept");
        let io_err = cause.downcast_ref::<io::Error>().expect("io error");
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn parser_panic_is_a_parse_failure() {
        let err = ExtractionError::Parse {
            path: PathBuf::from("broken.pdf"),
            source: BackendError::Panicked("index out of bounds".into()),
        };

        assert_eq!(
            err.to_string(),
            "failed to parse broken.pdf as PDF: PDF parser panicked: index out of bounds"
        );
        assert!(matches!(
            err.source().and_then(|s| s.downcast_ref::<BackendError>()),
            Some(BackendError::Panicked(_))
        ));
    }
}

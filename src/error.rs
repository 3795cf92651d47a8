//! Error types and handling for vstamp
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! A missing target file is not an error: it is reported as a skipped file and
//! processing continues. Everything here is fatal and aborts the run.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for vstamp operations
#[derive(Error, Diagnostic, Debug)]
pub enum VstampError {
    #[error("Failed to read file: {path}")]
    #[diagnostic(
        code(vstamp::fs::read_failed),
        help("Check that the file is readable by the current user")
    )]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(
        code(vstamp::fs::write_failed),
        help("Check permissions and free disk space; the file may be left truncated")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("File is not valid UTF-8: {path}")]
    #[diagnostic(
        code(vstamp::fs::decode_failed),
        help("Target HTML files must be UTF-8 encoded text")
    )]
    DecodeFailed { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(vstamp::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for VstampError {
    fn from(err: std::io::Error) -> Self {
        VstampError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, VstampError>;

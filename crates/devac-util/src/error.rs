//! Error types for the handful of fallible operations a [`crate::Handler`]
//! can't cover: reading the source file and writing the generated output.
//! Lexical, syntactic, and semantic problems are reported as diagnostics
//! instead - see [`crate::Diagnostic`].

use std::path::PathBuf;

use thiserror::Error;

/// An I/O or argument failure raised by the driver, outside the
/// lex/parse/analyze/emit pipeline itself.
#[derive(Debug, Error)]
pub enum DevacError {
    #[error("cannot read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    InvalidArguments(String),
}

pub type DevacResult<T> = std::result::Result<T, DevacError>;

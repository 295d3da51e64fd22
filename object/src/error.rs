//! Errors produced by the high-level file object API.

use std::path::PathBuf;

use snafu::{Backtrace, Snafu};

/// Errors that can occur while reading or writing a [`crate::FileDicomObject`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Could not decode or encode the data set.
    #[snafu(display("could not process the data set: {}", source))]
    DataSet {
        #[snafu(backtrace)]
        source: dicom_parser::Error,
    },

    /// Could not build or interpret the file meta table.
    #[snafu(display("could not process the file meta table: {}", source))]
    Meta {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },

    /// Could not open a file for reading.
    #[snafu(display("could not open file {}: {}", path.display(), source))]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// Could not create a file for writing.
    #[snafu(display("could not create file {}: {}", path.display(), source))]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

/// Result alias for file object operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

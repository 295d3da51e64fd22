//! A stateful reader and writer of DICOM data sets.
//!
//! `dicom-encoding` frames a single data element at a time; this crate
//! ties that element-level codec to a data dictionary and a transfer
//! syntax registry to decode or encode a whole file: preamble, the
//! file-meta header (always Explicit VR Little Endian), and the body
//! under whatever transfer syntax the meta header declares.

#![warn(missing_debug_implementations, missing_docs, unused_import_braces)]

pub mod dataset;
pub mod error;
mod util;

pub use dataset::{read_dataset, read_dataset_with_options, write_dataset, CodecMode, ReadOptions, ReadOutcome};
pub use error::{Error, Result};

//! A high-level API for reading and writing DICOM objects.
//!
//! This crate ties together the element-framing codec (`dicom-encoding`)
//! and the stateful stream reader/writer (`dicom-parser`) into a
//! file-shaped API: [`FileDicomObject`] pairs a [`meta::FileMetaTable`]
//! with an in-memory [`mem::InMemDicomObject`] data set, and can be
//! decoded from or encoded to a path or any `Read`/`Write` stream.

#![warn(missing_debug_implementations, missing_docs, unused_import_braces)]

pub mod error;
pub mod file;
pub mod mem;
pub mod meta;

pub use error::{Error, Result};
pub use file::{from_reader, open_file, FileDicomObject, OpenFileOptions};
pub use mem::InMemDicomObject;
pub use meta::{FileMetaTable, FileMetaTableBuilder};

/// The implementation class UID this codec identifies itself with in a
/// file meta table it builds, when the caller does not supply one.
pub const IMPLEMENTATION_CLASS_UID: &str = "1.2.826.0.1.3680043.9.7391.1.1";

/// The implementation version name this codec identifies itself with in
/// a file meta table it builds, when the caller does not supply one.
pub const IMPLEMENTATION_VERSION_NAME: &str = "RUSTDICOM_001";

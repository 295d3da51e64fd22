//! Core types for the DICOM container codec: attribute tags, the value
//! representation catalog, value-length framing, and the data element
//! itself.
//!
//! Higher layers (`dicom-dictionary-std`, `dicom-transfer-syntax-registry`,
//! `dicom-encoding`, `dicom-parser`, `dicom-object`) build on these types to
//! implement the full tag/VR/length codec and the in-memory data-set model.

#![deny(trivial_casts, trivial_numeric_casts, unsafe_code)]
#![warn(missing_debug_implementations, missing_docs, unused_import_braces)]

mod element;
mod error;
mod header;
mod length;
mod tag;
mod vr;

pub use element::DataElement;
pub use error::{Error, ExpectedVr, Result};
pub use header::{DataElementHeader, Header};
pub use length::Length;
pub use tag::{ElementNumber, GroupNumber, Tag};
pub use vr::{Padding, VR};

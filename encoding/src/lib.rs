//! Data element framing codecs.
//!
//! This crate decodes and encodes the *framing* of a DICOM data element —
//! its tag, VR and on-wire length — for each of the three transfer
//! syntaxes this codec fully supports. It does not itself assemble a data
//! set or know about the meta/body transfer-syntax switch; that state
//! machine lives in `dicom-parser`, one layer up.

#![warn(missing_debug_implementations, missing_docs, unused_import_braces)]

pub mod decode;
pub mod encode;

pub use decode::{BasicDecode, Decode};
pub use encode::{BasicEncode, Encode};

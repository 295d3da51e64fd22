//! Data element header decoding: tag/VR/length framing.
//!
//! This module decodes only the *framing* of a data element — its tag, VR
//! and on-wire length — leaving the value bytes for the caller to read
//! (generally `dicom-parser`, which knows how many bytes to pull and
//! where to put them). Framing is irregular in two ways this module
//! exists to paper over: the VR determines whether the length field is 2
//! or 4 bytes wide (under explicit-VR encoding), and implicit-VR encoding
//! carries no VR on the wire at all.

pub mod basic;
pub mod explicit_be;
pub mod explicit_le;
pub mod implicit_le;

use byteordered::Endianness;
use dicom_core::header::DataElementHeader;
use dicom_core::Tag;
use snafu::{Backtrace, Snafu};
use std::io::Read;

/// Errors that can occur while decoding a data element's framing.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Could not read the element's tag.
    #[snafu(display("could not read data element tag: {}", source))]
    ReadTag {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    /// Could not read the element's value representation.
    #[snafu(display("could not read data element VR: {}", source))]
    ReadVr {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    /// Could not read the 2 reserved bytes preceding a long-form length.
    #[snafu(display("could not read reserved bytes: {}", source))]
    ReadReserved {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    /// Could not read the element's length field.
    #[snafu(display("could not read data element length: {}", source))]
    ReadLength {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

/// Result alias for data element framing decode operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A type trait for reading primitive binary values based on a fixed
/// endianness. Unlike [`Decode`], this is not object-safe — but it does
/// not need to be, since there are only two possible implementations.
pub trait BasicDecode {
    /// The endianness this decoder assumes of its source.
    fn endianness(&self) -> Endianness;

    /// Decode an unsigned 16-bit value.
    fn decode_us<S: Read>(&self, source: S) -> std::io::Result<u16>;
    /// Decode an unsigned 32-bit value.
    fn decode_ul<S: Read>(&self, source: S) -> std::io::Result<u32>;
    /// Decode a signed 16-bit value.
    fn decode_ss<S: Read>(&self, source: S) -> std::io::Result<i16>;
    /// Decode a signed 32-bit value.
    fn decode_sl<S: Read>(&self, source: S) -> std::io::Result<i32>;
    /// Decode a single-precision float.
    fn decode_fl<S: Read>(&self, source: S) -> std::io::Result<f32>;
    /// Decode a double-precision float.
    fn decode_fd<S: Read>(&self, source: S) -> std::io::Result<f64>;

    /// Decode a tag: two consecutive unsigned 16-bit values, group then
    /// element.
    fn decode_tag<S: Read>(&self, mut source: S) -> std::io::Result<Tag> {
        let group = self.decode_us(&mut source)?;
        let element = self.decode_us(&mut source)?;
        Ok(Tag(group, element))
    }
}

/// A type trait for decoding the framing of a data element: its tag, VR
/// and on-wire length. Implementations exist for each of the three
/// supported transfer syntaxes.
///
/// This trait is object-safe so that a decoder can be selected at
/// runtime by transfer syntax.
pub trait Decode {
    /// Decode the next data element's header, returning the header and
    /// the number of bytes consumed from `source` in doing so (not
    /// including the value itself).
    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)>;
}

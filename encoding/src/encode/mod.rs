//! Data element header encoding: tag/VR/length framing.
//!
//! Symmetric to [`crate::decode`]: this module writes only the framing of
//! a data element. The caller (`dicom-parser`) supplies the value bytes
//! separately.

pub mod basic;
pub mod explicit_be;
pub mod explicit_le;
pub mod implicit_le;

use byteordered::Endianness;
use dicom_core::header::DataElementHeader;
use dicom_core::Tag;
use snafu::{Backtrace, Snafu};
use std::io::Write;

/// Errors that can occur while encoding a data element's framing.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Could not write the element's tag.
    #[snafu(display("could not write data element tag: {}", source))]
    WriteTag {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    /// Could not write the element's value representation.
    #[snafu(display("could not write data element VR: {}", source))]
    WriteVr {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    /// Could not write the element's length field.
    #[snafu(display("could not write data element length: {}", source))]
    WriteLength {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    /// A value's length does not fit in the 16-bit length field used by
    /// short-length VRs under explicit-VR encoding.
    #[snafu(display(
        "value length {} for data element {} overflows the 16-bit length field of VR {}",
        length,
        tag,
        vr.to_str(),
    ))]
    LengthOverflow {
        tag: Tag,
        vr: dicom_core::VR,
        length: u32,
        backtrace: Backtrace,
    },
}

/// Result alias for data element framing encode operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A type trait for writing primitive binary values with a fixed
/// endianness. Not object-safe, mirroring [`crate::decode::BasicDecode`].
pub trait BasicEncode {
    /// The endianness this encoder writes.
    fn endianness(&self) -> Endianness;

    /// Encode an unsigned 16-bit value.
    fn encode_us<S: Write>(&self, target: S, value: u16) -> std::io::Result<()>;
    /// Encode an unsigned 32-bit value.
    fn encode_ul<S: Write>(&self, target: S, value: u32) -> std::io::Result<()>;
    /// Encode a signed 16-bit value.
    fn encode_ss<S: Write>(&self, target: S, value: i16) -> std::io::Result<()>;
    /// Encode a signed 32-bit value.
    fn encode_sl<S: Write>(&self, target: S, value: i32) -> std::io::Result<()>;
    /// Encode a single-precision float.
    fn encode_fl<S: Write>(&self, target: S, value: f32) -> std::io::Result<()>;
    /// Encode a double-precision float.
    fn encode_fd<S: Write>(&self, target: S, value: f64) -> std::io::Result<()>;

    /// Encode a tag: two consecutive unsigned 16-bit values.
    fn encode_tag<S: Write>(&self, mut target: S, tag: Tag) -> std::io::Result<()> {
        self.encode_us(&mut target, tag.group())?;
        self.encode_us(&mut target, tag.element())
    }
}

/// A type trait for encoding the framing of a data element: its tag, VR
/// and on-wire length. Object-safe, so the encoder can be selected at
/// runtime by transfer syntax.
pub trait Encode {
    /// Encode a data element's header, returning the number of bytes
    /// written (not including the value itself).
    fn encode_header(&self, target: &mut dyn Write, header: &DataElementHeader) -> Result<usize>;
}

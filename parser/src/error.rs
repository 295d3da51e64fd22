//! The error taxonomy shared by the data-set reader and writer.

use dicom_core::Tag;
use snafu::{Backtrace, Snafu};

/// Errors that can occur while decoding or encoding a full DICOM stream.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// An underlying read or write failure.
    #[snafu(display("I/O error: {}", source))]
    Io {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// The preamble was not followed by the `"DICM"` magic code.
    #[snafu(display("missing or invalid DICM magic code"))]
    BadMagic { backtrace: Backtrace },

    /// The stream ended in the middle of a data element.
    #[snafu(display("unexpected end of stream while reading element {}", tag))]
    Truncated { tag: Tag, backtrace: Backtrace },

    /// Could not decode a data element's framing.
    #[snafu(display("could not decode element framing: {}", source))]
    DecodeHeader {
        #[snafu(backtrace)]
        source: dicom_encoding::decode::Error,
    },

    /// Could not encode a data element's framing.
    #[snafu(display("could not encode element framing: {}", source))]
    EncodeHeader {
        #[snafu(backtrace)]
        source: dicom_encoding::encode::Error,
    },

    /// The decoder encountered the undefined-length sentinel
    /// (`0xFFFF_FFFF`) in a context this codec does not implement
    /// (streamed sequence items or encapsulated pixel data).
    #[snafu(display(
        "undefined length is not supported for element {} (streaming/sequences are out of scope)",
        tag
    ))]
    UnsupportedUndefinedLength { tag: Tag, backtrace: Backtrace },

    /// Encoding was requested for a transfer syntax whose pixel data
    /// encoding this codec does not implement.
    #[snafu(display("transfer syntax {} is not supported for encoding (compressed)", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },

    /// A textual value's byte length is odd, violating the even-length
    /// framing invariant.
    #[snafu(display("odd value length {} for element {} (textual values must be even)", length, tag))]
    OddLength {
        tag: Tag,
        length: u32,
        backtrace: Backtrace,
    },
}

/// Result alias for data-set read/write operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

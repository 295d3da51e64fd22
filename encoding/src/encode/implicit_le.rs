//! Data element header encoding for Implicit VR Little Endian.
//!
//! Implicit-VR encoding writes only the tag and the 4-byte length; the VR
//! is not placed on the wire at all (it is recovered by the decoder from
//! a data dictionary).

use crate::encode::basic::LittleEndianBasicEncoder;
use crate::encode::{BasicEncode, Encode, Result, WriteLengthSnafu, WriteTagSnafu};
use dicom_core::header::{DataElementHeader, Header};
use snafu::ResultExt;
use std::io::Write;

/// A data element header encoder for the Implicit VR Little Endian
/// transfer syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImplicitVRLittleEndianEncoder {
    basic: LittleEndianBasicEncoder,
}

impl Encode for ImplicitVRLittleEndianEncoder {
    fn encode_header(&self, target: &mut dyn Write, header: &DataElementHeader) -> Result<usize> {
        self.basic.encode_tag(&mut *target, header.tag()).context(WriteTagSnafu)?;
        self.basic
            .encode_ul(&mut *target, header.len.0)
            .context(WriteLengthSnafu)?;
        Ok(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{Length, Tag, VR};

    #[test]
    fn encodes_tag_and_length_only() {
        let enc = ImplicitVRLittleEndianEncoder::default();
        let header = DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(4));
        let mut buf = Vec::new();
        let written = enc.encode_header(&mut buf, &header).unwrap();
        assert_eq!(written, 8);
        assert_eq!(buf, vec![0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00]);
    }
}

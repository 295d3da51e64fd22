//! Data element header encoding for Explicit VR Little Endian.

use crate::encode::basic::LittleEndianBasicEncoder;
use crate::encode::{BasicEncode, Encode, LengthOverflowSnafu, Result, WriteLengthSnafu, WriteTagSnafu, WriteVrSnafu};
use dicom_core::header::{DataElementHeader, Header};
use snafu::{ensure, ResultExt};
use std::io::Write;

/// A data element header encoder for the Explicit VR Little Endian
/// transfer syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExplicitVRLittleEndianEncoder {
    basic: LittleEndianBasicEncoder,
}

impl Encode for ExplicitVRLittleEndianEncoder {
    fn encode_header(&self, target: &mut dyn Write, header: &DataElementHeader) -> Result<usize> {
        self.basic.encode_tag(&mut *target, header.tag()).context(WriteTagSnafu)?;
        target.write_all(&header.vr().to_bytes()).context(WriteVrSnafu)?;

        let len = header.len.0;
        if header.vr().has_long_length() {
            target.write_all(&[0, 0]).context(WriteLengthSnafu)?;
            self.basic.encode_ul(&mut *target, len).context(WriteLengthSnafu)?;
            Ok(12)
        } else {
            ensure!(
                len < 0x1_0000,
                LengthOverflowSnafu {
                    tag: header.tag(),
                    vr: header.vr(),
                    length: len,
                }
            );
            self.basic.encode_us(&mut *target, len as u16).context(WriteLengthSnafu)?;
            Ok(8)
        }
    }
}

//! Data element header decoding for Explicit VR Big Endian.

use crate::decode::basic::BigEndianBasicDecoder;
use crate::decode::{BasicDecode, Decode, ReadLengthSnafu, ReadReservedSnafu, ReadTagSnafu, ReadVrSnafu, Result};
use dicom_core::header::DataElementHeader;
use dicom_core::{Length, VR};
use snafu::ResultExt;
use std::io::Read;

/// A data element header decoder for the Explicit VR Big Endian transfer
/// syntax (retired, but still required for conformance).
#[derive(Debug, Default, Clone, Copy)]
pub struct ExplicitVRBigEndianDecoder {
    basic: BigEndianBasicDecoder,
}

impl Decode for ExplicitVRBigEndianDecoder {
    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)> {
        let tag = self.basic.decode_tag(&mut *source).context(ReadTagSnafu)?;

        let mut vr_buf = [0u8; 2];
        source.read_exact(&mut vr_buf).context(ReadVrSnafu)?;
        let vr = VR::from_binary(vr_buf);

        let (len, bytes_read) = if vr.has_long_length() {
            let mut reserved = [0u8; 2];
            source.read_exact(&mut reserved).context(ReadReservedSnafu)?;
            let len = self.basic.decode_ul(&mut *source).context(ReadLengthSnafu)?;
            (len, 12)
        } else {
            let len = u32::from(self.basic.decode_us(&mut *source).context(ReadLengthSnafu)?);
            (len, 8)
        };

        Ok((DataElementHeader::new(tag, vr, Length(len)), bytes_read))
    }
}

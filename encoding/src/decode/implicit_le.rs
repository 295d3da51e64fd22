//! Data element header decoding for Implicit VR Little Endian.
//!
//! Implicit-VR encoding carries no VR on the wire; the VR is recovered
//! from a data dictionary. When the tag is not in the dictionary, the VR
//! is assigned `OB` (opaque bytes) rather than failing, per the codec's
//! documented behavior.

use crate::decode::basic::LittleEndianBasicDecoder;
use crate::decode::{BasicDecode, Decode, ReadLengthSnafu, ReadTagSnafu, Result};
use dicom_core::header::DataElementHeader;
use dicom_core::{Length, VR};
use dicom_dictionary_std::{DataDictionary, DictionaryEntry, StandardDataDictionary};
use snafu::ResultExt;
use std::fmt;
use std::io::Read;

/// An [`ImplicitVRLittleEndianDecoder`] using the standard data
/// dictionary.
pub type StandardImplicitVRLittleEndianDecoder = ImplicitVRLittleEndianDecoder<StandardDataDictionary>;

/// A data element header decoder for the Implicit VR Little Endian
/// transfer syntax. Generic over the data dictionary used to recover the
/// VR that is not present on the wire.
#[derive(Clone, Copy)]
pub struct ImplicitVRLittleEndianDecoder<D> {
    dict: D,
    basic: LittleEndianBasicDecoder,
}

impl<D> fmt::Debug for ImplicitVRLittleEndianDecoder<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImplicitVRLittleEndianDecoder")
            .field("dict", &"«omitted»")
            .finish()
    }
}

impl Default for ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    fn default() -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: StandardDataDictionary,
            basic: LittleEndianBasicDecoder,
        }
    }
}

impl<D> ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    /// Build a decoder using a custom data dictionary.
    pub fn with_dictionary(dict: D) -> Self {
        ImplicitVRLittleEndianDecoder {
            dict,
            basic: LittleEndianBasicDecoder,
        }
    }
}

impl<D> Decode for ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header(&self, source: &mut dyn Read) -> Result<(DataElementHeader, usize)> {
        let tag = self.basic.decode_tag(&mut *source).context(ReadTagSnafu)?;
        let len = self.basic.decode_ul(&mut *source).context(ReadLengthSnafu)?;

        let vr = self
            .dict
            .by_tag(tag)
            .map(DictionaryEntry::vr)
            .unwrap_or(VR::OB);

        Ok((DataElementHeader::new(tag, vr, Length(len)), 8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::header::Header;
    use dicom_core::Tag;
    use std::io::Cursor;

    #[test]
    fn recovers_vr_from_dictionary() {
        // Tag (0010,0010) PatientName, length=4, value "A^B\0"
        let raw = [0x10u8, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00, b'A', b'^', b'B', 0];
        let dec = StandardImplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(&raw[..]);
        let (header, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag(), Tag(0x0010, 0x0010));
        assert_eq!(header.vr(), VR::PN);
        assert_eq!(header.len(), Length(4));
        assert_eq!(bytes_read, 8);
    }

    #[test]
    fn unknown_tag_defaults_to_ob() {
        let raw = [0x09u8, 0x00, 0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00];
        let dec = StandardImplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(&raw[..]);
        let (header, _) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.vr(), VR::OB);
    }
}

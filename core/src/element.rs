//! The data element: a tag, a VR, and a value payload.

use crate::error::{ExpectedVr, Result, TruncatedSnafu, VrMismatchSnafu};
use crate::header::{DataElementHeader, Header};
use crate::length::Length;
use crate::tag::Tag;
use crate::vr::{Padding, VR};
use snafu::ensure;

/// An owned DICOM data element: a tag, a value representation, and the
/// value's bytes.
///
/// Value bytes are always stored in **little-endian** form regardless of
/// the transfer syntax they originated from or will be written with; byte
/// order is normalized at the codec boundary (see `dicom-parser`), which
/// keeps this type — and everything built on it — endianness-oblivious.
/// This is the normalize-at-decode-time option described for cross-endian
/// round-trip in the codec's design notes, traded for a per-element byte
/// swap instead of carrying the active mode through every accessor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataElement {
    tag: Tag,
    vr: VR,
    bytes: Vec<u8>,
}

impl DataElement {
    /// Create an empty-valued element with the given tag and VR.
    pub fn new(tag: Tag, vr: VR) -> Self {
        DataElement {
            tag,
            vr,
            bytes: Vec::new(),
        }
    }

    /// Build an element directly from its raw, already-encoded (little
    /// endian, padded) value bytes. Used by the decoder, which has already
    /// applied padding normalization that is part of what was read.
    pub fn from_raw_parts(tag: Tag, vr: VR, bytes: Vec<u8>) -> Self {
        DataElement { tag, vr, bytes }
    }

    /// The element's tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The element's value representation.
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// The element's header (tag, VR, on-wire length derived from the
    /// stored bytes).
    pub fn header(&self) -> DataElementHeader {
        DataElementHeader::new(self.tag, self.vr, Length(self.bytes.len() as u32))
    }

    /// The raw value bytes, in little-endian / as-padded form.
    pub fn data(&self) -> &[u8] {
        &self.bytes
    }

    /// Replace the raw value bytes outright. Never fails.
    pub fn set_bytes(&mut self, bytes: &[u8]) {
        self.bytes = bytes.to_vec();
    }

    fn require_textual(&self) -> Result<()> {
        ensure!(
            self.vr.is_textual(),
            VrMismatchSnafu {
                tag: self.tag,
                expected: ExpectedVr::Textual,
                actual: self.vr,
            }
        );
        Ok(())
    }

    /// Set a textual value. The VR must be one of the textual VRs, else
    /// this fails with [`crate::Error::VrMismatch`]. The string is stored
    /// verbatim; if its byte length is odd, the VR's padding byte (space
    /// for most textual VRs, NUL for `UI`) is appended to bring it to even
    /// length.
    pub fn set_text(&mut self, s: &str) -> Result<()> {
        self.require_textual()?;
        let mut bytes = s.as_bytes().to_vec();
        if bytes.len() % 2 != 0 {
            if let Some(pad) = match self.vr.padding() {
                Padding::Space => Some(b' '),
                Padding::Nul => Some(0u8),
                Padding::None => None,
            } {
                bytes.push(pad);
            }
        }
        self.bytes = bytes;
        Ok(())
    }

    /// Retrieve a textual value, with trailing padding (space or NUL)
    /// stripped. The VR must be one of the textual VRs.
    pub fn get_text(&self) -> Result<String> {
        self.require_textual()?;
        let trimmed = trim_padding(&self.bytes);
        Ok(String::from_utf8_lossy(trimmed).into_owned())
    }

    fn require_vr(&self, expected: VR) -> Result<()> {
        ensure!(
            self.vr == expected,
            VrMismatchSnafu {
                tag: self.tag,
                expected: ExpectedVr::Exactly(expected),
                actual: self.vr,
            }
        );
        Ok(())
    }

    fn require_len(&self, n: usize) -> Result<()> {
        ensure!(
            self.bytes.len() >= n,
            TruncatedSnafu {
                tag: self.tag,
                expected: n,
                found: self.bytes.len(),
            }
        );
        Ok(())
    }

    /// Set a 16-bit unsigned value. VR must be `US` or `AT` (an `AT` value
    /// is really two `US`s — group then element — but this minimal API
    /// exposes only the first one).
    pub fn set_u16(&mut self, value: u16) -> Result<()> {
        ensure!(
            self.vr == VR::US || self.vr == VR::AT,
            VrMismatchSnafu {
                tag: self.tag,
                expected: ExpectedVr::Exactly(VR::US),
                actual: self.vr,
            }
        );
        self.bytes = value.to_le_bytes().to_vec();
        Ok(())
    }

    /// Retrieve a 16-bit unsigned value. VR must be `US` or `AT`.
    pub fn get_u16(&self) -> Result<u16> {
        ensure!(
            self.vr == VR::US || self.vr == VR::AT,
            VrMismatchSnafu {
                tag: self.tag,
                expected: ExpectedVr::Exactly(VR::US),
                actual: self.vr,
            }
        );
        self.require_len(2)?;
        Ok(u16::from_le_bytes([self.bytes[0], self.bytes[1]]))
    }

    /// Set a 32-bit unsigned value. VR must be `UL`.
    pub fn set_u32(&mut self, value: u32) -> Result<()> {
        self.require_vr(VR::UL)?;
        self.bytes = value.to_le_bytes().to_vec();
        Ok(())
    }

    /// Retrieve a 32-bit unsigned value. VR must be `UL`.
    pub fn get_u32(&self) -> Result<u32> {
        self.require_vr(VR::UL)?;
        self.require_len(4)?;
        Ok(u32::from_le_bytes(self.bytes[0..4].try_into().unwrap()))
    }

    /// Set a 16-bit signed value. VR must be `SS`.
    pub fn set_i16(&mut self, value: i16) -> Result<()> {
        self.require_vr(VR::SS)?;
        self.bytes = value.to_le_bytes().to_vec();
        Ok(())
    }

    /// Retrieve a 16-bit signed value. VR must be `SS`.
    pub fn get_i16(&self) -> Result<i16> {
        self.require_vr(VR::SS)?;
        self.require_len(2)?;
        Ok(i16::from_le_bytes([self.bytes[0], self.bytes[1]]))
    }

    /// Set a 32-bit signed value. VR must be `SL`.
    pub fn set_i32(&mut self, value: i32) -> Result<()> {
        self.require_vr(VR::SL)?;
        self.bytes = value.to_le_bytes().to_vec();
        Ok(())
    }

    /// Retrieve a 32-bit signed value. VR must be `SL`.
    pub fn get_i32(&self) -> Result<i32> {
        self.require_vr(VR::SL)?;
        self.require_len(4)?;
        Ok(i32::from_le_bytes(self.bytes[0..4].try_into().unwrap()))
    }

    /// Set a single-precision float value. VR must be `FL`.
    pub fn set_f32(&mut self, value: f32) -> Result<()> {
        self.require_vr(VR::FL)?;
        self.bytes = value.to_le_bytes().to_vec();
        Ok(())
    }

    /// Retrieve a single-precision float value. VR must be `FL`.
    pub fn get_f32(&self) -> Result<f32> {
        self.require_vr(VR::FL)?;
        self.require_len(4)?;
        Ok(f32::from_le_bytes(self.bytes[0..4].try_into().unwrap()))
    }

    /// Set a double-precision float value. VR must be `FD`.
    pub fn set_f64(&mut self, value: f64) -> Result<()> {
        self.require_vr(VR::FD)?;
        self.bytes = value.to_le_bytes().to_vec();
        Ok(())
    }

    /// Retrieve a double-precision float value. VR must be `FD`.
    pub fn get_f64(&self) -> Result<f64> {
        self.require_vr(VR::FD)?;
        self.require_len(8)?;
        Ok(f64::from_le_bytes(self.bytes[0..8].try_into().unwrap()))
    }
}

impl Header for DataElement {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn vr(&self) -> VR {
        self.vr
    }
    fn len(&self) -> Length {
        Length(self.bytes.len() as u32)
    }
}

fn trim_padding(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();
    while end > 0 && (bytes[end - 1] == b' ' || bytes[end - 1] == 0) {
        end -= 1;
    }
    &bytes[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trips_with_space_padding() {
        let mut e = DataElement::new(Tag(0x0010, 0x0020), VR::LO);
        e.set_text("PATIENT").unwrap();
        assert_eq!(e.data().len(), 8);
        assert_eq!(e.data()[7], b' ');
        assert_eq!(e.get_text().unwrap(), "PATIENT");
    }

    #[test]
    fn ui_pads_with_nul() {
        let mut e = DataElement::new(Tag(0x0002, 0x0010), VR::UI);
        e.set_text("1.2.3").unwrap();
        assert_eq!(e.data().len(), 6);
        assert_eq!(e.data()[5], 0);
        assert_eq!(e.get_text().unwrap(), "1.2.3");
    }

    #[test]
    fn even_length_text_is_untouched() {
        let mut e = DataElement::new(Tag(0x0010, 0x0010), VR::PN);
        e.set_text("DOE^JOHN").unwrap();
        assert_eq!(e.data().len(), 8);
        assert_eq!(e.get_text().unwrap(), "DOE^JOHN");
    }

    #[test]
    fn vr_mismatch_on_wrong_accessor() {
        let e = DataElement::new(Tag(0x0010, 0x0010), VR::PN);
        assert!(e.get_u16().is_err());
    }

    #[test]
    fn not_textual_on_binary_vr_reports_the_actual_vr() {
        let e = DataElement::new(Tag(0x0028, 0x0010), VR::US);
        let err = e.get_text().unwrap_err();
        assert!(matches!(
            err,
            crate::Error::VrMismatch {
                expected: ExpectedVr::Textual,
                actual: VR::US,
                ..
            }
        ));
    }

    #[test]
    fn u16_round_trip() {
        let mut e = DataElement::new(Tag(0x0028, 0x0010), VR::US);
        e.set_u16(512).unwrap();
        assert_eq!(e.get_u16().unwrap(), 512);
    }

    #[test]
    fn truncated_fixed_width_value() {
        let mut e = DataElement::new(Tag(0x0028, 0x0010), VR::US);
        e.set_bytes(&[0x01]);
        assert!(e.get_u16().is_err());
    }

    #[test]
    fn empty_value_is_valid() {
        let e = DataElement::new(Tag(0x0010, 0x0010), VR::PN);
        assert_eq!(e.data().len(), 0);
        assert_eq!(e.get_text().unwrap(), "");
    }
}

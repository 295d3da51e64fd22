//! The encoder: preamble, meta header (with a recomputed group length),
//! and body.

use crate::error::{EncodeHeaderSnafu, IoSnafu, OddLengthSnafu, Result, UnsupportedTransferSyntaxSnafu};
use crate::util::swap_fixed_width;
use dicom_core::header::Header;
use dicom_core::{DataElement, VR};
use dicom_dictionary_std::tags;
use dicom_encoding::encode::explicit_be::ExplicitVRBigEndianEncoder;
use dicom_encoding::encode::explicit_le::ExplicitVRLittleEndianEncoder;
use dicom_encoding::encode::implicit_le::ImplicitVRLittleEndianEncoder;
use dicom_encoding::encode::Encode;
use dicom_transfer_syntax_registry::TransferSyntax;
use snafu::{ensure, ResultExt};
use std::io::Write;

const PREAMBLE_LEN: usize = 128;
const MAGIC: &[u8; 4] = b"DICM";

fn encode_one(encoder: &dyn Encode, target: &mut dyn Write, elem: &DataElement, big_endian: bool) -> Result<()> {
    let header = elem.header();
    encoder.encode_header(target, &header).context(EncodeHeaderSnafu)?;

    ensure!(
        header.len.0 % 2 == 0,
        OddLengthSnafu {
            tag: elem.tag(),
            length: header.len.0,
        }
    );

    let mut bytes = elem.data().to_vec();
    if big_endian && header.vr().is_fixed_width_binary() {
        // AT is two independent u16 halves (group, element), not one
        // 4-byte scalar; swap each half separately or the halves get
        // transposed as well as byte-reversed.
        let swap_width = if header.vr() == VR::AT { 2 } else { header.vr().fixed_size() };
        swap_fixed_width(&mut bytes, swap_width);
    }
    target.write_all(&bytes).context(IoSnafu)?;
    Ok(())
}

/// Encode a full DICOM stream: preamble, magic, meta header and body.
///
/// `meta_elements` should hold the group-0002 attributes the caller wants
/// written (typically including `TransferSyntaxUID`, `MediaStorageSOPClassUID`
/// and `MediaStorageSOPInstanceUID`), in the order they should appear. Any
/// `FileMetaInformationGroupLength` element among them is ignored: this
/// encoder always recomputes that value itself, by first encoding the
/// rest of the meta header into a buffer and measuring it, then writing
/// the group length element followed by the buffered bytes — the
/// pre-pass approach the codec's design notes call for.
///
/// `body_elements` are written under `transfer_syntax`, which must be one
/// of the three uncompressed syntaxes this codec supports; encoding a
/// compressed transfer syntax fails with
/// [`crate::error::Error::UnsupportedTransferSyntax`].
pub fn write_dataset<W: Write>(
    mut sink: W,
    meta_elements: &[DataElement],
    transfer_syntax: &TransferSyntax,
    body_elements: &[DataElement],
) -> Result<()> {
    ensure!(
        !transfer_syntax.compressed,
        UnsupportedTransferSyntaxSnafu {
            uid: transfer_syntax.uid.to_string(),
        }
    );

    sink.write_all(&[0u8; PREAMBLE_LEN]).context(IoSnafu)?;
    sink.write_all(MAGIC).context(IoSnafu)?;

    let meta_encoder = ExplicitVRLittleEndianEncoder::default();
    let mut meta_buf = Vec::new();
    for elem in meta_elements {
        if elem.tag() == tags::FILE_META_INFORMATION_GROUP_LENGTH {
            continue;
        }
        encode_one(&meta_encoder, &mut meta_buf, elem, false)?;
    }

    let mut group_length = DataElement::new(tags::FILE_META_INFORMATION_GROUP_LENGTH, VR::UL);
    group_length.set_u32(meta_buf.len() as u32).unwrap();
    encode_one(&meta_encoder, &mut sink, &group_length, false)?;
    sink.write_all(&meta_buf).context(IoSnafu)?;

    let body_encoder: Box<dyn Encode> = if !transfer_syntax.explicit_vr {
        Box::new(ImplicitVRLittleEndianEncoder::default())
    } else if transfer_syntax.big_endian {
        Box::new(ExplicitVRBigEndianEncoder::default())
    } else {
        Box::new(ExplicitVRLittleEndianEncoder::default())
    };

    for elem in body_elements {
        encode_one(body_encoder.as_ref(), &mut sink, elem, transfer_syntax.big_endian)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::read::read_dataset;
    use dicom_core::Tag;
    use dicom_transfer_syntax_registry::{EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN};

    fn transfer_syntax_uid_element(uid: &str) -> DataElement {
        let mut e = DataElement::new(tags::TRANSFER_SYNTAX_UID, VR::UI);
        e.set_text(uid).unwrap();
        e
    }

    #[test]
    fn round_trips_through_read_dataset_explicit_le() {
        let meta = vec![transfer_syntax_uid_element(EXPLICIT_VR_LITTLE_ENDIAN.uid)];
        let mut rows = DataElement::new(Tag(0x0028, 0x0010), VR::US);
        rows.set_u16(512).unwrap();
        let body = vec![rows];

        let mut buf = Vec::new();
        write_dataset(&mut buf, &meta, &EXPLICIT_VR_LITTLE_ENDIAN, &body).unwrap();

        let mut decoded = Vec::new();
        let outcome = read_dataset(std::io::Cursor::new(buf), |e| decoded.push(e)).unwrap();
        assert_eq!(outcome.transfer_syntax.uid, EXPLICIT_VR_LITTLE_ENDIAN.uid);
        let rows = decoded.iter().find(|e| e.tag() == Tag(0x0028, 0x0010)).unwrap();
        assert_eq!(rows.get_u16().unwrap(), 512);
    }

    #[test]
    fn round_trips_through_implicit_vr() {
        let meta = vec![transfer_syntax_uid_element(IMPLICIT_VR_LITTLE_ENDIAN.uid)];
        let mut name = DataElement::new(tags::PATIENT_NAME, VR::PN);
        name.set_text("DOE^JOHN").unwrap();
        let body = vec![name];

        let mut buf = Vec::new();
        write_dataset(&mut buf, &meta, &IMPLICIT_VR_LITTLE_ENDIAN, &body).unwrap();

        let mut decoded = Vec::new();
        read_dataset(std::io::Cursor::new(buf), |e| decoded.push(e)).unwrap();
        let name = decoded.iter().find(|e| e.tag() == tags::PATIENT_NAME).unwrap();
        assert_eq!(name.get_text().unwrap(), "DOE^JOHN");
    }

    #[test]
    fn round_trips_through_big_endian() {
        let meta = vec![transfer_syntax_uid_element(EXPLICIT_VR_BIG_ENDIAN.uid)];
        let mut rows = DataElement::new(Tag(0x0028, 0x0010), VR::US);
        rows.set_u16(0x0102).unwrap();
        let body = vec![rows];

        let mut buf = Vec::new();
        write_dataset(&mut buf, &meta, &EXPLICIT_VR_BIG_ENDIAN, &body).unwrap();

        let mut decoded = Vec::new();
        read_dataset(std::io::Cursor::new(buf), |e| decoded.push(e)).unwrap();
        let rows = decoded.iter().find(|e| e.tag() == Tag(0x0028, 0x0010)).unwrap();
        assert_eq!(rows.get_u16().unwrap(), 0x0102);
    }

    #[test]
    fn encodes_at_value_big_endian_swapping_each_half_independently() {
        let mut elem = DataElement::new(Tag(0x0020, 0x9165), VR::AT);
        // group 0x0010, element 0x0020, stored little-endian per half as
        // DataElement always stores.
        elem.set_bytes(&[0x10, 0x00, 0x20, 0x00]);

        let mut buf = Vec::new();
        let encoder = ExplicitVRBigEndianEncoder::default();
        encode_one(&encoder, &mut buf, &elem, true).unwrap();

        // header (tag + VR + short length) is 8 bytes for AT, then the
        // 4-byte value with each u16 half swapped independently.
        assert_eq!(&buf[8..], &[0x00, 0x10, 0x00, 0x20]);
    }

    #[test]
    fn group_length_is_recomputed_not_trusted_from_caller() {
        let meta = vec![
            {
                let mut stale = DataElement::new(tags::FILE_META_INFORMATION_GROUP_LENGTH, VR::UL);
                stale.set_u32(999).unwrap();
                stale
            },
            transfer_syntax_uid_element(EXPLICIT_VR_LITTLE_ENDIAN.uid),
        ];

        let mut buf = Vec::new();
        write_dataset(&mut buf, &meta, &EXPLICIT_VR_LITTLE_ENDIAN, &[]).unwrap();

        let mut decoded = Vec::new();
        read_dataset(std::io::Cursor::new(buf), |e| decoded.push(e)).unwrap();
        let group_length = decoded
            .iter()
            .find(|e| e.tag() == tags::FILE_META_INFORMATION_GROUP_LENGTH)
            .unwrap();
        assert_ne!(group_length.get_u32().unwrap(), 999);
    }

    #[test]
    fn rejects_compressed_transfer_syntax() {
        let jpeg = dicom_transfer_syntax_registry::get("1.2.840.10008.1.2.4.50").unwrap();
        let err = write_dataset(&mut Vec::new(), &[], jpeg, &[]).unwrap_err();
        assert!(matches!(err, crate::error::Error::UnsupportedTransferSyntax { .. }));
    }

    #[test]
    fn rejects_overflowing_short_length_value() {
        let mut huge = DataElement::new(Tag(0x0028, 0x0010), VR::US);
        huge.set_bytes(&vec![0u8; 0x1_0000]);
        let err = write_dataset(&mut Vec::new(), &[], &EXPLICIT_VR_LITTLE_ENDIAN, &[huge]).unwrap_err();
        assert!(matches!(err, crate::error::Error::EncodeHeader { .. }));
    }
}

//! The decoder: preamble → meta header → body state machine.

use crate::error::{
    BadMagicSnafu, DecodeHeaderSnafu, IoSnafu, OddLengthSnafu, Result, TruncatedSnafu,
    UnsupportedUndefinedLengthSnafu,
};
use crate::util::{swap_fixed_width, Rewindable};
use dicom_core::header::Header;
use dicom_core::{DataElement, Tag, VR};
use dicom_dictionary_std::tags;
use dicom_encoding::decode::explicit_be::ExplicitVRBigEndianDecoder;
use dicom_encoding::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use dicom_encoding::decode::implicit_le::StandardImplicitVRLittleEndianDecoder;
use dicom_encoding::decode::Decode;
use dicom_transfer_syntax_registry::{self as ts_registry, TransferSyntax};
use snafu::{ensure, IntoError, ResultExt};
use std::io::Read;

const PREAMBLE_LEN: usize = 128;
const MAGIC: &[u8; 4] = b"DICM";

/// The encoding mode a data element stream is read/written with: whether
/// VR codes are explicit on the wire, and whether integers are
/// big-endian. Passed explicitly through the framing routines rather
/// than held as mutable state on a long-lived reader, so that the
/// meta-header's encoding and the body's encoding can never leak into
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecMode {
    /// Whether the VR is present on the wire.
    pub explicit_vr: bool,
    /// Whether multi-byte integers are big-endian.
    pub big_endian: bool,
}

impl CodecMode {
    /// The meta header's encoding: always Explicit VR Little Endian.
    pub const META: CodecMode = CodecMode {
        explicit_vr: true,
        big_endian: false,
    };
}

impl From<&TransferSyntax> for CodecMode {
    fn from(ts: &TransferSyntax) -> Self {
        CodecMode {
            explicit_vr: ts.explicit_vr,
            big_endian: ts.big_endian,
        }
    }
}

/// Options controlling how [`read_dataset_with_options`] reads a stream,
/// beyond the plain defaults [`read_dataset`] uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Stop decoding the body as soon as a data element with this tag (or
    /// a higher one, in the body's tag order) would be next, without
    /// decoding it. Sequences sorted by tag mean this reliably lets a
    /// caller stop right before, say, `PixelData`, without reading pixel
    /// bytes it does not want. `None` reads the whole body.
    pub stop_before_tag: Option<Tag>,
    /// Tolerate a value whose on-wire length is odd, which strictly
    /// violates the even-length framing invariant. When `false` (the
    /// default), an odd length is rejected with
    /// [`crate::error::Error::OddLength`]. When `true`, the value is read
    /// at its stated (odd) length and decoding continues; this exists for
    /// interoperating with nonconformant producers, the same spirit as
    /// trimming a transfer syntax UID's trailing NUL.
    pub tolerate_odd_length: bool,
}

/// Summary of a completed (or error-truncated) decode.
#[derive(Debug, Clone, Copy)]
pub struct ReadOutcome {
    /// The transfer syntax the body was decoded with. This is the
    /// meta header's declared transfer syntax, or Explicit VR Little
    /// Endian by default when the meta header declares none (or an
    /// unrecognized one).
    pub transfer_syntax: &'static TransferSyntax,
}

fn decode_header_for_mode(
    mode: CodecMode,
    source: &mut dyn Read,
) -> std::result::Result<dicom_core::header::DataElementHeader, dicom_encoding::decode::Error> {
    if !mode.explicit_vr {
        StandardImplicitVRLittleEndianDecoder::default()
            .decode_header(source)
            .map(|(h, _)| h)
    } else if mode.big_endian {
        ExplicitVRBigEndianDecoder::default()
            .decode_header(source)
            .map(|(h, _)| h)
    } else {
        ExplicitVRLittleEndianDecoder::default()
            .decode_header(source)
            .map(|(h, _)| h)
    }
}

/// Attempt to read exactly 4 bytes (a tag) from `reader`. Returns `Ok(None)`
/// on a clean end-of-stream (no bytes read at all, the normal way a data
/// element sequence ends); returns `Err(Truncated)` if the stream ends
/// partway through the 4 bytes.
fn try_read_tag<R: Read>(reader: &mut R) -> Result<Option<[u8; 4]>> {
    let mut buf = [0u8; 4];
    let mut filled = 0usize;
    while filled < 4 {
        let n = reader.read(&mut buf[filled..]).context(IoSnafu)?;
        if n == 0 {
            if filled == 0 {
                return Ok(None);
            }
            return TruncatedSnafu { tag: Tag(0, 0) }.fail();
        }
        filled += n;
    }
    Ok(Some(buf))
}

/// Read exactly `len` value bytes for `tag`. Grows the buffer only as
/// bytes are actually read off `reader` (bounded by `len` via
/// [`Read::take`]) rather than allocating `len` bytes up front, so that a
/// corrupt or hostile stream declaring a huge length cannot force a large
/// allocation before any of that data has actually arrived.
fn read_value<R: Read>(reader: &mut R, tag: Tag, len: u32) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .take(u64::from(len))
        .read_to_end(&mut bytes)
        .map_err(|_| TruncatedSnafu { tag }.build())?;
    ensure!(bytes.len() == len as usize, TruncatedSnafu { tag });
    Ok(bytes)
}

/// Read data elements from `reader` under the given `mode`, calling
/// `on_element` for each one, until either `stop_before` reports that the
/// next tag belongs to a different section (in which case that tag's 4
/// bytes are rewound for the caller to re-interpret) or the stream ends
/// cleanly on an element boundary.
fn read_elements<R: Read>(
    reader: &mut Rewindable<R>,
    mode: CodecMode,
    options: ReadOptions,
    stop_before: impl Fn(Tag) -> bool,
    mut on_element: impl FnMut(DataElement),
) -> Result<()> {
    loop {
        let tagbuf = match try_read_tag(reader)? {
            None => return Ok(()),
            Some(buf) => buf,
        };

        let tag = if mode.big_endian {
            Tag(
                u16::from_be_bytes([tagbuf[0], tagbuf[1]]),
                u16::from_be_bytes([tagbuf[2], tagbuf[3]]),
            )
        } else {
            Tag(
                u16::from_le_bytes([tagbuf[0], tagbuf[1]]),
                u16::from_le_bytes([tagbuf[2], tagbuf[3]]),
            )
        };

        if stop_before(tag) {
            reader.push_back(&tagbuf);
            return Ok(());
        }

        reader.push_back(&tagbuf);
        let header = decode_header_for_mode(mode, reader).context(DecodeHeaderSnafu)?;

        ensure!(!header.len.is_undefined(), UnsupportedUndefinedLengthSnafu { tag });

        if header.len.0 % 2 != 0 {
            ensure!(
                options.tolerate_odd_length,
                OddLengthSnafu {
                    tag,
                    length: header.len.0,
                }
            );
            tracing::warn!(%tag, length = header.len.0, "tolerating odd value length");
        }

        let mut bytes = read_value(reader, tag, header.len.0)?;

        if mode.big_endian && header.vr().is_fixed_width_binary() {
            // AT is two independent u16 halves (group, element), not one
            // 4-byte scalar; swap each half separately or the halves get
            // transposed as well as byte-reversed.
            let swap_width = if header.vr() == VR::AT { 2 } else { header.vr().fixed_size() };
            swap_fixed_width(&mut bytes, swap_width);
        }

        on_element(DataElement::from_raw_parts(header.tag(), header.vr(), bytes));
    }
}

/// Decode a full DICOM stream: preamble, magic, meta header, and body.
///
/// Every decoded element — meta and body alike — is passed to
/// `on_element` as it is read. If the stream contains a value with
/// undefined length, decoding stops at that element and
/// [`crate::error::Error::UnsupportedUndefinedLength`] is returned;
/// every element decoded before that point has already been delivered to
/// `on_element`, so the caller's own accumulation (typically a data set)
/// is left in a well-formed, partial state, exactly matching this
/// decoder's documented behavior for that case.
pub fn read_dataset<R: Read>(source: R, on_element: impl FnMut(DataElement)) -> Result<ReadOutcome> {
    read_dataset_with_options(source, ReadOptions::default(), on_element)
}

/// Like [`read_dataset`], but with [`ReadOptions`] controlling an early
/// stop point and tolerance for nonconformant odd-length values.
pub fn read_dataset_with_options<R: Read>(
    source: R,
    options: ReadOptions,
    mut on_element: impl FnMut(DataElement),
) -> Result<ReadOutcome> {
    let mut reader = Rewindable::new(source);

    let mut header_buf = [0u8; PREAMBLE_LEN + 4];
    reader.read_exact(&mut header_buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            BadMagicSnafu.build()
        } else {
            crate::error::IoSnafu.into_error(e)
        }
    })?;
    ensure!(&header_buf[PREAMBLE_LEN..] == MAGIC, BadMagicSnafu);

    let mut ts_uid: Option<String> = None;
    read_elements(
        &mut reader,
        CodecMode::META,
        options,
        |tag| !tag.is_meta(),
        |elem| {
            if elem.tag() == tags::TRANSFER_SYNTAX_UID {
                ts_uid = elem.get_text().ok();
            }
            on_element(elem);
        },
    )?;

    let transfer_syntax = ts_uid
        .as_deref()
        .and_then(ts_registry::get)
        .unwrap_or_else(|| {
            tracing::debug!(
                declared = ?ts_uid,
                "meta header declared no (or an unrecognized) transfer syntax UID; \
                 defaulting to Explicit VR Little Endian"
            );
            ts_registry::default_for_encoding()
        });

    let body_mode = CodecMode::from(transfer_syntax);
    read_elements(
        &mut reader,
        body_mode,
        options,
        |tag| options.stop_before_tag.is_some_and(|stop| tag >= stop),
        |elem| on_element(elem),
    )?;

    Ok(ReadOutcome { transfer_syntax })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::VR;

    fn minimal_meta(ts_uid: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&[0u8; PREAMBLE_LEN]);
        buf.extend_from_slice(MAGIC);
        // (0002,0010) TransferSyntaxUID, UI, padded even
        let mut val = ts_uid.as_bytes().to_vec();
        if val.len() % 2 != 0 {
            val.push(0);
        }
        buf.extend_from_slice(&[0x02, 0x00, 0x10, 0x00]);
        buf.extend_from_slice(b"UI");
        buf.extend_from_slice(&(val.len() as u16).to_le_bytes());
        buf.extend_from_slice(&val);
        buf
    }

    #[test]
    fn missing_magic_fails() {
        let buf = vec![0u8; PREAMBLE_LEN + 4];
        let err = read_dataset(std::io::Cursor::new(buf), |_| {}).unwrap_err();
        assert!(matches!(err, crate::error::Error::BadMagic { .. }));
    }

    #[test]
    fn degenerate_empty_file_after_magic_is_not_an_error() {
        let mut buf = vec![0u8; PREAMBLE_LEN];
        buf.extend_from_slice(MAGIC);
        let outcome = read_dataset(std::io::Cursor::new(buf), |_| {}).unwrap();
        // no TransferSyntaxUID was ever seen, so the default is used
        assert_eq!(outcome.transfer_syntax.uid, "1.2.840.10008.1.2.1");
    }

    #[test]
    fn reads_meta_and_body_explicit_le() {
        let mut buf = minimal_meta("1.2.840.10008.1.2.1");
        // body: (0028,0010) Rows, US, len 2, value 512 little-endian
        buf.extend_from_slice(&[0x28, 0x00, 0x10, 0x00]);
        buf.extend_from_slice(b"US");
        buf.extend_from_slice(&2u16.to_le_bytes());
        buf.extend_from_slice(&512u16.to_le_bytes());

        let mut elements = Vec::new();
        let outcome = read_dataset(std::io::Cursor::new(buf), |e| elements.push(e)).unwrap();
        assert_eq!(outcome.transfer_syntax.uid, "1.2.840.10008.1.2.1");
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].tag(), Tag(0x0028, 0x0010));
        assert_eq!(elements[1].get_u16().unwrap(), 512);
    }

    #[test]
    fn reads_body_implicit_vr_using_dictionary() {
        let mut buf = minimal_meta("1.2.840.10008.1.2");
        // body: (0010,0010) PatientName, implicit VR, len 4, value "A^B\0"
        buf.extend_from_slice(&[0x10, 0x00, 0x10, 0x00]);
        buf.extend_from_slice(&4u32.to_le_bytes());
        buf.extend_from_slice(b"A^B\0");

        let mut elements = Vec::new();
        read_dataset(std::io::Cursor::new(buf), |e| elements.push(e)).unwrap();
        let pn = elements.iter().find(|e| e.tag() == Tag(0x0010, 0x0010)).unwrap();
        assert_eq!(pn.vr(), VR::PN);
        assert_eq!(pn.get_text().unwrap(), "A^B");
    }

    #[test]
    fn reads_body_big_endian_normalizing_to_le_storage() {
        let mut buf = minimal_meta("1.2.840.10008.1.2.2");
        // body: (0028,0010) Rows, US, len 2, value 0x0102 big-endian on wire
        buf.extend_from_slice(&[0x00, 0x28, 0x00, 0x10]);
        buf.extend_from_slice(b"US");
        buf.extend_from_slice(&2u16.to_be_bytes());
        buf.extend_from_slice(&[0x01, 0x02]);

        let mut elements = Vec::new();
        read_dataset(std::io::Cursor::new(buf), |e| elements.push(e)).unwrap();
        let rows = elements.iter().find(|e| e.tag() == Tag(0x0028, 0x0010)).unwrap();
        assert_eq!(rows.get_u16().unwrap(), 0x0102);
    }

    #[test]
    fn reads_at_value_big_endian_swapping_each_half_independently() {
        let mut buf = minimal_meta("1.2.840.10008.1.2.2");
        // body: (0020,9165) Dimension Index Pointer, AT, len 4, value
        // pointing at tag (0010,0020) -- group 0x0010, element 0x0020, each
        // encoded as its own big-endian u16 on the wire.
        buf.extend_from_slice(&[0x00, 0x20, 0x91, 0x65]);
        buf.extend_from_slice(b"AT");
        buf.extend_from_slice(&4u16.to_be_bytes());
        buf.extend_from_slice(&0x0010u16.to_be_bytes());
        buf.extend_from_slice(&0x0020u16.to_be_bytes());

        let mut elements = Vec::new();
        read_dataset(std::io::Cursor::new(buf), |e| elements.push(e)).unwrap();
        let pointer = elements.iter().find(|e| e.tag() == Tag(0x0020, 0x9165)).unwrap();
        // A whole-chunk byte reversal would instead yield 0x0020 here (the
        // element half swapped into the group's position).
        assert_eq!(pointer.get_u16().unwrap(), 0x0010);
    }

    #[test]
    fn stop_before_tag_skips_the_rest_of_the_body() {
        let mut buf = minimal_meta("1.2.840.10008.1.2.1");
        buf.extend_from_slice(&[0x10, 0x00, 0x20, 0x00]); // (0010,0020) PatientID
        buf.extend_from_slice(b"LO");
        buf.extend_from_slice(&2u16.to_le_bytes());
        buf.extend_from_slice(b"42");
        buf.extend_from_slice(&[0xe0, 0x7f, 0x10, 0x00]); // (7FE0,0010) PixelData
        buf.extend_from_slice(b"OW");
        buf.extend_from_slice(&[0, 0]);
        buf.extend_from_slice(&4u32.to_le_bytes());
        buf.extend_from_slice(&[0, 0, 0, 0]);

        let mut elements = Vec::new();
        let options = ReadOptions {
            stop_before_tag: Some(Tag(0x7FE0, 0x0010)),
            ..Default::default()
        };
        read_dataset_with_options(std::io::Cursor::new(buf), options, |e| elements.push(e)).unwrap();
        assert!(elements.iter().any(|e| e.tag() == Tag(0x0010, 0x0020)));
        assert!(!elements.iter().any(|e| e.tag() == Tag(0x7FE0, 0x0010)));
    }

    #[test]
    fn odd_length_is_rejected_by_default_but_tolerated_when_requested() {
        let mut buf = minimal_meta("1.2.840.10008.1.2.1");
        buf.extend_from_slice(&[0x10, 0x00, 0x20, 0x00]); // (0010,0020) PatientID, odd length
        buf.extend_from_slice(b"LO");
        buf.extend_from_slice(&3u16.to_le_bytes());
        buf.extend_from_slice(b"ABC");

        let err = read_dataset(std::io::Cursor::new(buf.clone()), |_| {}).unwrap_err();
        assert!(matches!(err, crate::error::Error::OddLength { .. }));

        let options = ReadOptions {
            tolerate_odd_length: true,
            ..Default::default()
        };
        let mut elements = Vec::new();
        read_dataset_with_options(std::io::Cursor::new(buf), options, |e| elements.push(e)).unwrap();
        let id = elements.iter().find(|e| e.tag() == Tag(0x0010, 0x0020)).unwrap();
        assert_eq!(id.data(), b"ABC");
    }

    #[test]
    fn undefined_length_halts_with_partial_elements_delivered() {
        let mut buf = minimal_meta("1.2.840.10008.1.2.1");
        // body: (7FE0,0010) PixelData, OW, long length, undefined (0xFFFFFFFF)
        buf.extend_from_slice(&[0xe0, 0x7f, 0x10, 0x00]);
        buf.extend_from_slice(b"OW");
        buf.extend_from_slice(&[0, 0]);
        buf.extend_from_slice(&0xFFFF_FFFFu32.to_le_bytes());

        let mut elements = Vec::new();
        let err = read_dataset(std::io::Cursor::new(buf), |e| elements.push(e)).unwrap_err();
        assert!(matches!(err, crate::error::Error::UnsupportedUndefinedLength { .. }));
        // the meta elements were still delivered
        assert!(elements.iter().any(|e| e.tag() == tags::TRANSFER_SYNTAX_UID));
    }
}

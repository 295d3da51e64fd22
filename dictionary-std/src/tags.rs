//! Compile-time tag constants for the attributes exercised by this
//! codec's examples and tests.
//!
//! These map an attribute's keyword directly to a [`Tag`], at no look-up
//! cost, for the common case where the caller already knows which
//! attribute it wants. For anything not listed here, use
//! [`crate::StandardDataDictionary::by_keyword`] or index `dicom_core::Tag`
//! directly.

use dicom_core::Tag;

/// (0002,0000) File Meta Information Group Length
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// (0002,0002) Media Storage SOP Class UID
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// (0002,0003) Media Storage SOP Instance UID
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// (0002,0010) Transfer Syntax UID
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// (0002,0012) Implementation Class UID
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// (0002,0013) Implementation Version Name
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);

/// (0008,0060) Modality
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// (0008,0016) SOP Class UID
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// (0008,0018) SOP Instance UID
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);

/// (0010,0010) Patient's Name
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// (0010,0020) Patient ID
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// (0010,0030) Patient's Birth Date
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);

/// (0020,000D) Study Instance UID
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// (0020,000E) Series Instance UID
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);

/// (0028,0010) Rows
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// (0028,0011) Columns
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// (0028,0100) Bits Allocated
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);

/// (7FE0,0010) Pixel Data
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

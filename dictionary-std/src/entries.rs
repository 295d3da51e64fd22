//! The static table backing [`crate::StandardDataDictionary`].
//!
//! This is a representative subset of PS3.6's attribute registry — the
//! file meta group plus the patient/study/series/image/pixel-data
//! attributes exercised by typical objects — rather than the full
//! several-thousand-entry registry. Applications needing an attribute
//! outside this table still decode correctly: implicit-VR decoding for an
//! unlisted tag falls back to `VR::OB` per the codec's documented
//! behavior (see `dicom-parser`'s stateful decoder).

use dicom_core::{Tag, VR};

/// One row of the standard dictionary: a tag, its keyword (alias), its
/// human-readable name, and its default VR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntryStatic {
    /// The attribute's tag.
    pub tag: Tag,
    /// The attribute's keyword, as used in the standard (no spaces).
    pub keyword: &'static str,
    /// The attribute's human-readable name.
    pub name: &'static str,
    /// The attribute's default value representation.
    pub vr: VR,
}

macro_rules! entry {
    ($group:expr, $element:expr, $keyword:ident, $name:expr, $vr:ident) => {
        DictionaryEntryStatic {
            tag: Tag($group, $element),
            keyword: stringify!($keyword),
            name: $name,
            vr: VR::$vr,
        }
    };
}

/// The static entries of the standard dictionary.
pub static ENTRIES: &[DictionaryEntryStatic] = &[
    // -- file meta group (0002,xxxx) --
    entry!(0x0002, 0x0000, FileMetaInformationGroupLength, "File Meta Information Group Length", UL),
    entry!(0x0002, 0x0001, FileMetaInformationVersion, "File Meta Information Version", OB),
    entry!(0x0002, 0x0002, MediaStorageSOPClassUID, "Media Storage SOP Class UID", UI),
    entry!(0x0002, 0x0003, MediaStorageSOPInstanceUID, "Media Storage SOP Instance UID", UI),
    entry!(0x0002, 0x0010, TransferSyntaxUID, "Transfer Syntax UID", UI),
    entry!(0x0002, 0x0012, ImplementationClassUID, "Implementation Class UID", UI),
    entry!(0x0002, 0x0013, ImplementationVersionName, "Implementation Version Name", SH),
    entry!(0x0002, 0x0016, SourceApplicationEntityTitle, "Source Application Entity Title", AE),
    entry!(0x0002, 0x0017, SendingApplicationEntityTitle, "Sending Application Entity Title", AE),
    entry!(0x0002, 0x0018, ReceivingApplicationEntityTitle, "Receiving Application Entity Title", AE),
    entry!(0x0002, 0x0100, PrivateInformationCreatorUID, "Private Information Creator UID", UI),
    entry!(0x0002, 0x0102, PrivateInformation, "Private Information", OB),
    // -- identification / patient (0008,xxxx / 0010,xxxx) --
    entry!(0x0008, 0x0000, IdentifyingGroupLength, "Identifying Group Length", UL),
    entry!(0x0008, 0x0005, SpecificCharacterSet, "Specific Character Set", CS),
    entry!(0x0008, 0x0008, ImageType, "Image Type", CS),
    entry!(0x0008, 0x0016, SOPClassUID, "SOP Class UID", UI),
    entry!(0x0008, 0x0018, SOPInstanceUID, "SOP Instance UID", UI),
    entry!(0x0008, 0x0020, StudyDate, "Study Date", DA),
    entry!(0x0008, 0x0021, SeriesDate, "Series Date", DA),
    entry!(0x0008, 0x0022, AcquisitionDate, "Acquisition Date", DA),
    entry!(0x0008, 0x0023, ContentDate, "Content Date", DA),
    entry!(0x0008, 0x0030, StudyTime, "Study Time", TM),
    entry!(0x0008, 0x0031, SeriesTime, "Series Time", TM),
    entry!(0x0008, 0x0032, AcquisitionTime, "Acquisition Time", TM),
    entry!(0x0008, 0x0033, ContentTime, "Content Time", TM),
    entry!(0x0008, 0x0050, AccessionNumber, "Accession Number", SH),
    entry!(0x0008, 0x0060, Modality, "Modality", CS),
    entry!(0x0008, 0x0070, Manufacturer, "Manufacturer", LO),
    entry!(0x0008, 0x0080, InstitutionName, "Institution Name", LO),
    entry!(0x0008, 0x0090, ReferringPhysicianName, "Referring Physician's Name", PN),
    entry!(0x0008, 0x0201, TimezoneOffsetFromUTC, "Timezone Offset From UTC", SH),
    entry!(0x0008, 0x1030, StudyDescription, "Study Description", LO),
    entry!(0x0008, 0x103E, SeriesDescription, "Series Description", LO),
    entry!(0x0008, 0x1090, ManufacturerModelName, "Manufacturer's Model Name", LO),
    entry!(0x0010, 0x0000, PatientGroupLength, "Patient Group Length", UL),
    entry!(0x0010, 0x0010, PatientName, "Patient's Name", PN),
    entry!(0x0010, 0x0020, PatientID, "Patient ID", LO),
    entry!(0x0010, 0x0021, IssuerOfPatientID, "Issuer of Patient ID", LO),
    entry!(0x0010, 0x0030, PatientBirthDate, "Patient's Birth Date", DA),
    entry!(0x0010, 0x0032, PatientBirthTime, "Patient's Birth Time", TM),
    entry!(0x0010, 0x0040, PatientSex, "Patient's Sex", CS),
    entry!(0x0010, 0x1010, PatientAge, "Patient's Age", AS),
    entry!(0x0010, 0x1020, PatientSize, "Patient's Size", DS),
    entry!(0x0010, 0x1030, PatientWeight, "Patient's Weight", DS),
    entry!(0x0010, 0x2160, EthnicGroup, "Ethnic Group", SH),
    entry!(0x0010, 0x4000, PatientComments, "Patient Comments", LT),
    // -- acquisition / equipment (0018,xxxx) --
    entry!(0x0018, 0x0015, BodyPartExamined, "Body Part Examined", CS),
    entry!(0x0018, 0x0050, SliceThickness, "Slice Thickness", DS),
    entry!(0x0018, 0x0060, KVP, "KVP", DS),
    entry!(0x0018, 0x0088, SpacingBetweenSlices, "Spacing Between Slices", DS),
    entry!(0x0018, 0x1000, DeviceSerialNumber, "Device Serial Number", LO),
    entry!(0x0018, 0x1020, SoftwareVersions, "Software Versions", LO),
    entry!(0x0018, 0x1030, ProtocolName, "Protocol Name", LO),
    entry!(0x0018, 0x1100, ReconstructionDiameter, "Reconstruction Diameter", DS),
    entry!(0x0018, 0x1151, XRayTubeCurrent, "X-Ray Tube Current", IS),
    entry!(0x0018, 0x1152, Exposure, "Exposure", IS),
    entry!(0x0018, 0x1160, FilterType, "Filter Type", SH),
    entry!(0x0018, 0x5100, PatientPosition, "Patient Position", CS),
    // -- relationship / study-series-frame (0020,xxxx) --
    entry!(0x0020, 0x0000, RelationshipGroupLength, "Relationship Group Length", UL),
    entry!(0x0020, 0x000D, StudyInstanceUID, "Study Instance UID", UI),
    entry!(0x0020, 0x000E, SeriesInstanceUID, "Series Instance UID", UI),
    entry!(0x0020, 0x0010, StudyID, "Study ID", SH),
    entry!(0x0020, 0x0011, SeriesNumber, "Series Number", IS),
    entry!(0x0020, 0x0013, InstanceNumber, "Instance Number", IS),
    entry!(0x0020, 0x0020, PatientOrientation, "Patient Orientation", CS),
    entry!(0x0020, 0x0032, ImagePositionPatient, "Image Position (Patient)", DS),
    entry!(0x0020, 0x0037, ImageOrientationPatient, "Image Orientation (Patient)", DS),
    entry!(0x0020, 0x0052, FrameOfReferenceUID, "Frame of Reference UID", UI),
    entry!(0x0020, 0x1040, PositionReferenceIndicator, "Position Reference Indicator", LO),
    entry!(0x0020, 0x1041, SliceLocation, "Slice Location", DS),
    // -- image pixel module (0028,xxxx) --
    entry!(0x0028, 0x0000, ImagePixelGroupLength, "Image Pixel Group Length", UL),
    entry!(0x0028, 0x0002, SamplesPerPixel, "Samples per Pixel", US),
    entry!(0x0028, 0x0004, PhotometricInterpretation, "Photometric Interpretation", CS),
    entry!(0x0028, 0x0006, PlanarConfiguration, "Planar Configuration", US),
    entry!(0x0028, 0x0008, NumberOfFrames, "Number of Frames", IS),
    entry!(0x0028, 0x0010, Rows, "Rows", US),
    entry!(0x0028, 0x0011, Columns, "Columns", US),
    entry!(0x0028, 0x0030, PixelSpacing, "Pixel Spacing", DS),
    entry!(0x0028, 0x0100, BitsAllocated, "Bits Allocated", US),
    entry!(0x0028, 0x0101, BitsStored, "Bits Stored", US),
    entry!(0x0028, 0x0102, HighBit, "High Bit", US),
    entry!(0x0028, 0x0103, PixelRepresentation, "Pixel Representation", US),
    entry!(0x0028, 0x1050, WindowCenter, "Window Center", DS),
    entry!(0x0028, 0x1051, WindowWidth, "Window Width", DS),
    entry!(0x0028, 0x1052, RescaleIntercept, "Rescale Intercept", DS),
    entry!(0x0028, 0x1053, RescaleSlope, "Rescale Slope", DS),
    entry!(0x0028, 0x1054, RescaleType, "Rescale Type", LO),
    entry!(0x0028, 0x2110, LossyImageCompression, "Lossy Image Compression", CS),
    // -- pixel data (7FE0,xxxx) --
    entry!(0x7FE0, 0x0000, PixelDataGroupLength, "Pixel Data Group Length", UL),
    entry!(0x7FE0, 0x0010, PixelData, "Pixel Data", OW),
];

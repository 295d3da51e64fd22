//! The file meta information table: an ergonomic view over the group-0002
//! elements every DICOM file carries ahead of its main data set.

use dicom_core::{DataElement, Tag, VR};
use dicom_dictionary_std::tags;
use snafu::{Backtrace, ResultExt, Snafu};

use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};

/// Errors that can occur while building or reading a [`FileMetaTable`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// A required file meta element is missing.
    #[snafu(display("missing required file meta element `{}`", alias))]
    MissingElement { alias: &'static str, backtrace: Backtrace },

    /// A file meta element's value could not be read as text.
    #[snafu(display("could not decode text value of `{}`: {}", alias, source))]
    DecodeText {
        alias: &'static str,
        source: dicom_core::Error,
        backtrace: Backtrace,
    },
}

/// Result alias for file meta table operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// DICOM File Meta Information, the group-0002 attributes that precede the
/// main data set and declare how to read it.
///
/// Built from scratch with a [`FileMetaTableBuilder`], or recovered from a
/// decoded stream's meta elements with [`FileMetaTable::from_element_iter`].
/// The group length itself is never stored here: it is purely a framing
/// detail of the wire format, recomputed by `dicom-parser` on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetaTable {
    /// Media Storage SOP Class UID.
    pub media_storage_sop_class_uid: String,
    /// Media Storage SOP Instance UID.
    pub media_storage_sop_instance_uid: String,
    /// Transfer Syntax UID: which codec the main data set is written with.
    pub transfer_syntax: String,
    /// Implementation Class UID.
    pub implementation_class_uid: String,
    /// Implementation Version Name.
    pub implementation_version_name: Option<String>,
}

impl FileMetaTable {
    /// Recover a file meta table from the elements of a decoded meta
    /// header (in any order). Elements outside the recognized set listed
    /// above are ignored.
    pub fn from_element_iter<'a>(elements: impl IntoIterator<Item = &'a DataElement>) -> Result<Self> {
        let mut sop_class_uid = None;
        let mut sop_instance_uid = None;
        let mut transfer_syntax = None;
        let mut impl_class_uid = None;
        let mut impl_version_name = None;

        for elem in elements {
            match elem.tag() {
                t if t == tags::MEDIA_STORAGE_SOP_CLASS_UID => {
                    sop_class_uid = Some(text(elem, "MediaStorageSOPClassUID")?);
                }
                t if t == tags::MEDIA_STORAGE_SOP_INSTANCE_UID => {
                    sop_instance_uid = Some(text(elem, "MediaStorageSOPInstanceUID")?);
                }
                t if t == tags::TRANSFER_SYNTAX_UID => {
                    transfer_syntax = Some(text(elem, "TransferSyntaxUID")?);
                }
                t if t == tags::IMPLEMENTATION_CLASS_UID => {
                    impl_class_uid = Some(text(elem, "ImplementationClassUID")?);
                }
                t if t == tags::IMPLEMENTATION_VERSION_NAME => {
                    impl_version_name = Some(text(elem, "ImplementationVersionName")?);
                }
                _ => {}
            }
        }

        Ok(FileMetaTable {
            media_storage_sop_class_uid: sop_class_uid.context_or_missing("MediaStorageSOPClassUID")?,
            media_storage_sop_instance_uid: sop_instance_uid
                .context_or_missing("MediaStorageSOPInstanceUID")?,
            transfer_syntax: transfer_syntax.context_or_missing("TransferSyntaxUID")?,
            implementation_class_uid: impl_class_uid.unwrap_or_else(|| IMPLEMENTATION_CLASS_UID.to_string()),
            implementation_version_name: impl_version_name,
        })
    }

    /// Render this table back into the group-0002 data elements a writer
    /// should emit (everything except the group length, which
    /// `dicom-parser` recomputes itself).
    pub fn to_elements(&self) -> Vec<DataElement> {
        vec![
            text_element(
                tags::MEDIA_STORAGE_SOP_CLASS_UID,
                VR::UI,
                &self.media_storage_sop_class_uid,
            ),
            text_element(
                tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
                VR::UI,
                &self.media_storage_sop_instance_uid,
            ),
            text_element(tags::TRANSFER_SYNTAX_UID, VR::UI, &self.transfer_syntax),
            text_element(tags::IMPLEMENTATION_CLASS_UID, VR::UI, &self.implementation_class_uid),
            text_element(
                tags::IMPLEMENTATION_VERSION_NAME,
                VR::SH,
                self.implementation_version_name
                    .as_deref()
                    .unwrap_or(IMPLEMENTATION_VERSION_NAME),
            ),
        ]
    }

    /// Start building a table from scratch.
    pub fn builder() -> FileMetaTableBuilder {
        FileMetaTableBuilder::default()
    }
}

trait OptionExt {
    fn context_or_missing(self, alias: &'static str) -> Result<String>;
}

impl OptionExt for Option<String> {
    fn context_or_missing(self, alias: &'static str) -> Result<String> {
        match self {
            Some(value) => Ok(value),
            None => MissingElementSnafu { alias }.fail(),
        }
    }
}

fn text(elem: &DataElement, alias: &'static str) -> Result<String> {
    elem.get_text().context(DecodeTextSnafu { alias })
}

fn text_element(tag: Tag, vr: VR, value: &str) -> DataElement {
    let mut elem = DataElement::new(tag, vr);
    elem.set_text(value).expect("VR is textual by construction");
    elem
}

/// Builds a [`FileMetaTable`] field by field, defaulting
/// `implementation_class_uid`/`implementation_version_name` to this
/// codec's own identifiers when not set explicitly.
#[derive(Debug, Default, Clone)]
pub struct FileMetaTableBuilder {
    media_storage_sop_class_uid: Option<String>,
    media_storage_sop_instance_uid: Option<String>,
    transfer_syntax: Option<String>,
    implementation_class_uid: Option<String>,
    implementation_version_name: Option<String>,
}

impl FileMetaTableBuilder {
    /// Set the Media Storage SOP Class UID.
    pub fn media_storage_sop_class_uid(mut self, value: impl Into<String>) -> Self {
        self.media_storage_sop_class_uid = Some(value.into());
        self
    }

    /// Set the Media Storage SOP Instance UID.
    pub fn media_storage_sop_instance_uid(mut self, value: impl Into<String>) -> Self {
        self.media_storage_sop_instance_uid = Some(value.into());
        self
    }

    /// Set the Transfer Syntax UID.
    pub fn transfer_syntax(mut self, value: impl Into<String>) -> Self {
        self.transfer_syntax = Some(value.into());
        self
    }

    /// Set the Implementation Class UID.
    pub fn implementation_class_uid(mut self, value: impl Into<String>) -> Self {
        self.implementation_class_uid = Some(value.into());
        self
    }

    /// Set the Implementation Version Name.
    pub fn implementation_version_name(mut self, value: impl Into<String>) -> Self {
        self.implementation_version_name = Some(value.into());
        self
    }

    /// Build the table, failing if a required field (Media Storage SOP
    /// Class/Instance UID, Transfer Syntax UID) was never set.
    pub fn build(self) -> Result<FileMetaTable> {
        Ok(FileMetaTable {
            media_storage_sop_class_uid: self
                .media_storage_sop_class_uid
                .context_or_missing("MediaStorageSOPClassUID")?,
            media_storage_sop_instance_uid: self
                .media_storage_sop_instance_uid
                .context_or_missing("MediaStorageSOPInstanceUID")?,
            transfer_syntax: self.transfer_syntax.context_or_missing("TransferSyntaxUID")?,
            implementation_class_uid: self
                .implementation_class_uid
                .unwrap_or_else(|| IMPLEMENTATION_CLASS_UID.to_string()),
            implementation_version_name: Some(
                self.implementation_version_name
                    .unwrap_or_else(|| IMPLEMENTATION_VERSION_NAME.to_string()),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_the_mandatory_triplet() {
        let err = FileMetaTableBuilder::default().build().unwrap_err();
        assert!(matches!(err, Error::MissingElement { .. }));
    }

    #[test]
    fn builder_fills_in_implementation_defaults() {
        let table = FileMetaTableBuilder::default()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("1.2.3.4")
            .transfer_syntax("1.2.840.10008.1.2.1")
            .build()
            .unwrap();
        assert_eq!(table.implementation_class_uid, IMPLEMENTATION_CLASS_UID);
        assert_eq!(table.implementation_version_name.as_deref(), Some(IMPLEMENTATION_VERSION_NAME));
    }

    #[test]
    fn round_trips_through_elements() {
        let table = FileMetaTableBuilder::default()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("1.2.3.4")
            .transfer_syntax("1.2.840.10008.1.2.1")
            .build()
            .unwrap();
        let elements = table.to_elements();
        let recovered = FileMetaTable::from_element_iter(&elements).unwrap();
        assert_eq!(recovered, table);
    }

    #[test]
    fn from_elements_fails_on_missing_transfer_syntax() {
        let elements = vec![text_element(
            tags::MEDIA_STORAGE_SOP_CLASS_UID,
            VR::UI,
            "1.2.840.10008.5.1.4.1.1.7",
        )];
        let err = FileMetaTable::from_element_iter(&elements).unwrap_err();
        assert!(matches!(err, Error::MissingElement { .. }));
    }
}

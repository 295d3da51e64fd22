//! Whole-file reading and writing: ties the file meta table to the main
//! data set and to a path or an arbitrary stream.

use std::io::{Read, Write};
use std::path::Path;

use dicom_core::Tag;
use snafu::ResultExt;

use crate::error::{CreateFileSnafu, DataSetSnafu, MetaSnafu, OpenFileSnafu, Result};
use crate::meta::FileMetaTable;
use crate::mem::InMemDicomObject;

/// A complete DICOM file: its file meta information plus its main data
/// set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDicomObject {
    meta: FileMetaTable,
    dataset: InMemDicomObject,
}

impl FileDicomObject {
    /// Pair a file meta table with a data set.
    pub fn new(meta: FileMetaTable, dataset: InMemDicomObject) -> Self {
        FileDicomObject { meta, dataset }
    }

    /// The file meta information.
    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    /// A mutable view of the file meta information.
    pub fn meta_mut(&mut self) -> &mut FileMetaTable {
        &mut self.meta
    }

    /// The main data set.
    pub fn dataset(&self) -> &InMemDicomObject {
        &self.dataset
    }

    /// A mutable view of the main data set.
    pub fn dataset_mut(&mut self) -> &mut InMemDicomObject {
        &mut self.dataset
    }

    /// Split this object into its file meta table and its data set.
    pub fn into_parts(self) -> (FileMetaTable, InMemDicomObject) {
        (self.meta, self.dataset)
    }

    /// Decode a whole DICOM file from `source`, with the default
    /// options: the entire body is read, and an odd-length value is
    /// rejected rather than tolerated.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        OpenFileOptions::new().read(source)
    }

    /// Decode a whole DICOM file from the filesystem.
    pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        OpenFileOptions::new().open(path)
    }

    /// Encode this object to `sink`, under its own declared transfer
    /// syntax (falling back to Explicit VR Little Endian if that UID is
    /// unrecognized).
    pub fn to_writer<W: Write>(&self, sink: W) -> Result<()> {
        let transfer_syntax = dicom_transfer_syntax_registry::get(&self.meta.transfer_syntax)
            .unwrap_or_else(dicom_transfer_syntax_registry::default_for_encoding);
        let meta_elements = self.meta.to_elements();
        let body_elements: Vec<_> = self.dataset.iter().cloned().collect();
        dicom_parser::write_dataset(sink, &meta_elements, transfer_syntax, &body_elements).context(DataSetSnafu)
    }

    /// Encode this object to a file on the filesystem, creating or
    /// truncating it.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).context(CreateFileSnafu { path })?;
        self.to_writer(std::io::BufWriter::new(file))
    }
}

/// Decode a whole DICOM file from `source` using the default options.
/// Equivalent to [`FileDicomObject::from_reader`].
pub fn from_reader<R: Read>(source: R) -> Result<FileDicomObject> {
    FileDicomObject::from_reader(source)
}

/// Decode a whole DICOM file from the filesystem using the default
/// options. Equivalent to [`FileDicomObject::open_file`].
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<FileDicomObject> {
    FileDicomObject::open_file(path)
}

/// A builder for the options controlling how a DICOM file is read: where
/// to stop (to avoid decoding pixel data a caller does not want), and
/// whether to tolerate a nonconformant odd-length value instead of
/// rejecting it outright.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenFileOptions {
    stop_before_tag: Option<Tag>,
    tolerate_odd_length: bool,
}

impl OpenFileOptions {
    /// The default options: read the whole file, reject odd lengths.
    pub fn new() -> Self {
        OpenFileOptions::default()
    }

    /// Stop decoding the body as soon as an element with this tag (or a
    /// later one) would come next, leaving it and everything after it
    /// out of the resulting data set. Typically used to stop just before
    /// `PixelData` when only header attributes are needed.
    pub fn read_until(mut self, tag: Tag) -> Self {
        self.stop_before_tag = Some(tag);
        self
    }

    /// Whether to tolerate a value with an odd on-wire length instead of
    /// rejecting the file outright.
    pub fn tolerate_odd_length(mut self, tolerate: bool) -> Self {
        self.tolerate_odd_length = tolerate;
        self
    }

    /// Decode a whole DICOM file from `source` with these options.
    pub fn read<R: Read>(self, source: R) -> Result<FileDicomObject> {
        let mut meta_elements = Vec::new();
        let mut dataset = InMemDicomObject::new();

        let options = dicom_parser::ReadOptions {
            stop_before_tag: self.stop_before_tag,
            tolerate_odd_length: self.tolerate_odd_length,
        };

        dicom_parser::read_dataset_with_options(source, options, |elem| {
            if elem.tag().is_meta() {
                meta_elements.push(elem);
            } else {
                dataset.put(elem);
            }
        })
        .context(DataSetSnafu)?;

        let meta = FileMetaTable::from_element_iter(&meta_elements).context(MetaSnafu)?;
        Ok(FileDicomObject::new(meta, dataset))
    }

    /// Decode a whole DICOM file from the filesystem with these options.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<FileDicomObject> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).context(OpenFileSnafu { path })?;
        self.read(std::io::BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, VR};
    use dicom_dictionary_std::tags;

    fn sample_object() -> FileDicomObject {
        let meta = FileMetaTable::builder()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("1.2.3.4.5")
            .transfer_syntax("1.2.840.10008.1.2.1")
            .build()
            .unwrap();

        let mut dataset = InMemDicomObject::new();
        let mut name = DataElement::new(tags::PATIENT_NAME, VR::PN);
        name.set_text("DOE^JANE").unwrap();
        dataset.put(name);
        let mut rows = DataElement::new(tags::ROWS, VR::US);
        rows.set_u16(256).unwrap();
        dataset.put(rows);

        FileDicomObject::new(meta, dataset)
    }

    #[test]
    fn round_trips_through_a_byte_buffer() {
        let original = sample_object();
        let mut buf = Vec::new();
        original.to_writer(&mut buf).unwrap();

        let read_back = FileDicomObject::from_reader(std::io::Cursor::new(buf)).unwrap();
        assert_eq!(read_back.meta().transfer_syntax, "1.2.840.10008.1.2.1");
        assert_eq!(
            read_back.dataset().get(tags::PATIENT_NAME).unwrap().get_text().unwrap(),
            "DOE^JANE"
        );
        assert_eq!(read_back.dataset().get(tags::ROWS).unwrap().get_u16().unwrap(), 256);
    }

    #[test]
    fn round_trips_through_a_file() {
        let original = sample_object();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.dcm");
        original.save_to_file(&path).unwrap();

        let read_back = FileDicomObject::open_file(&path).unwrap();
        assert_eq!(
            read_back.dataset().get(tags::PATIENT_NAME).unwrap().get_text().unwrap(),
            "DOE^JANE"
        );
    }

    #[test]
    fn read_until_stops_before_the_given_tag() {
        let original = sample_object();
        let mut buf = Vec::new();
        original.to_writer(&mut buf).unwrap();

        let read_back = OpenFileOptions::new()
            .read_until(tags::ROWS)
            .read(std::io::Cursor::new(buf))
            .unwrap();
        assert!(read_back.dataset().has(tags::PATIENT_NAME));
        assert!(!read_back.dataset().has(tags::ROWS));
    }
}

//! The in-memory data set: an ordered collection of data elements.

use std::collections::BTreeMap;

use dicom_core::{DataElement, Result, Tag, VR};

/// An in-memory DICOM data set: a collection of data elements keyed by
/// tag, always iterated in ascending tag order (the canonical order the
/// standard requires data elements to appear on the wire in).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemDicomObject {
    entries: BTreeMap<Tag, DataElement>,
}

impl InMemDicomObject {
    /// Build an empty data set.
    pub fn new() -> Self {
        InMemDicomObject::default()
    }

    /// Build a data set from an already-decoded sequence of elements.
    /// If the same tag appears more than once, the last occurrence wins.
    pub fn from_element_iter(elements: impl IntoIterator<Item = DataElement>) -> Self {
        let mut obj = InMemDicomObject::new();
        for elem in elements {
            obj.put(elem);
        }
        obj
    }

    /// Insert an element, replacing any existing element with the same
    /// tag. Returns the element it replaced, if any.
    pub fn put(&mut self, elem: DataElement) -> Option<DataElement> {
        self.entries.insert(elem.tag(), elem)
    }

    /// Remove the element with the given tag, if present, returning it.
    pub fn remove(&mut self, tag: Tag) -> Option<DataElement> {
        self.entries.remove(&tag)
    }

    /// Whether an element with the given tag is present.
    pub fn has(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Retrieve the element with the given tag.
    pub fn get(&self, tag: Tag) -> Option<&DataElement> {
        self.entries.get(&tag)
    }

    /// Retrieve a mutable reference to the element with the given tag.
    pub fn get_mut(&mut self, tag: Tag) -> Option<&mut DataElement> {
        self.entries.get_mut(&tag)
    }

    /// The number of elements in the data set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the data set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over the elements in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = &DataElement> {
        self.entries.values()
    }

    /// Retrieve a textual value in one call. `None` if the tag is absent
    /// or the stored element's VR is not textual.
    pub fn get_string(&self, tag: Tag) -> Option<String> {
        self.get(tag)?.get_text().ok()
    }

    /// Set a textual value in one call, constructing the element on the
    /// fly with the given VR if it is not already present.
    pub fn set_string(&mut self, tag: Tag, vr: VR, value: &str) -> Result<()> {
        let mut elem = DataElement::new(tag, vr);
        elem.set_text(value)?;
        self.put(elem);
        Ok(())
    }

    /// Retrieve a 16-bit unsigned value in one call. `None` if the tag is
    /// absent or the stored element's VR is not `US`/`AT`.
    pub fn get_u16(&self, tag: Tag) -> Option<u16> {
        self.get(tag)?.get_u16().ok()
    }

    /// Set a 16-bit unsigned value in one call, constructing the element
    /// on the fly with VR `US`.
    pub fn set_u16(&mut self, tag: Tag, value: u16) -> Result<()> {
        let mut elem = DataElement::new(tag, VR::US);
        elem.set_u16(value)?;
        self.put(elem);
        Ok(())
    }

    /// Retrieve a 16-bit signed value in one call. `None` if the tag is
    /// absent or the stored element's VR is not `SS`.
    pub fn get_i16(&self, tag: Tag) -> Option<i16> {
        self.get(tag)?.get_i16().ok()
    }

    /// Set a 16-bit signed value in one call, constructing the element on
    /// the fly with VR `SS`.
    pub fn set_i16(&mut self, tag: Tag, value: i16) -> Result<()> {
        let mut elem = DataElement::new(tag, VR::SS);
        elem.set_i16(value)?;
        self.put(elem);
        Ok(())
    }

    /// Retrieve a 32-bit signed value in one call. `None` if the tag is
    /// absent or the stored element's VR is not `SL`.
    pub fn get_i32(&self, tag: Tag) -> Option<i32> {
        self.get(tag)?.get_i32().ok()
    }

    /// Set a 32-bit signed value in one call, constructing the element on
    /// the fly with VR `SL`.
    pub fn set_i32(&mut self, tag: Tag, value: i32) -> Result<()> {
        let mut elem = DataElement::new(tag, VR::SL);
        elem.set_i32(value)?;
        self.put(elem);
        Ok(())
    }

    /// Retrieve a 32-bit unsigned value in one call. `None` if the tag is
    /// absent or the stored element's VR is not `UL`.
    pub fn get_u32(&self, tag: Tag) -> Option<u32> {
        self.get(tag)?.get_u32().ok()
    }

    /// Set a 32-bit unsigned value in one call, constructing the element
    /// on the fly with VR `UL`.
    pub fn set_u32(&mut self, tag: Tag, value: u32) -> Result<()> {
        let mut elem = DataElement::new(tag, VR::UL);
        elem.set_u32(value)?;
        self.put(elem);
        Ok(())
    }

    /// Retrieve a single-precision float value in one call. `None` if the
    /// tag is absent or the stored element's VR is not `FL`.
    pub fn get_f32(&self, tag: Tag) -> Option<f32> {
        self.get(tag)?.get_f32().ok()
    }

    /// Set a single-precision float value in one call, constructing the
    /// element on the fly with VR `FL`.
    pub fn set_f32(&mut self, tag: Tag, value: f32) -> Result<()> {
        let mut elem = DataElement::new(tag, VR::FL);
        elem.set_f32(value)?;
        self.put(elem);
        Ok(())
    }

    /// Retrieve a double-precision float value in one call. `None` if the
    /// tag is absent or the stored element's VR is not `FD`.
    pub fn get_f64(&self, tag: Tag) -> Option<f64> {
        self.get(tag)?.get_f64().ok()
    }

    /// Set a double-precision float value in one call, constructing the
    /// element on the fly with VR `FD`.
    pub fn set_f64(&mut self, tag: Tag, value: f64) -> Result<()> {
        let mut elem = DataElement::new(tag, VR::FD);
        elem.set_f64(value)?;
        self.put(elem);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a InMemDicomObject {
    type Item = &'a DataElement;
    type IntoIter = std::collections::btree_map::Values<'a, Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl FromIterator<DataElement> for InMemDicomObject {
    fn from_iter<I: IntoIterator<Item = DataElement>>(iter: I) -> Self {
        InMemDicomObject::from_element_iter(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::VR;

    #[test]
    fn put_get_remove_round_trip() {
        let mut obj = InMemDicomObject::new();
        assert!(obj.is_empty());

        let mut rows = DataElement::new(Tag(0x0028, 0x0010), VR::US);
        rows.set_u16(512).unwrap();
        obj.put(rows);

        assert!(obj.has(Tag(0x0028, 0x0010)));
        assert_eq!(obj.get(Tag(0x0028, 0x0010)).unwrap().get_u16().unwrap(), 512);
        assert_eq!(obj.len(), 1);

        let removed = obj.remove(Tag(0x0028, 0x0010)).unwrap();
        assert_eq!(removed.get_u16().unwrap(), 512);
        assert!(obj.is_empty());
    }

    #[test]
    fn iterates_in_ascending_tag_order() {
        let mut obj = InMemDicomObject::new();
        obj.put(DataElement::new(Tag(0x0010, 0x0010), VR::PN));
        obj.put(DataElement::new(Tag(0x0008, 0x0060), VR::CS));
        obj.put(DataElement::new(Tag(0x0020, 0x000D), VR::UI));

        let tags: Vec<Tag> = obj.iter().map(|e| e.tag()).collect();
        assert_eq!(
            tags,
            vec![Tag(0x0008, 0x0060), Tag(0x0010, 0x0010), Tag(0x0020, 0x000D)]
        );
    }

    #[test]
    fn inserting_the_same_tag_twice_replaces() {
        let mut obj = InMemDicomObject::new();
        let mut first = DataElement::new(Tag(0x0028, 0x0010), VR::US);
        first.set_u16(1).unwrap();
        let mut second = DataElement::new(Tag(0x0028, 0x0010), VR::US);
        second.set_u16(2).unwrap();

        obj.put(first);
        let replaced = obj.put(second);
        assert_eq!(replaced.unwrap().get_u16().unwrap(), 1);
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get(Tag(0x0028, 0x0010)).unwrap().get_u16().unwrap(), 2);
    }

    #[test]
    fn string_convenience_accessors_round_trip() {
        let mut obj = InMemDicomObject::new();
        obj.set_string(Tag(0x0010, 0x0010), VR::PN, "DOE^JOHN").unwrap();
        assert_eq!(obj.get_string(Tag(0x0010, 0x0010)).as_deref(), Some("DOE^JOHN"));
    }

    #[test]
    fn numeric_convenience_accessors_round_trip() {
        let mut obj = InMemDicomObject::new();
        obj.set_u16(Tag(0x0028, 0x0010), 512).unwrap();
        obj.set_i16(Tag(0x0028, 0x0103), -7).unwrap();
        obj.set_i32(Tag(0x0018, 0x1151), -42).unwrap();
        obj.set_u32(Tag(0x0002, 0x0000), 1234).unwrap();
        obj.set_f32(Tag(0x0018, 0x1164), 0.5).unwrap();
        obj.set_f64(Tag(0x0018, 0x1165), 0.25).unwrap();

        assert_eq!(obj.get_u16(Tag(0x0028, 0x0010)), Some(512));
        assert_eq!(obj.get_i16(Tag(0x0028, 0x0103)), Some(-7));
        assert_eq!(obj.get_i32(Tag(0x0018, 0x1151)), Some(-42));
        assert_eq!(obj.get_u32(Tag(0x0002, 0x0000)), Some(1234));
        assert_eq!(obj.get_f32(Tag(0x0018, 0x1164)), Some(0.5));
        assert_eq!(obj.get_f64(Tag(0x0018, 0x1165)), Some(0.25));
    }

    #[test]
    fn convenience_getters_are_none_for_missing_or_mismatched_vr() {
        let mut obj = InMemDicomObject::new();
        assert_eq!(obj.get_u16(Tag(0x0028, 0x0010)), None);

        obj.put(DataElement::new(Tag(0x0028, 0x0010), VR::PN));
        assert_eq!(obj.get_u16(Tag(0x0028, 0x0010)), None);
    }

    #[test]
    fn set_string_with_wrong_vr_reports_vr_mismatch() {
        let mut obj = InMemDicomObject::new();
        let err = obj.set_string(Tag(0x0028, 0x0010), VR::US, "abc").unwrap_err();
        assert!(matches!(err, dicom_core::Error::VrMismatch { .. }));
    }
}

//! The tag/VR/length framing shared by every data element.

use crate::length::Length;
use crate::tag::Tag;
use crate::vr::VR;

/// A trait for any data type carrying a DICOM element header.
pub trait Header {
    /// The element's tag.
    fn tag(&self) -> Tag;
    /// The element's value representation.
    fn vr(&self) -> VR;
    /// The value's length on the wire, excluding the tag/VR/length framing.
    fn len(&self) -> Length;

    /// Whether this header has no value bytes.
    fn is_empty(&self) -> bool {
        self.len().get() == Some(0)
    }
}

/// The tag, VR and on-wire length of a data element, without its value
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataElementHeader {
    /// The element's tag.
    pub tag: Tag,
    /// The element's value representation.
    pub vr: VR,
    /// The value's length on the wire.
    pub len: Length,
}

impl DataElementHeader {
    /// Build a new header from its parts.
    pub fn new(tag: Tag, vr: VR, len: Length) -> Self {
        DataElementHeader { tag, vr, len }
    }
}

impl Header for DataElementHeader {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn vr(&self) -> VR {
        self.vr
    }
    fn len(&self) -> Length {
        self.len
    }
}

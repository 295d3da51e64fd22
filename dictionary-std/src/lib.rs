//! The standard DICOM attribute dictionary.
//!
//! This crate provides a read-only, lazily-initialized mapping from
//! attribute tag to `{default VR, human name, keyword}`, used by the
//! implicit-VR decoder in `dicom-parser` to recover type information that
//! implicit-VR encoding does not place on the wire, and as a convenience
//! for looking up attributes by name.

#![warn(missing_debug_implementations, missing_docs)]

mod entries;
pub mod tags;

use dicom_core::{Tag, VR};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::Debug;

pub use entries::DictionaryEntryStatic;

/// A dictionary entry: an attribute's tag, keyword, name and default VR.
pub trait DictionaryEntry {
    /// The attribute's tag.
    fn tag(&self) -> Tag;
    /// The attribute's keyword (alias), as used in the standard.
    fn keyword(&self) -> &str;
    /// The attribute's human-readable name.
    fn name(&self) -> &str;
    /// The attribute's default value representation.
    fn vr(&self) -> VR;
}

impl DictionaryEntry for DictionaryEntryStatic {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn keyword(&self) -> &str {
        self.keyword
    }
    fn name(&self) -> &str {
        self.name
    }
    fn vr(&self) -> VR {
        self.vr
    }
}

/// A dictionary of DICOM attributes: tag ↔ entry lookup.
///
/// The methods herein take no generic parameters so that the trait can be
/// used as a trait object (e.g. by a decoder that accepts any dictionary).
pub trait DataDictionary: Debug {
    /// The dictionary's entry type.
    type Entry: DictionaryEntry;

    /// Look up an attribute by tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Look up an attribute by its keyword.
    fn by_keyword(&self, keyword: &str) -> Option<&Self::Entry>;

    /// Look up an attribute's default VR, falling back to `VR::UN` when
    /// the tag is not in the dictionary. This is the convenience used by
    /// implicit-VR decoding: the codec itself additionally falls back to
    /// `VR::OB` rather than `VR::UN` for opaque bytes, per the decoder's
    /// documented behavior.
    fn default_vr(&self, tag: Tag) -> VR {
        self.by_tag(tag).map(|e| e.vr()).unwrap_or(VR::UN)
    }
}

struct Registry {
    by_tag: HashMap<Tag, &'static DictionaryEntryStatic>,
    by_keyword: HashMap<&'static str, &'static DictionaryEntryStatic>,
}

fn build_registry() -> Registry {
    let mut by_tag = HashMap::with_capacity(entries::ENTRIES.len());
    let mut by_keyword = HashMap::with_capacity(entries::ENTRIES.len());
    for entry in entries::ENTRIES {
        by_tag.insert(entry.tag, entry);
        by_keyword.insert(entry.keyword, entry);
    }
    Registry { by_tag, by_keyword }
}

static REGISTRY: Lazy<Registry> = Lazy::new(build_registry);

/// The standard DICOM attribute dictionary, built once on first use and
/// immutable thereafter. Safe to read from any number of threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    type Entry = DictionaryEntryStatic;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        REGISTRY.by_tag.get(&tag).copied()
    }

    fn by_keyword(&self, keyword: &str) -> Option<&Self::Entry> {
        REGISTRY.by_keyword.get(keyword).copied()
    }
}

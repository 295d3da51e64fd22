//! A registry of DICOM transfer syntaxes.
//!
//! A transfer syntax UID classifies the body encoding of a DICOM stream
//! along three independent axes: whether VRs are written explicitly,
//! whether integers are big-endian, and whether pixel data is compressed.
//! This crate only *fully* encodes/decodes the three uncompressed
//! transfer syntaxes named in the codec's scope; compressed syntaxes are
//! recognized (so that callers get a clear `UnsupportedTransferSyntax`
//! error instead of silent corruption) but their pixel data is never
//! decoded here.

#![warn(missing_debug_implementations, missing_docs)]

mod entries;

use lazy_static::lazy_static;
use std::collections::HashMap;

pub use entries::{
    EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
};

/// A DICOM transfer syntax: a UID together with the encoding rules it
/// selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferSyntax {
    /// The transfer syntax UID.
    pub uid: &'static str,
    /// A human-readable name.
    pub name: &'static str,
    /// Whether the VR is written explicitly on the wire (as opposed to
    /// being recovered from a data dictionary).
    pub explicit_vr: bool,
    /// Whether multi-byte integers are big-endian (as opposed to
    /// little-endian).
    pub big_endian: bool,
    /// Whether the body's pixel data uses a compressed encoding this
    /// codec does not implement.
    pub compressed: bool,
}

impl TransferSyntax {
    /// `Endianness` suitable for use with `byteordered`.
    pub fn endianness(&self) -> byteordered::Endianness {
        if self.big_endian {
            byteordered::Endianness::Big
        } else {
            byteordered::Endianness::Little
        }
    }

    /// Whether this transfer syntax is one of the three uncompressed
    /// syntaxes this codec fully supports.
    pub fn is_fully_supported(&self) -> bool {
        !self.compressed
    }
}

struct Registry {
    by_uid: HashMap<&'static str, &'static TransferSyntax>,
}

fn build_registry() -> Registry {
    let mut by_uid = HashMap::new();
    for ts in entries::ALL {
        // a transfer syntax UID may carry a trailing NUL from its
        // on-wire padding; the registry is always queried with a
        // caller-trimmed UID, but indexing ignores a trailing NUL for
        // leniency against callers that forget to trim it.
        by_uid.insert(ts.uid, ts);
    }
    Registry { by_uid }
}

lazy_static! {
    static ref REGISTRY: Registry = build_registry();
}

/// Look up a transfer syntax by UID. Accepts a UID with or without a
/// trailing NUL padding byte.
pub fn get(uid: &str) -> Option<&'static TransferSyntax> {
    let uid = uid.trim_end_matches('\0').trim_end();
    REGISTRY.by_uid.get(uid).copied().or_else(|| {
        tracing::debug!(uid, "unrecognized transfer syntax UID");
        None
    })
}

/// The default transfer syntax used for encoding when the caller does not
/// specify one: Explicit VR Little Endian.
pub fn default_for_encoding() -> &'static TransferSyntax {
    &EXPLICIT_VR_LITTLE_ENDIAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_the_three_core_syntaxes() {
        let ivrle = get("1.2.840.10008.1.2").unwrap();
        assert!(!ivrle.explicit_vr);
        assert!(!ivrle.big_endian);
        assert!(!ivrle.compressed);

        let evrle = get("1.2.840.10008.1.2.1").unwrap();
        assert!(evrle.explicit_vr);
        assert!(!evrle.big_endian);

        let evrbe = get("1.2.840.10008.1.2.2").unwrap();
        assert!(evrbe.explicit_vr);
        assert!(evrbe.big_endian);
    }

    #[test]
    fn tolerates_trailing_nul_padding() {
        assert!(get("1.2.840.10008.1.2.1\0").is_some());
    }

    #[test]
    fn unknown_uid_is_none() {
        assert!(get("9.9.9.9").is_none());
    }

    #[test]
    fn compressed_syntaxes_default_to_explicit_vr() {
        // per the codec's documented behavior, unknown/compressed
        // transfer syntaxes are classified explicit-VR by default.
        let jpeg = get("1.2.840.10008.1.2.4.50").unwrap();
        assert!(jpeg.explicit_vr);
        assert!(jpeg.compressed);
    }
}

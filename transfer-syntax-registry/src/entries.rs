//! Compiled transfer syntax specifiers.

use crate::TransferSyntax;

// -- the three uncompressed transfer syntaxes, fully supported --

/// Implicit VR Little Endian (1.2.840.10008.1.2).
pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
    uid: "1.2.840.10008.1.2",
    name: "Implicit VR Little Endian",
    explicit_vr: false,
    big_endian: false,
    compressed: false,
};

/// Explicit VR Little Endian (1.2.840.10008.1.2.1).
pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
    uid: "1.2.840.10008.1.2.1",
    name: "Explicit VR Little Endian",
    explicit_vr: true,
    big_endian: false,
    compressed: false,
};

/// Explicit VR Big Endian (1.2.840.10008.1.2.2), retired.
pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = TransferSyntax {
    uid: "1.2.840.10008.1.2.2",
    name: "Explicit VR Big Endian",
    explicit_vr: true,
    big_endian: true,
    compressed: false,
};

// -- recognized but unsupported (compressed) transfer syntaxes --
//
// These are classified so that callers get a clear
// `unsupported-transfer-syntax` error, never silent corruption. Per the
// codec's documented behavior, unknown/compressed UIDs default to
// `explicit_vr: true`.

const fn compressed(uid: &'static str, name: &'static str) -> TransferSyntax {
    TransferSyntax {
        uid,
        name,
        explicit_vr: true,
        big_endian: false,
        compressed: true,
    }
}

/// Deflated Explicit VR Little Endian (1.2.840.10008.1.2.1.99).
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax =
    compressed("1.2.840.10008.1.2.1.99", "Deflated Explicit VR Little Endian");

/// JPEG Baseline (Process 1) (1.2.840.10008.1.2.4.50).
pub const JPEG_BASELINE: TransferSyntax =
    compressed("1.2.840.10008.1.2.4.50", "JPEG Baseline (Process 1)");

/// JPEG Extended (Process 2 & 4) (1.2.840.10008.1.2.4.51).
pub const JPEG_EXTENDED: TransferSyntax =
    compressed("1.2.840.10008.1.2.4.51", "JPEG Extended (Process 2 & 4)");

/// JPEG Lossless, Non-Hierarchical (Process 14) (1.2.840.10008.1.2.4.57).
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: TransferSyntax = compressed(
    "1.2.840.10008.1.2.4.57",
    "JPEG Lossless, Non-Hierarchical (Process 14)",
);

/// JPEG-LS Lossless Image Compression (1.2.840.10008.1.2.4.80).
pub const JPEG_LS_LOSSLESS: TransferSyntax = compressed(
    "1.2.840.10008.1.2.4.80",
    "JPEG-LS Lossless Image Compression",
);

/// JPEG 2000 Image Compression (Lossless Only) (1.2.840.10008.1.2.4.90).
pub const JPEG_2000_LOSSLESS_ONLY: TransferSyntax = compressed(
    "1.2.840.10008.1.2.4.90",
    "JPEG 2000 Image Compression (Lossless Only)",
);

/// JPEG 2000 Image Compression (1.2.840.10008.1.2.4.91).
pub const JPEG_2000: TransferSyntax =
    compressed("1.2.840.10008.1.2.4.91", "JPEG 2000 Image Compression");

/// RLE Lossless (1.2.840.10008.1.2.5).
pub const RLE_LOSSLESS: TransferSyntax = compressed("1.2.840.10008.1.2.5", "RLE Lossless");

/// All transfer syntaxes known to this registry.
pub static ALL: &[TransferSyntax] = &[
    IMPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_BIG_ENDIAN,
    DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    JPEG_BASELINE,
    JPEG_EXTENDED,
    JPEG_LOSSLESS_NON_HIERARCHICAL,
    JPEG_LS_LOSSLESS,
    JPEG_2000_LOSSLESS_ONLY,
    JPEG_2000,
    RLE_LOSSLESS,
];

//! The value representation (VR) catalog.
//!
//! A VR is a two-letter code that determines how a data element's value
//! is encoded on the wire: its padding policy, whether it uses the 2-byte
//! or 4-byte length-field form under explicit-VR encoding, and (for
//! fixed-width binary VRs) the size of a single value.

use std::fmt;
use std::str::FromStr;

/// The padding byte used to bring a textual value to even length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Pad with an ASCII space (0x20). Used by most textual VRs.
    Space,
    /// Pad with a NUL byte (0x00). Used by UI (Unique Identifier).
    Nul,
    /// This VR is not padded by the codec (binary VRs, whose fixed size is
    /// always even, and `UN`/opaque VRs whose padding is caller-defined).
    None,
}

/// A DICOM value representation.
///
/// This is a closed enumeration: decoding an unrecognized two-letter code
/// never fails, it resolves to [`VR::UN`] (see [`VR::from_binary`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum VR {
    AE,
    AS,
    AT,
    CS,
    DA,
    DS,
    DT,
    FL,
    FD,
    IS,
    LO,
    LT,
    OB,
    OD,
    OF,
    OL,
    OW,
    PN,
    SH,
    SL,
    SQ,
    SS,
    ST,
    TM,
    UC,
    UI,
    UL,
    UN,
    UR,
    US,
    UT,
}

impl VR {
    /// Parse a VR from its two-byte wire representation. Unknown codes
    /// decode to [`VR::UN`], never an error — the wire cannot express a
    /// framing failure through an unrecognized VR code.
    pub fn from_binary(chars: [u8; 2]) -> VR {
        match &chars {
            b"AE" => VR::AE,
            b"AS" => VR::AS,
            b"AT" => VR::AT,
            b"CS" => VR::CS,
            b"DA" => VR::DA,
            b"DS" => VR::DS,
            b"DT" => VR::DT,
            b"FL" => VR::FL,
            b"FD" => VR::FD,
            b"IS" => VR::IS,
            b"LO" => VR::LO,
            b"LT" => VR::LT,
            b"OB" => VR::OB,
            b"OD" => VR::OD,
            b"OF" => VR::OF,
            b"OL" => VR::OL,
            b"OW" => VR::OW,
            b"PN" => VR::PN,
            b"SH" => VR::SH,
            b"SL" => VR::SL,
            b"SQ" => VR::SQ,
            b"SS" => VR::SS,
            b"ST" => VR::ST,
            b"TM" => VR::TM,
            b"UC" => VR::UC,
            b"UI" => VR::UI,
            b"UL" => VR::UL,
            b"UR" => VR::UR,
            b"US" => VR::US,
            b"UT" => VR::UT,
            _ => VR::UN,
        }
    }

    /// The two-letter code for this VR.
    pub fn to_str(self) -> &'static str {
        match self {
            VR::AE => "AE",
            VR::AS => "AS",
            VR::AT => "AT",
            VR::CS => "CS",
            VR::DA => "DA",
            VR::DS => "DS",
            VR::DT => "DT",
            VR::FL => "FL",
            VR::FD => "FD",
            VR::IS => "IS",
            VR::LO => "LO",
            VR::LT => "LT",
            VR::OB => "OB",
            VR::OD => "OD",
            VR::OF => "OF",
            VR::OL => "OL",
            VR::OW => "OW",
            VR::PN => "PN",
            VR::SH => "SH",
            VR::SL => "SL",
            VR::SQ => "SQ",
            VR::SS => "SS",
            VR::ST => "ST",
            VR::TM => "TM",
            VR::UC => "UC",
            VR::UI => "UI",
            VR::UL => "UL",
            VR::UN => "UN",
            VR::UR => "UR",
            VR::US => "US",
            VR::UT => "UT",
        }
    }

    /// The two ASCII bytes used to encode this VR on the wire.
    pub fn to_bytes(self) -> [u8; 2] {
        let s = self.to_str().as_bytes();
        [s[0], s[1]]
    }

    /// Whether this VR holds textual (possibly multi-valued, `\`-separated)
    /// content.
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            VR::AE
                | VR::AS
                | VR::CS
                | VR::DA
                | VR::DS
                | VR::DT
                | VR::IS
                | VR::LO
                | VR::LT
                | VR::PN
                | VR::SH
                | VR::ST
                | VR::TM
                | VR::UC
                | VR::UI
                | VR::UR
                | VR::UT
        )
    }

    /// Whether this VR uses the 4-byte (long) length field under
    /// explicit-VR encoding, with 2 reserved bytes preceding it. This is
    /// exactly the set `{OB, OD, OF, OL, OW, SQ, UC, UR, UT, UN}`.
    pub fn has_long_length(self) -> bool {
        matches!(
            self,
            VR::OB | VR::OD | VR::OF | VR::OL | VR::OW | VR::SQ | VR::UC | VR::UR | VR::UT | VR::UN
        )
    }

    /// The fixed size in bytes of a single value for fixed-width binary
    /// VRs, or `0` if this VR's values are variable-length.
    pub fn fixed_size(self) -> usize {
        match self {
            VR::AT => 4,
            VR::FL => 4,
            VR::FD => 8,
            VR::SL => 4,
            VR::SS => 2,
            VR::UL => 4,
            VR::US => 2,
            _ => 0,
        }
    }

    /// Whether this is a fixed-width binary VR.
    pub fn is_fixed_width_binary(self) -> bool {
        self.fixed_size() != 0
    }

    /// The padding byte policy used to bring an odd-length value to even
    /// length.
    pub fn padding(self) -> Padding {
        if self.is_textual() {
            if self == VR::UI {
                Padding::Nul
            } else {
                Padding::Space
            }
        } else {
            Padding::None
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for VR {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(());
        }
        match VR::from_binary([bytes[0], bytes[1]]) {
            VR::UN if s != "UN" => Err(()),
            vr => Ok(vr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_string_on_the_closed_set() {
        let all = [
            VR::AE,
            VR::AS,
            VR::AT,
            VR::CS,
            VR::DA,
            VR::DS,
            VR::DT,
            VR::FL,
            VR::FD,
            VR::IS,
            VR::LO,
            VR::LT,
            VR::OB,
            VR::OD,
            VR::OF,
            VR::OL,
            VR::OW,
            VR::PN,
            VR::SH,
            VR::SL,
            VR::SQ,
            VR::SS,
            VR::ST,
            VR::TM,
            VR::UC,
            VR::UI,
            VR::UL,
            VR::UN,
            VR::UR,
            VR::US,
            VR::UT,
        ];
        for vr in all {
            assert_eq!(VR::from_binary(vr.to_bytes()), vr);
            assert_eq!(vr.to_str().parse::<VR>(), Ok(vr));
        }
    }

    #[test]
    fn unknown_code_resolves_to_un() {
        assert_eq!(VR::from_binary(*b"ZZ"), VR::UN);
    }

    #[test]
    fn long_length_set_is_exact() {
        for vr in [
            VR::OB,
            VR::OD,
            VR::OF,
            VR::OL,
            VR::OW,
            VR::SQ,
            VR::UC,
            VR::UR,
            VR::UT,
            VR::UN,
        ] {
            assert!(vr.has_long_length(), "{:?} should use long length", vr);
        }
        for vr in [VR::AE, VR::US, VR::UL, VR::PN, VR::UI, VR::CS] {
            assert!(!vr.has_long_length(), "{:?} should use short length", vr);
        }
    }

    #[test]
    fn padding_policy() {
        assert_eq!(VR::UI.padding(), Padding::Nul);
        assert_eq!(VR::PN.padding(), Padding::Space);
        assert_eq!(VR::US.padding(), Padding::None);
    }
}

//! Value-level errors shared by the core data element accessors.

use crate::tag::Tag;
use crate::vr::VR;
use snafu::Snafu;
use std::fmt;

/// The VR (or set of VRs) an accessor required, for [`Error::VrMismatch`].
///
/// Most accessors require one exact VR, but a few (the textual accessors,
/// and `get_u16`/`set_u16` which also accept `AT`) accept more than one.
/// This carries that requirement through to the error message instead of
/// collapsing it to a single VR that may not even be among the ones the
/// accessor actually checked for.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExpectedVr {
    /// The accessor requires exactly this VR.
    Exactly(VR),
    /// The accessor requires any textual VR.
    Textual,
}

impl fmt::Display for ExpectedVr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedVr::Exactly(vr) => write!(f, "{}", vr),
            ExpectedVr::Textual => write!(f, "a textual VR"),
        }
    }
}

/// Errors produced by [`crate::DataElement`] accessors.
///
/// These are value-level failures: they never abort a decode or encode in
/// progress, they only report that a particular accessor call could not be
/// satisfied against the element's current VR or stored bytes.
#[derive(Debug, Snafu, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum Error {
    /// The accessor requires a VR that does not match the element's VR.
    #[snafu(display("accessor requires {}, but element {} has VR {}", expected, tag, actual))]
    VrMismatch {
        /// The tag of the element that was accessed.
        tag: Tag,
        /// The VR (or VR requirement) the accessor required.
        expected: ExpectedVr,
        /// The VR actually stored on the element.
        actual: VR,
    },

    /// The element's stored bytes are shorter than the fixed size required
    /// by the accessor.
    #[snafu(display(
        "truncated value for element {}: expected at least {} bytes, found {}",
        tag,
        expected,
        found
    ))]
    Truncated {
        /// The tag of the element that was accessed.
        tag: Tag,
        /// The minimum number of bytes required.
        expected: usize,
        /// The number of bytes actually stored.
        found: usize,
    },
}

/// Result alias for core data element accessor operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

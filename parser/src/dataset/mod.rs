//! The stateful data-set reader and writer: the decoder/encoder state
//! machines that tie the element-framing codec (`dicom_encoding`) to a
//! data dictionary and a transfer syntax to read or write a whole stream.

pub mod read;
pub mod write;

pub use read::{read_dataset, read_dataset_with_options, CodecMode, ReadOptions, ReadOutcome};
pub use write::write_dataset;

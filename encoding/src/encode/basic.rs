//! Endianness-parameterized primitive encoders.

use crate::encode::BasicEncode;
use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use std::io::Write;

/// A [`BasicEncode`] implementation that writes little-endian integers.
#[derive(Debug, Default, Clone, Copy)]
pub struct LittleEndianBasicEncoder;

/// A [`BasicEncode`] implementation that writes big-endian integers.
#[derive(Debug, Default, Clone, Copy)]
pub struct BigEndianBasicEncoder;

macro_rules! impl_basic_encode {
    ($ty:ty, $endianness:expr, $order:ty) => {
        impl BasicEncode for $ty {
            fn endianness(&self) -> Endianness {
                $endianness
            }

            fn encode_us<S: Write>(&self, mut target: S, value: u16) -> std::io::Result<()> {
                let mut buf = [0u8; 2];
                <$order as ByteOrder>::write_u16(&mut buf, value);
                target.write_all(&buf)
            }

            fn encode_ul<S: Write>(&self, mut target: S, value: u32) -> std::io::Result<()> {
                let mut buf = [0u8; 4];
                <$order as ByteOrder>::write_u32(&mut buf, value);
                target.write_all(&buf)
            }

            fn encode_ss<S: Write>(&self, mut target: S, value: i16) -> std::io::Result<()> {
                let mut buf = [0u8; 2];
                <$order as ByteOrder>::write_i16(&mut buf, value);
                target.write_all(&buf)
            }

            fn encode_sl<S: Write>(&self, mut target: S, value: i32) -> std::io::Result<()> {
                let mut buf = [0u8; 4];
                <$order as ByteOrder>::write_i32(&mut buf, value);
                target.write_all(&buf)
            }

            fn encode_fl<S: Write>(&self, mut target: S, value: f32) -> std::io::Result<()> {
                let mut buf = [0u8; 4];
                <$order as ByteOrder>::write_f32(&mut buf, value);
                target.write_all(&buf)
            }

            fn encode_fd<S: Write>(&self, mut target: S, value: f64) -> std::io::Result<()> {
                let mut buf = [0u8; 8];
                <$order as ByteOrder>::write_f64(&mut buf, value);
                target.write_all(&buf)
            }
        }
    };
}

impl_basic_encode!(LittleEndianBasicEncoder, Endianness::Little, LittleEndian);
impl_basic_encode!(BigEndianBasicEncoder, Endianness::Big, BigEndian);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_u16() {
        let enc = LittleEndianBasicEncoder;
        let mut buf = Vec::new();
        enc.encode_us(&mut buf, 0x0102).unwrap();
        assert_eq!(buf, vec![0x02, 0x01]);
    }

    #[test]
    fn big_endian_u16() {
        let enc = BigEndianBasicEncoder;
        let mut buf = Vec::new();
        enc.encode_us(&mut buf, 0x0102).unwrap();
        assert_eq!(buf, vec![0x01, 0x02]);
    }
}

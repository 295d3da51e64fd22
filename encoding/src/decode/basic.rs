//! Endianness-parameterized primitive decoders.

use crate::decode::BasicDecode;
use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use std::io::Read;

/// A [`BasicDecode`] implementation that reads little-endian integers.
#[derive(Debug, Default, Clone, Copy)]
pub struct LittleEndianBasicDecoder;

/// A [`BasicDecode`] implementation that reads big-endian integers.
#[derive(Debug, Default, Clone, Copy)]
pub struct BigEndianBasicDecoder;

macro_rules! impl_basic_decode {
    ($ty:ty, $endianness:expr) => {
        impl BasicDecode for $ty {
            fn endianness(&self) -> Endianness {
                $endianness
            }

            fn decode_us<S: Read>(&self, mut source: S) -> std::io::Result<u16> {
                let mut buf = [0u8; 2];
                source.read_exact(&mut buf)?;
                Ok(<Self as ReadOrder>::read_u16(&buf))
            }

            fn decode_ul<S: Read>(&self, mut source: S) -> std::io::Result<u32> {
                let mut buf = [0u8; 4];
                source.read_exact(&mut buf)?;
                Ok(<Self as ReadOrder>::read_u32(&buf))
            }

            fn decode_ss<S: Read>(&self, mut source: S) -> std::io::Result<i16> {
                let mut buf = [0u8; 2];
                source.read_exact(&mut buf)?;
                Ok(<Self as ReadOrder>::read_i16(&buf))
            }

            fn decode_sl<S: Read>(&self, mut source: S) -> std::io::Result<i32> {
                let mut buf = [0u8; 4];
                source.read_exact(&mut buf)?;
                Ok(<Self as ReadOrder>::read_i32(&buf))
            }

            fn decode_fl<S: Read>(&self, mut source: S) -> std::io::Result<f32> {
                let mut buf = [0u8; 4];
                source.read_exact(&mut buf)?;
                Ok(<Self as ReadOrder>::read_f32(&buf))
            }

            fn decode_fd<S: Read>(&self, mut source: S) -> std::io::Result<f64> {
                let mut buf = [0u8; 8];
                source.read_exact(&mut buf)?;
                Ok(<Self as ReadOrder>::read_f64(&buf))
            }
        }
    };
}

/// Internal helper so the macro above can dispatch to the right
/// `byteorder` implementation per decoder type.
trait ReadOrder {
    fn read_u16(buf: &[u8]) -> u16;
    fn read_u32(buf: &[u8]) -> u32;
    fn read_i16(buf: &[u8]) -> i16;
    fn read_i32(buf: &[u8]) -> i32;
    fn read_f32(buf: &[u8]) -> f32;
    fn read_f64(buf: &[u8]) -> f64;
}

impl ReadOrder for LittleEndianBasicDecoder {
    fn read_u16(buf: &[u8]) -> u16 {
        LittleEndian::read_u16(buf)
    }
    fn read_u32(buf: &[u8]) -> u32 {
        LittleEndian::read_u32(buf)
    }
    fn read_i16(buf: &[u8]) -> i16 {
        LittleEndian::read_i16(buf)
    }
    fn read_i32(buf: &[u8]) -> i32 {
        LittleEndian::read_i32(buf)
    }
    fn read_f32(buf: &[u8]) -> f32 {
        LittleEndian::read_f32(buf)
    }
    fn read_f64(buf: &[u8]) -> f64 {
        LittleEndian::read_f64(buf)
    }
}

impl ReadOrder for BigEndianBasicDecoder {
    fn read_u16(buf: &[u8]) -> u16 {
        BigEndian::read_u16(buf)
    }
    fn read_u32(buf: &[u8]) -> u32 {
        BigEndian::read_u32(buf)
    }
    fn read_i16(buf: &[u8]) -> i16 {
        BigEndian::read_i16(buf)
    }
    fn read_i32(buf: &[u8]) -> i32 {
        BigEndian::read_i32(buf)
    }
    fn read_f32(buf: &[u8]) -> f32 {
        BigEndian::read_f32(buf)
    }
    fn read_f64(buf: &[u8]) -> f64 {
        BigEndian::read_f64(buf)
    }
}

impl_basic_decode!(LittleEndianBasicDecoder, Endianness::Little);
impl_basic_decode!(BigEndianBasicDecoder, Endianness::Big);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn little_endian_u16() {
        let dec = LittleEndianBasicDecoder;
        let mut c = Cursor::new([0x02u8, 0x01]);
        assert_eq!(dec.decode_us(&mut c).unwrap(), 0x0102);
    }

    #[test]
    fn big_endian_u16() {
        let dec = BigEndianBasicDecoder;
        let mut c = Cursor::new([0x01u8, 0x02]);
        assert_eq!(dec.decode_us(&mut c).unwrap(), 0x0102);
    }
}

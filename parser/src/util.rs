//! Small helpers shared by the data-set reader and writer.

use std::io::{self, Read};

/// A reader wrapper that supports putting back a handful of bytes it has
/// just consumed.
///
/// This is all the "random access" the decoder's meta/body transition
/// needs: peek the next tag's group number, and if it turns out to
/// belong to the body rather than the meta header, put it back so the
/// body decoder reads it again (in whatever endianness the body's
/// transfer syntax dictates, which may differ from the meta header's).
pub struct Rewindable<R> {
    inner: R,
    pending: Vec<u8>,
}

impl<R: Read> Rewindable<R> {
    /// Wrap a reader with no pending pushed-back bytes.
    pub fn new(inner: R) -> Self {
        Rewindable {
            inner,
            pending: Vec::new(),
        }
    }

    /// Push bytes back to be read again before anything new is read from
    /// the underlying reader. `bytes` must be given in the order they
    /// were originally read.
    pub fn push_back(&mut self, bytes: &[u8]) {
        let mut combined = bytes.to_vec();
        combined.extend_from_slice(&self.pending);
        self.pending = combined;
    }
}

impl<R: Read> Read for Rewindable<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pending.is_empty() {
            return self.inner.read(buf);
        }
        let n = self.pending.len().min(buf.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.drain(..n);
        Ok(n)
    }
}

/// Reverse the byte order of every `width`-byte chunk of `bytes` in
/// place. Used to normalize fixed-width binary values between their
/// on-wire byte order and this codec's canonical little-endian storage.
/// A no-op (not an error) if `bytes.len()` is not a multiple of `width`;
/// the last partial chunk, if any, is left untouched, since the calling
/// code already validates lengths against `width` at the framing level.
pub fn swap_fixed_width(bytes: &mut [u8], width: usize) {
    if width <= 1 {
        return;
    }
    for chunk in bytes.chunks_mut(width) {
        if chunk.len() == width {
            chunk.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn rewindable_reads_through_when_empty() {
        let mut r = Rewindable::new(Cursor::new(vec![1, 2, 3, 4]));
        let mut buf = [0u8; 4];
        r.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn rewindable_replays_pushed_back_bytes() {
        let mut r = Rewindable::new(Cursor::new(vec![5, 6, 7, 8]));
        let mut tag = [0u8; 4];
        r.read_exact(&mut tag).unwrap();
        r.push_back(&tag);
        let mut replay = [0u8; 4];
        r.read_exact(&mut replay).unwrap();
        assert_eq!(replay, tag);
        // the underlying stream continues normally afterwards
        assert_eq!(r.read(&mut [0u8; 1]).unwrap(), 0);
    }

    #[test]
    fn swap_reverses_each_chunk() {
        let mut bytes = [0x01, 0x02, 0x03, 0x04];
        swap_fixed_width(&mut bytes, 2);
        assert_eq!(bytes, [0x02, 0x01, 0x04, 0x03]);
    }
}

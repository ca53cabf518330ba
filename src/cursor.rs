//! Bounded little-endian byte reader.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Sequential little-endian reader over a byte slice with bounded reads.
///
/// Every read method returns `(value, ok)`: on failure `ok` is `false`,
/// the returned value is zero, and the cursor's position is left
/// unchanged.
pub struct ByteCursor<'a> {
    inner: Cursor<&'a [u8]>,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor {
            inner: Cursor::new(data),
        }
    }

    pub fn position(&self) -> u64 {
        self.inner.position()
    }

    pub fn remaining(&self) -> usize {
        let len = self.inner.get_ref().len() as u64;
        (len - self.inner.position().min(len)) as usize
    }

    pub fn read_u8(&mut self) -> (u8, bool) {
        let pos = self.inner.position();
        match self.inner.read_u8() {
            Ok(v) => (v, true),
            Err(_) => {
                self.inner.set_position(pos);
                (0, false)
            }
        }
    }

    pub fn read_u16_le(&mut self) -> (u16, bool) {
        let pos = self.inner.position();
        match self.inner.read_u16::<LittleEndian>() {
            Ok(v) => (v, true),
            Err(_) => {
                self.inner.set_position(pos);
                (0, false)
            }
        }
    }

    pub fn read_u32_le(&mut self) -> (u32, bool) {
        let pos = self.inner.position();
        match self.inner.read_u32::<LittleEndian>() {
            Ok(v) => (v, true),
            Err(_) => {
                self.inner.set_position(pos);
                (0, false)
            }
        }
    }

    /// Advance by `n` bytes without a bounds check. Caller guarantees
    /// availability.
    pub fn skip(&mut self, n: u64) {
        self.inner.set_position(self.inner.position() + n);
    }
}

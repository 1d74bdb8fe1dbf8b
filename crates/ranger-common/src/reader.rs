//! Binary reader for parsing byte slices.
//!
//! This module provides [`BinaryReader`], a cursor-like type that reads
//! fixed-width primitives from a byte slice in a configurable byte order.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::{Endian, Error, Result};

/// A binary reader over a byte slice.
///
/// Every multi-byte read honours the reader's [`Endian`].
///
/// # Example
///
/// ```
/// use ranger_common::{BinaryReader, Endian};
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// let mut reader = BinaryReader::new(&data, Endian::Little);
///
/// assert_eq!(reader.read_i32().unwrap(), 0x04030201);
/// assert_eq!(reader.read_i32().unwrap(), 0x08070605);
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
    endian: Endian,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8], endian: Endian) -> Self {
        Self { data, position: 0, endian }
    }

    /// Get the byte order used by this reader.
    #[inline]
    pub const fn endian(&self) -> Endian {
        self.endian
    }

    /// Get the current position in the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the total length of the underlying buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                needed: count,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    /// Read a fixed-size array of bytes.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Read a signed byte.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_bytes(1).map(|b| b[0] as i8)
    }

    /// Read a boolean (non-zero = true).
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_bytes(1).map(|b| b[0] != 0)
    }

    /// Read an i16 in the reader's byte order.
    #[inline]
    pub fn read_i16(&mut self) -> Result<i16> {
        let bytes = self.read_bytes(2)?;
        Ok(match self.endian {
            Endian::Little => LittleEndian::read_i16(bytes),
            Endian::Big => BigEndian::read_i16(bytes),
        })
    }

    /// Read an i32 in the reader's byte order.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_bytes(4)?;
        Ok(match self.endian {
            Endian::Little => LittleEndian::read_i32(bytes),
            Endian::Big => BigEndian::read_i32(bytes),
        })
    }

    /// Read an i64 in the reader's byte order.
    #[inline]
    pub fn read_i64(&mut self) -> Result<i64> {
        let bytes = self.read_bytes(8)?;
        Ok(match self.endian {
            Endian::Little => LittleEndian::read_i64(bytes),
            Endian::Big => BigEndian::read_i64(bytes),
        })
    }

    /// Read an IEEE-754 single from its bit pattern.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        let bytes = self.read_bytes(4)?;
        Ok(match self.endian {
            Endian::Little => LittleEndian::read_f32(bytes),
            Endian::Big => BigEndian::read_f32(bytes),
        })
    }

    /// Read an IEEE-754 double from its bit pattern.
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        let bytes = self.read_bytes(8)?;
        Ok(match self.endian {
            Endian::Little => LittleEndian::read_f64(bytes),
            Endian::Big => BigEndian::read_f64(bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_primitives() {
        let data = [
            0x01u8, 0x02, 0x03, 0x04, // i32: 0x04030201
            0xFF, 0xFF, // i16: -1
            0x80, // i8: -128
        ];
        let mut reader = BinaryReader::new(&data, Endian::Little);

        assert_eq!(reader.read_i32().unwrap(), 0x04030201);
        assert_eq!(reader.read_i16().unwrap(), -1);
        assert_eq!(reader.read_i8().unwrap(), -128);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_big_endian() {
        let data = [0x00, 0x78, 0x00, 0x00, 0x00, 0x04];
        let mut reader = BinaryReader::new(&data, Endian::Big);

        assert_eq!(reader.read_i16().unwrap(), 120);
        assert_eq!(reader.read_i32().unwrap(), 4);
    }

    #[test]
    fn test_read_floats() {
        let mut data = Vec::new();
        data.extend_from_slice(&1.5f32.to_le_bytes());
        data.extend_from_slice(&(-0.25f64).to_le_bytes());
        let mut reader = BinaryReader::new(&data, Endian::Little);

        assert_eq!(reader.read_f32().unwrap(), 1.5);
        assert_eq!(reader.read_f64().unwrap(), -0.25);
    }

    #[test]
    fn test_read_bool() {
        let data = [0x00, 0x01, 0x7F];
        let mut reader = BinaryReader::new(&data, Endian::Little);

        assert!(!reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
    }

    #[test]
    fn test_read_array() {
        let data = b"PKMNrest";
        let mut reader = BinaryReader::new(data, Endian::Little);

        assert_eq!(&reader.read_array::<4>().unwrap(), b"PKMN");
        assert_eq!(reader.position(), 4);
        assert_eq!(reader.remaining(), 4);
    }

    #[test]
    fn test_eof_error() {
        let data = [0x01, 0x02];
        let mut reader = BinaryReader::new(&data, Endian::Little);

        assert!(matches!(
            reader.read_i32(),
            Err(Error::UnexpectedEof { needed: 4, available: 2 })
        ));
        // A failed read does not consume anything.
        assert_eq!(reader.position(), 0);
    }
}

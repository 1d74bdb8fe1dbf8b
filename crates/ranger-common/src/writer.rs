//! Binary writer emitting fixed-width primitives.

use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::{Endian, Result};

/// A binary writer wrapping any [`Write`] sink.
///
/// This mirrors [`BinaryReader`](crate::BinaryReader): the same primitives,
/// in the same byte order.
#[derive(Debug)]
pub struct BinaryWriter<W> {
    inner: W,
    endian: Endian,
}

impl<W: Write> BinaryWriter<W> {
    /// Create a new writer.
    pub fn new(inner: W, endian: Endian) -> Self {
        Self { inner, endian }
    }

    /// Get the byte order used by this writer.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Write raw bytes as they are.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }

    /// Write a signed byte.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.inner.write_i8(value)?;
        Ok(())
    }

    /// Write a boolean as a single `0` or `1` byte.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.inner.write_u8(u8::from(value))?;
        Ok(())
    }

    /// Write an i16 in the writer's byte order.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        match self.endian {
            Endian::Little => self.inner.write_i16::<LittleEndian>(value)?,
            Endian::Big => self.inner.write_i16::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Write an i32 in the writer's byte order.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        match self.endian {
            Endian::Little => self.inner.write_i32::<LittleEndian>(value)?,
            Endian::Big => self.inner.write_i32::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Write an i64 in the writer's byte order.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        match self.endian {
            Endian::Little => self.inner.write_i64::<LittleEndian>(value)?,
            Endian::Big => self.inner.write_i64::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Write an IEEE-754 single in the writer's byte order.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        match self.endian {
            Endian::Little => self.inner.write_f32::<LittleEndian>(value)?,
            Endian::Big => self.inner.write_f32::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Write an IEEE-754 double in the writer's byte order.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        match self.endian {
            Endian::Little => self.inner.write_f64::<LittleEndian>(value)?,
            Endian::Big => self.inner.write_f64::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

//! Binary sheet header.

use ranger_common::{BinaryReader, BinaryWriter};

use crate::schema::MAGIC_LEN;
use crate::Result;

/// Fixed 16-byte header at the start of a binary sheet.
///
/// Layout: magic (4 bytes), record width, record count, reserved. The three
/// integers are 32-bit signed in the stream's byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetHeader {
    /// Schema name bytes. Written from the schema, never checked on read.
    pub magic: [u8; MAGIC_LEN],
    /// Size in bytes of each record.
    pub record_width: i32,
    /// Number of records following the header.
    pub record_count: i32,
    /// Unused; written as zero.
    pub reserved: i32,
}

impl SheetHeader {
    /// Size of the header in bytes.
    pub const SIZE: usize = 16;

    /// Read a header from the start of `reader`.
    pub fn read(reader: &mut BinaryReader<'_>) -> ranger_common::Result<Self> {
        Ok(Self {
            magic: reader.read_array()?,
            record_width: reader.read_i32()?,
            record_count: reader.read_i32()?,
            reserved: reader.read_i32()?,
        })
    }

    /// Write the header.
    pub fn write<W: std::io::Write>(&self, writer: &mut BinaryWriter<W>) -> Result<()> {
        writer.write_bytes(&self.magic)?;
        writer.write_i32(self.record_width)?;
        writer.write_i32(self.record_count)?;
        writer.write_i32(self.reserved)?;
        Ok(())
    }

    /// Magic as text, with invalid UTF-8 replaced.
    pub fn magic_str(&self) -> String {
        String::from_utf8_lossy(&self.magic).into_owned()
    }
}

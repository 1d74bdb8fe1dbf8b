//! Fixed-layout binary sheet codec.
//!
//! A binary sheet is a [`SheetHeader`] followed by `record_count` records of
//! `record_width` bytes each. Records hold their fields back to back in schema
//! order with no padding and no type tags, so the bytes only mean something
//! next to the schema they were written with.

use std::io::{Read, Write};
use std::sync::Arc;

use ranger_common::{BinaryReader, BinaryWriter, Endian};
use tracing::{debug, trace};

use crate::{Error, FieldType, Record, RecordSet, Result, Schema, SheetHeader, Value};

/// Reads and writes binary sheets in a fixed byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryCodec {
    endian: Endian,
}

impl BinaryCodec {
    /// Create a codec for the given byte order.
    pub const fn new(endian: Endian) -> Self {
        Self { endian }
    }

    /// Get the byte order used by this codec.
    pub const fn endian(&self) -> Endian {
        self.endian
    }

    /// Parse a binary sheet from bytes.
    ///
    /// The magic is not compared against the schema name. The header record
    /// width must equal [`Schema::field_width`], and the data must hold every
    /// record the header declares.
    pub fn read(&self, data: &[u8], schema: Arc<Schema>) -> Result<RecordSet> {
        let mut reader = BinaryReader::new(data, self.endian);

        let header = SheetHeader::read(&mut reader).map_err(|_| Error::TruncatedInput {
            needed: SheetHeader::SIZE,
            available: data.len(),
        })?;
        debug!(
            magic = %header.magic_str(),
            record_width = header.record_width,
            record_count = header.record_count,
            "read sheet header"
        );

        let width = schema.field_width();
        if usize::try_from(header.record_width).ok() != Some(width) {
            return Err(Error::FormatMismatch {
                expected: width,
                actual: header.record_width,
            });
        }

        let count = usize::try_from(header.record_count)
            .map_err(|_| Error::InvalidRecordCount(header.record_count))?;
        // Zero-width records take no bytes, so the length check cannot bound them.
        if width == 0 && count > 0 {
            return Err(Error::InvalidRecordCount(header.record_count));
        }

        let needed = width
            .checked_mul(count)
            .and_then(|n| n.checked_add(SheetHeader::SIZE))
            .unwrap_or(usize::MAX);
        if data.len() < needed {
            return Err(Error::TruncatedInput {
                needed,
                available: data.len(),
            });
        }

        let mut records = RecordSet::with_capacity(Arc::clone(&schema), count);
        for _ in 0..count {
            let record = self.read_record(&mut reader, &schema)?;
            records.push(record)?;
        }

        if !reader.is_empty() {
            debug!(trailing = reader.remaining(), "ignoring bytes after last record");
        }
        trace!(records = records.len(), sheet = %schema, "decoded binary sheet");

        Ok(records)
    }

    /// Read a binary sheet from a stream.
    pub fn read_from<R: Read>(&self, mut input: R, schema: Arc<Schema>) -> Result<RecordSet> {
        let mut data = Vec::new();
        input.read_to_end(&mut data)?;
        self.read(&data, schema)
    }

    /// Serialize a record set to bytes.
    pub fn to_bytes(&self, records: &RecordSet) -> Result<Vec<u8>> {
        let capacity = SheetHeader::SIZE + records.schema().field_width() * records.len();
        let mut output = Vec::with_capacity(capacity);
        self.write_to(records, &mut output)?;
        Ok(output)
    }

    /// Write a record set to a stream.
    ///
    /// Fails before writing anything if the schema name is not a valid magic.
    pub fn write_to<W: Write>(&self, records: &RecordSet, output: W) -> Result<()> {
        let schema = records.schema();
        let header = SheetHeader {
            magic: schema.magic()?,
            record_width: header_int("record width", schema.field_width())?,
            record_count: header_int("record count", records.len())?,
            reserved: 0,
        };

        let mut writer = BinaryWriter::new(output, self.endian);
        header.write(&mut writer)?;

        for record in records {
            for value in record.values() {
                write_value(&mut writer, value)?;
            }
        }
        writer.flush()?;

        debug!(
            sheet = %schema,
            record_width = header.record_width,
            record_count = header.record_count,
            "wrote binary sheet"
        );
        Ok(())
    }

    fn read_record(&self, reader: &mut BinaryReader<'_>, schema: &Schema) -> Result<Record> {
        let mut record = Record::with_capacity(schema.len());
        for (name, field_type) in schema.fields() {
            record.push(name, read_value(reader, field_type)?);
        }
        Ok(record)
    }
}

fn read_value(reader: &mut BinaryReader<'_>, field_type: FieldType) -> Result<Value> {
    Ok(match field_type {
        FieldType::Int8 => Value::Int8(reader.read_i8()?),
        FieldType::Int16 => Value::Int16(reader.read_i16()?),
        FieldType::Int32 => Value::Int32(reader.read_i32()?),
        FieldType::Int64 => Value::Int64(reader.read_i64()?),
        FieldType::Float32 => Value::Float32(reader.read_f32()?),
        FieldType::Float64 => Value::Float64(reader.read_f64()?),
        FieldType::Boolean => Value::Boolean(reader.read_bool()?),
    })
}

fn write_value<W: Write>(writer: &mut BinaryWriter<W>, value: &Value) -> Result<()> {
    match *value {
        Value::Int8(v) => writer.write_i8(v)?,
        Value::Int16(v) => writer.write_i16(v)?,
        Value::Int32(v) => writer.write_i32(v)?,
        Value::Int64(v) => writer.write_i64(v)?,
        Value::Float32(v) => writer.write_f32(v)?,
        Value::Float64(v) => writer.write_f64(v)?,
        Value::Boolean(v) => writer.write_bool(v)?,
    }
    Ok(())
}

fn header_int(what: &'static str, value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::TooLarge { what, value })
}

//! Sheet schemas.
//!
//! A [`Schema`] names a table and lists its fields in on-disk order. Both the
//! binary and XML codecs walk this list, so its order is the record layout.

use crate::{Error, FieldType, Record, Result};

/// Length of the binary magic derived from a schema name.
pub const MAGIC_LEN: usize = 4;

/// Ordered field definitions for one table of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    fields: Vec<(String, FieldType)>,
}

/// Position of one field inside a binary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout<'a> {
    /// Field name.
    pub name: &'a str,
    /// Declared type.
    pub field_type: FieldType,
    /// Byte offset from the start of the record.
    pub offset: usize,
}

impl Schema {
    /// Create an empty schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field, builder style.
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.add(name, field_type);
        self
    }

    /// Get the schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the schema.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Add a field at the end, or change the type of an existing field in place.
    pub fn add(&mut self, name: impl Into<String>, field_type: FieldType) {
        let name = name.into();
        match self.position(&name) {
            Some(index) => self.fields[index].1 = field_type,
            None => self.fields.push((name, field_type)),
        }
    }

    /// Remove a field, returning its type if it was present.
    pub fn remove(&mut self, name: &str) -> Option<FieldType> {
        let index = self.position(name)?;
        Some(self.fields.remove(index).1)
    }

    /// Get the declared type of a field.
    pub fn get(&self, name: &str) -> Option<FieldType> {
        self.position(name).map(|index| self.fields[index].1)
    }

    /// Get the index of a field in declared order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(n, _)| n == name)
    }

    /// Iterate over fields in declared order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = (&str, FieldType)> + '_ {
        self.fields.iter().map(|(n, t)| (n.as_str(), *t))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Size in bytes of one binary record.
    pub fn field_width(&self) -> usize {
        self.fields.iter().map(|(_, t)| t.width()).sum()
    }

    /// Byte offset of every field inside a record.
    pub fn layout(&self) -> Vec<FieldLayout<'_>> {
        let mut offset = 0;
        self.fields
            .iter()
            .map(|(name, field_type)| {
                let slot = FieldLayout {
                    name,
                    field_type: *field_type,
                    offset,
                };
                offset += field_type.width();
                slot
            })
            .collect()
    }

    /// The 4-byte binary magic, which is the UTF-8 encoded schema name.
    pub fn magic(&self) -> Result<[u8; MAGIC_LEN]> {
        self.name
            .as_bytes()
            .try_into()
            .map_err(|_| Error::InvalidSchemaName(self.name.clone()))
    }

    /// Check that a record has exactly this schema's fields, in order, with
    /// values of the declared types.
    pub fn check_record(&self, record: &Record) -> Result<()> {
        if record.len() != self.fields.len() {
            return Err(Error::RecordMismatch(format!(
                "expected {} fields, got {}",
                self.fields.len(),
                record.len()
            )));
        }

        for ((name, field_type), (record_name, value)) in self.fields.iter().zip(record.iter()) {
            if name != record_name {
                return Err(Error::RecordMismatch(format!(
                    "expected field {:?}, got {:?}",
                    name, record_name
                )));
            }
            if value.field_type() != *field_type {
                return Err(Error::RecordMismatch(format!(
                    "field {:?} is {}, got a {} value",
                    name,
                    field_type,
                    value.field_type()
                )));
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

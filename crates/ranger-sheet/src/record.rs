//! Records and record sets.

use std::sync::Arc;

use crate::{Error, Result, Schema, Value};

/// One row of a sheet: field values keyed by name, in insertion order.
///
/// A record only has meaning next to the [`Schema`] it was built for; the
/// [`RecordSet`] that owns it guarantees the two agree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Build a record from values given in schema order, checking each type.
    pub fn from_values<I>(schema: &Schema, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut record = Self::with_capacity(schema.len());
        let mut values = values.into_iter();

        for (name, field_type) in schema.fields() {
            let value: Value = values
                .next()
                .ok_or_else(|| Error::RecordMismatch(format!("no value for field {:?}", name)))?
                .into();
            if value.field_type() != field_type {
                return Err(Error::RecordMismatch(format!(
                    "field {:?} is {}, got a {} value",
                    name,
                    field_type,
                    value.field_type()
                )));
            }
            record.fields.push((name.to_string(), value));
        }

        if values.next().is_some() {
            return Err(Error::RecordMismatch(format!(
                "more values than the {} fields of sheet {}",
                schema.len(),
                schema.name()
            )));
        }

        Ok(record)
    }

    /// Set a field, replacing any previous value under the same name.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> + '_ {
        self.fields.iter().map(|(_, v)| v)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} = {}", name, value)?;
        }
        Ok(())
    }
}

/// Records sharing one schema.
///
/// Every record in the set conforms to the schema: same field names in the
/// same order, with values of the declared types.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    schema: Arc<Schema>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Create an empty set bound to a schema.
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            records: Vec::new(),
        }
    }

    /// Create an empty set with room for `capacity` records.
    pub fn with_capacity(schema: Arc<Schema>, capacity: usize) -> Self {
        Self {
            schema,
            records: Vec::with_capacity(capacity),
        }
    }

    /// Get the schema shared by all records.
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Append a record after checking it against the schema.
    pub fn push(&mut self, record: Record) -> Result<()> {
        self.schema.check_record(&record)?;
        self.records.push(record);
        Ok(())
    }

    /// Get the records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get a record by index.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterate over records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the set has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Take the records out of the set.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::fmt::Display for RecordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.schema.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldType;

    fn stats() -> Arc<Schema> {
        Arc::new(
            Schema::new("PKMN")
                .field("hp", FieldType::Int16)
                .field("atk", FieldType::Int8)
                .field("crit", FieldType::Boolean),
        )
    }

    #[test]
    fn test_from_values() {
        let schema = stats();
        let record = Record::from_values(
            &schema,
            [Value::Int16(120), Value::Int8(55), Value::Boolean(true)],
        )
        .unwrap();

        assert_eq!(record.len(), 3);
        assert_eq!(record.get("hp"), Some(&Value::Int16(120)));
        assert_eq!(record.get("crit").and_then(Value::as_bool), Some(true));
        assert_eq!(record.get("def"), None);
    }

    #[test]
    fn test_from_values_rejects_wrong_type() {
        let schema = stats();
        let result = Record::from_values(
            &schema,
            [Value::Int16(120), Value::Int16(55), Value::Boolean(true)],
        );
        assert!(matches!(result, Err(Error::RecordMismatch(_))));
    }

    #[test]
    fn test_from_values_rejects_wrong_count() {
        let schema = stats();
        assert!(Record::from_values(&schema, [Value::Int16(1)]).is_err());
        assert!(Record::from_values(
            &schema,
            [
                Value::Int16(1),
                Value::Int8(2),
                Value::Boolean(true),
                Value::Boolean(false),
            ],
        )
        .is_err());
    }

    #[test]
    fn test_push_replaces() {
        let mut record = Record::new();
        record.push("hp", 1i16);
        record.push("atk", 2i8);
        record.push("hp", 3i16);

        let names: Vec<_> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["hp", "atk"]);
        assert_eq!(record.get("hp"), Some(&Value::Int16(3)));
    }

    #[test]
    fn test_record_set_push_checks_schema() {
        let mut set = RecordSet::new(stats());

        let mut record = Record::new();
        record.push("hp", 120i16);
        record.push("atk", 55i8);
        record.push("crit", true);
        set.push(record).unwrap();

        let mut bad = Record::new();
        bad.push("hp", 120i16);
        assert!(set.push(bad).is_err());

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new();
        record.push("hp", 120i16);
        record.push("crit", false);
        assert_eq!(record.to_string(), "hp = 120\ncrit = false");
    }
}

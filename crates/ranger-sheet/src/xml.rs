//! XML sheet codec.
//!
//! The XML form of a sheet looks like this:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <PKMN>
//!   <entry>
//!     <hp value="120"/>
//!     <atk value="55"/>
//!     <crit value="true"/>
//!   </entry>
//! </PKMN>
//! ```
//!
//! The root is named after the schema and every child of the root is one
//! record. Fields are looked up by name, so their order in the document does
//! not matter when reading.

use std::io::Write;
use std::sync::Arc;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use tracing::debug;

use crate::node::{xml_error, XmlNode};
use crate::{Error, Record, RecordSet, Result, Schema, Value};

/// Tag used for record elements when writing.
pub const ENTRY_TAG: &str = "entry";

/// Attribute holding a field's value.
pub const VALUE_ATTRIBUTE: &str = "value";

/// Reads and writes the XML form of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlCodec {
    indent: usize,
}

impl Default for XmlCodec {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl XmlCodec {
    /// Create a codec indenting nested elements by `indent` spaces.
    pub const fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Parse an XML sheet.
    pub fn read(&self, xml: &str, schema: Arc<Schema>) -> Result<RecordSet> {
        let root = XmlNode::parse(xml)?;
        self.read_root(root, schema)
    }

    /// Parse an XML sheet from bytes.
    pub fn read_bytes(&self, xml: &[u8], schema: Arc<Schema>) -> Result<RecordSet> {
        let root = XmlNode::parse_bytes(xml)?;
        self.read_root(root, schema)
    }

    fn read_root(&self, root: XmlNode, schema: Arc<Schema>) -> Result<RecordSet> {
        if root.tag != schema.name() {
            return Err(Error::RootNameMismatch {
                expected: schema.name().to_string(),
                actual: root.tag,
            });
        }

        let mut records = RecordSet::with_capacity(Arc::clone(&schema), root.children.len());
        for (index, element) in root.children.iter().enumerate() {
            let record = read_record(index, element, &schema)?;
            records.push(record)?;
        }

        debug!(records = records.len(), sheet = %schema, "decoded XML sheet");
        Ok(records)
    }

    /// Serialize a record set to an XML string.
    pub fn to_xml_string(&self, records: &RecordSet) -> Result<String> {
        let mut output = Vec::new();
        self.write_to(records, &mut output)?;
        String::from_utf8(output).map_err(|e| Error::Xml(e.to_string()))
    }

    /// Write a record set as XML.
    pub fn write_to<W: Write>(&self, records: &RecordSet, output: W) -> Result<()> {
        let schema = records.schema();
        let mut writer = Writer::new_with_indent(output, b' ', self.indent);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(xml_error)?;

        let root = BytesStart::new(schema.name());
        if records.is_empty() {
            writer.write_event(Event::Empty(root)).map_err(xml_error)?;
        } else {
            writer.write_event(Event::Start(root)).map_err(xml_error)?;
            for record in records {
                write_record(&mut writer, record)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(schema.name())))
                .map_err(xml_error)?;
        }

        // Trailing newline, so the file ends like a text file.
        writer.get_mut().write_all(b"\n")?;
        writer.get_mut().flush()?;

        debug!(records = records.len(), sheet = %schema, "wrote XML sheet");
        Ok(())
    }
}

fn read_record(index: usize, element: &XmlNode, schema: &Schema) -> Result<Record> {
    let mut record = Record::with_capacity(schema.len());

    for (name, field_type) in schema.fields() {
        let text = element
            .child(name)
            .and_then(|field| field.attribute(VALUE_ATTRIBUTE))
            .ok_or_else(|| Error::MissingField {
                record: index,
                field: name.to_string(),
            })?;

        let value = Value::parse(field_type, text).ok_or_else(|| Error::ValueParse {
            record: index,
            field: name.to_string(),
            value: text.to_string(),
            field_type,
        })?;

        record.push(name, value);
    }

    Ok(record)
}

fn write_record<W: Write>(writer: &mut Writer<W>, record: &Record) -> Result<()> {
    if record.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(ENTRY_TAG)))
            .map_err(xml_error)?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(BytesStart::new(ENTRY_TAG)))
        .map_err(xml_error)?;

    for (name, value) in record.iter() {
        let text = value.to_string();
        let mut leaf = BytesStart::new(name);
        leaf.push_attribute((VALUE_ATTRIBUTE, text.as_str()));
        writer.write_event(Event::Empty(leaf)).map_err(xml_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(ENTRY_TAG)))
        .map_err(xml_error)?;
    Ok(())
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

    fn one_record(schema: &Arc<Schema>) -> RecordSet {
        let mut set = RecordSet::new(Arc::clone(schema));
        set.push(
            Record::from_values(
                schema,
                [Value::Int16(120), Value::Int8(55), Value::Boolean(true)],
            )
            .unwrap(),
        )
        .unwrap();
        set
    }

    #[test]
    fn test_write_layout() {
        let xml = XmlCodec::default()
            .to_xml_string(&one_record(&stats()))
            .unwrap();

        let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<PKMN>
  <entry>
    <hp value="120"/>
    <atk value="55"/>
    <crit value="true"/>
  </entry>
</PKMN>
"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_write_empty() {
        let xml = XmlCodec::default()
            .to_xml_string(&RecordSet::new(stats()))
            .unwrap();

        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<PKMN/>\n");

        let decoded = XmlCodec::default().read(&xml, stats()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let schema = Arc::new(
            Schema::new("MOVE")
                .field("power", FieldType::Int32)
                .field("pp", FieldType::Int64)
                .field("accuracy", FieldType::Float32)
                .field("ratio", FieldType::Float64)
                .field("contact", FieldType::Boolean),
        );

        let mut set = RecordSet::new(Arc::clone(&schema));
        for (power, ratio) in [(40, 0.1), (-1, 1.0 / 3.0), (i32::MAX, f64::MAX)] {
            set.push(
                Record::from_values(
                    &schema,
                    [
                        Value::Int32(power),
                        Value::Int64(power as i64 * 3),
                        Value::Float32(0.95),
                        Value::Float64(ratio),
                        Value::Boolean(power > 0),
                    ],
                )
                .unwrap(),
            )
            .unwrap();
        }

        let codec = XmlCodec::default();
        let xml = codec.to_xml_string(&set).unwrap();
        let decoded = codec.read(&xml, schema).unwrap();
        assert_eq!(decoded, set);
    }

    #[test]
    fn test_field_order_irrelevant() {
        let xml = r#"<PKMN>
            <entry><crit value="false"/><hp value="-3"/><atk value="7"/></entry>
        </PKMN>"#;

        let records = XmlCodec::default().read(xml, stats()).unwrap();
        let record = records.get(0).unwrap();

        let names: Vec<_> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["hp", "atk", "crit"]);
        assert_eq!(record.get("hp"), Some(&Value::Int16(-3)));
    }

    #[test]
    fn test_any_child_tag_is_a_record() {
        let xml = r#"<PKMN>
            <entry><hp value="1"/><atk value="1"/><crit value="true"/></entry>
            <row><hp value="2"/><atk value="2"/><crit value="false"/><extra value="x"/></row>
        </PKMN>"#;

        let records = XmlCodec::default().read(xml, stats()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.get(1).unwrap().get("hp"), Some(&Value::Int16(2)));
    }

    #[test]
    fn test_root_name_mismatch() {
        let xml = r#"<MOVE>
            <entry><hp value="1"/><atk value="1"/><crit value="true"/></entry>
        </MOVE>"#;

        let result = XmlCodec::default().read(xml, stats());
        assert!(matches!(
            result,
            Err(Error::RootNameMismatch { ref expected, ref actual })
                if expected == "PKMN" && actual == "MOVE"
        ));
    }

    #[test]
    fn test_missing_field() {
        let xml = r#"<PKMN>
            <entry><hp value="1"/><atk value="1"/><crit value="true"/></entry>
            <entry><hp value="1"/><crit value="true"/></entry>
        </PKMN>"#;

        let result = XmlCodec::default().read(xml, stats());
        assert!(matches!(
            result,
            Err(Error::MissingField { record: 1, ref field }) if field == "atk"
        ));
    }

    #[test]
    fn test_missing_value_attribute() {
        let xml = r#"<PKMN><entry><hp val="1"/><atk value="1"/><crit value="true"/></entry></PKMN>"#;

        assert!(matches!(
            XmlCodec::default().read(xml, stats()),
            Err(Error::MissingField { record: 0, .. })
        ));
    }

    #[test]
    fn test_value_parse_error() {
        let cases = [
            r#"<PKMN><entry><hp value="40000"/><atk value="1"/><crit value="true"/></entry></PKMN>"#,
            r#"<PKMN><entry><hp value="1"/><atk value="1.5"/><crit value="true"/></entry></PKMN>"#,
            r#"<PKMN><entry><hp value="1"/><atk value="1"/><crit value="1"/></entry></PKMN>"#,
        ];

        for xml in cases {
            assert!(
                matches!(
                    XmlCodec::default().read(xml, stats()),
                    Err(Error::ValueParse { record: 0, .. })
                ),
                "{}",
                xml
            );
        }
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(
            XmlCodec::default().read("<PKMN><entry></PKMN>", stats()),
            Err(Error::Xml(_))
        ));
    }

    #[test]
    fn test_custom_indent() {
        let codec = XmlCodec::with_indent(4);
        let xml = codec.to_xml_string(&one_record(&stats())).unwrap();
        assert!(xml.contains("\n    <entry>\n        <hp value=\"120\"/>"));
        assert_eq!(codec.read_bytes(xml.as_bytes(), stats()).unwrap().len(), 1);
    }
}

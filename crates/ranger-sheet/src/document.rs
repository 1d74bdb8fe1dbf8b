//! Schema documents.
//!
//! Schemas are stored as small XML files:
//!
//! ```xml
//! <sheet name="PKMN">
//!   <entry field="hp" type="INT16"/>
//!   <entry field="atk" type="INT8"/>
//! </sheet>
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use tracing::debug;

use crate::node::{xml_error, XmlNode};
use crate::{Error, FieldType, Result, Schema};

/// Root tag of a schema document.
pub const SHEET_TAG: &str = "sheet";

impl Schema {
    /// Parse a schema document.
    ///
    /// # Example
    ///
    /// ```
    /// use ranger_sheet::{FieldType, Schema};
    ///
    /// let xml = r#"<sheet name="PKMN">
    ///     <entry field="hp" type="INT16"/>
    ///     <entry field="crit" type="BOOLEAN"/>
    /// </sheet>"#;
    ///
    /// let schema = Schema::from_xml(xml).unwrap();
    /// assert_eq!(schema.name(), "PKMN");
    /// assert_eq!(schema.get("hp"), Some(FieldType::Int16));
    /// assert_eq!(schema.field_width(), 3);
    /// ```
    pub fn from_xml(xml: &str) -> Result<Self> {
        let root = XmlNode::parse(xml).map_err(|e| Error::SchemaLoad(e.to_string()))?;
        Self::from_node(&root)
    }

    /// Load a schema document from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let root = XmlNode::parse_bytes(&data).map_err(|e| Error::SchemaLoad(e.to_string()))?;
        let schema = Self::from_node(&root)?;

        debug!(
            path = %path.display(),
            sheet = %schema,
            fields = schema.len(),
            width = schema.field_width(),
            "loaded schema"
        );
        Ok(schema)
    }

    fn from_node(root: &XmlNode) -> Result<Self> {
        if root.tag != SHEET_TAG {
            return Err(Error::SchemaLoad(format!(
                "root element is <{}>, not <{}>",
                root.tag, SHEET_TAG
            )));
        }

        let name = root
            .attribute("name")
            .ok_or_else(|| Error::SchemaLoad("sheet has no name attribute".to_string()))?;
        let mut schema = Schema::new(name);

        for (index, child) in root.children.iter().enumerate() {
            let field = child.attribute("field").ok_or_else(|| {
                Error::SchemaLoad(format!("entry {} has no field attribute", index))
            })?;
            let type_name = child.attribute("type").ok_or_else(|| {
                Error::SchemaLoad(format!("field {:?} has no type attribute", field))
            })?;
            let field_type = FieldType::from_name(type_name).ok_or_else(|| {
                Error::SchemaLoad(format!(
                    "field {:?} has unknown type {:?}",
                    field, type_name
                ))
            })?;

            if schema.get(field).is_some() {
                return Err(Error::SchemaLoad(format!("duplicate field {:?}", field)));
            }
            schema.add(field, field_type);
        }

        Ok(schema)
    }

    /// Serialize this schema as a schema document.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut output = Vec::new();
        self.write_xml(&mut output)?;
        String::from_utf8(output).map_err(|e| Error::Xml(e.to_string()))
    }

    /// Write this schema as a schema document.
    pub fn write_xml<W: Write>(&self, output: W) -> Result<()> {
        let mut writer = Writer::new_with_indent(output, b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(xml_error)?;

        let mut root = BytesStart::new(SHEET_TAG);
        root.push_attribute(("name", self.name()));

        if self.is_empty() {
            writer.write_event(Event::Empty(root)).map_err(xml_error)?;
        } else {
            writer.write_event(Event::Start(root)).map_err(xml_error)?;
            for (field, field_type) in self.fields() {
                let mut entry = BytesStart::new("entry");
                entry.push_attribute(("field", field));
                entry.push_attribute(("type", field_type.document_name()));
                writer.write_event(Event::Empty(entry)).map_err(xml_error)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(SHEET_TAG)))
                .map_err(xml_error)?;
        }

        writer.get_mut().write_all(b"\n")?;
        Ok(())
    }

    /// Save this schema document to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let xml = self.to_xml_string()?;
        fs::write(path, xml)?;
        Ok(())
    }
}

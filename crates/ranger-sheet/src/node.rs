//! Minimal XML element tree used by the text codec and schema documents.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{Error, Result};

/// An element with its attributes and child elements. Text content is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct XmlNode {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Get an attribute value by name.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the first direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Parse XML text into its root element.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    check_single_root(&root)?;
                    stack.push(Self::from_start(&e)?);
                }
                Ok(Event::Empty(e)) => {
                    // Self-closing element
                    check_single_root(&root)?;
                    let node = Self::from_start(&e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => root = Some(node),
                    }
                }
                Ok(Event::End(_)) => {
                    if let Some(node) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(node),
                            None => root = Some(node),
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {} // Declarations, comments, text
                Err(e) => return Err(Error::Xml(format!("XML parse error: {}", e))),
            }
        }

        if !stack.is_empty() {
            return Err(Error::Xml(format!("unclosed element <{}>", stack[0].tag)));
        }
        root.ok_or_else(|| Error::Xml("no root element found in XML".to_string()))
    }

    /// Parse XML bytes into its root element.
    pub fn parse_bytes(xml: &[u8]) -> Result<Self> {
        Self::parse(std::str::from_utf8(xml)?)
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self> {
        let tag = std::str::from_utf8(e.name().as_ref())?.to_string();
        let mut node = XmlNode {
            tag,
            ..Default::default()
        };

        for attr in e.attributes() {
            let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::Xml(e.to_string()))?
                .into_owned();
            node.attributes.push((key, value));
        }

        Ok(node)
    }
}

pub(crate) fn xml_error(e: impl std::fmt::Display) -> Error {
    Error::Xml(e.to_string())
}

fn check_single_root(root: &Option<XmlNode>) -> Result<()> {
    match root {
        Some(r) => Err(Error::Xml(format!(
            "unexpected element after root element <{}>",
            r.tag
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- sheet -->
<PKMN>
  <entry>
    <hp value="120"/>
    <atk value="55"></atk>
  </entry>
  <entry/>
</PKMN>"#;

        let root = XmlNode::parse(xml).unwrap();
        assert_eq!(root.tag, "PKMN");
        assert_eq!(root.children.len(), 2);

        let entry = &root.children[0];
        assert_eq!(entry.child("hp").and_then(|n| n.attribute("value")), Some("120"));
        assert_eq!(entry.child("atk").and_then(|n| n.attribute("value")), Some("55"));
        assert!(entry.child("crit").is_none());
        assert!(root.children[1].children.is_empty());
    }

    #[test]
    fn test_attribute_unescaped() {
        let root = XmlNode::parse(r#"<a name="x &amp; y"/>"#).unwrap();
        assert_eq!(root.attribute("name"), Some("x & y"));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(XmlNode::parse(""), Err(Error::Xml(_))));
    }

    #[test]
    fn test_mismatched_end() {
        assert!(matches!(XmlNode::parse("<a><b></a>"), Err(Error::Xml(_))));
    }

    #[test]
    fn test_unclosed() {
        assert!(matches!(XmlNode::parse("<a><b/>"), Err(Error::Xml(_))));
    }

    #[test]
    fn test_second_root() {
        assert!(matches!(XmlNode::parse("<a/><b/>"), Err(Error::Xml(_))));
    }
}

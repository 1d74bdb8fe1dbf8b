//! Schema-driven codec for fixed-layout game data sheets.
//!
//! Game data tables are stored as flat arrays of fixed-size records with no
//! type information. A [`Schema`] names each field and its primitive type, and
//! the two codecs walk it to move a [`RecordSet`] between:
//!
//! - the binary form, via [`BinaryCodec`]: a 16-byte [`SheetHeader`] followed
//!   by the packed records;
//! - an editable XML form, via [`XmlCodec`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ranger_sheet::{BinaryCodec, FieldType, Record, RecordSet, Schema, Value, XmlCodec};
//!
//! let schema = Arc::new(
//!     Schema::new("PKMN")
//!         .field("hp", FieldType::Int16)
//!         .field("atk", FieldType::Int8)
//!         .field("crit", FieldType::Boolean),
//! );
//!
//! let mut records = RecordSet::new(Arc::clone(&schema));
//! records.push(Record::from_values(
//!     &schema,
//!     [Value::Int16(120), Value::Int8(55), Value::Boolean(true)],
//! )?)?;
//!
//! let bytes = BinaryCodec::default().to_bytes(&records)?;
//! assert_eq!(&bytes[16..], &[0x78, 0x00, 0x37, 0x01]);
//!
//! let xml = XmlCodec::default().to_xml_string(&records)?;
//! let back = XmlCodec::default().read(&xml, Arc::clone(&schema))?;
//! assert_eq!(BinaryCodec::default().to_bytes(&back)?, bytes);
//! # Ok::<(), ranger_sheet::Error>(())
//! ```

mod binary;
mod document;
mod error;
mod header;
mod node;
mod record;
mod schema;
mod types;
mod value;
mod xml;

pub use binary::BinaryCodec;
pub use document::SHEET_TAG;
pub use error::{Error, Result};
pub use header::SheetHeader;
pub use record::{Record, RecordSet};
pub use schema::{FieldLayout, Schema, MAGIC_LEN};
pub use types::FieldType;
pub use value::Value;
pub use xml::{XmlCodec, ENTRY_TAG, VALUE_ATTRIBUTE};

/// Re-export the byte order selector used by [`BinaryCodec`].
pub use ranger_common::Endian;

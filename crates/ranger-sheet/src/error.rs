//! Error types for sheet conversion.

use thiserror::Error;

use crate::FieldType;

/// Errors that can occur when reading or writing sheets.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] ranger_common::Error),

    /// Malformed schema document.
    #[error("invalid schema document: {0}")]
    SchemaLoad(String),

    /// Schema name cannot be used as the 4-byte binary magic.
    #[error("sheet name {0:?} is not 4 bytes long")]
    InvalidSchemaName(String),

    /// Record width in the binary header does not match the schema.
    #[error("entry size does not match sheet size ({actual} != {expected})")]
    FormatMismatch { expected: usize, actual: i32 },

    /// Negative record count, or records declared for a schema with no fields.
    #[error("invalid record count: {0}")]
    InvalidRecordCount(i32),

    /// Binary stream ends before the records declared in its header.
    #[error("truncated input: header declares {needed} bytes but only {available} available")]
    TruncatedInput { needed: usize, available: usize },

    /// A value does not fit in the header field that stores it.
    #[error("{what} {value} does not fit in a 32-bit header field")]
    TooLarge { what: &'static str, value: usize },

    /// Root element of an XML sheet does not match the schema name.
    #[error("root element <{actual}> does not correspond with sheet name {expected:?}")]
    RootNameMismatch { expected: String, actual: String },

    /// A record element lacks a field declared by the schema.
    #[error("entry {record} is missing field {field:?}")]
    MissingField { record: usize, field: String },

    /// A field value cannot be parsed as its declared type.
    #[error("entry {record}: cannot parse {value:?} as {field_type} for field {field:?}")]
    ValueParse {
        record: usize,
        field: String,
        value: String,
        field_type: FieldType,
    },

    /// A record does not conform to the schema it is used with.
    #[error("record does not match sheet: {0}")]
    RecordMismatch(String),

    /// XML parsing or writing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Result type for sheet operations.
pub type Result<T> = std::result::Result<T, Error>;

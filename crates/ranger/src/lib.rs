//! Ranger - game data sheet conversion library.
//!
//! This crate provides a unified interface to the Ranger crates and the
//! file-level conversions used by the `ranger` command-line tool.
//!
//! # Crates
//!
//! - [`ranger_common`] - Endian-aware binary reading and writing
//! - [`ranger_sheet`] - Schemas, records, and the binary and XML codecs
//!
//! # Example
//!
//! ```no_run
//! use ranger::convert::{self, Options};
//!
//! // Dump a binary sheet to editable XML, then pack it again
//! convert::binary_to_xml("pkmn_schema.xml", "personal.bin", "personal.xml", &Options::default())?;
//! convert::xml_to_binary("pkmn_schema.xml", "personal.xml", "personal.bin", &Options::default())?;
//! # Ok::<(), ranger::sheet::Error>(())
//! ```

// Re-export all sub-crates
pub use ranger_common as common;
pub use ranger_sheet as sheet;

pub mod convert;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::convert::{Inspection, Options, Summary};
    pub use ranger_common::{BinaryReader, BinaryWriter, Endian};
    pub use ranger_sheet::{
        BinaryCodec, FieldType, Record, RecordSet, Schema, SheetHeader, Value, XmlCodec,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

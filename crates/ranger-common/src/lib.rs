//! Common utilities for Ranger.
//!
//! This crate provides the primitive byte encoding used by the sheet codecs:
//!
//! - [`Endian`] - Runtime-selectable byte order
//! - [`BinaryReader`] - Cursor over a byte slice reading fixed-width primitives
//! - [`BinaryWriter`] - Wrapper over any [`std::io::Write`] emitting the same primitives

mod endian;
mod error;
mod reader;
mod writer;

pub use endian::Endian;
pub use error::{Error, Result};
pub use reader::BinaryReader;
pub use writer::BinaryWriter;

//! File-level sheet conversions.
//!
//! Each conversion loads the schema document, reads the whole input into a
//! [`RecordSet`], and writes the other format. Files are closed on every exit
//! path. On failure the output file may exist with partial contents; it is only
//! complete when the call returns `Ok`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use ranger_common::{BinaryReader, Endian};
use ranger_sheet::{BinaryCodec, Error, RecordSet, Result, Schema, SheetHeader, XmlCodec};
use tracing::{debug, info};

/// Conversion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Byte order of the binary sheet.
    pub endian: Endian,
    /// Spaces per nesting level in written XML.
    pub indent: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            endian: Endian::Little,
            indent: 2,
        }
    }
}

impl Options {
    fn binary(&self) -> BinaryCodec {
        BinaryCodec::new(self.endian)
    }

    fn xml(&self) -> XmlCodec {
        XmlCodec::with_indent(self.indent)
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Schema name.
    pub sheet: String,
    /// Number of records converted.
    pub records: usize,
    /// Size in bytes of one binary record.
    pub record_width: usize,
}

impl Summary {
    fn of(records: &RecordSet) -> Self {
        Self {
            sheet: records.schema().name().to_string(),
            records: records.len(),
            record_width: records.schema().field_width(),
        }
    }
}

/// Convert a binary sheet to XML.
pub fn binary_to_xml(
    schema: impl AsRef<Path>,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &Options,
) -> Result<Summary> {
    let schema = Arc::new(Schema::open(schema)?);
    let data = fs::read(input.as_ref())?;
    debug!(path = %input.as_ref().display(), bytes = data.len(), "read binary sheet");

    let records = options.binary().read(&data, schema)?;
    write_file(output.as_ref(), |w| options.xml().write_to(&records, w))?;

    let summary = Summary::of(&records);
    info!(
        sheet = %summary.sheet,
        records = summary.records,
        output = %output.as_ref().display(),
        "decoded binary sheet to XML"
    );
    Ok(summary)
}

/// Convert an XML sheet to binary.
pub fn xml_to_binary(
    schema: impl AsRef<Path>,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &Options,
) -> Result<Summary> {
    let schema = Arc::new(Schema::open(schema)?);
    let data = fs::read(input.as_ref())?;
    debug!(path = %input.as_ref().display(), bytes = data.len(), "read XML sheet");

    let records = options.xml().read_bytes(&data, schema)?;
    // Check the magic before the output file is created.
    records.schema().magic()?;
    write_file(output.as_ref(), |w| options.binary().write_to(&records, w))?;

    let summary = Summary::of(&records);
    info!(
        sheet = %summary.sheet,
        records = summary.records,
        output = %output.as_ref().display(),
        "encoded XML sheet to binary"
    );
    Ok(summary)
}

/// What a binary sheet looks like next to a schema.
#[derive(Debug)]
pub struct Inspection {
    /// The schema the file was checked against.
    pub schema: Schema,
    /// Header as stored in the file.
    pub header: SheetHeader,
    /// Total file size in bytes.
    pub file_size: usize,
    /// Number of records decoded, or why decoding failed.
    pub outcome: std::result::Result<usize, Error>,
}

impl Inspection {
    /// Check if the file decodes cleanly against the schema.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Check a binary sheet against a schema without writing anything.
///
/// Only an unreadable schema, an unreadable file, or a file too short to hold
/// a header is an error; every other problem is reported in
/// [`Inspection::outcome`].
pub fn inspect(
    schema: impl AsRef<Path>,
    input: impl AsRef<Path>,
    options: &Options,
) -> Result<Inspection> {
    let schema = Schema::open(schema)?;
    let data = fs::read(input.as_ref())?;

    let mut reader = BinaryReader::new(&data, options.endian);
    let header = SheetHeader::read(&mut reader).map_err(|_| Error::TruncatedInput {
        needed: SheetHeader::SIZE,
        available: data.len(),
    })?;

    let outcome = options
        .binary()
        .read(&data, Arc::new(schema.clone()))
        .map(|records| records.len());

    Ok(Inspection {
        schema,
        header,
        file_size: data.len(),
        outcome,
    })
}

fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer)?;
    writer.flush()?;
    Ok(())
}

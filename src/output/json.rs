//! JSON output formatter

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

use super::MemberFormatter;
use crate::error::Result;
use crate::export::MemberRecord;

/// Single-line JSON with a space after `,` and `:`
///
/// `[{"login": "alice"}, {"login": "bob"}]`
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Formatter for JSON output
///
/// Buffers every member and writes one array document in `finish`.
#[derive(Default)]
pub struct JsonFormatter {
    records: Vec<MemberRecord>,
}

impl MemberFormatter for JsonFormatter {
    fn begin(&mut self, _field_names: &[String], _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn record(&mut self, record: MemberRecord, _out: &mut dyn Write) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn finish(&mut self, out: &mut dyn Write) -> Result<()> {
        let mut serializer = serde_json::Serializer::with_formatter(&mut *out, SpacedFormatter);
        self.records.serialize(&mut serializer)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

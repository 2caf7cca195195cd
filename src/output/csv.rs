//! CSV output formatter

use std::io::Write;

use super::common::csv_line;
use super::MemberFormatter;
use crate::error::Result;
use crate::export::MemberRecord;

/// Formatter for CSV output
///
/// Streams: the header goes out in `begin`, each member row as it arrives.
pub struct CsvFormatter;

impl MemberFormatter for CsvFormatter {
    fn begin(&mut self, field_names: &[String], out: &mut dyn Write) -> Result<()> {
        out.write_all(csv_line(field_names.iter().map(String::as_str)).as_bytes())?;
        Ok(())
    }

    fn record(&mut self, record: MemberRecord, out: &mut dyn Write) -> Result<()> {
        out.write_all(csv_line(record.values()).as_bytes())?;
        Ok(())
    }

    fn finish(&mut self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }
}

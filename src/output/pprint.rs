//! Pretty-printed text output formatter

use std::io::Write;

use super::MemberFormatter;
use crate::error::Result;
use crate::export::MemberRecord;

/// Formatter for indented, human-readable output
///
/// Meant for reading in a terminal; the layout is not a stable contract.
#[derive(Default)]
pub struct PrettyFormatter {
    records: Vec<MemberRecord>,
}

impl MemberFormatter for PrettyFormatter {
    fn begin(&mut self, _field_names: &[String], _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn record(&mut self, record: MemberRecord, _out: &mut dyn Write) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn finish(&mut self, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.records)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

//! Output formatting module
//!
//! Handles the member output formats: CSV, JSON and pretty-printed text

mod common;
mod csv;
mod json;
mod pprint;

use std::io::Write;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::export::MemberRecord;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::pprint::PrettyFormatter;

/// Trait for member output formatters
///
/// Called as `begin`, then `record` once per member in production order,
/// then `finish`. Formatters that need the whole sequence buffer records
/// and write everything in `finish`.
pub trait MemberFormatter {
    /// Called once before the first member
    fn begin(&mut self, field_names: &[String], out: &mut dyn Write) -> Result<()>;

    /// Called for every member
    fn record(&mut self, record: MemberRecord, out: &mut dyn Write) -> Result<()>;

    /// Called once after the last member
    fn finish(&mut self, out: &mut dyn Write) -> Result<()>;
}

impl OutputFormat {
    /// Create the formatter for this format
    pub fn formatter(&self) -> Box<dyn MemberFormatter> {
        match self {
            OutputFormat::Csv => Box::new(CsvFormatter),
            OutputFormat::Json => Box::new(JsonFormatter::default()),
            OutputFormat::Pprint => Box::new(PrettyFormatter::default()),
        }
    }
}

/// Run a whole record sequence through a formatter into a string
#[cfg(test)]
pub(crate) fn render(
    format: OutputFormat,
    field_names: &[&str],
    records: Vec<MemberRecord>,
) -> String {
    let field_names: Vec<String> = field_names.iter().map(|f| f.to_string()).collect();
    let mut out: Vec<u8> = Vec::new();
    let mut formatter = format.formatter();

    formatter.begin(&field_names, &mut out).unwrap();
    for record in records {
        formatter.record(record, &mut out).unwrap();
    }
    formatter.finish(&mut out).unwrap();

    String::from_utf8(out).unwrap()
}

#[cfg(test)]
pub(crate) fn record(pairs: &[(&str, &str)]) -> MemberRecord {
    MemberRecord::new(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

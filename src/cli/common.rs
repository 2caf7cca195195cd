//! Common CLI types

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values, every cell quoted, header row first
    Csv,
    /// Single-line JSON array of objects
    Json,
    /// Indented text for reading in a terminal (default)
    Pprint,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Pprint => write!(f, "pprint"),
        }
    }
}

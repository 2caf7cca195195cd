//! Export request and output destination

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::config::defaults;
use crate::error::{GhError, Result};

/// Where the serialized members go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Process standard output, left open afterwards
    Stdout,
    /// File created or truncated on open
    File(PathBuf),
}

impl Destination {
    /// Standard output when no path is given
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Destination::File(p.to_path_buf()),
            None => Destination::Stdout,
        }
    }

    /// Open the destination for writing
    ///
    /// Files are truncated, never appended to. The handle is closed when the
    /// returned writer is dropped, including on error paths.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            Destination::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
            Destination::File(path) => {
                let file = File::create(path).map_err(|e| {
                    GhError::Io(io::Error::new(
                        e.kind(),
                        format!("cannot open {} for writing: {}", path.display(), e),
                    ))
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Stdout => write!(f, "stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything one export needs besides the session
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub org_name: String,
    pub field_names: Vec<String>,
    pub format: OutputFormat,
    pub destination: Destination,
}

impl ExportRequest {
    /// Request with the default fields, pretty-printed to stdout
    pub fn new(org_name: &str) -> Self {
        Self {
            org_name: org_name.to_string(),
            field_names: defaults::FIELD_NAMES.iter().map(|f| f.to_string()).collect(),
            format: OutputFormat::Pprint,
            destination: Destination::Stdout,
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_names = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }
}

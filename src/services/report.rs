//! Rendering of training summaries to an output stream.

use crate::config::OutputFormat;
use crate::domain::InfoMessage;
use crate::error::Result;
use std::io::Write;

/// Writes summaries as message lines or as a JSON array
pub struct ReportWriter {
    format: OutputFormat,
    pretty: bool,
}

impl ReportWriter {
    /// Create a new report writer
    pub fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    /// Write all summaries to `out`
    pub fn write<W: Write>(&self, out: &mut W, summaries: &[InfoMessage]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for info in summaries {
                    writeln!(out, "{}", info)?;
                }
            }
            OutputFormat::Json => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut *out, summaries)?;
                } else {
                    serde_json::to_writer(&mut *out, summaries)?;
                }
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Render all summaries into a string
    pub fn render(&self, summaries: &[InfoMessage]) -> Result<String> {
        let mut buf = Vec::new();
        self.write(&mut buf, summaries)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

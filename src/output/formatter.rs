use std::io::Write;

use clap::ValueEnum;

use crate::error::{OutputError, Result};
use crate::greeting::Greeting;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn render(greeting: &Greeting, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(greeting.message.clone()),
            OutputFormat::Json => serde_json::to_string_pretty(greeting)
                .map_err(|e| OutputError::serialize(format.as_str(), e).into()),
        }
    }

    /// Render and write one line, flushing so a closed pipe surfaces here.
    pub fn write_to<W: Write>(
        writer: &mut W,
        greeting: &Greeting,
        format: OutputFormat,
    ) -> Result<()> {
        let rendered = Self::render(greeting, format)?;
        writeln!(writer, "{rendered}").map_err(OutputError::write)?;
        writer.flush().map_err(OutputError::write)?;
        Ok(())
    }
}

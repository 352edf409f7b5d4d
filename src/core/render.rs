//! Renderer module
//!
//! Renders a ranking to text, json or jsonl

use crate::core::model::CountEntry;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<author>: <count>` per line
    #[default]
    Text,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for ranked entries
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render entries to a string; non-empty output ends with a newline
    pub fn render(&self, entries: &[CountEntry]) -> String {
        let mut output = match self.config.format {
            OutputFormat::Text => self.render_text(entries),
            OutputFormat::Json => self.render_json(entries),
            OutputFormat::Jsonl => self.render_jsonl(entries),
        };
        if !output.is_empty() {
            output.push('\n');
        }
        output
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, entries: &[CountEntry], mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.render(entries).as_bytes())?;
        writer.flush()
    }

    fn render_text(&self, entries: &[CountEntry]) -> String {
        entries
            .iter()
            .map(|entry| format!("{}: {}", entry.author, entry.count))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, entries: &[CountEntry]) -> String {
        entries
            .iter()
            .filter_map(|entry| {
                if self.config.pretty {
                    serde_json::to_string_pretty(entry).ok()
                } else {
                    serde_json::to_string(entry).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, entries: &[CountEntry]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

//! Data model shared by the loader, the tally and the renderer

use serde::{Deserialize, Serialize};

/// One parsed CSV line: the fields in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Number of fields (delimiters + 1 for rows built by the splitter)
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, offset: usize) -> Option<&str> {
        self.fields.get(offset).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[allow(dead_code)]
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Facts about a loaded file, fixed once the header is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Physical lines after the header
    pub total_rows: usize,
    /// Field count of the header row
    pub num_cols: usize,
    /// Zero-based offset of the author column
    pub name_offset: usize,
}

/// An author and how many rows they posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub author: String,
    pub count: usize,
}

impl CountEntry {
    pub fn new(author: impl Into<String>, count: usize) -> Self {
        Self {
            author: author.into(),
            count,
        }
    }
}

/// Everything a finished run knows, ready for rendering.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub metadata: Metadata,
    /// Ranked entries, highest count first
    pub entries: Vec<CountEntry>,
    /// Rows that contributed to a count
    pub counted: usize,
    /// Rows dropped for an empty author key
    pub skipped: usize,
    /// Distinct authors seen across the whole file
    pub authors: usize,
    /// Invalid UTF-8 was replaced while reading
    pub lossy: bool,
}

impl Report {
    /// One-line run summary for stderr
    pub fn summary_line(&self) -> String {
        format!(
            "rows={} columns={} counted={} skipped={} authors={} lossy={}",
            self.metadata.total_rows,
            self.metadata.num_cols,
            self.counted,
            self.skipped,
            self.authors,
            self.lossy
        )
    }
}

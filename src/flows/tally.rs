//! Post counting per author

use std::collections::HashMap;

use crate::core::error::{TallyError, TallyResult};
use crate::core::model::CountEntry;
use crate::core::split::split_line;

/// Data lines start after the header, which is file line 1.
const FIRST_DATA_LINE: usize = 2;

/// Author -> post count, remembering the order authors were first seen.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    entries: Vec<CountEntry>,
    index: HashMap<String, usize>,
    skipped: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one post for `author`. Empty keys are skipped, not counted.
    pub fn record(&mut self, author: &str) {
        if author.is_empty() {
            self.skipped += 1;
            return;
        }

        match self.index.get(author) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(author.to_string(), self.entries.len());
                self.entries.push(CountEntry::new(author, 1));
            }
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, author: &str) -> Option<usize> {
        self.index.get(author).map(|&slot| self.entries[slot].count)
    }

    /// Distinct authors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Rows dropped for an empty author key
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[CountEntry] {
        &self.entries
    }
}

/// Count posts per author over raw data lines.
///
/// Fails on the first row that has no field at `name_offset`.
pub fn aggregate<S: AsRef<str>>(lines: &[S], name_offset: usize) -> TallyResult<Tally> {
    let mut tally = Tally::new();

    for (i, line) in lines.iter().enumerate() {
        let row = split_line(line.as_ref());
        let author = row.get(name_offset).ok_or(TallyError::IndexOutOfRange {
            line: i + FIRST_DATA_LINE,
            fields: row.len(),
            offset: name_offset,
        })?;
        tally.record(author);
    }

    tracing::debug!(
        rows = lines.len(),
        counted = tally.total(),
        skipped = tally.skipped(),
        authors = tally.len(),
        "aggregated posts"
    );
    Ok(tally)
}

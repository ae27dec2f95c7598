use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::util::Counter;

/// Case-insensitive token counts for one input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counter: Counter<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Default::default()
    }

    /// Reads `path` once, line by line, and tabulates every token in it.
    ///
    /// Any open or read failure, including non-UTF-8 input, yields
    /// `Error::FileAccess` and no table.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_access = |source: io::Error| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(file_access)?;
        let table = Self::from_reader(BufReader::new(file)).map_err(file_access)?;
        debug!(
            "Tabulated {}: {} distinct tokens, {} total",
            path.display(),
            table.len(),
            table.total()
        );
        Ok(table)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut table = Self::new();
        for line in reader.lines() {
            table.record_line(&line?);
        }
        Ok(table)
    }

    /// Splits on runs of whitespace and counts each lowercased token.
    pub fn record_line(&mut self, line: &str) {
        for word in line.split(is_separator).filter(|w| !w.is_empty()) {
            self.counter.record(word.to_lowercase());
        }
    }

    pub fn get(&self, token: &str) -> u64 {
        self.counter.get(token)
    }

    pub fn total(&self) -> u64 {
        self.counter.total()
    }

    pub fn len(&self) -> usize {
        self.counter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counter.is_empty()
    }

    /// Entries in ascending token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counter.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit
/// separators (U+001C..=U+001F).
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn build_frequency_table<P: AsRef<Path>>(file_path: P) -> Result<FrequencyTable> {
    FrequencyTable::from_path(file_path)
}

use std::cmp::Reverse;
use std::io::{self, Write};

use crate::table::FrequencyTable;

pub const DEFAULT_TOP_LIMIT: usize = 20;

/// Minimum width the token column is padded to.
const WORD_WIDTH: usize = 10;

pub fn format_line(token: &str, count: u64) -> String {
    format!("WORD: {:width$} COUNT: {}", token, count, width = WORD_WIDTH)
}

/// Ordered (token, count) pairs borrowed from a `FrequencyTable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<'a> {
    entries: Vec<(&'a str, u64)>,
}

impl<'a> Report<'a> {
    pub fn alphabetical(table: &'a FrequencyTable) -> Self {
        Report {
            entries: table.iter().collect(),
        }
    }

    /// The `limit` most frequent tokens, highest count first.
    ///
    /// The sort is stable on count alone, so equal counts keep the table's
    /// iteration order. That order is not part of the contract.
    pub fn top(table: &'a FrequencyTable, limit: usize) -> Self {
        let mut entries: Vec<(&str, u64)> = table.iter().collect();
        entries.sort_by_key(|&(_, count)| Reverse(count));
        entries.truncate(limit);
        Report { entries }
    }

    pub fn entries(&self) -> &[(&'a str, u64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .map(|&(token, count)| format_line(token, count))
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

pub fn render_alphabetical(table: &FrequencyTable) -> Vec<String> {
    Report::alphabetical(table).lines().collect()
}

pub fn render_top(table: &FrequencyTable, limit: usize) -> Vec<String> {
    Report::top(table, limit).lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(text: &str) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for line in text.lines() {
            table.record_line(line);
        }
        table
    }

    #[test]
    fn pads_short_tokens_and_keeps_long_ones() {
        assert_eq!(format_line("a", 1), "WORD: a          COUNT: 1");
        assert_eq!(format_line("abcdefghij", 2), "WORD: abcdefghij COUNT: 2");
        assert_eq!(
            format_line("abcdefghijklm", 3),
            "WORD: abcdefghijklm COUNT: 3"
        );
    }

    #[test]
    fn alphabetical_puts_punctuation_first() {
        let table = table("zebra Apple \"quoted\" 42");
        let report = Report::alphabetical(&table);
        let tokens: Vec<&str> = report.entries().iter().map(|(t, _)| *t).collect();
        assert_eq!(tokens, vec!["\"quoted\"", "42", "apple", "zebra"]);
    }

    #[test]
    fn two_line_scenario() {
        let table = table("a b b\nc c c");
        assert_eq!(
            render_alphabetical(&table),
            vec![
                "WORD: a          COUNT: 1",
                "WORD: b          COUNT: 2",
                "WORD: c          COUNT: 3",
            ]
        );
        assert_eq!(
            render_top(&table, DEFAULT_TOP_LIMIT),
            vec![
                "WORD: c          COUNT: 3",
                "WORD: b          COUNT: 2",
                "WORD: a          COUNT: 1",
            ]
        );
    }

    #[test]
    fn top_honors_limit_exactly() {
        let mut table = FrequencyTable::new();
        for i in 0..30 {
            let line = vec![format!("w{}", i); i + 1].join(" ");
            table.record_line(&line);
        }
        let report = Report::top(&table, DEFAULT_TOP_LIMIT);
        assert_eq!(report.len(), DEFAULT_TOP_LIMIT);
        assert_eq!(report.entries()[0], ("w29", 30));
        assert_eq!(report.entries()[19], ("w10", 11));
    }

    #[test]
    fn top_with_zero_limit_is_empty() {
        let table = table("x y z");
        assert!(Report::top(&table, 0).is_empty());
    }

    #[test]
    fn write_to_emits_one_line_per_entry() {
        let table = table("b a");
        let mut out = Vec::new();
        Report::alphabetical(&table).write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "WORD: a          COUNT: 1\nWORD: b          COUNT: 1\n"
        );
    }
}

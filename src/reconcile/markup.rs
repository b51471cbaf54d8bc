//! Serialized table markup: writer and defensive parser.
//!
//! Tables travel through free text as pipe-delimited markup — a header
//! row, a separator row, then data rows. The writer produces it; the
//! parser takes it back apart without ever failing, because the input
//! may come from an external document and the expected structure is
//! frequently absent.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::Table;

/// The column separator used by the markup format.
pub const CELL_DELIMITER: char = '|';

/// Escape delimiter characters in cell text.
///
/// `unescape_cell` is the exact inverse; the backslash itself is
/// escaped too so the mapping stays unambiguous for text that already
/// contains `\|`.
pub fn escape_cell(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            CELL_DELIMITER => out.push_str("\\|"),
            _ => out.push(ch),
        }
    }
    out
}

/// Undo [`escape_cell`].
pub fn unescape_cell(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                // Trailing lone backslash: keep it.
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Serialize a table as pipe-delimited markup.
///
/// Cell text in [`Table`] rows is already markup-safe (escaped on
/// write-in by the reconstructor), so cells are emitted verbatim.
/// With `has_header` the first row becomes the header; without it a
/// row of empty headers is synthesized so no data row gets promoted.
/// The separator row exists only in the serialized form, never in the
/// `Table` itself. An empty table serializes to the empty string.
pub fn write_markup_table(table: &Table, has_header: bool) -> String {
    if table.is_empty() {
        return String::new();
    }

    let col_count = table.column_count();
    let mut lines = Vec::with_capacity(table.row_count() + 2);

    let (header, data_rows): (Vec<String>, &[Vec<String>]) = if has_header {
        (table.rows[0].clone(), &table.rows[1..])
    } else {
        (vec![String::new(); col_count], &table.rows[..])
    };

    lines.push(format_row(&header));
    lines.push(format!("|{}", " --- |".repeat(col_count)));
    for row in data_rows {
        lines.push(format_row(row));
    }

    lines.join("\n")
}

fn format_row(cells: &[String]) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push_str(" |");
    }
    line
}

/// Result of scanning text for a markup table.
///
/// `Absent` (no table structure in the input) and `Empty` (a table
/// block with zero rows) collapse to the same `([], [])` at the public
/// [`MarkupTableParser::parse`] boundary, but stay distinguishable here
/// so an upstream detection failure is not masked by a legitimately
/// empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableScan {
    /// No delimiter-bounded block found in the input
    Absent,
    /// A table block was found but contains no rows
    Empty,
    /// Header row and data rows, cells unescaped
    Found {
        /// Header cells
        header: Vec<String>,
        /// Data rows
        rows: Vec<Vec<String>>,
    },
}

/// Defensive parser for pipe-delimited table markup.
///
/// The single most important contract in the subsystem: this parser
/// never raises. Missing or malformed table structure produces an
/// empty result and a diagnostic, and the caller continues with the
/// rest of the document.
#[derive(Debug)]
pub struct MarkupTableParser;

impl MarkupTableParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse the first markup table found in `input`.
    ///
    /// Returns `(header, data_rows)` with cell text unescaped. When no
    /// table structure is present the result is `([], [])` and a
    /// warning identifies the offending input; a table block with zero
    /// rows yields `([], [])` as well. Callers must treat the two
    /// identically at this boundary.
    pub fn parse(&self, input: &str) -> (Vec<String>, Vec<Vec<String>>) {
        match self.scan(input) {
            TableScan::Found { header, rows } => (header, rows),
            TableScan::Empty => {
                log::debug!("markup table block contains zero rows");
                (Vec::new(), Vec::new())
            }
            TableScan::Absent => {
                log::warn!(
                    "no table structure found in markup fragment: {:?}",
                    truncate_for_log(input)
                );
                (Vec::new(), Vec::new())
            }
        }
    }

    /// Scan `input` for a markup table, keeping absence and emptiness
    /// distinguishable.
    pub fn scan(&self, input: &str) -> TableScan {
        let mut block: Vec<Vec<String>> = Vec::new();
        let mut in_block = false;
        let mut found_block = false;

        for line in input.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with(CELL_DELIMITER) {
                in_block = true;
                found_block = true;
                if !is_separator_row(trimmed) {
                    block.push(split_row(trimmed));
                }
            } else if in_block {
                // First non-table line after the block; only the first
                // table in the fragment is parsed.
                break;
            }
        }

        if !found_block {
            return TableScan::Absent;
        }
        if block.is_empty() {
            return TableScan::Empty;
        }

        let mut rows = block.into_iter();
        let header = rows.next().unwrap_or_default();
        TableScan::Found {
            header,
            rows: rows.collect(),
        }
    }
}

impl Default for MarkupTableParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a trimmed line is a header/data separator (`| --- | --- |`).
fn is_separator_row(line: &str) -> bool {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATOR
        .get_or_init(|| Regex::new(r"^\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?$").expect("valid regex"));
    re.is_match(line)
}

/// Split a table row on unescaped delimiters, trimming and unescaping
/// each cell.
fn split_row(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                current.push(ch);
                if let Some(&next) = chars.peek() {
                    current.push(next);
                    chars.next();
                }
            }
            CELL_DELIMITER => {
                cells.push(current.clone());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    cells.push(current);

    // Outer pipes produce empty edge fields; drop them.
    if cells.first().is_some_and(|c| c.trim().is_empty()) {
        cells.remove(0);
    }
    if line.trim_end().ends_with(CELL_DELIMITER) && !line.trim_end().ends_with("\\|") {
        cells.pop();
    }

    cells
        .into_iter()
        .map(|c| unescape_cell(c.trim()))
        .collect()
}

fn truncate_for_log(input: &str) -> String {
    const LIMIT: usize = 120;
    if input.chars().count() <= LIMIT {
        input.to_string()
    } else {
        let head: String = input.chars().take(LIMIT).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_unescape_inverse() {
        for text in ["plain", "a|b", "a\\|b", "\\", "||", "trailing\\"] {
            assert_eq!(unescape_cell(&escape_cell(text)), text, "text = {text:?}");
        }
    }

    #[test]
    fn test_write_then_parse_round_trip() {
        let table = Table {
            rows: vec![
                vec![escape_cell("Name"), escape_cell("Qty|Unit")],
                vec![escape_cell("Bolt"), escape_cell("12")],
            ],
        };

        let markup = write_markup_table(&table, true);
        let (header, rows) = MarkupTableParser::new().parse(&markup);

        assert_eq!(header, vec!["Name", "Qty|Unit"]);
        assert_eq!(rows, vec![vec!["Bolt".to_string(), "12".to_string()]]);
    }

    #[test]
    fn test_no_marker_returns_empty_pair() {
        let parser = MarkupTableParser::new();
        let (header, rows) = parser.parse("just a paragraph\nwith two lines");
        assert!(header.is_empty());
        assert!(rows.is_empty());
        assert_eq!(
            parser.scan("just a paragraph\nwith two lines"),
            TableScan::Absent
        );
    }

    #[test]
    fn test_empty_block_matches_absent_at_pair_boundary() {
        // Only a separator-shaped line: a marker with zero rows.
        let parser = MarkupTableParser::new();
        let input = "| --- | --- |";
        assert_eq!(parser.scan(input), TableScan::Empty);
        assert_eq!(parser.parse(input), (Vec::new(), Vec::new()));
        assert_eq!(parser.parse("no table here"), (Vec::new(), Vec::new()));
    }

    #[test]
    fn test_header_only_table() {
        let (header, rows) = MarkupTableParser::new().parse("| A | B |\n| --- | --- |");
        assert_eq!(header, vec!["A", "B"]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_stops_at_end_of_block() {
        let input = "intro text\n| H |\n| --- |\n| d1 |\nfootnote\n| not | parsed |";
        let (header, rows) = MarkupTableParser::new().parse(input);
        assert_eq!(header, vec!["H"]);
        assert_eq!(rows, vec![vec!["d1".to_string()]]);
    }

    #[test]
    fn test_headerless_serialization_synthesizes_empty_header() {
        let table = Table::from_rows([["a", "b"], ["c", "d"]]);
        let markup = write_markup_table(&table, false);
        let (header, rows) = MarkupTableParser::new().parse(&markup);

        assert_eq!(header, vec!["", ""]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b"]);
    }

    #[test]
    fn test_empty_table_serializes_to_empty_string() {
        assert_eq!(write_markup_table(&Table::new(), true), "");
    }

    #[test]
    fn test_separator_row_variants() {
        assert!(is_separator_row("| --- | --- |"));
        assert!(is_separator_row("|---|---|"));
        assert!(is_separator_row("| :--- | ---: |"));
        assert!(!is_separator_row("| a | b |"));
        assert!(!is_separator_row("| --- | b |"));
    }

    #[test]
    fn test_empty_edge_cells_preserved() {
        let (header, rows) = MarkupTableParser::new().parse("| A |  |\n| --- | --- |\n|  | d |");
        assert_eq!(header, vec!["A", ""]);
        assert_eq!(rows, vec![vec!["".to_string(), "d".to_string()]]);
    }
}

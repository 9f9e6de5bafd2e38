//! Delimited table parsing.
//!
//! Every physical line is one record: a quoted field cannot span lines.
//! Within a line, quoted fields may contain the delimiter and `""` escapes
//! a literal quote. One trailing `\r` is dropped; any other `\r` is cell
//! content. Blank lines are skipped and cells missing from a short
//! row read as empty strings.

use std::collections::BTreeMap;

use csv::{ReaderBuilder, StringRecord, Terminator};

/// One table row keyed by column header.
pub type TableRow = BTreeMap<String, String>;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Field delimiter, `b','` unless the table uses semicolons.
    pub delimiter: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TableOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Parse table text whose first line is the header row.
pub fn parse_table(text: &str, options: &TableOptions) -> csv::Result<Vec<TableRow>> {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .delimiter(options.delimiter);

    let mut lines = text.split('\n');
    let headers: Vec<String> = match lines.next() {
        Some(line) => parse_line(&builder, line)?
            .into_iter()
            .enumerate()
            .map(|(idx, header)| {
                if idx == 0 {
                    header.trim_start_matches('\u{feff}').to_string()
                } else {
                    header
                }
            })
            .collect(),
        None => Vec::new(),
    };

    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let values = parse_line(&builder, line)?;
        let row: TableRow = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = values.get(idx).cloned().unwrap_or_default();
                (header.clone(), value)
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Get a cell from a row, returning an empty string if the column is absent.
pub fn get_field<'a>(row: &'a TableRow, key: &str) -> &'a str {
    row.get(key).map(String::as_str).unwrap_or("")
}

fn parse_line(builder: &ReaderBuilder, line: &str) -> csv::Result<Vec<String>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut reader = builder.from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record.iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_keep_delimiters_and_quotes() {
        let text = "name,definition\nrecordedBy,\"A list (concatenated, in order) of \"\"names\"\"\"\n";
        let rows = parse_table(text, &TableOptions::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(get_field(&rows[0], "name"), "recordedBy");
        assert_eq!(
            get_field(&rows[0], "definition"),
            "A list (concatenated, in order) of \"names\""
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "a,b\n1,2\n\n   \n3,4";
        let rows = parse_table(text, &TableOptions::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(get_field(&rows[1], "a"), "3");
    }

    #[test]
    fn short_rows_fill_missing_columns() {
        let rows = parse_table("a,b,c\n1\n", &TableOptions::default()).unwrap();
        assert_eq!(get_field(&rows[0], "a"), "1");
        assert_eq!(get_field(&rows[0], "b"), "");
        assert_eq!(get_field(&rows[0], "c"), "");
        assert_eq!(get_field(&rows[0], "missing"), "");
    }

    #[test]
    fn semicolon_delimiter() {
        let options = TableOptions::default().with_delimiter(b';');
        let rows = parse_table("a;b\n\"x;y\";z\n", &options).unwrap();
        assert_eq!(get_field(&rows[0], "a"), "x;y");
        assert_eq!(get_field(&rows[0], "b"), "z");
    }

    #[test]
    fn quoted_field_does_not_span_lines() {
        let rows = parse_table("a,b\n\"open,1\n2,3\n", &TableOptions::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(get_field(&rows[0], "a"), "open,1");
        assert_eq!(get_field(&rows[1], "a"), "2");
    }

    #[test]
    fn interior_carriage_return_stays_in_cell() {
        let rows = parse_table("a,b\n1\r2,3\n", &TableOptions::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(get_field(&rows[0], "a"), "1\r2");
        assert_eq!(get_field(&rows[0], "b"), "3");
    }

    #[test]
    fn crlf_and_bom_are_stripped() {
        let rows = parse_table("\u{feff}a,b\r\n1,2\r\n", &TableOptions::default()).unwrap();
        assert_eq!(get_field(&rows[0], "a"), "1");
        assert_eq!(get_field(&rows[0], "b"), "2");
    }
}

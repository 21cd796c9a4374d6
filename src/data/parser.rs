//! Row Parser Module
//! Splits raw CSV text into records, tolerating malformed rows.

use csv::{ReaderBuilder, Trim};

/// One parsed row.
///
/// Fields keep their raw text; numeric access parses on demand so a field
/// that is not a number yields a missing slot instead of failing the row.
/// Records are never mutated after parsing.
#[derive(Debug, Clone)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw text of a field, empty when the column is absent.
    pub fn text(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Parse-float-else-missing access. NaN and infinities count as missing.
    pub fn number(&self, idx: usize) -> Option<f64> {
        let raw = self.text(idx).trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Time key access; accepts integer years and float spellings like "2020.0".
    pub fn year(&self, idx: usize) -> Option<i32> {
        let raw = self.text(idx).trim();
        raw.parse::<i32>()
            .ok()
            .or_else(|| raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i32))
    }
}

/// Parses delimited text into records.
///
/// The first retained line is treated as a header and skipped; column names
/// are not validated (stable column order is part of the data contract).
/// Fields may be wrapped in double quotes and contain the delimiter
/// literally; the quotes are stripped. Rows with fewer fields than the
/// schema minimum are skipped entirely, never partially parsed.
pub struct RowParser {
    min_fields: usize,
}

impl RowParser {
    pub fn new(min_fields: usize) -> Self {
        Self { min_fields }
    }

    pub fn parse(&self, text: &str) -> Vec<Record> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut records = Vec::new();
        for result in reader.records() {
            // Malformed rows are tolerated, not fatal.
            let Ok(row) = result else { continue };
            if row.len() < self.min_fields {
                continue;
            }
            records.push(Record {
                fields: row.iter().map(|s| s.to_string()).collect(),
            });
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_and_counts_rows() {
        let text = "id,year,value\n1,2020,10\n2,2021,20\n\n3,2022,30\n";
        let records = RowParser::new(3).parse(text);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].text(1), "2020");
    }

    #[test]
    fn quoted_field_keeps_delimiter_and_field_count() {
        let text = "id,title,desc\n1,Launch,\"big, important event\"\n";
        let records = RowParser::new(3).parse(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 3);
        assert_eq!(records[0].text(2), "big, important event");
    }

    #[test]
    fn short_rows_are_skipped_entirely() {
        let text = "a,b,c\n1,2,3\nonly-two,fields\n4,5,6\n";
        let records = RowParser::new(3).parse(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].text(0), "4");
    }

    #[test]
    fn bad_numeric_field_is_missing_not_fatal() {
        let text = "year,value\n2020,n/a\n2021,12.5\n";
        let records = RowParser::new(2).parse(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number(1), None);
        assert_eq!(records[1].number(1), Some(12.5));
    }

    #[test]
    fn missing_column_reads_as_empty_and_missing() {
        let text = "a,b,c\n1,2,3\n";
        let records = RowParser::new(3).parse(text);
        assert_eq!(records[0].text(9), "");
        assert_eq!(records[0].number(9), None);
    }

    #[test]
    fn crlf_and_float_years_are_accepted() {
        let text = "id,year\r\n1,2020.0\r\n2,2021\r\n";
        let records = RowParser::new(2).parse(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year(1), Some(2020));
        assert_eq!(records[1].year(1), Some(2021));
    }
}

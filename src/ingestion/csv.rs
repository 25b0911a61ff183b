//! CSV reading into an untyped [`RawTable`].
//!
//! Uploaded datasets are untrusted: encodings vary (latin-1 SMS dumps are
//! common) and rows can be ragged. Reading is therefore lossy on encoding and
//! flexible on row width; CSV structural errors still surface as rejections.

use std::fs;
use std::path::Path;

use crate::error::ValidationResult;
use crate::types::RawTable;

/// Read a CSV file into a [`RawTable`].
///
/// Rules:
///
/// - The first line is the header; names are lower-cased and trimmed.
/// - Bytes are decoded lossily, so non-UTF-8 files still load.
/// - Rows shorter or longer than the header are padded/truncated to fit.
pub fn read_table_from_path(path: impl AsRef<Path>) -> ValidationResult<RawTable> {
    let bytes = fs::read(path)?;
    read_table_from_bytes(&bytes)
}

/// Read CSV bytes (e.g. an in-memory upload) into a [`RawTable`].
pub fn read_table_from_bytes(bytes: &[u8]) -> ValidationResult<RawTable> {
    let text = String::from_utf8_lossy(bytes);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    read_table_from_reader(&mut rdr)
}

/// Read from an existing CSV reader into a [`RawTable`].
pub fn read_table_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> ValidationResult<RawTable> {
    let headers = rdr.headers()?.clone();
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(
            (0..columns.len())
                .map(|i| record.get(i).unwrap_or("").to_string())
                .collect(),
        );
    }

    Ok(RawTable::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::read_table_from_bytes;

    #[test]
    fn reads_headers_and_rows() {
        let table = read_table_from_bytes(b"URL,Label\nhttp://a.com,1\nhttp://b.com,0\n").unwrap();
        assert_eq!(table.columns(), &["url".to_string(), "label".to_string()]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), "http://a.com");
        assert_eq!(table.cell(1, 1), "0");
    }

    #[test]
    fn tolerates_ragged_rows() {
        let table = read_table_from_bytes(b"a,b\n1\n2,3,4\n").unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 1), "");
        assert_eq!(table.cell(1, 1), "3");
    }

    #[test]
    fn tolerates_non_utf8_bytes() {
        // 0xE9 is latin-1 'é'; lossy decode must not fail the read.
        let table = read_table_from_bytes(b"text,label\ncaf\xe9,ham\n").unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.cell(0, 1), "ham");
    }
}

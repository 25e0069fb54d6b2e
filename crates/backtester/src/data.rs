// In crates/backtester/src/data.rs

//! CSV ingestion for historical bars.
//!
//! Expected layout is `timestamp,open,high,low,close,volume`. The first line
//! is a header and is discarded without looking at its column names; fields
//! are read by position. Rows keep their file order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use core_types::Bar;
use csv::{ReaderBuilder, Trim};
use tracing::info;

use crate::error::{Error, Result};

/// Reads every bar from the CSV file at `path`.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Bar>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let bars = read_bars(file)?;
    info!(path = %path.display(), count = bars.len(), "Loaded bars from CSV.");
    Ok(bars)
}

/// Reads every bar from CSV text.
///
/// A row that cannot be parsed aborts the read; rows are not skipped.
pub fn read_bars<R: Read>(reader: R) -> Result<Vec<Bar>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut bars = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // Row numbers count the header as row 1.
        let row = index + 2;
        let record = record.map_err(|source| Error::Csv { row, source })?;
        let bar: Bar = record
            .deserialize(None)
            .map_err(|source| Error::Csv { row, source })?;
        bars.push(bar);
    }

    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
timestamp,open,high,low,close,volume
2024-01-01,100.0,101.5,99.0,100.5,12000
2024-01-02, 100.5 ,102.0,100.0,101.75,15000
2024-01-03,101.75,101.8,98.2,98.5,18000.5
";

    #[test]
    fn reads_rows_in_order() {
        let bars = read_bars(SAMPLE.as_bytes()).unwrap();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0], Bar::new("2024-01-01", 100.0, 101.5, 99.0, 100.5, 12000.0));
        assert_eq!(bars[1].open, 100.5);
        assert_eq!(bars[2].timestamp, "2024-01-03");
        assert_eq!(bars[2].volume, 18000.5);
    }

    #[test]
    fn header_names_are_ignored() {
        let bars = read_bars("a,b,c,d,e,f\nT1,1,2,3,4,5\n".as_bytes()).unwrap();
        assert_eq!(bars, vec![Bar::new("T1", 1.0, 2.0, 3.0, 4.0, 5.0)]);
    }

    #[test]
    fn header_only_yields_no_bars() {
        let bars = read_bars("timestamp,open,high,low,close,volume\n".as_bytes()).unwrap();
        assert!(bars.is_empty());
    }

    #[test]
    fn malformed_row_reports_its_row_number() {
        let text = "timestamp,open,high,low,close,volume\nT1,1,2,3,4,5\nT2,1,2,x,4,5\n";
        let err = read_bars(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Csv { row: 3, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_csv("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

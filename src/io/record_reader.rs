//! Streaming line reader with codec decoding
//!
//! Wraps `csv::Reader` configured for the persisted format: no header row,
//! variable column counts, no quoting and no trimming. Each row is handed to a
//! `RecordCodec` and yielded together with its 1-based line number, so the
//! caller can log and skip bad rows without stopping the read.
//!
//! ```no_run
//! use shop_ledger_store::io::codec::AccountCodec;
//! use shop_ledger_store::io::record_reader::RecordReader;
//! use std::path::Path;
//!
//! let reader = RecordReader::<AccountCodec>::open(Path::new("data/bank_accounts.csv")).unwrap();
//! for row in reader {
//!     match row.result {
//!         Ok(account) => println!("{}: {}", account.id, account.owner),
//!         Err(e) => eprintln!("line {}: {}", row.line, e),
//!     }
//! }
//! ```

use crate::io::codec::RecordCodec;
use crate::types::StoreError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::Path;

/// One decoded row and where it came from
#[derive(Debug)]
pub struct DecodedRow<T> {
    /// 1-based line number in the source file
    pub line: u64,
    /// The decoded record, or why the row must be skipped
    pub result: Result<T, StoreError>,
}

/// Iterator over the decoded rows of one file
pub struct RecordReader<C: RecordCodec> {
    reader: csv::Reader<File>,
    record: StringRecord,
    finished: bool,
    _codec: PhantomData<C>,
}

impl<C: RecordCodec> RecordReader<C> {
    /// Open `path` for reading
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if the file does not exist
    /// - `IoError` if it exists but cannot be opened
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => StoreError::from(e),
        })?;

        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::None)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            record: StringRecord::new(),
            finished: false,
            _codec: PhantomData,
        })
    }
}

impl<C: RecordCodec> Iterator for RecordReader<C> {
    type Item = DecodedRow<C::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.reader.read_record(&mut self.record) {
            Ok(false) => {
                self.finished = true;
                None
            }
            Ok(true) => {
                let line = self.record.position().map_or(0, |p| p.line());
                let fields: Vec<&str> = self.record.iter().collect();
                Some(DecodedRow {
                    line,
                    result: C::decode(&fields),
                })
            }
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                // An I/O failure will not clear up on the next read
                if e.is_io_error() {
                    self.finished = true;
                }
                Some(DecodedRow {
                    line,
                    result: Err(StoreError::from(e)),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::codec::{AccountCodec, OrderCodec};
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_open_missing_file() {
        let result = RecordReader::<AccountCodec>::open(Path::new("no/such/file.csv"));
        assert!(matches!(result, Err(StoreError::FileNotFound { .. })));
    }

    #[test]
    fn test_first_line_is_data_not_header() {
        let file = create_temp_file(b"7,Ann,100.00\n8,Bob,5.00\n");
        let rows: Vec<_> = RecordReader::<AccountCodec>::open(file.path()).unwrap().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].result.as_ref().unwrap().owner, "Ann");
        assert_eq!(rows[1].result.as_ref().unwrap().balance(), Decimal::new(5, 0));
    }

    #[test]
    fn test_bad_row_reports_line_and_reading_continues() {
        let file = create_temp_file(b"7,Ann,100.00\n8,Bob\n9,Cat,1.00\n");
        let rows: Vec<_> = RecordReader::<AccountCodec>::open(file.path()).unwrap().collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].result.is_ok());
        assert_eq!(rows[1].line, 2);
        assert_eq!(
            rows[1].result,
            Err(StoreError::missing_fields("BankAccount", 3, 2))
        );
        assert!(rows[2].result.is_ok());
    }

    #[test]
    fn test_varying_column_counts() {
        let file = create_temp_file(b"7,Ann,1.00\n8,Bob,2.00,2024-01-01 00:00:00\n");
        let rows: Vec<_> = RecordReader::<AccountCodec>::open(file.path()).unwrap().collect();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.result.is_ok()));
    }

    #[test]
    fn test_quotes_and_spaces_are_literal() {
        let file = create_temp_file(b"7,\"Ann\" Lee ,1.00\n");
        let mut reader = RecordReader::<AccountCodec>::open(file.path()).unwrap();

        let account = reader.next().unwrap().result.unwrap();
        assert_eq!(account.owner, "\"Ann\" Lee ");
    }

    #[test]
    fn test_crlf_line_endings() {
        let file = create_temp_file(b"7,Ann,1.00\r\n8,Bob,2.00\r\n");
        let rows: Vec<_> = RecordReader::<AccountCodec>::open(file.path()).unwrap().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].result.as_ref().unwrap().owner, "Bob");
    }

    #[test]
    fn test_invalid_utf8_row_is_skipped() {
        let file = create_temp_file(b"7,Ann,1.00\n8,B\xffb,2.00\n9,Cat,3.00\n");
        let rows: Vec<_> = RecordReader::<AccountCodec>::open(file.path()).unwrap().collect();

        assert_eq!(rows.len(), 3);
        assert!(matches!(rows[1].result, Err(StoreError::ParseError { .. })));
        assert!(rows[2].result.is_ok());
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_file(b"");
        let rows: Vec<_> = RecordReader::<OrderCodec>::open(file.path()).unwrap().collect();
        assert!(rows.is_empty());
    }
}

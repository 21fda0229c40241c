//! One file per entity collection
//!
//! A `FileStore` binds a path to a codec and offers the three operations the
//! persistence layer needs: a tolerant full read, a full rewrite and a
//! single-line append. Reads never fail: a missing or unreadable file yields
//! an empty collection, and bad rows are logged and skipped. Writes return a
//! `Result` so callers can report a failed save.

use crate::io::codec::RecordCodec;
use crate::io::record_reader::RecordReader;
use crate::types::StoreError;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Outcome of reading a whole file
#[derive(Debug)]
pub struct ReadOutcome<T> {
    /// Successfully decoded records in file order
    pub records: Vec<T>,
    /// Rows that were skipped
    pub skipped: usize,
    /// Whether the file was absent or could not be opened
    pub unavailable: bool,
}

impl<T> ReadOutcome<T> {
    fn empty_unavailable() -> Self {
        ReadOutcome {
            records: Vec::new(),
            skipped: 0,
            unavailable: true,
        }
    }
}

/// A codec-typed file
pub struct FileStore<C: RecordCodec> {
    path: PathBuf,
    _codec: PhantomData<C>,
}

impl<C: RecordCodec> FileStore<C> {
    /// A store for the file at `path`; nothing is touched until a read or write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore {
            path: path.into(),
            _codec: PhantomData,
        }
    }

    /// The backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a streaming reader over the file
    ///
    /// # Errors
    ///
    /// `FileNotFound` or `IoError` if the file cannot be opened.
    pub fn reader(&self) -> Result<RecordReader<C>, StoreError> {
        RecordReader::open(&self.path)
    }

    /// Decode every row, skipping and logging the ones that fail
    pub fn read_all(&self) -> ReadOutcome<C::Record> {
        let reader = match self.reader() {
            Ok(reader) => reader,
            Err(StoreError::FileNotFound { path }) => {
                info!(entity = C::ENTITY, %path, "file not found, starting empty");
                return ReadOutcome::empty_unavailable();
            }
            Err(error) => {
                warn!(entity = C::ENTITY, path = %self.path.display(), %error, "file unreadable, starting empty");
                return ReadOutcome::empty_unavailable();
            }
        };

        let mut outcome = ReadOutcome {
            records: Vec::new(),
            skipped: 0,
            unavailable: false,
        };

        for row in reader {
            match row.result {
                Ok(record) => outcome.records.push(record),
                Err(err) if err.is_row_level() => {
                    outcome.skipped += 1;
                    warn!(
                        entity = C::ENTITY,
                        path = %self.path.display(),
                        line = row.line,
                        error = %err,
                        "skipping malformed row"
                    );
                }
                Err(err) => {
                    error!(
                        entity = C::ENTITY,
                        path = %self.path.display(),
                        line = row.line,
                        error = %err,
                        "read stopped early, keeping rows decoded so far"
                    );
                }
            }
        }

        debug!(
            entity = C::ENTITY,
            decoded = outcome.records.len(),
            skipped = outcome.skipped,
            "file read"
        );
        outcome
    }

    /// Replace the file's contents with one line per record
    ///
    /// Returns the number of lines written.
    ///
    /// # Errors
    ///
    /// `WriteFailed` if the file cannot be created or written.
    pub fn write_all<'a, I>(&self, records: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = &'a C::Record>,
        C::Record: 'a,
    {
        let file = File::create(&self.path).map_err(|e| StoreError::write_failed(&self.path, e))?;
        let mut writer = BufWriter::new(file);

        let mut written = 0;
        for record in records {
            writeln!(writer, "{}", C::encode(record))
                .map_err(|e| StoreError::write_failed(&self.path, e))?;
            written += 1;
        }
        writer
            .flush()
            .map_err(|e| StoreError::write_failed(&self.path, e))?;

        debug!(entity = C::ENTITY, path = %self.path.display(), written, "file rewritten");
        Ok(written)
    }

    /// Append one line, creating the file if needed
    ///
    /// # Errors
    ///
    /// `WriteFailed` if the file cannot be opened or written.
    pub fn append_one(&self, record: &C::Record) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::write_failed(&self.path, e))?;

        writeln!(file, "{}", C::encode(record)).map_err(|e| StoreError::write_failed(&self.path, e))
    }
}

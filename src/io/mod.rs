//! I/O module
//!
//! Handles the persisted text format.
//!
//! # Components
//!
//! - `tokenizer` - Separator-aware line splitting
//! - `timestamp_codec` - Epoch and calendar forms of timestamps
//! - `codec` - Per-entity encode/decode
//! - `record_reader` - Streaming reader yielding decoded rows with line numbers
//! - `file_store` - Full read, full rewrite and append for one collection file

pub mod codec;
pub mod file_store;
pub mod record_reader;
pub mod timestamp_codec;
pub mod tokenizer;

pub use codec::RecordCodec;
pub use file_store::{FileStore, ReadOutcome};
pub use record_reader::{DecodedRow, RecordReader};
pub use timestamp_codec::TimestampFormat;

//! Trace record parsing and loading.
//!
//! A trace is a text file with one access per line, four comma-separated
//! integers: load flag, store flag, address, data. Flags follow the
//! nonzero-is-true convention; blank lines are skipped. Malformed lines are
//! reported with their 1-based line number.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors raised while reading or parsing a trace file.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be read.
    #[error("failed to read trace file: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not have exactly four comma-separated fields.
    #[error("line {line}: expected four comma-separated fields")]
    FieldCount {
        /// 1-based line number.
        line: usize,
    },

    /// A field was not a valid integer for its position.
    #[error("line {line}: invalid integer field {field:?}")]
    BadInteger {
        /// 1-based line number.
        line: usize,
        /// The offending field text.
        field: String,
    },
}

/// One replayed access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Whether this access performs a load.
    pub load: bool,
    /// Whether this access performs a store.
    pub store: bool,
    /// Byte address of the access.
    pub addr: usize,
    /// Data word for the store path; ignored by pure loads.
    pub data: u32,
}

impl TraceRecord {
    /// Parses one trace line.
    ///
    /// # Errors
    ///
    /// [`TraceError::FieldCount`] or [`TraceError::BadInteger`], carrying
    /// the given 1-based line number.
    pub fn parse(text: &str, line: usize) -> Result<Self, TraceError> {
        let mut fields = text.split(',');
        let mut next = || {
            fields
                .next()
                .map(str::trim)
                .ok_or(TraceError::FieldCount { line })
        };

        let load = int_field(next()?, line)? != 0;
        let store = int_field(next()?, line)? != 0;
        let addr_raw = int_field(next()?, line)?;
        let data = int_field(next()?, line)? as u32;

        let addr = usize::try_from(addr_raw).map_err(|_| TraceError::BadInteger {
            line,
            field: addr_raw.to_string(),
        })?;

        Ok(Self {
            load,
            store,
            addr,
            data,
        })
    }
}

/// Parses a field as a signed integer, attributing failures to `line`.
fn int_field(field: &str, line: usize) -> Result<i64, TraceError> {
    field.parse().map_err(|_| TraceError::BadInteger {
        line,
        field: field.to_string(),
    })
}

/// Parses a whole trace from text, skipping blank lines.
///
/// # Errors
///
/// The first parse failure, with its line number.
pub fn parse_trace(text: &str) -> Result<Vec<TraceRecord>, TraceError> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| TraceRecord::parse(l, i + 1))
        .collect()
}

/// Reads and parses a trace file.
///
/// # Errors
///
/// [`TraceError::Io`] if the file cannot be read, else the first parse
/// failure.
pub fn load_trace<P: AsRef<Path>>(path: P) -> Result<Vec<TraceRecord>, TraceError> {
    parse_trace(&fs::read_to_string(path)?)
}

//! # chardetx-stats: Statistical Scoring
//!
//! Confidence analysers that turn byte-level observations into a likelihood
//! that a stream uses a given encoding. Table contents are supplied from the
//! outside and shared through `Arc`; the analysers only own counters.

pub mod context;
pub mod distribution;
pub mod latin1;
pub mod sequence;

use std::fmt;

pub use context::{JapaneseContextAnalyser, JapaneseScheme};
pub use distribution::{CharDistributionAnalyser, DistributionFamily};
pub use sequence::SequenceModel;

/// Upper bound reported by every analyser; certainty is never claimed.
pub const SURE_YES: f32 = 0.99;
/// Floor reported when there is too little evidence.
pub const SURE_NO: f32 = 0.01;

/// A statistical table whose shape does not match what its analyser indexes.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    WrongLength {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
    ValueOutOfRange {
        table: &'static str,
        index: usize,
        value: u8,
        limit: u8,
    },
    InvalidRatio(f32),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::WrongLength {
                table,
                expected,
                actual,
            } => write!(f, "{table}: expected {expected} entries, found {actual}"),
            TableError::ValueOutOfRange {
                table,
                index,
                value,
                limit,
            } => write!(f, "{table}[{index}] = {value}, must be below {limit}"),
            TableError::InvalidRatio(r) => write!(f, "typical positive ratio {r} must be positive"),
        }
    }
}

impl std::error::Error for TableError {}

pub(crate) fn check_len(table: &'static str, actual: usize, expected: usize) -> Result<(), TableError> {
    if actual != expected {
        return Err(TableError::WrongLength {
            table,
            expected,
            actual,
        });
    }
    Ok(())
}

pub(crate) fn check_values(table: &'static str, values: &[u8], limit: u8) -> Result<(), TableError> {
    match values.iter().position(|&v| v >= limit) {
        Some(index) => Err(TableError::ValueOutOfRange {
            table,
            index,
            value: values[index],
            limit,
        }),
        None => Ok(()),
    }
}

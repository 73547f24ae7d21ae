use serde::Deserialize;

use crate::{check_len, check_values, TableError};

/// Orders below this are letters ranked by frequency and take part in
/// sequence scoring.
pub const SAMPLE_SIZE: usize = 64;
/// Orders at or above this are symbols, digits or control bytes.
pub const SYMBOL_CAT_ORDER: u8 = 250;
pub const NUMBER_OF_SEQ_CAT: usize = 4;
/// Sequence category meaning "very likely".
pub const POSITIVE_CAT: usize = NUMBER_OF_SEQ_CAT - 1;

/// Language model for one single-byte charset: a frequency rank per byte and
/// a likelihood category for every pair of the [`SAMPLE_SIZE`] most frequent
/// letters.
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceModel {
    pub charset: String,
    #[serde(default = "default_code_page")]
    pub code_page: i32,
    pub char_to_order: Vec<u8>,
    pub precedence: Vec<u8>,
    pub typical_positive_ratio: f32,
    #[serde(default)]
    pub keep_english_letter: bool,
}

fn default_code_page() -> i32 {
    -1
}

impl SequenceModel {
    /// Checks every dimension the single-byte prober relies on when indexing.
    pub fn validate(&self) -> Result<(), TableError> {
        check_len("char_to_order", self.char_to_order.len(), 256)?;
        check_len("precedence", self.precedence.len(), SAMPLE_SIZE * SAMPLE_SIZE)?;
        check_values("precedence", &self.precedence, NUMBER_OF_SEQ_CAT as u8)?;
        let ratio = self.typical_positive_ratio;
        if ratio.is_nan() || ratio <= 0.0 {
            return Err(TableError::InvalidRatio(ratio));
        }
        Ok(())
    }

    #[inline]
    pub fn order_of(&self, byte: u8) -> u8 {
        self.char_to_order[byte as usize]
    }

    /// Likelihood category of the ordered pair `(prev, current)`; both orders
    /// must be below [`SAMPLE_SIZE`].
    #[inline]
    pub fn precedence_of(&self, prev: u8, current: u8) -> u8 {
        self.precedence[prev as usize * SAMPLE_SIZE + current as usize]
    }
}

use std::sync::Arc;

use serde::Deserialize;

use crate::{SURE_NO, SURE_YES};

pub const ENOUGH_DATA_THRESHOLD: u32 = 1024;
pub const MINIMUM_DATA_THRESHOLD: u32 = 4;
/// Characters whose frequency order is below this cutoff count as frequent.
pub const FREQUENT_ORDER_CUTOFF: u16 = 512;

/// A CJK encoding family with its own mapping from a two-byte character to
/// a frequency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionFamily {
    EucKr,
    Gb2312,
    Big5,
    EucTw,
    ShiftJis,
    EucJp,
}

impl DistributionFamily {
    pub const ALL: [DistributionFamily; 6] = [
        DistributionFamily::EucKr,
        DistributionFamily::Gb2312,
        DistributionFamily::Big5,
        DistributionFamily::EucTw,
        DistributionFamily::ShiftJis,
        DistributionFamily::EucJp,
    ];

    /// Maps the two bytes of a character to its index in the family's
    /// frequency table. `None` when the character lies outside the ranked
    /// code range.
    pub fn order_of(self, pair: [u8; 2]) -> Option<usize> {
        let c0 = pair[0] as i32;
        let c1 = pair[1] as i32;
        let order = match self {
            DistributionFamily::EucKr if c0 >= 0xB0 => 94 * (c0 - 0xB0) + c1 - 0xA1,
            DistributionFamily::Gb2312 if c0 >= 0xB0 && c1 >= 0xA1 => 94 * (c0 - 0xB0) + c1 - 0xA1,
            DistributionFamily::Big5 if c0 >= 0xA4 => {
                if c1 >= 0xA1 {
                    157 * (c0 - 0xA4) + c1 - 0xA1 + 63
                } else {
                    157 * (c0 - 0xA4) + c1 - 0x40
                }
            }
            DistributionFamily::EucTw if c0 >= 0xC4 => 94 * (c0 - 0xC4) + c1 - 0xA1,
            DistributionFamily::ShiftJis => {
                let row = match c0 {
                    0x81..=0x9F => 188 * (c0 - 0x81),
                    0xE0..=0xEF => 188 * (c0 - 0xE0 + 31),
                    _ => return None,
                };
                // 0x7F is not a valid trail byte, so the range above it shifts down.
                let mut order = row + c1 - 0x40;
                if c1 > 0x7F {
                    order -= 1;
                }
                order
            }
            DistributionFamily::EucJp if c0 >= 0xA0 => 94 * (c0 - 0xA1) + c1 - 0xA1,
            _ => return None,
        };
        usize::try_from(order).ok()
    }

    /// Ratio of frequent to infrequent characters in typical text.
    pub fn typical_ratio(self) -> f32 {
        match self {
            DistributionFamily::EucKr => 6.0,
            DistributionFamily::Gb2312 => 0.9,
            DistributionFamily::Big5 | DistributionFamily::EucTw => 0.75,
            DistributionFamily::ShiftJis | DistributionFamily::EucJp => 3.0,
        }
    }
}

/// Scores a stream by how often its two-byte characters fall among the most
/// frequent characters of the language.
///
/// ## Performance
/// One order computation and at most one table probe per completed
/// character; the frequency table itself is shared and never copied.
#[derive(Debug, Clone)]
pub struct CharDistributionAnalyser {
    family: DistributionFamily,
    table: Option<Arc<[u16]>>,
    total_chars: u32,
    freq_chars: u32,
}

impl CharDistributionAnalyser {
    /// Without a table every character counts toward the total only, so the
    /// analyser keeps reporting [`SURE_NO`].
    pub fn new(family: DistributionFamily, table: Option<Arc<[u16]>>) -> Self {
        Self {
            family,
            table,
            total_chars: 0,
            freq_chars: 0,
        }
    }

    /// Feeds one completed character. `pair` holds the last two bytes of the
    /// stream; only two-byte characters participate.
    pub fn handle_one_char(&mut self, pair: [u8; 2], char_len: usize) {
        if char_len != 2 {
            return;
        }
        let Some(order) = self.family.order_of(pair) else {
            return;
        };
        self.total_chars += 1;
        let frequent = self
            .table
            .as_deref()
            .and_then(|t| t.get(order))
            .is_some_and(|&rank| rank < FREQUENT_ORDER_CUTOFF);
        if frequent {
            self.freq_chars += 1;
        }
    }

    pub fn confidence(&self) -> f32 {
        if self.total_chars == 0 || self.freq_chars <= MINIMUM_DATA_THRESHOLD {
            return SURE_NO;
        }
        if self.total_chars != self.freq_chars {
            let r = self.freq_chars as f32
                / ((self.total_chars - self.freq_chars) as f32 * self.family.typical_ratio());
            if r < SURE_YES {
                return r;
            }
        }
        SURE_YES
    }

    pub fn got_enough_data(&self) -> bool {
        self.total_chars > ENOUGH_DATA_THRESHOLD
    }

    pub fn reset(&mut self) {
        self.total_chars = 0;
        self.freq_chars = 0;
    }

    pub fn family(&self) -> DistributionFamily {
        self.family
    }

    pub fn total_chars(&self) -> u32 {
        self.total_chars
    }

    pub fn freq_chars(&self) -> u32 {
        self.freq_chars
    }
}

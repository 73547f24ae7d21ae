use std::sync::Arc;

use crate::{SURE_NO, SURE_YES};

pub const CATEGORY_COUNT: usize = 6;
/// Number of hiragana characters ranked by the context table.
pub const HIRAGANA_ORDERS: usize = 83;
pub const CONTEXT_TABLE_LEN: usize = HIRAGANA_ORDERS * HIRAGANA_ORDERS;

const ENOUGH_REL_THRESHOLD: u32 = 100;
const MAX_REL_THRESHOLD: u32 = 1000;
const MINIMUM_DATA_THRESHOLD: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JapaneseScheme {
    ShiftJis,
    EucJp,
}

impl JapaneseScheme {
    /// Hiragana rank of a two-byte character, if it is hiragana.
    pub fn order_of(self, pair: [u8; 2]) -> Option<usize> {
        let (lead, low) = match self {
            JapaneseScheme::ShiftJis => (0x82, 0x9F..=0xF1),
            JapaneseScheme::EucJp => (0xA4, 0xA1..=0xF3),
        };
        if pair[0] == lead && low.contains(&pair[1]) {
            Some((pair[1] - low.start()) as usize)
        } else {
            None
        }
    }
}

/// Scores Japanese text by how plausible each pair of adjacent hiragana is.
///
/// The context table assigns every (previous, current) hiragana pair one of
/// [`CATEGORY_COUNT`] categories; category 0 marks pairs that practically
/// never occur.
#[derive(Debug, Clone)]
pub struct JapaneseContextAnalyser {
    scheme: JapaneseScheme,
    table: Option<Arc<[u8]>>,
    rel_sample: [u32; CATEGORY_COUNT],
    total_rel: u32,
    last_char_order: Option<usize>,
    done: bool,
}

impl JapaneseContextAnalyser {
    pub fn new(scheme: JapaneseScheme, table: Option<Arc<[u8]>>) -> Self {
        Self {
            scheme,
            table,
            rel_sample: [0; CATEGORY_COUNT],
            total_rel: 0,
            last_char_order: None,
            done: false,
        }
    }

    pub fn handle_one_char(&mut self, pair: [u8; 2], char_len: usize) {
        if self.total_rel > MAX_REL_THRESHOLD {
            self.done = true;
        }
        if self.done {
            return;
        }

        let order = if char_len == 2 {
            self.scheme.order_of(pair)
        } else {
            None
        };
        if let (Some(last), Some(current), Some(table)) =
            (self.last_char_order, order, self.table.as_deref())
        {
            let category = table.get(last * HIRAGANA_ORDERS + current).copied();
            if let Some(slot) = category.and_then(|c| self.rel_sample.get_mut(c as usize)) {
                *slot += 1;
                self.total_rel += 1;
            }
        }
        self.last_char_order = order;
    }

    pub fn confidence(&self) -> f32 {
        if self.total_rel <= MINIMUM_DATA_THRESHOLD {
            return SURE_NO;
        }
        let r = (self.total_rel - self.rel_sample[0]) as f32 / self.total_rel as f32;
        r.min(SURE_YES)
    }

    pub fn got_enough_data(&self) -> bool {
        self.total_rel > ENOUGH_REL_THRESHOLD
    }

    pub fn reset(&mut self) {
        self.rel_sample = [0; CATEGORY_COUNT];
        self.total_rel = 0;
        self.last_char_order = None;
        self.done = false;
    }

    pub fn total_rel(&self) -> u32 {
        self.total_rel
    }
}

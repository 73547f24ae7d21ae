use std::sync::Arc;

use chardetx_stats::sequence::{NUMBER_OF_SEQ_CAT, POSITIVE_CAT, SAMPLE_SIZE, SYMBOL_CAT_ORDER};
use chardetx_stats::{SequenceModel, SURE_NO, SURE_YES};

use crate::error::DetectError;
use crate::filter::{EnglishLetterFilter, InternationalWordFilter};
use crate::prober::{CharsetProber, ProbingState};

const SB_ENOUGH_REL_THRESHOLD: u32 = 1024;
const POSITIVE_SHORTCUT_THRESHOLD: f32 = 0.95;
const NEGATIVE_SHORTCUT_THRESHOLD: f32 = 0.05;
const NO_ORDER: u8 = 255;

#[derive(Debug, Clone)]
enum WordFilter {
    International(InternationalWordFilter),
    EnglishLetters(EnglishLetterFilter),
}

impl WordFilter {
    fn for_model(model: &SequenceModel) -> Self {
        if model.keep_english_letter {
            WordFilter::EnglishLetters(EnglishLetterFilter::default())
        } else {
            WordFilter::International(InternationalWordFilter::default())
        }
    }

    fn filter_into(&mut self, buf: &[u8], out: &mut Vec<u8>) {
        match self {
            WordFilter::International(f) => f.filter_into(buf, out),
            WordFilter::EnglishLetters(f) => f.filter_into(buf, out),
        }
    }

    fn flush_into(&mut self, out: &mut Vec<u8>) {
        match self {
            WordFilter::International(f) => f.flush_into(out),
            WordFilter::EnglishLetters(f) => f.flush_into(out),
        }
    }

    fn reset(&mut self) {
        match self {
            WordFilter::International(f) => f.reset(),
            WordFilter::EnglishLetters(f) => f.reset(),
        }
    }
}

/// Scores one single-byte charset by the letter-pair statistics of its
/// language model.
///
/// Models that set `keep_english_letter` see every word outside markup;
/// the rest see only words carrying a high byte.
#[derive(Debug, Clone)]
pub struct SingleByteProber {
    model: Arc<SequenceModel>,
    filter: WordFilter,
    scratch: Vec<u8>,
    state: ProbingState,
    last_order: u8,
    seq_counters: [u32; NUMBER_OF_SEQ_CAT],
    total_seqs: u32,
    total_chars: u32,
    freq_chars: u32,
}

impl SingleByteProber {
    /// Fails with [`DetectError::Model`] when the model's tables are too
    /// short to index or its ratio is not positive.
    pub fn new(model: Arc<SequenceModel>) -> Result<Self, DetectError> {
        model.validate()?;
        Ok(Self {
            filter: WordFilter::for_model(&model),
            model,
            scratch: Vec::new(),
            state: ProbingState::Detecting,
            last_order: NO_ORDER,
            seq_counters: [0; NUMBER_OF_SEQ_CAT],
            total_seqs: 0,
            total_chars: 0,
            freq_chars: 0,
        })
    }

    pub fn total_seqs(&self) -> u32 {
        self.total_seqs
    }

    fn score_scratch(&mut self) -> ProbingState {
        let sample = SAMPLE_SIZE as u8;
        for &b in &self.scratch {
            let order = self.model.order_of(b);
            if order < SYMBOL_CAT_ORDER {
                self.total_chars += 1;
            }
            if order < sample {
                self.freq_chars += 1;
                if self.last_order < sample {
                    self.total_seqs += 1;
                    let category = self.model.precedence_of(self.last_order, order);
                    self.seq_counters[category as usize] += 1;
                }
            }
            self.last_order = order;
        }

        if self.state == ProbingState::Detecting && self.total_seqs > SB_ENOUGH_REL_THRESHOLD {
            let cf = self.confidence();
            if cf > POSITIVE_SHORTCUT_THRESHOLD {
                tracing::debug!("SingleByteProber: {} confident enough to commit", self.model.charset);
                self.state = ProbingState::FoundIt;
            } else if cf < NEGATIVE_SHORTCUT_THRESHOLD {
                tracing::trace!("SingleByteProber: {} ruled out ({:.3})", self.model.charset, cf);
                self.state = ProbingState::NotMe;
            }
        }
        self.state
    }
}

impl CharsetProber for SingleByteProber {
    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        self.scratch.clear();
        self.filter.filter_into(buf, &mut self.scratch);
        self.score_scratch()
    }

    fn finish(&mut self) -> ProbingState {
        self.scratch.clear();
        self.filter.flush_into(&mut self.scratch);
        self.score_scratch()
    }

    fn confidence(&self) -> f32 {
        if self.total_seqs == 0 {
            return SURE_NO;
        }
        let r = self.seq_counters[POSITIVE_CAT] as f32
            / self.total_seqs as f32
            / self.model.typical_positive_ratio
            * self.freq_chars as f32
            / self.total_chars as f32;
        if r >= 1.0 {
            SURE_YES
        } else {
            r
        }
    }

    fn reset(&mut self) {
        self.filter.reset();
        self.state = ProbingState::Detecting;
        self.last_order = NO_ORDER;
        self.seq_counters = [0; NUMBER_OF_SEQ_CAT];
        self.total_seqs = 0;
        self.total_chars = 0;
        self.freq_chars = 0;
    }

    fn charset_name(&self) -> Option<&str> {
        Some(self.model.charset.as_str())
    }

    fn code_page(&self) -> i32 {
        self.model.code_page
    }

    fn state(&self) -> ProbingState {
        self.state
    }
}

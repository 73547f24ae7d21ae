use chardetx_stats::latin1::{self, FREQ_CAT_COUNT, OTH};
use chardetx_stats::SURE_NO;

use crate::filter::EnglishLetterFilter;
use crate::prober::{CharsetProber, ProbingState};

/// Latin-1 scores are halved relative to every other prober.
const CONFIDENCE_DISCOUNT: f32 = 0.50;
const UNLIKELY_PENALTY: f32 = 20.0;

/// Fallback prober for windows-1252. Never commits early; it only wins at
/// end of data when nothing else scores higher.
#[derive(Debug, Clone)]
pub struct Latin1Prober {
    filter: EnglishLetterFilter,
    scratch: Vec<u8>,
    last_class: u8,
    freq_counter: [u32; FREQ_CAT_COUNT],
    state: ProbingState,
}

impl Latin1Prober {
    pub fn new() -> Self {
        Self {
            filter: EnglishLetterFilter::default(),
            scratch: Vec::new(),
            last_class: OTH,
            freq_counter: [0; FREQ_CAT_COUNT],
            state: ProbingState::Detecting,
        }
    }

    fn score_scratch(&mut self) -> ProbingState {
        if self.state == ProbingState::NotMe {
            return self.state;
        }
        for &b in &self.scratch {
            let class = latin1::class_of(b);
            let freq = latin1::likelihood(self.last_class, class);
            if freq == 0 {
                tracing::trace!("Latin1Prober: illegal sequence at byte {:#04x}", b);
                self.state = ProbingState::NotMe;
                break;
            }
            self.freq_counter[freq as usize] += 1;
            self.last_class = class;
        }
        self.state
    }
}

impl Default for Latin1Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl CharsetProber for Latin1Prober {
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
        if self.state == ProbingState::NotMe {
            return SURE_NO;
        }
        let total: u32 = self.freq_counter.iter().sum();
        let confidence = if total == 0 {
            0.0
        } else {
            let total = total as f32;
            self.freq_counter[3] as f32 / total - self.freq_counter[1] as f32 * UNLIKELY_PENALTY / total
        };
        confidence.max(0.0) * CONFIDENCE_DISCOUNT
    }

    fn reset(&mut self) {
        self.filter.reset();
        self.last_class = OTH;
        self.freq_counter = [0; FREQ_CAT_COUNT];
        self.state = ProbingState::Detecting;
    }

    fn charset_name(&self) -> Option<&str> {
        Some("windows-1252")
    }

    fn code_page(&self) -> i32 {
        1252
    }

    fn state(&self) -> ProbingState {
        self.state
    }
}

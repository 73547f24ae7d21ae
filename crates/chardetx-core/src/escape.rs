use chardetx_dsa::{models, CodingStateMachine, ERROR, ITSME};
use chardetx_stats::SURE_YES;

use crate::config::LanguageFilter;
use crate::prober::{CharsetProber, ProbingState};

/// Races the 7-bit escape-sequence encodings (HZ and the ISO-2022 family).
///
/// ## Mechanical Sympathy: Swap-Remove Elimination
/// Live machines occupy the prefix `machines[..active]`. A machine that hits
/// ERROR swaps places with the last live one and the prefix shrinks, so the
/// per-byte loop only ever touches candidates still in the race.
#[derive(Debug, Clone)]
pub struct EscCharsetProber {
    machines: Vec<CodingStateMachine>,
    active: usize,
    state: ProbingState,
    detected: Option<(&'static str, i32)>,
}

impl EscCharsetProber {
    pub fn new(languages: LanguageFilter) -> Self {
        let mut machines = Vec::with_capacity(4);
        if languages.contains(LanguageFilter::CHINESE_SIMPLIFIED) {
            machines.push(CodingStateMachine::new(&models::HZ_GB_2312));
            machines.push(CodingStateMachine::new(&models::ISO_2022_CN));
        }
        if languages.contains(LanguageFilter::JAPANESE) {
            machines.push(CodingStateMachine::new(&models::ISO_2022_JP));
        }
        if languages.contains(LanguageFilter::KOREAN) {
            machines.push(CodingStateMachine::new(&models::ISO_2022_KR));
        }
        let mut prober = Self {
            active: machines.len(),
            machines,
            state: ProbingState::Detecting,
            detected: None,
        };
        prober.reset();
        prober
    }

    /// Number of escape grammars still consistent with the stream.
    pub fn active_count(&self) -> usize {
        self.active
    }
}

impl CharsetProber for EscCharsetProber {
    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        for &b in buf {
            let mut j = self.active;
            while j > 0 {
                j -= 1;
                match self.machines[j].next_state(b) {
                    ERROR => {
                        tracing::trace!("EscCharsetProber: {} ruled out", self.machines[j].model_name());
                        self.active -= 1;
                        if self.active == 0 {
                            self.state = ProbingState::NotMe;
                            return self.state;
                        }
                        self.machines.swap(j, self.active);
                    }
                    ITSME => {
                        let machine = &self.machines[j];
                        self.detected = Some((machine.model_name(), machine.code_page()));
                        self.state = ProbingState::FoundIt;
                        tracing::debug!("EscCharsetProber: escape designator for {}", machine.model_name());
                        return self.state;
                    }
                    _ => {}
                }
            }
        }
        self.state
    }

    fn confidence(&self) -> f32 {
        SURE_YES
    }

    fn reset(&mut self) {
        for machine in &mut self.machines {
            machine.reset();
        }
        self.active = self.machines.len();
        self.detected = None;
        self.state = if self.machines.is_empty() {
            ProbingState::NotMe
        } else {
            ProbingState::Detecting
        };
    }

    fn charset_name(&self) -> Option<&str> {
        self.detected.map(|(name, _)| name)
    }

    fn code_page(&self) -> i32 {
        self.detected.map_or(-1, |(_, cp)| cp)
    }

    fn state(&self) -> ProbingState {
        self.state
    }
}

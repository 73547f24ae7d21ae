use chardetx_dsa::{models, CodingStateMachine, ERROR, ITSME, START};
use chardetx_stats::SURE_YES;

use crate::prober::{CharsetProber, ProbingState, SHORTCUT_THRESHOLD};

/// Each multi-byte character halves the chance that a legal UTF-8 run is a
/// coincidence.
const ONE_CHAR_PROB: f32 = 0.5;
const CERTAIN_AFTER: u32 = 6;

#[derive(Debug, Clone)]
pub struct Utf8Prober {
    machine: CodingStateMachine,
    state: ProbingState,
    multi_byte_chars: u32,
}

impl Utf8Prober {
    pub fn new() -> Self {
        Self {
            machine: CodingStateMachine::new(&models::UTF8),
            state: ProbingState::Detecting,
            multi_byte_chars: 0,
        }
    }

    pub fn multi_byte_chars(&self) -> u32 {
        self.multi_byte_chars
    }
}

impl Default for Utf8Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl CharsetProber for Utf8Prober {
    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        for &b in buf {
            match self.machine.next_state(b) {
                ERROR => {
                    self.state = ProbingState::NotMe;
                    break;
                }
                ITSME => {
                    self.state = ProbingState::FoundIt;
                    break;
                }
                START if self.machine.current_char_len() >= 2 => self.multi_byte_chars += 1,
                _ => {}
            }
        }

        if self.state == ProbingState::Detecting && self.confidence() > SHORTCUT_THRESHOLD {
            tracing::debug!("Utf8Prober: {} multi-byte characters, committing", self.multi_byte_chars);
            self.state = ProbingState::FoundIt;
        }
        self.state
    }

    fn confidence(&self) -> f32 {
        if self.multi_byte_chars < CERTAIN_AFTER {
            1.0 - SURE_YES * ONE_CHAR_PROB.powi(self.multi_byte_chars as i32)
        } else {
            SURE_YES
        }
    }

    fn reset(&mut self) {
        self.machine.reset();
        self.state = ProbingState::Detecting;
        self.multi_byte_chars = 0;
    }

    fn charset_name(&self) -> Option<&str> {
        Some(self.machine.model_name())
    }

    fn code_page(&self) -> i32 {
        self.machine.code_page()
    }

    fn state(&self) -> ProbingState {
        self.state
    }
}

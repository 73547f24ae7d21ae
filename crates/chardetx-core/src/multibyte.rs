use chardetx_dsa::{models, CodingStateMachine, StateModel, ERROR, ITSME, START};
use chardetx_stats::{
    CharDistributionAnalyser, DistributionFamily, JapaneseContextAnalyser, JapaneseScheme,
};

use crate::prober::{CharsetProber, ProbingState, SHORTCUT_THRESHOLD};
use crate::registry::ModelRegistry;

/// Prober for one multi-byte CJK encoding.
///
/// The state machine rules the candidate out on any illegal byte; completed
/// two-byte characters are scored by a distribution analyser and, for the
/// Japanese encodings, a hiragana context analyser.
#[derive(Debug, Clone)]
pub struct MultiByteProber {
    machine: CodingStateMachine,
    distribution: CharDistributionAnalyser,
    context: Option<JapaneseContextAnalyser>,
    state: ProbingState,
    /// Last byte of the previous chunk, for characters split across calls.
    last_byte: u8,
}

impl MultiByteProber {
    pub fn new(
        model: &'static StateModel,
        distribution: CharDistributionAnalyser,
        context: Option<JapaneseContextAnalyser>,
    ) -> Self {
        Self {
            machine: CodingStateMachine::new(model),
            distribution,
            context,
            state: ProbingState::Detecting,
            last_byte: 0,
        }
    }

    fn plain(model: &'static StateModel, family: DistributionFamily, registry: &ModelRegistry) -> Self {
        let distribution = CharDistributionAnalyser::new(family, registry.frequency_table(family));
        Self::new(model, distribution, None)
    }

    fn japanese(
        model: &'static StateModel,
        family: DistributionFamily,
        scheme: JapaneseScheme,
        registry: &ModelRegistry,
    ) -> Self {
        let distribution = CharDistributionAnalyser::new(family, registry.frequency_table(family));
        let context = JapaneseContextAnalyser::new(scheme, registry.context_table());
        Self::new(model, distribution, Some(context))
    }

    pub fn euc_kr(registry: &ModelRegistry) -> Self {
        Self::plain(&models::EUC_KR, DistributionFamily::EucKr, registry)
    }

    /// GB18030 text is ranked with the GB2312 frequency table.
    pub fn gb18030(registry: &ModelRegistry) -> Self {
        Self::plain(&models::GB18030, DistributionFamily::Gb2312, registry)
    }

    pub fn big5(registry: &ModelRegistry) -> Self {
        Self::plain(&models::BIG5, DistributionFamily::Big5, registry)
    }

    pub fn euc_tw(registry: &ModelRegistry) -> Self {
        Self::plain(&models::EUC_TW, DistributionFamily::EucTw, registry)
    }

    pub fn euc_jp(registry: &ModelRegistry) -> Self {
        Self::japanese(&models::EUC_JP, DistributionFamily::EucJp, JapaneseScheme::EucJp, registry)
    }

    pub fn shift_jis(registry: &ModelRegistry) -> Self {
        Self::japanese(
            &models::SHIFT_JIS,
            DistributionFamily::ShiftJis,
            JapaneseScheme::ShiftJis,
            registry,
        )
    }

    fn got_enough_data(&self) -> bool {
        match &self.context {
            Some(context) => context.got_enough_data(),
            None => self.distribution.got_enough_data(),
        }
    }
}

impl CharsetProber for MultiByteProber {
    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        for (i, &b) in buf.iter().enumerate() {
            match self.machine.next_state(b) {
                ERROR => {
                    tracing::trace!("MultiByteProber: {} ruled out at byte {:#04x}", self.machine.model_name(), b);
                    self.state = ProbingState::NotMe;
                    break;
                }
                ITSME => {
                    self.state = ProbingState::FoundIt;
                    break;
                }
                START => {
                    let char_len = self.machine.current_char_len();
                    let pair = if i == 0 { [self.last_byte, b] } else { [buf[i - 1], b] };
                    if let Some(context) = self.context.as_mut() {
                        context.handle_one_char(pair, char_len);
                    }
                    self.distribution.handle_one_char(pair, char_len);
                }
                _ => {}
            }
        }

        if let Some(&last) = buf.last() {
            self.last_byte = last;
        }

        if self.state == ProbingState::Detecting
            && self.got_enough_data()
            && self.confidence() > SHORTCUT_THRESHOLD
        {
            tracing::debug!("MultiByteProber: {} confident enough to commit", self.machine.model_name());
            self.state = ProbingState::FoundIt;
        }
        self.state
    }

    fn confidence(&self) -> f32 {
        let distribution = self.distribution.confidence();
        match &self.context {
            Some(context) => context.confidence().max(distribution),
            None => distribution,
        }
    }

    fn reset(&mut self) {
        self.machine.reset();
        self.state = ProbingState::Detecting;
        self.distribution.reset();
        if let Some(context) = self.context.as_mut() {
            context.reset();
        }
        self.last_byte = 0;
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

use chardetx_stats::{SURE_NO, SURE_YES};

use crate::config::LanguageFilter;
use crate::filter::HighByteFilter;
use crate::multibyte::MultiByteProber;
use crate::prober::{CharsetProber, ProbingState};
use crate::registry::ModelRegistry;
use crate::single_byte::SingleByteProber;
use crate::utf8::Utf8Prober;

#[derive(Debug, Clone)]
enum PreFilter {
    HighBytes(HighByteFilter),
    /// Members filter for themselves.
    Passthrough,
}

impl PreFilter {
    fn filter_into(&mut self, buf: &[u8], out: &mut Vec<u8>) {
        match self {
            PreFilter::HighBytes(f) => f.filter_into(buf, out),
            PreFilter::Passthrough => out.extend_from_slice(buf),
        }
    }

    fn reset(&mut self) {
        match self {
            PreFilter::HighBytes(f) => f.reset(),
            PreFilter::Passthrough => {}
        }
    }
}

/// Races several probers over the same filtered stream.
///
/// Members that report `NotMe` are deactivated for the rest of the session;
/// the first member to report `FoundIt` decides the whole group.
pub struct GroupProber {
    label: &'static str,
    filter: PreFilter,
    probers: Vec<Box<dyn CharsetProber>>,
    active: Vec<bool>,
    active_count: usize,
    found: Option<usize>,
    state: ProbingState,
    scratch: Vec<u8>,
}

impl GroupProber {
    /// UTF-8 plus every CJK multi-byte encoding enabled by `languages`.
    pub fn multi_byte(registry: &ModelRegistry, languages: LanguageFilter) -> Self {
        let mut probers: Vec<Box<dyn CharsetProber>> = vec![Box::new(Utf8Prober::new())];
        if languages.contains(LanguageFilter::JAPANESE) {
            probers.push(Box::new(MultiByteProber::shift_jis(registry)));
            probers.push(Box::new(MultiByteProber::euc_jp(registry)));
        }
        if languages.contains(LanguageFilter::CHINESE_SIMPLIFIED) {
            probers.push(Box::new(MultiByteProber::gb18030(registry)));
        }
        if languages.contains(LanguageFilter::KOREAN) {
            probers.push(Box::new(MultiByteProber::euc_kr(registry)));
        }
        if languages.contains(LanguageFilter::CHINESE_TRADITIONAL) {
            probers.push(Box::new(MultiByteProber::big5(registry)));
            probers.push(Box::new(MultiByteProber::euc_tw(registry)));
        }
        Self::new("MBCS", PreFilter::HighBytes(HighByteFilter::new()), probers)
    }

    /// One prober per registered single-byte language model.
    pub fn single_byte(registry: &ModelRegistry) -> Self {
        let probers = registry
            .sequence_models()
            .iter()
            .filter_map(|model| match SingleByteProber::new(model.clone()) {
                Ok(prober) => Some(Box::new(prober) as Box<dyn CharsetProber>),
                Err(e) => {
                    tracing::warn!("GroupProber: skipping {}: {}", model.charset, e);
                    None
                }
            })
            .collect();
        Self::new("SBCS", PreFilter::Passthrough, probers)
    }

    fn new(label: &'static str, filter: PreFilter, probers: Vec<Box<dyn CharsetProber>>) -> Self {
        let mut group = Self {
            label,
            filter,
            active: vec![true; probers.len()],
            active_count: probers.len(),
            probers,
            found: None,
            state: ProbingState::Detecting,
            scratch: Vec::new(),
        };
        group.reset();
        group
    }

    /// Index and confidence of the strongest active member.
    fn best_guess(&self) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (i, prober) in self.probers.iter().enumerate() {
            if !self.active[i] {
                continue;
            }
            let cf = prober.confidence();
            if best.map_or(true, |(_, top)| cf > top) {
                best = Some((i, cf));
            }
        }
        best
    }

    /// Member that currently speaks for the group.
    fn representative(&self) -> Option<&dyn CharsetProber> {
        let index = self
            .found
            .or_else(|| self.best_guess().map(|(i, _)| i))
            .unwrap_or(0);
        self.probers.get(index).map(|p| p.as_ref())
    }

    /// Records member `i` reporting `state`. Returns `true` once the group
    /// itself is settled.
    fn settle(&mut self, i: usize, state: ProbingState) -> bool {
        match state {
            ProbingState::FoundIt => {
                self.found = Some(i);
                self.state = ProbingState::FoundIt;
                tracing::debug!(
                    "GroupProber: {} resolved to {}",
                    self.label,
                    self.probers[i].charset_name().unwrap_or("<none>")
                );
                true
            }
            ProbingState::NotMe => {
                self.active[i] = false;
                self.active_count -= 1;
                tracing::trace!(
                    "GroupProber: {} dropped {} ({} left)",
                    self.label,
                    self.probers[i].charset_name().unwrap_or("<none>"),
                    self.active_count
                );
                if self.active_count == 0 {
                    self.state = ProbingState::NotMe;
                    return true;
                }
                false
            }
            ProbingState::Detecting => false,
        }
    }

    pub fn len(&self) -> usize {
        self.probers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probers.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }
}

impl CharsetProber for GroupProber {
    fn handle_data(&mut self, buf: &[u8]) -> ProbingState {
        self.scratch.clear();
        self.filter.filter_into(buf, &mut self.scratch);
        if self.scratch.is_empty() {
            return self.state;
        }

        for i in 0..self.probers.len() {
            if !self.active[i] {
                continue;
            }
            let state = self.probers[i].handle_data(&self.scratch);
            if self.settle(i, state) {
                break;
            }
        }
        self.state
    }

    /// Delivers what each member still holds back, then lets it score.
    fn finish(&mut self) -> ProbingState {
        if self.state != ProbingState::Detecting {
            return self.state;
        }
        for i in 0..self.probers.len() {
            if !self.active[i] {
                continue;
            }
            let state = self.probers[i].finish();
            if self.settle(i, state) {
                break;
            }
        }
        self.state
    }

    fn confidence(&self) -> f32 {
        match self.state {
            ProbingState::FoundIt => SURE_YES,
            ProbingState::NotMe => SURE_NO,
            ProbingState::Detecting => self.best_guess().map_or(0.0, |(_, cf)| cf),
        }
    }

    fn reset(&mut self) {
        self.filter.reset();
        for (prober, active) in self.probers.iter_mut().zip(self.active.iter_mut()) {
            prober.reset();
            *active = true;
        }
        self.active_count = self.probers.len();
        self.found = None;
        self.state = if self.probers.is_empty() {
            ProbingState::NotMe
        } else {
            ProbingState::Detecting
        };
    }

    fn charset_name(&self) -> Option<&str> {
        self.representative().and_then(|p| p.charset_name())
    }

    fn code_page(&self) -> i32 {
        self.representative().map_or(-1, |p| p.code_page())
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn log_status(&self) {
        tracing::trace!(
            "GroupProber: {} state={:?} confidence={:.3}",
            self.label,
            self.state,
            self.confidence()
        );
        for (i, prober) in self.probers.iter().enumerate() {
            if self.active[i] {
                prober.log_status();
            } else {
                tracing::trace!(
                    "GroupProber: {} inactive member {}",
                    self.label,
                    prober.charset_name().unwrap_or("<none>")
                );
            }
        }
    }
}


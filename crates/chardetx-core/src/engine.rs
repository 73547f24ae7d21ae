use std::io::{ErrorKind, Read};
use std::sync::Arc;

use crate::config::{DetectorConfig, LanguageFilter};
use crate::error::DetectError;
use crate::escape::EscCharsetProber;
use crate::group::GroupProber;
use crate::latin1::Latin1Prober;
use crate::prober::{CharsetProber, ProbingState};
use crate::registry::ModelRegistry;
use crate::session::{Detection, InputState};

/// Best prober confidence a Highbyte stream needs at `data_end`.
pub const MINIMUM_THRESHOLD: f32 = 0.20;

const ESC: u8 = 0x1B;
const TILDE: u8 = 0x7E;
const LEFT_BRACE: u8 = 0x7B;
const NBSP: u8 = 0xA0;

/// Byte-order marks recognised at the head of a session.
/// Longer marks come first so `FF FE 00 00` wins over `FF FE`.
const BOMS: [(&[u8], &str, i32); 7] = [
    (&[0xEF, 0xBB, 0xBF], "UTF-8", 65001),
    (&[0xFE, 0xFF, 0x00, 0x00], "X-ISO-10646-UCS-4-3412", -1),
    (&[0xFE, 0xFF], "UTF-16BE", 1201),
    (&[0x00, 0x00, 0xFE, 0xFF], "UTF-32BE", 12001),
    (&[0x00, 0x00, 0xFF, 0xFE], "X-ISO-10646-UCS-4-2143", -1),
    (&[0xFF, 0xFE, 0x00, 0x00], "UTF-32LE", 12000),
    (&[0xFF, 0xFE], "UTF-16LE", 1200),
];

fn is_high_byte(b: u8) -> bool {
    b & 0x80 != 0 && b != NBSP
}

/// Incremental charset detector for one byte stream.
///
/// Bytes are classified as they arrive: pure 7-bit data engages nothing,
/// an escape sequence or HZ shift-in engages the escape prober, and the
/// first high byte engages the multi-byte group, the single-byte group and
/// the Latin-1 fallback. The first prober to report `FoundIt` ends the
/// session; otherwise [`data_end`](Self::data_end) picks the strongest.
///
/// ## Mechanical Sympathy: Lazy Probers
/// Sub-probers are built on the first high byte and kept for the lifetime
/// of the detector. [`reset`](Self::reset) rewinds them in place, so a
/// detector reused across many streams allocates its prober tree once.
pub struct Detector {
    config: DetectorConfig,
    languages: LanguageFilter,
    registry: Arc<ModelRegistry>,
    input_state: InputState,
    start: bool,
    got_data: bool,
    done: bool,
    last_char: u8,
    esc_prober: Option<EscCharsetProber>,
    probers: Vec<Box<dyn CharsetProber>>,
    result: Option<Detection>,
}

impl Detector {
    pub fn new(config: DetectorConfig, registry: Arc<ModelRegistry>) -> Self {
        let languages = config.language_filter();
        Self {
            config,
            languages,
            registry,
            input_state: InputState::PureAscii,
            start: true,
            got_data: false,
            done: false,
            last_char: 0,
            esc_prober: None,
            probers: Vec::new(),
            result: None,
        }
    }

    /// Feeds the next chunk of the stream. A no-op once the detector is done.
    pub fn feed(&mut self, buf: &[u8]) {
        if self.done || buf.is_empty() {
            return;
        }
        self.got_data = true;

        if self.start {
            self.start = false;
            if buf.len() > 3 && self.check_bom(buf) {
                return;
            }
        }

        // Start of the bytes owed to the escape prober in this chunk, and
        // whether a `~` that ended the previous chunk must be replayed first.
        let mut esc_from = match self.input_state {
            InputState::EscAscii => Some(0),
            _ => None,
        };
        let mut replay_tilde = false;
        let mut high_from = match self.input_state {
            InputState::Highbyte => Some(0),
            _ => None,
        };

        for (i, &b) in buf.iter().enumerate() {
            if high_from.is_some() {
                break;
            }
            if is_high_byte(b) {
                if let Some(from) = esc_from.take() {
                    if self.feed_escape(&buf[from..i], replay_tilde) {
                        return;
                    }
                }
                self.enter_highbyte();
                high_from = Some(i);
                break;
            }
            if self.input_state == InputState::PureAscii {
                if b == ESC {
                    self.enter_escape();
                    esc_from = Some(i);
                } else if b == LEFT_BRACE && self.last_char == TILDE {
                    self.enter_escape();
                    if i == 0 {
                        replay_tilde = true;
                        esc_from = Some(0);
                    } else {
                        esc_from = Some(i - 1);
                    }
                }
            }
            self.last_char = b;
        }

        if let Some(from) = esc_from {
            self.feed_escape(&buf[from..], replay_tilde);
        } else if let Some(from) = high_from {
            self.feed_highbyte(&buf[from..]);
        }
    }

    /// Feeds `len` bytes of `buf` starting at `offset`.
    pub fn feed_range(&mut self, buf: &[u8], offset: usize, len: usize) -> Result<(), DetectError> {
        let end = offset.checked_add(len).ok_or_else(|| {
            DetectError::InvalidArgument(format!("range {}+{} overflows", offset, len))
        })?;
        let chunk = buf.get(offset..end).ok_or_else(|| {
            DetectError::InvalidArgument(format!(
                "range {}..{} exceeds buffer of {} bytes",
                offset,
                end,
                buf.len()
            ))
        })?;
        self.feed(chunk);
        Ok(())
    }

    /// Pulls `chunk_size` blocks from `reader` until EOF or a verdict.
    /// A zero `chunk_size` is rejected with [`DetectError::InvalidArgument`].
    pub fn feed_reader<R: Read>(&mut self, mut reader: R) -> Result<(), DetectError> {
        let mut chunk = vec![0u8; self.read_chunk_size()?];
        while !self.done {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.feed(&chunk[..n]);
        }
        Ok(())
    }

    /// Async counterpart of [`feed_reader`](Self::feed_reader).
    #[cfg(feature = "async")]
    pub async fn feed_async_reader<R>(&mut self, mut reader: R) -> Result<(), DetectError>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        use tokio::io::AsyncReadExt;

        let mut chunk = vec![0u8; self.read_chunk_size()?];
        while !self.done {
            let n = match reader.read(&mut chunk).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.feed(&chunk[..n]);
        }
        Ok(())
    }

    /// Signals end of stream and settles the verdict.
    pub fn data_end(&mut self) {
        if !self.got_data {
            return;
        }

        if let Some(result) = self.result.as_mut() {
            self.done = true;
            result.confidence = 1.0;
            return;
        }

        match self.input_state {
            InputState::Highbyte => {
                for prober in &mut self.probers {
                    if prober.finish() == ProbingState::FoundIt {
                        if let Some(name) = prober.charset_name() {
                            tracing::debug!("Detector: {} found at end of stream", name);
                            self.result = Some(Detection::new(name, prober.code_page(), 1.0));
                            self.done = true;
                            return;
                        }
                    }
                }
                for prober in &self.probers {
                    prober.log_status();
                }
                let mut best: Option<(usize, f32)> = None;
                for (i, prober) in self.probers.iter().enumerate() {
                    let cf = prober.confidence();
                    if cf > best.map_or(0.0, |(_, top)| top) {
                        best = Some((i, cf));
                    }
                }
                match best {
                    Some((i, cf)) if cf > MINIMUM_THRESHOLD => {
                        let prober = &self.probers[i];
                        if let Some(name) = prober.charset_name() {
                            tracing::debug!("Detector: settled on {} at {:.3}", name, cf);
                            self.result = Some(Detection::new(name, prober.code_page(), cf));
                        }
                    }
                    _ => tracing::debug!("Detector: no prober above {}", MINIMUM_THRESHOLD),
                }
            }
            InputState::PureAscii => {
                tracing::debug!("Detector: stream is pure ASCII");
                self.result = Some(Detection::new("ASCII", 20127, 1.0));
            }
            InputState::EscAscii => {
                tracing::debug!("Detector: escape sequences never resolved");
            }
        }
    }

    /// Clears the verdict and rewinds every constructed prober.
    pub fn reset(&mut self) {
        self.done = false;
        self.result = None;
        self.start = true;
        self.got_data = false;
        self.input_state = InputState::PureAscii;
        self.last_char = 0;
        if let Some(esc) = self.esc_prober.as_mut() {
            esc.reset();
        }
        for prober in &mut self.probers {
            prober.reset();
        }
    }

    pub fn charset(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.charset.as_str())
    }

    /// Windows code page of the verdict, or `-1`.
    pub fn code_page(&self) -> i32 {
        self.result.as_ref().map_or(-1, |r| r.code_page)
    }

    /// Confidence of the verdict. Set by [`data_end`](Self::data_end).
    pub fn confidence(&self) -> f32 {
        self.result.as_ref().map_or(0.0, |r| r.confidence)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn input_state(&self) -> InputState {
        self.input_state
    }

    pub fn is_supported_code_page(&self) -> bool {
        self.result.as_ref().map_or(false, Detection::is_supported_code_page)
    }

    pub fn detection(&self) -> Option<Detection> {
        self.result.clone()
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Resolves the verdict to an `encoding_rs` decoder.
    pub fn encoding(&self) -> Result<&'static encoding_rs::Encoding, DetectError> {
        let charset = self
            .charset()
            .ok_or_else(|| DetectError::UnsupportedEncoding("no charset detected".to_string()))?;
        let label = match charset {
            "ASCII" => "windows-1252",
            other => other,
        };
        match encoding_rs::Encoding::for_label(label.as_bytes()) {
            Some(encoding) if encoding != encoding_rs::REPLACEMENT => Ok(encoding),
            _ => Err(DetectError::UnsupportedEncoding(charset.to_string())),
        }
    }

    fn read_chunk_size(&self) -> Result<usize, DetectError> {
        match self.config.chunk_size {
            0 => Err(DetectError::InvalidArgument("chunk_size must be greater than zero".to_string())),
            n => Ok(n),
        }
    }

    fn check_bom(&mut self, buf: &[u8]) -> bool {
        let Some(&(_, name, code_page)) = BOMS.iter().find(|(mark, _, _)| buf.starts_with(mark)) else {
            return false;
        };
        tracing::debug!("Detector: byte order mark for {}", name);
        self.result = Some(Detection::new(name, code_page, 0.0));
        self.done = true;
        true
    }

    fn enter_escape(&mut self) {
        tracing::debug!("Detector: PureAscii -> EscAscii");
        self.input_state = InputState::EscAscii;
        match self.esc_prober.as_mut() {
            Some(esc) => esc.reset(),
            None => self.esc_prober = Some(EscCharsetProber::new(self.languages)),
        }
    }

    fn enter_highbyte(&mut self) {
        tracing::debug!("Detector: {:?} -> Highbyte", self.input_state);
        self.input_state = InputState::Highbyte;
        self.esc_prober = None;
        if self.probers.is_empty() {
            self.probers.push(Box::new(GroupProber::multi_byte(&self.registry, self.languages)));
            if self.languages.contains(LanguageFilter::NON_CJK) {
                self.probers.push(Box::new(GroupProber::single_byte(&self.registry)));
                self.probers.push(Box::new(Latin1Prober::new()));
            }
        }
    }

    /// Returns `true` when the escape prober settles the session.
    fn feed_escape(&mut self, buf: &[u8], replay_tilde: bool) -> bool {
        let Some(esc) = self.esc_prober.as_mut() else {
            return false;
        };
        let mut state = esc.state();
        if replay_tilde {
            state = esc.handle_data(&[TILDE]);
        }
        if state == ProbingState::Detecting {
            state = esc.handle_data(buf);
        }
        if state != ProbingState::FoundIt {
            return false;
        }
        if let Some(name) = esc.charset_name() {
            tracing::debug!("Detector: escape prober found {}", name);
            self.result = Some(Detection::new(name, esc.code_page(), 0.0));
            self.done = true;
        }
        self.done
    }

    fn feed_highbyte(&mut self, buf: &[u8]) {
        for prober in &mut self.probers {
            if prober.handle_data(buf) == ProbingState::FoundIt {
                if let Some(name) = prober.charset_name() {
                    tracing::debug!("Detector: {} found by its prober", name);
                    self.result = Some(Detection::new(name, prober.code_page(), 0.0));
                    self.done = true;
                }
                return;
            }
        }
    }
}

/// A verdict from one candidate encoding. `FoundIt` and `NotMe` are terminal
/// until the prober is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbingState {
    Detecting,
    FoundIt,
    NotMe,
}

/// Confidence above which a prober with enough data commits early.
pub const SHORTCUT_THRESHOLD: f32 = 0.95;

/// The capability shared by every candidate-encoding prober and every group
/// of probers.
///
/// Probers are fed successive chunks of one stream; any state needed to
/// bridge chunk boundaries lives inside the prober.
pub trait CharsetProber: Send {
    fn handle_data(&mut self, buf: &[u8]) -> ProbingState;

    /// Likelihood in `[0, 1]` that the stream seen so far uses this
    /// prober's charset.
    fn confidence(&self) -> f32;

    /// Signals end of stream. Probers that hold back bytes across calls
    /// score them here.
    fn finish(&mut self) -> ProbingState {
        self.state()
    }

    fn reset(&mut self);

    fn charset_name(&self) -> Option<&str>;

    /// Windows code page of [`charset_name`](Self::charset_name), or `-1`.
    fn code_page(&self) -> i32;

    fn state(&self) -> ProbingState;

    /// Emits the prober's current standing at trace level.
    fn log_status(&self) {
        tracing::trace!(
            "Prober: {} state={:?} confidence={:.3}",
            self.charset_name().unwrap_or("<none>"),
            self.state(),
            self.confidence()
        );
    }
}

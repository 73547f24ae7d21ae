pub mod config;
pub mod error;
pub mod registry;
pub mod prober;
pub mod filter;
pub mod multibyte;
pub mod utf8;
pub mod latin1;
pub mod single_byte;
pub mod group;
pub mod escape;
pub mod session;
pub mod engine;

pub use config::{DetectorConfig, Language, LanguageFilter};
pub use engine::Detector;
pub use error::DetectError;
pub use prober::{CharsetProber, ProbingState};
pub use registry::ModelRegistry;
pub use session::{Detection, InputState};
use std::sync::Arc;

/// A unified builder for detectors.
///
/// ## Mechanical Sympathy: Shared Tables
/// The registry is bound once behind an `Arc`; every detector built from
/// the same builder reads the same statistical tables.
pub struct DetectorBuilder {
    pub registry: Arc<ModelRegistry>,
    pub config: DetectorConfig,
}

impl Default for DetectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorBuilder {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(ModelRegistry::new()),
            config: DetectorConfig::default(),
        }
    }

    /// Overrides the default detector configuration.
    pub fn with_config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_languages(mut self, languages: &[Language]) -> Self {
        self.config.languages = languages.to_vec();
        self
    }

    /// Binds the statistical tables the probers score against.
    pub fn with_registry(mut self, registry: Arc<ModelRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    pub fn build(&self) -> Detector {
        Detector::new(self.config.clone(), self.registry.clone())
    }
}

/// Runs a default detector over one complete buffer.
pub fn detect(buf: &[u8]) -> Option<Detection> {
    let mut detector = DetectorBuilder::new().build();
    detector.feed(buf);
    detector.data_end();
    detector.detection()
}

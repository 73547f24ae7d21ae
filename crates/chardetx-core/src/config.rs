use std::path::Path;

use serde::Deserialize;

use crate::error::DetectError;

/// Language groups a detector may consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    ChineseSimplified,
    ChineseTraditional,
    Japanese,
    Korean,
    /// Every single-byte language plus the Latin-1 fallback.
    NonCjk,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Japanese,
        Language::Korean,
        Language::NonCjk,
    ];
}

/// Bit set of enabled [`Language`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageFilter(u8);

impl LanguageFilter {
    pub const CHINESE_SIMPLIFIED: LanguageFilter = LanguageFilter(0x01);
    pub const CHINESE_TRADITIONAL: LanguageFilter = LanguageFilter(0x02);
    pub const JAPANESE: LanguageFilter = LanguageFilter(0x04);
    pub const KOREAN: LanguageFilter = LanguageFilter(0x08);
    pub const NON_CJK: LanguageFilter = LanguageFilter(0x10);
    pub const ALL: LanguageFilter = LanguageFilter(0x1F);

    pub fn from_languages(languages: &[Language]) -> Self {
        let bits = languages.iter().fold(0u8, |acc, l| acc | Self::from(*l).0);
        LanguageFilter(bits)
    }

    pub fn contains(self, other: LanguageFilter) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl From<Language> for LanguageFilter {
    fn from(language: Language) -> Self {
        match language {
            Language::ChineseSimplified => Self::CHINESE_SIMPLIFIED,
            Language::ChineseTraditional => Self::CHINESE_TRADITIONAL,
            Language::Japanese => Self::JAPANESE,
            Language::Korean => Self::KOREAN,
            Language::NonCjk => Self::NON_CJK,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DetectorConfig {
    pub languages: Vec<Language>,
    /// Block size used when pulling from readers.
    pub chunk_size: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
            chunk_size: 1024,
        }
    }
}

impl DetectorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, DetectError> {
        let config: DetectorConfig = toml::from_str(source)?;
        if config.chunk_size == 0 {
            return Err(DetectError::InvalidArgument(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DetectError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn language_filter(&self) -> LanguageFilter {
        LanguageFilter::from_languages(&self.languages)
    }
}

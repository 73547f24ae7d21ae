//! # Core Layer Tests: ModelRegistry, DetectorConfig, DetectorBuilder
//!
//! Validates table registration and TOML loading, configuration defaults
//! and parsing, and the builder chain API.

use chardetx_core::{
    DetectError, DetectorBuilder, DetectorConfig, Language, LanguageFilter, ModelRegistry,
};
use chardetx_stats::context::CONTEXT_TABLE_LEN;
use chardetx_stats::DistributionFamily;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

fn toml_list(value: u32, len: usize) -> String {
    vec![value.to_string(); len].join(", ")
}

fn registry_toml() -> String {
    format!(
        r#"
[[frequency]]
family = "euc-kr"
orders = [{orders}]

[context]
japanese = [{context}]

[[sequence]]
charset = "x-test"
code_page = 1251
char_to_order = [{char_to_order}]
precedence = [{precedence}]
typical_positive_ratio = 0.95
"#,
        orders = toml_list(0, 2350),
        context = toml_list(3, CONTEXT_TABLE_LEN),
        char_to_order = toml_list(255, 256),
        precedence = toml_list(3, 64 * 64),
    )
}

/// Verifies that every table kind loads from TOML and is handed out intact.
#[test]
fn test_registry_from_toml() {
    let t = Instant::now();

    let registry = ModelRegistry::from_toml_str(&registry_toml()).expect("Registry TOML rejected");
    assert!(!registry.is_empty());

    let orders = registry
        .frequency_table(DistributionFamily::EucKr)
        .expect("EUC-KR table missing");
    assert_eq!(orders.len(), 2350);
    assert!(registry.frequency_table(DistributionFamily::Big5).is_none());
    assert_eq!(registry.context_table().map(|c| c.len()), Some(CONTEXT_TABLE_LEN));

    let models = registry.sequence_models();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].charset, "x-test");
    assert_eq!(models[0].code_page, 1251);
    assert!(!models[0].keep_english_letter);

    let overhead = t.elapsed();
    println!("test_registry_from_toml: Testing Overhead = {:?}", overhead);
}

/// Verifies that malformed tables are rejected as model errors and broken
/// TOML as configuration errors.
#[test]
fn test_registry_rejects_bad_tables() {
    let t = Instant::now();

    let mut registry = ModelRegistry::new();
    assert!(registry.is_empty());
    assert!(matches!(
        registry.register_frequency_table(DistributionFamily::Gb2312, Vec::new()),
        Err(DetectError::Model(_))
    ));
    assert!(matches!(
        registry.register_context_table(vec![0; 10]),
        Err(DetectError::Model(_))
    ));
    let mut context = vec![0u8; CONTEXT_TABLE_LEN];
    context[17] = 6;
    assert!(matches!(registry.register_context_table(context), Err(DetectError::Model(_))));
    assert!(registry.is_empty(), "Rejected tables must not be kept");

    let bad_ratio = registry_toml().replace("typical_positive_ratio = 0.95", "typical_positive_ratio = 0.0");
    assert!(matches!(ModelRegistry::from_toml_str(&bad_ratio), Err(DetectError::Model(_))));

    let unknown_family = "[[frequency]]\nfamily = \"klingon\"\norders = [1]\n";
    assert!(matches!(ModelRegistry::from_toml_str(unknown_family), Err(DetectError::Config(_))));

    let overhead = t.elapsed();
    println!("test_registry_rejects_bad_tables: Testing Overhead = {:?}", overhead);
}

/// Verifies loading a registry from disk and sharing it between detectors.
#[test]
fn test_registry_from_file_is_shared() {
    let t = Instant::now();

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(registry_toml().as_bytes()).expect("Failed to write temp file");
    let registry = Arc::new(ModelRegistry::from_file(file.path()).expect("Registry file rejected"));

    let builder = DetectorBuilder::new().with_registry(registry.clone());
    let _a = builder.build();
    let _b = builder.build();
    assert!(Arc::strong_count(&registry) >= 2);

    assert!(matches!(
        ModelRegistry::from_file("/nonexistent/chardetx/models.toml"),
        Err(DetectError::Io(_))
    ));

    let overhead = t.elapsed();
    println!("test_registry_from_file_is_shared: Testing Overhead = {:?}", overhead);
}

/// Verifies that `DetectorConfig::default()` enables every language with
/// the standard chunk size.
#[test]
fn test_detector_config_defaults() {
    let t = Instant::now();

    let config = DetectorConfig::default();
    assert_eq!(config.chunk_size, 1024, "Default chunk_size should be 1024");
    assert_eq!(config.languages.len(), 5);
    assert_eq!(config.language_filter(), LanguageFilter::ALL);
    assert_eq!(config.language_filter().bits(), 0x1F);

    let overhead = t.elapsed();
    println!("test_detector_config_defaults: Testing Overhead = {:?}", overhead);
}

/// Verifies TOML parsing of the detector configuration.
#[test]
fn test_detector_config_from_toml() {
    let t = Instant::now();

    let config = DetectorConfig::from_toml_str("languages = [\"japanese\", \"non-cjk\"]\nchunk_size = 4096\n")
        .expect("Config TOML rejected");
    assert_eq!(config.languages, vec![Language::Japanese, Language::NonCjk]);
    assert_eq!(config.chunk_size, 4096);
    let filter = config.language_filter();
    assert!(filter.contains(LanguageFilter::JAPANESE));
    assert!(filter.contains(LanguageFilter::NON_CJK));
    assert!(!filter.contains(LanguageFilter::KOREAN));

    let partial = DetectorConfig::from_toml_str("chunk_size = 64\n").expect("Partial config rejected");
    assert_eq!(partial.languages.len(), 5, "Missing keys fall back to defaults");

    assert!(matches!(
        DetectorConfig::from_toml_str("chunk_size = 0\n"),
        Err(DetectError::InvalidArgument(_))
    ));
    assert!(matches!(
        DetectorConfig::from_toml_str("languages = [\"martian\"]\n"),
        Err(DetectError::Config(_))
    ));

    let overhead = t.elapsed();
    println!("test_detector_config_from_toml: Testing Overhead = {:?}", overhead);
}

/// Verifies the `DetectorBuilder` fluent API.
#[test]
fn test_detector_builder_chain() {
    let t = Instant::now();

    let mut config = DetectorConfig::default();
    config.chunk_size = 16;
    let builder = DetectorBuilder::new()
        .with_config(config)
        .with_languages(&[Language::Korean])
        .with_chunk_size(32);
    assert_eq!(builder.config.chunk_size, 32);
    assert_eq!(builder.config.languages, vec![Language::Korean]);

    let mut detector = builder.build();
    assert_eq!(detector.config().chunk_size, 32);
    detector.feed(b"\x1b$B");
    detector.data_end();
    assert_eq!(detector.charset(), None, "ISO-2022-JP is not a Korean grammar");

    let overhead = t.elapsed();
    println!("test_detector_builder_chain: Testing Overhead = {:?}", overhead);
}

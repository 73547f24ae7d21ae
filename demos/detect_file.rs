use std::fs::File;
use std::sync::Arc;

use chardetx_core::{DetectorBuilder, DetectorConfig, ModelRegistry};

/// Usage: detect_file <input> [config.toml] [models.toml]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().ok_or("usage: detect_file <input> [config.toml] [models.toml]")?;
    let config = match args.next() {
        Some(path) => DetectorConfig::from_file(path)?,
        None => DetectorConfig::default(),
    };
    let registry = match args.next() {
        Some(path) => ModelRegistry::from_file(path)?,
        None => ModelRegistry::new(),
    };

    let mut detector = DetectorBuilder::new()
        .with_config(config)
        .with_registry(Arc::new(registry))
        .build();
    detector.feed_reader(File::open(&input)?)?;
    detector.data_end();

    match detector.detection() {
        Some(d) => println!("{}: {} (code page {}, confidence {:.2})", input, d.charset, d.code_page, d.confidence),
        None => println!("{}: undetermined", input),
    }
    Ok(())
}

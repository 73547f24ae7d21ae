use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chardetx_stats::context::{CATEGORY_COUNT, CONTEXT_TABLE_LEN};
use chardetx_stats::{DistributionFamily, SequenceModel, TableError};
use serde::Deserialize;

use crate::error::DetectError;

/// Statistical tables bound before detection starts.
///
/// ## Mechanical Sympathy: Load Once, Share Everywhere
/// Tables are validated at registration and handed out as `Arc` clones.
/// Detectors on any thread index the same immutable memory.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    frequency: HashMap<DistributionFamily, Arc<[u16]>>,
    japanese_context: Option<Arc<[u8]>>,
    sequences: Vec<Arc<SequenceModel>>,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    frequency: Vec<FrequencyEntry>,
    #[serde(default)]
    context: Option<ContextEntry>,
    #[serde(default)]
    sequence: Vec<SequenceModel>,
}

#[derive(Debug, Deserialize)]
struct FrequencyEntry {
    family: DistributionFamily,
    orders: Vec<u16>,
}

#[derive(Debug, Deserialize)]
struct ContextEntry {
    japanese: Vec<u8>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the frequency-order table of a CJK family, replacing any earlier
    /// table for the same family.
    pub fn register_frequency_table(&mut self, family: DistributionFamily, orders: Vec<u16>) -> Result<(), DetectError> {
        if orders.is_empty() {
            return Err(TableError::WrongLength {
                table: "frequency",
                expected: 1,
                actual: 0,
            }
            .into());
        }
        self.frequency.insert(family, orders.into());
        Ok(())
    }

    /// Binds the 83x83 hiragana context matrix shared by both Japanese
    /// probers. Categories must be below 6.
    pub fn register_context_table(&mut self, table: Vec<u8>) -> Result<(), DetectError> {
        if table.len() != CONTEXT_TABLE_LEN {
            return Err(TableError::WrongLength {
                table: "context",
                expected: CONTEXT_TABLE_LEN,
                actual: table.len(),
            }
            .into());
        }
        if let Some(index) = table.iter().position(|&c| c as usize >= CATEGORY_COUNT) {
            return Err(TableError::ValueOutOfRange {
                table: "context",
                index,
                value: table[index],
                limit: CATEGORY_COUNT as u8,
            }
            .into());
        }
        self.japanese_context = Some(table.into());
        Ok(())
    }

    /// Adds a single-byte language model. Models are probed in registration
    /// order.
    pub fn register_sequence_model(&mut self, model: SequenceModel) -> Result<(), DetectError> {
        model.validate()?;
        self.sequences.push(Arc::new(model));
        Ok(())
    }

    pub fn from_toml_str(source: &str) -> Result<Self, DetectError> {
        let file: RegistryFile = toml::from_str(source)?;
        let mut registry = ModelRegistry::new();
        for entry in file.frequency {
            registry.register_frequency_table(entry.family, entry.orders)?;
        }
        if let Some(context) = file.context {
            registry.register_context_table(context.japanese)?;
        }
        for model in file.sequence {
            registry.register_sequence_model(model)?;
        }
        Ok(registry)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DetectError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn frequency_table(&self, family: DistributionFamily) -> Option<Arc<[u16]>> {
        self.frequency.get(&family).cloned()
    }

    pub fn context_table(&self) -> Option<Arc<[u8]>> {
        self.japanese_context.clone()
    }

    pub fn sequence_models(&self) -> &[Arc<SequenceModel>] {
        &self.sequences
    }

    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty() && self.japanese_context.is_none() && self.sequences.is_empty()
    }
}

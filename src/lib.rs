//! # chardet-x
//!
//! Universal charset detection for byte streams. The work is split across
//! three crates, re-exported here:
//!
//! * [`dsa`]: bit-packed tables and the byte-class state machines.
//! * [`stats`]: distribution, context and sequence analysers.
//! * [`detector`]: probers, the detector and its configuration.

pub use chardetx_core as detector;
pub use chardetx_dsa as dsa;
pub use chardetx_stats as stats;

pub use chardetx_core::{
    detect, Detection, DetectError, Detector, DetectorBuilder, DetectorConfig, Language,
    ModelRegistry,
};

//! Shipped state-machine models.
//!
//! Every model is a `static` with compile-time packed tables, shared by all
//! probers in the process.

mod cjk;
mod escape;
mod unicode;

use crate::machine::StateModel;

pub use cjk::{BIG5, EUC_JP, EUC_KR, EUC_TW, GB18030, SHIFT_JIS};
pub use escape::{HZ_GB_2312, ISO_2022_CN, ISO_2022_JP, ISO_2022_KR};
pub use unicode::{UTF16_LE, UTF8};

/// Every shipped model, multi-byte first, then escape grammars.
pub static ALL: [&StateModel; 12] = [
    &UTF8,
    &SHIFT_JIS,
    &EUC_JP,
    &GB18030,
    &EUC_KR,
    &BIG5,
    &EUC_TW,
    &UTF16_LE,
    &HZ_GB_2312,
    &ISO_2022_CN,
    &ISO_2022_JP,
    &ISO_2022_KR,
];

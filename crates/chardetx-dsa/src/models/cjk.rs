//! Multi-byte CJK grammars.

use static_assertions::const_assert;

use crate::bitpack::{pack4, BitTable, UnitWidth};
use crate::machine::{StateModel, ERROR, ITSME, START};

const BIG5_CLASSES: [u32; 32] = [
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 00 - 07
    pack4(1, 1, 1, 1, 1, 1, 0, 0), // 08 - 0f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 10 - 17
    pack4(1, 1, 1, 0, 1, 1, 1, 1), // 18 - 1f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 20 - 27
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 28 - 2f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 30 - 37
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 38 - 3f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 40 - 47
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 48 - 4f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 50 - 57
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 58 - 5f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 60 - 67
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 68 - 6f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 70 - 77
    pack4(2, 2, 2, 2, 2, 2, 2, 1), // 78 - 7f
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 80 - 87
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 88 - 8f
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 90 - 97
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 98 - 9f
    pack4(4, 3, 3, 3, 3, 3, 3, 3), // a0 - a7
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // a8 - af
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // b0 - b7
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // b8 - bf
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // c0 - c7
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // c8 - cf
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // d0 - d7
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // d8 - df
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // e0 - e7
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // e8 - ef
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // f0 - f7
    pack4(3, 3, 3, 3, 3, 3, 3, 0), // f8 - ff
];

const BIG5_STATES: [u32; 3] = [
    pack4(ERROR, START, START, 3, ERROR, ERROR, ERROR, ERROR), // 00 - 07
    pack4(ERROR, ERROR, ITSME, ITSME, ITSME, ITSME, ITSME, ERROR), // 08 - 0f
    pack4(ERROR, START, START, START, START, START, START, START), // 10 - 17
];

const BIG5_CHAR_LEN: [u8; 5] = [0, 1, 1, 2, 0];

const_assert!(BIG5_STATES.len() * 8 >= 4 * 5);

pub static BIG5: StateModel = StateModel::new(
    "Big5",
    950,
    BitTable::new(UnitWidth::Four, &BIG5_CLASSES),
    5,
    BitTable::new(UnitWidth::Four, &BIG5_STATES),
    &BIG5_CHAR_LEN,
);

const EUC_JP_CLASSES: [u32; 32] = [
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 00 - 07
    pack4(4, 4, 4, 4, 4, 4, 5, 5), // 08 - 0f
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 10 - 17
    pack4(4, 4, 4, 5, 4, 4, 4, 4), // 18 - 1f
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 20 - 27
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 28 - 2f
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 30 - 37
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 38 - 3f
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 40 - 47
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 48 - 4f
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 50 - 57
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 58 - 5f
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 60 - 67
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 68 - 6f
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 70 - 77
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 78 - 7f
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // 80 - 87
    pack4(5, 5, 5, 5, 5, 5, 1, 3), // 88 - 8f
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // 90 - 97
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // 98 - 9f
    pack4(5, 2, 2, 2, 2, 2, 2, 2), // a0 - a7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // a8 - af
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b0 - b7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b8 - bf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c0 - c7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c8 - cf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d0 - d7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d8 - df
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // e0 - e7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // e8 - ef
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // f0 - f7
    pack4(0, 0, 0, 0, 0, 0, 0, 5), // f8 - ff
];

const EUC_JP_STATES: [u32; 5] = [
    pack4(3, 4, 3, 5, START, ERROR, ERROR, ERROR), // 00 - 07
    pack4(ERROR, ERROR, ERROR, ERROR, ITSME, ITSME, ITSME, ITSME), // 08 - 0f
    pack4(ITSME, ITSME, START, ERROR, START, ERROR, ERROR, ERROR), // 10 - 17
    pack4(ERROR, ERROR, START, ERROR, ERROR, ERROR, 3, ERROR), // 18 - 1f
    pack4(3, ERROR, ERROR, ERROR, START, START, START, START), // 20 - 27
];

const EUC_JP_CHAR_LEN: [u8; 6] = [2, 2, 2, 3, 1, 0];

const_assert!(EUC_JP_STATES.len() * 8 >= 6 * 6);

/// EUC-JP, including the three-byte JIS X 0212 form introduced by `0x8F`.
pub static EUC_JP: StateModel = StateModel::new(
    "EUC-JP",
    20932,
    BitTable::new(UnitWidth::Four, &EUC_JP_CLASSES),
    6,
    BitTable::new(UnitWidth::Four, &EUC_JP_STATES),
    &EUC_JP_CHAR_LEN,
);

const EUC_KR_CLASSES: [u32; 32] = [
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 00 - 07
    pack4(1, 1, 1, 1, 1, 1, 0, 0), // 08 - 0f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 10 - 17
    pack4(1, 1, 1, 0, 1, 1, 1, 1), // 18 - 1f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 20 - 27
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 28 - 2f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 30 - 37
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 38 - 3f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 40 - 47
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 48 - 4f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 50 - 57
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 58 - 5f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 60 - 67
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 68 - 6f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 70 - 77
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 78 - 7f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 80 - 87
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 88 - 8f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 90 - 97
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 98 - 9f
    pack4(0, 2, 2, 2, 2, 2, 2, 2), // a0 - a7
    pack4(2, 2, 2, 2, 2, 3, 3, 3), // a8 - af
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b0 - b7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b8 - bf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c0 - c7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c8 - cf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d0 - d7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d8 - df
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // e0 - e7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // e8 - ef
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // f0 - f7
    pack4(2, 2, 2, 2, 2, 2, 2, 0), // f8 - ff
];

const EUC_KR_STATES: [u32; 2] = [
    pack4(ERROR, START, 3, ERROR, ERROR, ERROR, ERROR, ERROR), // 00 - 07
    pack4(ITSME, ITSME, ITSME, ITSME, ERROR, ERROR, START, START), // 08 - 0f
];

const EUC_KR_CHAR_LEN: [u8; 4] = [0, 1, 2, 0];

const_assert!(EUC_KR_STATES.len() * 8 >= 4 * 4);

pub static EUC_KR: StateModel = StateModel::new(
    "EUC-KR",
    51949,
    BitTable::new(UnitWidth::Four, &EUC_KR_CLASSES),
    4,
    BitTable::new(UnitWidth::Four, &EUC_KR_STATES),
    &EUC_KR_CHAR_LEN,
);

const EUC_TW_CLASSES: [u32; 32] = [
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 00 - 07
    pack4(2, 2, 2, 2, 2, 2, 0, 0), // 08 - 0f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 10 - 17
    pack4(2, 2, 2, 0, 2, 2, 2, 2), // 18 - 1f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 20 - 27
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 28 - 2f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 30 - 37
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 38 - 3f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 40 - 47
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 48 - 4f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 50 - 57
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 58 - 5f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 60 - 67
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 68 - 6f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 70 - 77
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 78 - 7f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 80 - 87
    pack4(0, 0, 0, 0, 0, 0, 6, 0), // 88 - 8f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 90 - 97
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 98 - 9f
    pack4(0, 3, 4, 4, 4, 4, 4, 4), // a0 - a7
    pack4(5, 5, 1, 1, 1, 1, 1, 1), // a8 - af
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // b0 - b7
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // b8 - bf
    pack4(1, 1, 3, 1, 3, 3, 3, 3), // c0 - c7
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // c8 - cf
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // d0 - d7
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // d8 - df
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // e0 - e7
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // e8 - ef
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // f0 - f7
    pack4(3, 3, 3, 3, 3, 3, 3, 0), // f8 - ff
];

const EUC_TW_STATES: [u32; 6] = [
    pack4(ERROR, ERROR, START, 3, 3, 3, 4, ERROR), // 00 - 07
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ITSME, ITSME), // 08 - 0f
    pack4(ITSME, ITSME, ITSME, ITSME, ITSME, ERROR, START, ERROR), // 10 - 17
    pack4(START, START, START, ERROR, ERROR, ERROR, ERROR, ERROR), // 18 - 1f
    pack4(5, ERROR, ERROR, ERROR, START, ERROR, START, START), // 20 - 27
    pack4(START, ERROR, START, START, START, START, START, START), // 28 - 2f
];

const EUC_TW_CHAR_LEN: [u8; 7] = [0, 0, 1, 2, 2, 2, 3];

const_assert!(EUC_TW_STATES.len() * 8 >= 6 * 7);

pub static EUC_TW: StateModel = StateModel::new(
    "EUC-TW",
    -1,
    BitTable::new(UnitWidth::Four, &EUC_TW_CLASSES),
    7,
    BitTable::new(UnitWidth::Four, &EUC_TW_STATES),
    &EUC_TW_CHAR_LEN,
);

const GB18030_CLASSES: [u32; 32] = [
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 00 - 07
    pack4(1, 1, 1, 1, 1, 1, 0, 0), // 08 - 0f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 10 - 17
    pack4(1, 1, 1, 0, 1, 1, 1, 1), // 18 - 1f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 20 - 27
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 28 - 2f
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // 30 - 37
    pack4(3, 3, 1, 1, 1, 1, 1, 1), // 38 - 3f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 40 - 47
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 48 - 4f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 50 - 57
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 58 - 5f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 60 - 67
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 68 - 6f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 70 - 77
    pack4(2, 2, 2, 2, 2, 2, 2, 4), // 78 - 7f
    pack4(5, 6, 6, 6, 6, 6, 6, 6), // 80 - 87
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // 88 - 8f
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // 90 - 97
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // 98 - 9f
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // a0 - a7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // a8 - af
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // b0 - b7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // b8 - bf
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // c0 - c7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // c8 - cf
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // d0 - d7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // d8 - df
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // e0 - e7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // e8 - ef
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // f0 - f7
    pack4(6, 6, 6, 6, 6, 6, 6, 0), // f8 - ff
];

const GB18030_STATES: [u32; 6] = [
    pack4(ERROR, START, START, START, START, START, 3, ERROR), // 00 - 07
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ITSME, ITSME), // 08 - 0f
    pack4(ITSME, ITSME, ITSME, ITSME, ITSME, ERROR, ERROR, START), // 10 - 17
    pack4(4, ERROR, START, START, ERROR, ERROR, ERROR, ERROR), // 18 - 1f
    pack4(ERROR, ERROR, 5, ERROR, ERROR, ERROR, ITSME, ERROR), // 20 - 27
    pack4(ERROR, ERROR, START, START, START, START, START, START), // 28 - 2f
];

const GB18030_CHAR_LEN: [u8; 7] = [0, 1, 1, 1, 1, 1, 2];

const_assert!(GB18030_STATES.len() * 8 >= 6 * 7);

/// GB18030. Class 6 leads either a two- or a four-byte sequence; it is
/// reported as two bytes because only the distribution analyser consumes it,
/// and that analyser validates its own code ranges. A complete four-byte
/// sequence is decisive and reaches ITSME.
pub static GB18030: StateModel = StateModel::new(
    "GB18030",
    54936,
    BitTable::new(UnitWidth::Four, &GB18030_CLASSES),
    7,
    BitTable::new(UnitWidth::Four, &GB18030_STATES),
    &GB18030_CHAR_LEN,
);

const SHIFT_JIS_CLASSES: [u32; 32] = [
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 00 - 07
    pack4(1, 1, 1, 1, 1, 1, 0, 0), // 08 - 0f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 10 - 17
    pack4(1, 1, 1, 0, 1, 1, 1, 1), // 18 - 1f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 20 - 27
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 28 - 2f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 30 - 37
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 38 - 3f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 40 - 47
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 48 - 4f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 50 - 57
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 58 - 5f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 60 - 67
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 68 - 6f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 70 - 77
    pack4(2, 2, 2, 2, 2, 2, 2, 1), // 78 - 7f
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // 80 - 87
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // 88 - 8f
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // 90 - 97
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // 98 - 9f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // a0 - a7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // a8 - af
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b0 - b7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b8 - bf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c0 - c7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c8 - cf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d0 - d7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d8 - df
    pack4(3, 3, 3, 3, 3, 3, 3, 3), // e0 - e7
    pack4(3, 3, 3, 3, 3, 4, 4, 4), // e8 - ef
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // f0 - f7
    pack4(4, 4, 4, 4, 4, 0, 0, 0), // f8 - ff
];

const SHIFT_JIS_STATES: [u32; 3] = [
    pack4(ERROR, START, START, 3, ERROR, ERROR, ERROR, ERROR), // 00 - 07
    pack4(ERROR, ERROR, ERROR, ERROR, ITSME, ITSME, ITSME, ITSME), // 08 - 0f
    pack4(ITSME, ITSME, ERROR, ERROR, START, START, START, START), // 10 - 17
];

const SHIFT_JIS_CHAR_LEN: [u8; 6] = [0, 1, 1, 2, 0, 0];

const_assert!(SHIFT_JIS_STATES.len() * 8 >= 4 * 6);

pub static SHIFT_JIS: StateModel = StateModel::new(
    "Shift-JIS",
    932,
    BitTable::new(UnitWidth::Four, &SHIFT_JIS_CLASSES),
    6,
    BitTable::new(UnitWidth::Four, &SHIFT_JIS_STATES),
    &SHIFT_JIS_CHAR_LEN,
);

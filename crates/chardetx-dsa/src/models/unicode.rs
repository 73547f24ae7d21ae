//! Unicode transformation formats.

use static_assertions::const_assert;

use crate::bitpack::{pack4, BitTable, UnitWidth};
use crate::machine::{StateModel, ERROR, ITSME, START};

const UTF8_CLASSES: [u32; 32] = [
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
    pack4(2, 2, 2, 2, 3, 3, 3, 3), // 80 - 87
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 88 - 8f
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 90 - 97
    pack4(4, 4, 4, 4, 4, 4, 4, 4), // 98 - 9f
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // a0 - a7
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // a8 - af
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // b0 - b7
    pack4(5, 5, 5, 5, 5, 5, 5, 5), // b8 - bf
    pack4(0, 0, 6, 6, 6, 6, 6, 6), // c0 - c7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // c8 - cf
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // d0 - d7
    pack4(6, 6, 6, 6, 6, 6, 6, 6), // d8 - df
    pack4(7, 8, 8, 8, 8, 8, 8, 8), // e0 - e7
    pack4(8, 8, 8, 8, 8, 9, 8, 8), // e8 - ef
    pack4(10, 11, 11, 11, 11, 11, 11, 11), // f0 - f7
    pack4(12, 13, 13, 13, 14, 15, 0, 0), // f8 - ff
];

const UTF8_STATES: [u32; 26] = [
    pack4(ERROR, START, ERROR, ERROR, ERROR, ERROR, 12, 10), // 00 - 07
    pack4(9, 11, 8, 7, 6, 5, 4, 3), // 08 - 0f
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // 10 - 17
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // 18 - 1f
    pack4(ITSME, ITSME, ITSME, ITSME, ITSME, ITSME, ITSME, ITSME), // 20 - 27
    pack4(ITSME, ITSME, ITSME, ITSME, ITSME, ITSME, ITSME, ITSME), // 28 - 2f
    pack4(ERROR, ERROR, 5, 5, 5, 5, ERROR, ERROR), // 30 - 37
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // 38 - 3f
    pack4(ERROR, ERROR, ERROR, 5, 5, 5, ERROR, ERROR), // 40 - 47
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // 48 - 4f
    pack4(ERROR, ERROR, 7, 7, 7, 7, ERROR, ERROR), // 50 - 57
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // 58 - 5f
    pack4(ERROR, ERROR, ERROR, ERROR, 7, 7, ERROR, ERROR), // 60 - 67
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // 68 - 6f
    pack4(ERROR, ERROR, 9, 9, 9, 9, ERROR, ERROR), // 70 - 77
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // 78 - 7f
    pack4(ERROR, ERROR, ERROR, ERROR, 9, 9, ERROR, ERROR), // 80 - 87
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // 88 - 8f
    pack4(ERROR, ERROR, 12, 12, 12, 12, ERROR, ERROR), // 90 - 97
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // 98 - 9f
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, 12, ERROR, ERROR), // a0 - a7
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // a8 - af
    pack4(ERROR, ERROR, 12, 12, 12, ERROR, ERROR, ERROR), // b0 - b7
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // b8 - bf
    pack4(ERROR, ERROR, START, START, START, START, ERROR, ERROR), // c0 - c7
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // c8 - cf
];

const UTF8_CHAR_LEN: [u8; 16] = [0, 1, 0, 0, 0, 0, 2, 3, 3, 3, 4, 4, 5, 5, 6, 6];

const_assert!(UTF8_STATES.len() * 8 >= 13 * 16);

/// UTF-8, still accepting the historical five- and six-byte forms so that
/// legacy producers are not rejected outright.
///
/// After `F0` the second byte may be `88..=BF`; the class alphabet is full,
/// so the overlong `F0 88..=8F` forms slip through with the valid `90..=9F`.
pub static UTF8: StateModel = StateModel::new(
    "UTF-8",
    65001,
    BitTable::new(UnitWidth::Four, &UTF8_CLASSES),
    16,
    BitTable::new(UnitWidth::Four, &UTF8_STATES),
    &UTF8_CHAR_LEN,
);

const UTF16_LE_CLASSES: [u32; 32] = [
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 1, 0, 0, 2, 0, 0), // 08 - 0f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 3, 0, 0, 0, 0), // 18 - 1f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 20 - 27
    pack4(0, 3, 3, 3, 3, 3, 0, 0), // 28 - 2f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 40 - 47
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 48 - 4f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 78 - 7f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 80 - 87
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 88 - 8f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 90 - 97
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 98 - 9f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // a0 - a7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // a8 - af
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // b0 - b7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // b8 - bf
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // c0 - c7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // c8 - cf
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // d0 - d7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // d8 - df
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // e0 - e7
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // e8 - ef
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // f0 - f7
    pack4(0, 0, 0, 0, 0, 0, 4, 5), // f8 - ff
];

const UTF16_LE_STATES: [u32; 7] = [
    pack4(6, 6, 7, 6, 4, 3, ERROR, ERROR), // 00 - 07
    pack4(ERROR, ERROR, ERROR, ERROR, ITSME, ITSME, ITSME, ITSME), // 08 - 0f
    pack4(ITSME, ITSME, 5, 5, 5, ERROR, ITSME, ERROR), // 10 - 17
    pack4(5, 5, 5, ERROR, 5, ERROR, 6, 6), // 18 - 1f
    pack4(7, 6, 8, 8, 5, 5, 5, ERROR), // 20 - 27
    pack4(5, 5, 5, ERROR, ERROR, ERROR, 5, 5), // 28 - 2f
    pack4(5, 5, 5, ERROR, 5, ERROR, START, START), // 30 - 37
];

const UTF16_LE_CHAR_LEN: [u8; 6] = [2, 2, 2, 2, 2, 2];

const_assert!(UTF16_LE_STATES.len() * 8 >= 9 * 6);

pub static UTF16_LE: StateModel = StateModel::new(
    "UTF-16LE",
    1200,
    BitTable::new(UnitWidth::Four, &UTF16_LE_CLASSES),
    6,
    BitTable::new(UnitWidth::Four, &UTF16_LE_STATES),
    &UTF16_LE_CHAR_LEN,
);

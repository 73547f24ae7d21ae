//! 7-bit escape-sequence grammars. A machine reaches ITSME as soon as it
//! sees a designator that only its encoding uses.

use static_assertions::const_assert;

use crate::bitpack::{pack4, BitTable, UnitWidth};
use crate::machine::{StateModel, ERROR, ITSME, START};

const HZ_GB_2312_CLASSES: [u32; 32] = [
    pack4(1, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 1, 0, 0, 0, 0), // 18 - 1f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 20 - 27
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 28 - 2f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 40 - 47
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 48 - 4f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 4, 0, 5, 2, 0), // 78 - 7f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 80 - 87
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 88 - 8f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 90 - 97
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // 98 - 9f
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // a0 - a7
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // a8 - af
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // b0 - b7
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // b8 - bf
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // c0 - c7
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // c8 - cf
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // d0 - d7
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // d8 - df
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // e0 - e7
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // e8 - ef
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // f0 - f7
    pack4(1, 1, 1, 1, 1, 1, 1, 1), // f8 - ff
];

const HZ_GB_2312_STATES: [u32; 6] = [
    pack4(START, ERROR, 3, START, START, START, ERROR, ERROR), // 00 - 07
    pack4(ERROR, ERROR, ERROR, ERROR, ITSME, ITSME, ITSME, ITSME), // 08 - 0f
    pack4(ITSME, ITSME, ERROR, ERROR, START, START, 4, ERROR), // 10 - 17
    pack4(5, ERROR, 6, ERROR, 5, 5, 4, ERROR), // 18 - 1f
    pack4(4, 4, 4, ERROR, 4, ERROR, 4, ERROR), // 20 - 27
    pack4(4, ITSME, START, START, START, START, START, START), // 28 - 2f
];

const HZ_GB_2312_CHAR_LEN: [u8; 6] = [0, 0, 0, 0, 0, 0];

const_assert!(HZ_GB_2312_STATES.len() * 8 >= 7 * 6);

pub static HZ_GB_2312: StateModel = StateModel::new(
    "HZ-GB-2312",
    52936,
    BitTable::new(UnitWidth::Four, &HZ_GB_2312_CLASSES),
    6,
    BitTable::new(UnitWidth::Four, &HZ_GB_2312_STATES),
    &HZ_GB_2312_CHAR_LEN,
);

const ISO_2022_CN_CLASSES: [u32; 32] = [
    pack4(2, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 1, 0, 0, 0, 0), // 18 - 1f
    pack4(0, 0, 0, 0, 3, 0, 0, 0), // 20 - 27
    pack4(0, 4, 5, 0, 0, 0, 0, 0), // 28 - 2f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3f
    pack4(0, 6, 0, 0, 0, 0, 0, 6), // 40 - 47
    pack4(7, 0, 0, 0, 0, 0, 0, 0), // 48 - 4f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 78 - 7f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 80 - 87
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 88 - 8f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 90 - 97
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 98 - 9f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // a0 - a7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // a8 - af
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b0 - b7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b8 - bf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c0 - c7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c8 - cf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d0 - d7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d8 - df
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // e0 - e7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // e8 - ef
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // f0 - f7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // f8 - ff
];

const ISO_2022_CN_STATES: [u32; 7] = [
    pack4(START, 3, ERROR, START, START, START, START, START), // 00 - 07
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // 08 - 0f
    pack4(ITSME, ITSME, ITSME, ITSME, ITSME, ITSME, ITSME, ITSME), // 10 - 17
    pack4(ERROR, ERROR, ERROR, 4, ERROR, ERROR, ERROR, ERROR), // 18 - 1f
    pack4(ERROR, ERROR, ERROR, ERROR, 5, 6, ERROR, ERROR), // 20 - 27
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ITSME, ERROR), // 28 - 2f
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ITSME), // 30 - 37
];

const ISO_2022_CN_CHAR_LEN: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 0];

const_assert!(ISO_2022_CN_STATES.len() * 8 >= 7 * 8);

pub static ISO_2022_CN: StateModel = StateModel::new(
    "ISO-2022-CN",
    50227,
    BitTable::new(UnitWidth::Four, &ISO_2022_CN_CLASSES),
    8,
    BitTable::new(UnitWidth::Four, &ISO_2022_CN_STATES),
    &ISO_2022_CN_CHAR_LEN,
);

const ISO_2022_JP_CLASSES: [u32; 32] = [
    pack4(2, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 2, 2), // 08 - 0f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 1, 0, 0, 0, 0), // 18 - 1f
    pack4(0, 0, 0, 0, 7, 0, 0, 0), // 20 - 27
    pack4(3, 0, 0, 0, 0, 0, 0, 0), // 28 - 2f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3f
    pack4(6, 0, 4, 0, 8, 0, 0, 0), // 40 - 47
    pack4(0, 9, 5, 0, 0, 0, 0, 0), // 48 - 4f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 78 - 7f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 80 - 87
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 88 - 8f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 90 - 97
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 98 - 9f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // a0 - a7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // a8 - af
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b0 - b7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b8 - bf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c0 - c7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c8 - cf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d0 - d7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d8 - df
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // e0 - e7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // e8 - ef
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // f0 - f7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // f8 - ff
];

const ISO_2022_JP_STATES: [u32; 9] = [
    pack4(START, 3, ERROR, START, START, START, START, START), // 00 - 07
    pack4(START, START, ERROR, ERROR, ERROR, ERROR, ERROR, ERROR), // 08 - 0f
    pack4(ERROR, ERROR, ERROR, ERROR, ITSME, ITSME, ITSME, ITSME), // 10 - 17
    pack4(ITSME, ITSME, ITSME, ITSME, ITSME, ITSME, ERROR, ERROR), // 18 - 1f
    pack4(ERROR, 5, ERROR, ERROR, ERROR, 4, ERROR, ERROR), // 20 - 27
    pack4(ERROR, ERROR, ERROR, 6, ITSME, ERROR, ITSME, ERROR), // 28 - 2f
    pack4(ERROR, ERROR, ERROR, ERROR, ERROR, ERROR, ITSME, ITSME), // 30 - 37
    pack4(ERROR, ERROR, ERROR, ITSME, ERROR, ERROR, ERROR, ERROR), // 38 - 3f
    pack4(ERROR, ERROR, ERROR, ERROR, ITSME, ERROR, START, START), // 40 - 47
];

const ISO_2022_JP_CHAR_LEN: [u8; 10] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

const_assert!(ISO_2022_JP_STATES.len() * 8 >= 7 * 10);

pub static ISO_2022_JP: StateModel = StateModel::new(
    "ISO-2022-JP",
    50222,
    BitTable::new(UnitWidth::Four, &ISO_2022_JP_CLASSES),
    10,
    BitTable::new(UnitWidth::Four, &ISO_2022_JP_STATES),
    &ISO_2022_JP_CHAR_LEN,
);

const ISO_2022_KR_CLASSES: [u32; 32] = [
    pack4(2, 0, 0, 0, 0, 0, 0, 0), // 00 - 07
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 08 - 0f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 10 - 17
    pack4(0, 0, 0, 1, 0, 0, 0, 0), // 18 - 1f
    pack4(0, 0, 0, 0, 3, 0, 0, 0), // 20 - 27
    pack4(0, 4, 0, 0, 0, 0, 0, 0), // 28 - 2f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 30 - 37
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 38 - 3f
    pack4(0, 0, 0, 5, 0, 0, 0, 0), // 40 - 47
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 48 - 4f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 50 - 57
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 58 - 5f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 60 - 67
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 68 - 6f
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 70 - 77
    pack4(0, 0, 0, 0, 0, 0, 0, 0), // 78 - 7f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 80 - 87
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 88 - 8f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 90 - 97
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // 98 - 9f
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // a0 - a7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // a8 - af
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b0 - b7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // b8 - bf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c0 - c7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // c8 - cf
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d0 - d7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // d8 - df
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // e0 - e7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // e8 - ef
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // f0 - f7
    pack4(2, 2, 2, 2, 2, 2, 2, 2), // f8 - ff
];

const ISO_2022_KR_STATES: [u32; 5] = [
    pack4(START, 3, ERROR, START, START, START, ERROR, ERROR), // 00 - 07
    pack4(ERROR, ERROR, ERROR, ERROR, ITSME, ITSME, ITSME, ITSME), // 08 - 0f
    pack4(ITSME, ITSME, ERROR, ERROR, ERROR, 4, ERROR, ERROR), // 10 - 17
    pack4(ERROR, ERROR, ERROR, ERROR, 5, ERROR, ERROR, ERROR), // 18 - 1f
    pack4(ERROR, ERROR, ERROR, ITSME, START, START, START, START), // 20 - 27
];

const ISO_2022_KR_CHAR_LEN: [u8; 6] = [0, 0, 0, 0, 0, 0];

const_assert!(ISO_2022_KR_STATES.len() * 8 >= 6 * 6);

pub static ISO_2022_KR: StateModel = StateModel::new(
    "ISO-2022-KR",
    50225,
    BitTable::new(UnitWidth::Four, &ISO_2022_KR_CLASSES),
    6,
    BitTable::new(UnitWidth::Four, &ISO_2022_KR_STATES),
    &ISO_2022_KR_CHAR_LEN,
);

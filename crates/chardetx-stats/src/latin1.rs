//! Character classes and pair likelihoods for windows-1252.

/// Undefined in windows-1252.
pub const UDF: u8 = 0;
/// Digits, punctuation, symbols and controls.
pub const OTH: u8 = 1;
pub const ASC: u8 = 2;
pub const ASS: u8 = 3;
/// Accented capital vowel.
pub const ACV: u8 = 4;
/// Accented capital other.
pub const ACO: u8 = 5;
pub const ASV: u8 = 6;
pub const ASO: u8 = 7;
pub const CLASS_COUNT: usize = 8;

/// Number of likelihood levels in [`CLASS_MODEL`]: 0 illegal, 1 very
/// unlikely, 2 normal, 3 very likely.
pub const FREQ_CAT_COUNT: usize = 4;

#[rustfmt::skip]
static CHAR_TO_CLASS: [u8; 256] = [
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 00 - 07
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 08 - 0f
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 10 - 17
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 18 - 1f
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 20 - 27
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 28 - 2f
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 30 - 37
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 38 - 3f
    OTH, ASC, ASC, ASC, ASC, ASC, ASC, ASC, // 40 - 47
    ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, // 48 - 4f
    ASC, ASC, ASC, ASC, ASC, ASC, ASC, ASC, // 50 - 57
    ASC, ASC, ASC, OTH, OTH, OTH, OTH, OTH, // 58 - 5f
    OTH, ASS, ASS, ASS, ASS, ASS, ASS, ASS, // 60 - 67
    ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, // 68 - 6f
    ASS, ASS, ASS, ASS, ASS, ASS, ASS, ASS, // 70 - 77
    ASS, ASS, ASS, OTH, OTH, OTH, OTH, OTH, // 78 - 7f
    OTH, UDF, OTH, ASO, OTH, OTH, OTH, OTH, // 80 - 87
    OTH, OTH, ACO, OTH, ACO, UDF, ACO, UDF, // 88 - 8f
    UDF, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // 90 - 97
    OTH, OTH, ASO, OTH, ASO, UDF, ASO, ACO, // 98 - 9f
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // a0 - a7
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // a8 - af
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // b0 - b7
    OTH, OTH, OTH, OTH, OTH, OTH, OTH, OTH, // b8 - bf
    ACV, ACV, ACV, ACV, ACV, ACV, ACO, ACO, // c0 - c7
    ACV, ACV, ACV, ACV, ACV, ACV, ACV, ACV, // c8 - cf
    ACO, ACO, ACV, ACV, ACV, ACV, ACV, OTH, // d0 - d7
    ACV, ACV, ACV, ACV, ACV, ACO, ACO, ACO, // d8 - df
    ASV, ASV, ASV, ASV, ASV, ASV, ASO, ASO, // e0 - e7
    ASV, ASV, ASV, ASV, ASV, ASV, ASV, ASV, // e8 - ef
    ASO, ASO, ASV, ASV, ASV, ASV, ASV, OTH, // f0 - f7
    ASV, ASV, ASV, ASV, ASV, ASO, ASO, ASO, // f8 - ff
];

/// Likelihood of `(previous class, current class)`, row-major.
#[rustfmt::skip]
static CLASS_MODEL: [u8; CLASS_COUNT * CLASS_COUNT] = [
//  UDF OTH ASC ASS ACV ACO ASV ASO
    0,  0,  0,  0,  0,  0,  0,  0,  // UDF
    0,  3,  3,  3,  3,  3,  3,  3,  // OTH
    0,  3,  3,  3,  3,  3,  3,  3,  // ASC
    0,  3,  3,  3,  1,  1,  3,  3,  // ASS
    0,  3,  3,  3,  1,  2,  1,  2,  // ACV
    0,  3,  3,  3,  3,  3,  3,  3,  // ACO
    0,  3,  1,  3,  1,  1,  1,  3,  // ASV
    0,  3,  1,  3,  1,  1,  3,  3,  // ASO
];

#[inline]
pub fn class_of(byte: u8) -> u8 {
    CHAR_TO_CLASS[byte as usize]
}

#[inline]
pub fn likelihood(prev: u8, current: u8) -> u8 {
    CLASS_MODEL[prev as usize * CLASS_COUNT + current as usize]
}

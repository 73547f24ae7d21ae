//! # Stats Layer Tests: CharDistributionAnalyser, JapaneseContextAnalyser,
//! SequenceModel
//!
//! Validates order mappings, the confidence formulas and their thresholds,
//! and the shape checks applied to externally supplied tables.

use chardetx_stats::context::CONTEXT_TABLE_LEN;
use chardetx_stats::{
    latin1, CharDistributionAnalyser, DistributionFamily, JapaneseContextAnalyser,
    JapaneseScheme, SequenceModel, TableError, SURE_NO, SURE_YES,
};
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Instant;

const FREQUENT: [u8; 2] = [0xB0, 0xA1];
const RARE: [u8; 2] = [0xB0, 0xA2];

fn euc_kr_analyser() -> CharDistributionAnalyser {
    let mut table = vec![600u16; 2350];
    table[0] = 0;
    CharDistributionAnalyser::new(DistributionFamily::EucKr, Some(Arc::from(table)))
}

/// Verifies the per-family order functions at the edges of their ranges.
#[test]
fn test_distribution_order_functions() {
    let t = Instant::now();

    assert_eq!(DistributionFamily::EucKr.order_of([0xB0, 0xA1]), Some(0));
    assert_eq!(DistributionFamily::EucKr.order_of([0xA1, 0xA1]), None);
    assert_eq!(DistributionFamily::Gb2312.order_of([0xB1, 0xA2]), Some(95));
    assert_eq!(DistributionFamily::Gb2312.order_of([0xB0, 0x40]), None);
    assert_eq!(DistributionFamily::Big5.order_of([0xA4, 0x40]), Some(0));
    assert_eq!(DistributionFamily::Big5.order_of([0xA4, 0xA1]), Some(63));
    assert_eq!(DistributionFamily::EucTw.order_of([0xC4, 0xA1]), Some(0));
    assert_eq!(DistributionFamily::ShiftJis.order_of([0x81, 0x40]), Some(0));
    assert_eq!(DistributionFamily::ShiftJis.order_of([0x81, 0x7E]), Some(62));
    assert_eq!(DistributionFamily::ShiftJis.order_of([0x81, 0x80]), Some(63));
    assert_eq!(DistributionFamily::ShiftJis.order_of([0xE0, 0x40]), Some(188 * 31));
    assert_eq!(DistributionFamily::ShiftJis.order_of([0xA0, 0x40]), None);
    assert_eq!(DistributionFamily::EucJp.order_of([0xA4, 0xA2]), Some(283));
    assert_eq!(DistributionFamily::EucJp.order_of([0xA0, 0xA1]), None);

    let overhead = t.elapsed();
    println!("test_distribution_order_functions: Testing Overhead = {:?}", overhead);
}

/// Verifies the frequent/total ratio formula, the minimum-data floor and
/// that only two-byte characters are counted.
#[test]
fn test_distribution_confidence() {
    let t = Instant::now();

    let mut analyser = euc_kr_analyser();
    for _ in 0..4 {
        analyser.handle_one_char(FREQUENT, 2);
    }
    assert_eq!(analyser.confidence(), SURE_NO, "Four frequent characters are not evidence");

    for _ in 0..6 {
        analyser.handle_one_char(FREQUENT, 2);
    }
    assert_eq!(analyser.confidence(), SURE_YES, "All-frequent text reports the cap");

    for _ in 0..5 {
        analyser.handle_one_char(RARE, 2);
    }
    analyser.handle_one_char(FREQUENT, 3);
    analyser.handle_one_char(FREQUENT, 1);
    assert_eq!(analyser.total_chars(), 15);
    assert_eq!(analyser.freq_chars(), 10);
    let expected = 10.0 / (5.0 * 6.0);
    assert!((analyser.confidence() - expected).abs() < 1e-6);

    analyser.reset();
    assert_eq!(analyser.total_chars(), 0);
    assert_eq!(analyser.confidence(), SURE_NO);

    let overhead = t.elapsed();
    println!("test_distribution_confidence: Testing Overhead = {:?}", overhead);
}

/// Verifies the enough-data threshold and the behaviour without a table.
#[test]
fn test_distribution_enough_data_and_missing_table() {
    let t = Instant::now();

    let mut analyser = euc_kr_analyser();
    for _ in 0..1024 {
        analyser.handle_one_char(FREQUENT, 2);
    }
    assert!(!analyser.got_enough_data());
    analyser.handle_one_char(FREQUENT, 2);
    assert!(analyser.got_enough_data());

    let mut bare = CharDistributionAnalyser::new(DistributionFamily::Gb2312, None);
    for _ in 0..50 {
        bare.handle_one_char([0xB0, 0xA1], 2);
    }
    assert_eq!(bare.total_chars(), 50);
    assert_eq!(bare.freq_chars(), 0);
    assert_eq!(bare.confidence(), SURE_NO);

    let overhead = t.elapsed();
    println!("test_distribution_enough_data_and_missing_table: Testing Overhead = {:?}", overhead);
}

/// Verifies hiragana detection for both Japanese schemes.
#[test]
fn test_context_order_functions() {
    let t = Instant::now();

    assert_eq!(JapaneseScheme::ShiftJis.order_of([0x82, 0x9F]), Some(0));
    assert_eq!(JapaneseScheme::ShiftJis.order_of([0x82, 0xF1]), Some(82));
    assert_eq!(JapaneseScheme::ShiftJis.order_of([0x83, 0x9F]), None);
    assert_eq!(JapaneseScheme::EucJp.order_of([0xA4, 0xA1]), Some(0));
    assert_eq!(JapaneseScheme::EucJp.order_of([0xA4, 0xF4]), None);

    let overhead = t.elapsed();
    println!("test_context_order_functions: Testing Overhead = {:?}", overhead);
}

/// Verifies the context confidence floor, the cap, the share of category-0
/// pairs and the saturation after a thousand relations.
#[test]
fn test_context_confidence() {
    let t = Instant::now();

    let hiragana = |k: u8| [0x82, 0x9F + k];

    let table: Arc<[u8]> = Arc::from(vec![3u8; CONTEXT_TABLE_LEN]);
    let mut analyser = JapaneseContextAnalyser::new(JapaneseScheme::ShiftJis, Some(table));
    for k in 0..5 {
        analyser.handle_one_char(hiragana(k), 2);
    }
    assert_eq!(analyser.total_rel(), 4);
    assert_eq!(analyser.confidence(), SURE_NO);
    analyser.handle_one_char(hiragana(5), 2);
    assert_eq!(analyser.confidence(), SURE_YES);

    // A non-hiragana character breaks the chain.
    analyser.handle_one_char([0x88, 0x9F], 2);
    analyser.handle_one_char(hiragana(0), 2);
    assert_eq!(analyser.total_rel(), 5);

    let mut zero = vec![3u8; CONTEXT_TABLE_LEN];
    zero[0] = 0;
    let mut analyser = JapaneseContextAnalyser::new(JapaneseScheme::ShiftJis, Some(Arc::from(zero)));
    for _ in 0..11 {
        analyser.handle_one_char(hiragana(0), 2);
    }
    assert_eq!(analyser.total_rel(), 10);
    assert_eq!(analyser.confidence(), 0.0);

    for _ in 0..2000 {
        analyser.handle_one_char(hiragana(1), 2);
    }
    assert!(analyser.got_enough_data());
    assert_eq!(analyser.total_rel(), 1001, "Relations stop accumulating past the limit");

    analyser.reset();
    assert_eq!(analyser.total_rel(), 0);
    assert!(!analyser.got_enough_data());

    let overhead = t.elapsed();
    println!("test_context_confidence: Testing Overhead = {:?}", overhead);
}

proptest! {
    /// Verifies that distribution and context confidences stay within
    /// `[0, SURE_YES]` for any character stream and any table contents.
    #[test]
    fn test_analyser_confidence_capped(
        chars in prop::collection::vec((any::<[u8; 2]>(), 1usize..=3), 0..600),
        ranks in prop::collection::vec(any::<u16>(), 1..9000),
        categories in prop::collection::vec(0u8..6, CONTEXT_TABLE_LEN..=CONTEXT_TABLE_LEN),
    ) {
        let ranks: Arc<[u16]> = Arc::from(ranks);
        let categories: Arc<[u8]> = Arc::from(categories);
        for family in DistributionFamily::ALL {
            let mut analyser = CharDistributionAnalyser::new(family, Some(ranks.clone()));
            for &(pair, len) in &chars {
                analyser.handle_one_char(pair, len);
                let cf = analyser.confidence();
                prop_assert!((0.0..=SURE_YES).contains(&cf), "{:?} gave {}", family, cf);
            }
        }
        for scheme in [JapaneseScheme::ShiftJis, JapaneseScheme::EucJp] {
            let mut analyser = JapaneseContextAnalyser::new(scheme, Some(categories.clone()));
            for &(pair, len) in &chars {
                analyser.handle_one_char(pair, len);
                let cf = analyser.confidence();
                prop_assert!((0.0..=SURE_YES).contains(&cf), "{:?} gave {}", scheme, cf);
            }
        }
    }
}

fn sequence_model() -> SequenceModel {
    SequenceModel {
        charset: "x-test".to_string(),
        code_page: -1,
        char_to_order: vec![255; 256],
        precedence: vec![3; 64 * 64],
        typical_positive_ratio: 0.9,
        keep_english_letter: false,
    }
}

/// Verifies that malformed single-byte language models are rejected.
#[test]
fn test_sequence_model_validation() {
    let t = Instant::now();

    assert!(sequence_model().validate().is_ok());

    let mut short = sequence_model();
    short.char_to_order.pop();
    assert!(matches!(
        short.validate(),
        Err(TableError::WrongLength { table: "char_to_order", expected: 256, actual: 255 })
    ));

    let mut out_of_range = sequence_model();
    out_of_range.precedence[70] = 4;
    assert!(matches!(
        out_of_range.validate(),
        Err(TableError::ValueOutOfRange { index: 70, value: 4, .. })
    ));

    let mut flat = sequence_model();
    flat.typical_positive_ratio = 0.0;
    assert!(matches!(flat.validate(), Err(TableError::InvalidRatio(_))));
    flat.typical_positive_ratio = f32::NAN;
    assert!(flat.validate().is_err());

    let overhead = t.elapsed();
    println!("test_sequence_model_validation: Testing Overhead = {:?}", overhead);
}

/// Verifies a few windows-1252 class assignments and pair likelihoods.
#[test]
fn test_latin1_class_model() {
    let t = Instant::now();

    assert_eq!(latin1::class_of(b'A'), latin1::ASC);
    assert_eq!(latin1::class_of(b'z'), latin1::ASS);
    assert_eq!(latin1::class_of(0xE9), latin1::ASV);
    assert_eq!(latin1::class_of(0x81), latin1::UDF);
    assert_eq!(latin1::likelihood(latin1::ASS, latin1::ASV), 3);
    assert_eq!(latin1::likelihood(latin1::ASV, latin1::ASC), 1);
    assert_eq!(latin1::likelihood(latin1::OTH, latin1::UDF), 0);

    let overhead = t.elapsed();
    println!("test_latin1_class_model: Testing Overhead = {:?}", overhead);
}

//! # DSA Layer Tests: CodingStateMachine, shipped models
//!
//! Validates the byte-class automata: reachable states stay inside their
//! tables, completed characters report the right length, and escape
//! designators resolve to their encoding.

use chardetx_dsa::{models, CodingStateMachine, StateModel, ERROR, ITSME, START};
use proptest::prelude::*;
use std::time::Instant;

/// Feeds `bytes` and returns `(state, char_len)` after the last byte.
fn run(model: &'static StateModel, bytes: &[u8]) -> (u32, usize) {
    let mut machine = CodingStateMachine::new(model);
    let mut state = START;
    for &b in bytes {
        state = machine.next_state(b);
    }
    (state, machine.current_char_len())
}

proptest! {
    /// Verifies that a walk which only takes non-ERROR transitions never
    /// strands the machine: every live state offers some legal byte.
    #[test]
    fn test_legal_walk_never_errors(
        model_index in 0usize..12,
        seeds in prop::collection::vec(any::<u8>(), 1..256),
    ) {
        let model = models::ALL[model_index];
        let mut machine = CodingStateMachine::new(model);
        for seed in seeds {
            let state = machine.current_state();
            if state == ITSME {
                break;
            }
            let byte = (0..=255u8)
                .map(|k| seed.wrapping_add(k))
                .find(|&b| model.transition(state, model.class_of(b)) != ERROR);
            prop_assert!(byte.is_some(), "{} stranded in state {}", model.name(), state);
            let next = machine.next_state(byte.unwrap_or_default());
            prop_assert_ne!(next, ERROR);
            prop_assert!(next < model.state_count(), "{} left its table", model.name());
        }
    }
}

/// Verifies UTF-8 character lengths for one- to four-byte sequences.
#[test]
fn test_utf8_char_lengths() {
    let t = Instant::now();

    assert_eq!(run(&models::UTF8, b"A"), (START, 1));
    assert_eq!(run(&models::UTF8, "é".as_bytes()), (START, 2));
    assert_eq!(run(&models::UTF8, "中".as_bytes()), (START, 3));
    assert_eq!(run(&models::UTF8, "😀".as_bytes()), (START, 4));
    assert_eq!(run(&models::UTF8, b"\xC3\x28").0, ERROR);

    let overhead = t.elapsed();
    println!("test_utf8_char_lengths: Testing Overhead = {:?}", overhead);
}

/// Verifies that the CJK models complete their two- and three-byte
/// characters and report the length of the lead byte's class.
#[test]
fn test_cjk_char_lengths() {
    let t = Instant::now();

    assert_eq!(run(&models::SHIFT_JIS, b"\x82\xA0"), (START, 2));
    assert_eq!(run(&models::EUC_JP, b"\xA4\xA2"), (START, 2));
    assert_eq!(run(&models::EUC_JP, b"\x8F\xA1\xA1"), (START, 3));
    assert_eq!(run(&models::EUC_KR, b"\xB0\xA1"), (START, 2));
    assert_eq!(run(&models::GB18030, b"\xB0\xA1"), (START, 2));
    assert_eq!(run(&models::BIG5, b"\xA4\x40"), (START, 2));
    assert_eq!(run(&models::EUC_TW, b"\x8E\xA2\xA1"), (START, 3));
    assert_eq!(run(&models::EUC_KR, b"\xFF").0, ERROR);

    let overhead = t.elapsed();
    println!("test_cjk_char_lengths: Testing Overhead = {:?}", overhead);
}

/// Verifies that a GB18030 four-byte sequence is proof of the encoding.
#[test]
fn test_gb18030_four_byte_is_itsme() {
    let t = Instant::now();

    assert_eq!(run(&models::GB18030, b"\x81\x30\x81\x30").0, ITSME);

    let overhead = t.elapsed();
    println!("test_gb18030_four_byte_is_itsme: Testing Overhead = {:?}", overhead);
}

/// Verifies that each escape grammar claims its own designator and rejects
/// its siblings'.
#[test]
fn test_escape_designators() {
    let t = Instant::now();

    assert_eq!(run(&models::ISO_2022_KR, b"\x1b$)C").0, ITSME);
    assert_eq!(run(&models::ISO_2022_JP, b"\x1b$B").0, ITSME);
    assert_eq!(run(&models::ISO_2022_JP, b"\x1b(B").0, ITSME);
    assert_eq!(run(&models::ISO_2022_CN, b"\x1b$)A").0, ITSME);
    assert_eq!(run(&models::HZ_GB_2312, b"~{VPND~}").0, ITSME);

    assert_eq!(run(&models::ISO_2022_JP, b"\x1b$)C").0, ERROR);
    assert_eq!(run(&models::ISO_2022_CN, b"\x1b$)C").0, ERROR);
    assert_eq!(run(&models::ISO_2022_KR, b"\x1b$B").0, ERROR);
    assert_eq!(run(&models::HZ_GB_2312, b"\x1b").0, ERROR);

    let overhead = t.elapsed();
    println!("test_escape_designators: Testing Overhead = {:?}", overhead);
}

/// Verifies that `reset` returns a machine to START mid-character and that
/// model metadata is exposed unchanged.
#[test]
fn test_reset_and_metadata() {
    let t = Instant::now();

    let mut machine = CodingStateMachine::new(&models::EUC_KR);
    assert_ne!(machine.next_state(0xB0), START);
    machine.reset();
    assert_eq!(machine.current_state(), START);
    assert_eq!(machine.next_state(b'a'), START);

    assert_eq!(machine.model_name(), "EUC-KR");
    assert_eq!(machine.code_page(), 51949);
    assert_eq!(models::EUC_TW.code_page(), -1);
    assert_eq!(models::UTF16_LE.name(), "UTF-16LE");
    for model in models::ALL {
        assert!(model.class_count() > 0 && model.class_count() <= 16, "{}", model.name());
    }

    let overhead = t.elapsed();
    println!("test_reset_and_metadata: Testing Overhead = {:?}", overhead);
}

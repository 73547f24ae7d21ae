//! # Engine Layer Tests: Split Invariance
//!
//! Validates that the verdict does not depend on where the caller cuts the
//! stream into chunks.

use chardetx_core::{Detector, DetectorBuilder};
use proptest::prelude::*;
use proptest::sample::Index;
use std::time::Instant;

fn run_whole(input: &[u8]) -> Detector {
    let mut d = DetectorBuilder::new().build();
    d.feed(input);
    d.data_end();
    d
}

fn run_split(input: &[u8], at: usize) -> Detector {
    let mut d = DetectorBuilder::new().build();
    d.feed(&input[..at]);
    d.feed(&input[at..]);
    d.data_end();
    d
}

fn non_ascii_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('À', 'ÿ'),
        prop::char::range('А', 'я'),
        prop::char::range('一', '龥'),
    ]
}

fn text_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        Just(' '),
        non_ascii_char(),
    ]
}

proptest! {
    /// Verifies that UTF-8 text split at any byte, including inside a
    /// character, reaches the same charset and confidence as the whole.
    #[test]
    fn test_split_feed_matches_whole_feed(
        first in non_ascii_char(),
        rest in prop::collection::vec(text_char(), 0..200),
        cut in any::<Index>(),
    ) {
        let mut text = String::new();
        text.push(first);
        text.extend(rest);
        let bytes = text.as_bytes();
        let at = cut.index(bytes.len() + 1);

        let whole = run_whole(bytes);
        let split = run_split(bytes, at);
        prop_assert_eq!(whole.charset(), Some("UTF-8"));
        prop_assert_eq!(split.charset(), whole.charset());
        prop_assert_eq!(split.confidence(), whole.confidence());
    }
}

/// Verifies split invariance at every cut point for the escape and
/// single-byte paths.
#[test]
fn test_every_cut_point() {
    let t = Instant::now();

    let inputs: [(&[u8], &str); 5] = [
        (b"Hello ~{VPND~} world", "HZ-GB-2312"),
        (b"\x1b$)C\x0e!!\x0fhello", "ISO-2022-KR"),
        (b"abc \x1b$B$3$s\x1b(B def", "ISO-2022-JP"),
        (b"Caf\xE9 na\xEFve gar\xE7on r\xE9sum\xE9 ", "windows-1252"),
        (b"Caf\xE9 na\xEFve r\xE9sum\xE9", "windows-1252"),
    ];
    for (input, charset) in inputs {
        let whole = run_whole(input);
        assert_eq!(whole.charset(), Some(charset));
        for at in 0..=input.len() {
            let split = run_split(input, at);
            assert_eq!(split.charset(), whole.charset(), "{} cut at {}", charset, at);
            assert_eq!(split.confidence(), whole.confidence(), "{} cut at {}", charset, at);
        }
    }

    let overhead = t.elapsed();
    println!("test_every_cut_point: Testing Overhead = {:?}", overhead);
}

//! Stateful pre-filters that reduce a chunk to the bytes a group of probers
//! cares about. Each filter carries its state across calls, so a stream fed
//! in pieces filters to exactly the same bytes as the whole stream. A word
//! still open at end of stream is released by `flush_into`.

/// Keeps every byte with the high bit set plus the one byte right after it.
#[derive(Debug, Clone)]
pub struct HighByteFilter {
    keep_next: bool,
}

impl HighByteFilter {
    pub fn new() -> Self {
        Self { keep_next: true }
    }

    pub fn filter_into(&mut self, buf: &[u8], out: &mut Vec<u8>) {
        for &b in buf {
            if b & 0x80 != 0 {
                out.push(b);
                self.keep_next = true;
            } else if self.keep_next {
                out.push(b);
                self.keep_next = false;
            }
        }
    }

    pub fn reset(&mut self) {
        self.keep_next = true;
    }
}

impl Default for HighByteFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps only words that contain at least one high byte, each followed by a
/// single space. Words are runs of ASCII letters and high bytes.
#[derive(Debug, Clone, Default)]
pub struct InternationalWordFilter {
    pending: Vec<u8>,
    meet_msb: bool,
}

impl InternationalWordFilter {
    pub fn filter_into(&mut self, buf: &[u8], out: &mut Vec<u8>) {
        for &b in buf {
            if b & 0x80 != 0 {
                self.meet_msb = true;
                self.pending.push(b);
            } else if b.is_ascii_alphabetic() {
                self.pending.push(b);
            } else {
                if self.meet_msb {
                    out.extend_from_slice(&self.pending);
                    out.push(b' ');
                }
                self.pending.clear();
                self.meet_msb = false;
            }
        }
    }

    /// Emits the trailing word as if a delimiter had followed it.
    pub fn flush_into(&mut self, out: &mut Vec<u8>) {
        self.filter_into(b" ", out);
    }

    pub fn reset(&mut self) {
        self.pending.clear();
        self.meet_msb = false;
    }
}

/// Keeps every word outside HTML-style `<...>` tags, each followed by a
/// single space. Words are runs of ASCII letters and high bytes.
#[derive(Debug, Clone, Default)]
pub struct EnglishLetterFilter {
    pending: Vec<u8>,
    in_tag: bool,
}

impl EnglishLetterFilter {
    pub fn filter_into(&mut self, buf: &[u8], out: &mut Vec<u8>) {
        for &b in buf {
            match b {
                b'>' => self.in_tag = false,
                b'<' => self.in_tag = true,
                _ => {}
            }
            if b & 0x80 != 0 || b.is_ascii_alphabetic() {
                self.pending.push(b);
                continue;
            }
            if !self.pending.is_empty() && !self.in_tag {
                out.extend_from_slice(&self.pending);
                out.push(b' ');
            }
            self.pending.clear();
        }
    }

    pub fn flush_into(&mut self, out: &mut Vec<u8>) {
        if !self.pending.is_empty() && !self.in_tag {
            out.extend_from_slice(&self.pending);
            out.push(b' ');
        }
        self.pending.clear();
    }

    pub fn reset(&mut self) {
        self.pending.clear();
        self.in_tag = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_split<F: FnMut(&[u8], &mut Vec<u8>)>(mut f: F, input: &[u8], at: usize) -> Vec<u8> {
        let mut out = Vec::new();
        f(&input[..at], &mut out);
        f(&input[at..], &mut out);
        out
    }

    #[test]
    fn high_byte_filter_keeps_trailing_byte() {
        let mut f = HighByteFilter::new();
        let mut out = Vec::new();
        f.filter_into(b"ab\xB0\xA1cd\xC4e", &mut out);
        assert_eq!(out, b"a\xB0\xA1c\xC4e");
    }

    #[test]
    fn international_filter_drops_plain_english() {
        let mut f = InternationalWordFilter::default();
        let mut out = Vec::new();
        f.filter_into(b"hello caf\xE9, world na\xEFve.", &mut out);
        assert_eq!(out, b"caf\xE9 na\xEFve ");
    }

    #[test]
    fn english_filter_skips_tag_contents() {
        let mut f = EnglishLetterFilter::default();
        let mut out = Vec::new();
        f.filter_into(b"<p id=\"a\">Gar\xE7on <br/> ok.", &mut out);
        assert_eq!(out, b"Gar\xE7on ok ");
    }

    #[test]
    fn filters_are_split_invariant() {
        let input: &[u8] = b"<b>Se\xF1or</b> caf\xE9 \xB0\xA1x na\xEFve, fin.";
        for at in 0..=input.len() {
            let mut whole = InternationalWordFilter::default();
            let mut expected = Vec::new();
            whole.filter_into(input, &mut expected);
            let mut split = InternationalWordFilter::default();
            assert_eq!(run_split(|b, o| split.filter_into(b, o), input, at), expected);

            let mut whole = EnglishLetterFilter::default();
            let mut expected = Vec::new();
            whole.filter_into(input, &mut expected);
            let mut split = EnglishLetterFilter::default();
            assert_eq!(run_split(|b, o| split.filter_into(b, o), input, at), expected);

            let mut whole = HighByteFilter::new();
            let mut expected = Vec::new();
            whole.filter_into(input, &mut expected);
            let mut split = HighByteFilter::new();
            assert_eq!(run_split(|b, o| split.filter_into(b, o), input, at), expected);
        }
    }

    #[test]
    fn flush_releases_trailing_word() {
        let mut f = InternationalWordFilter::default();
        let mut out = Vec::new();
        f.filter_into(b"hello R\xE9sum\xE9", &mut out);
        assert!(out.is_empty());
        f.flush_into(&mut out);
        assert_eq!(out, b"R\xE9sum\xE9 ");
        f.flush_into(&mut out);
        assert_eq!(out, b"R\xE9sum\xE9 ");

        let mut f = EnglishLetterFilter::default();
        let mut out = Vec::new();
        f.filter_into(b"ok caf\xE9", &mut out);
        f.flush_into(&mut out);
        assert_eq!(out, b"ok caf\xE9 ");

        let mut f = EnglishLetterFilter::default();
        let mut out = Vec::new();
        f.filter_into(b"<a hr\xE9f", &mut out);
        f.flush_into(&mut out);
        assert!(out.is_empty());
    }
}

/// Coarse classification of everything fed so far in a session.
///
/// Transitions only move forward: `PureAscii -> EscAscii -> Highbyte`, or
/// straight to `Highbyte`. `Highbyte` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    PureAscii,
    /// 7-bit data containing an escape sequence or an HZ shift-in.
    EscAscii,
    Highbyte,
}

/// A detection verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub charset: String,
    /// Windows code page, or `-1` when the charset has none.
    pub code_page: i32,
    pub confidence: f32,
}

impl Detection {
    pub(crate) fn new(charset: impl Into<String>, code_page: i32, confidence: f32) -> Self {
        Self {
            charset: charset.into(),
            code_page,
            confidence,
        }
    }

    /// Whether the code page lies in the range Windows can decode.
    pub fn is_supported_code_page(&self) -> bool {
        self.code_page > 0 && self.code_page < 65535
    }
}

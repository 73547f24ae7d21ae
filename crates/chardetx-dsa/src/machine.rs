use crate::bitpack::BitTable;

pub const START: u32 = 0;
pub const ERROR: u32 = 1;
pub const ITSME: u32 = 2;

/// Immutable description of one encoding's byte grammar.
///
/// Bytes are first mapped to a small class alphabet; the transition table is
/// then indexed by `state * class_count + class`. Every cell holds one of the
/// sentinels or a positive intermediate state.
#[derive(Debug)]
pub struct StateModel {
    name: &'static str,
    code_page: i32,
    class_table: BitTable<'static>,
    class_count: u32,
    state_table: BitTable<'static>,
    char_len: &'static [u8],
}

impl StateModel {
    pub const fn new(
        name: &'static str,
        code_page: i32,
        class_table: BitTable<'static>,
        class_count: u32,
        state_table: BitTable<'static>,
        char_len: &'static [u8],
    ) -> Self {
        Self {
            name,
            code_page,
            class_table,
            class_count,
            state_table,
            char_len,
        }
    }

    #[inline(always)]
    pub fn class_of(&self, byte: u8) -> u32 {
        self.class_table.unpack(byte as usize)
    }

    #[inline(always)]
    pub fn transition(&self, state: u32, class: u32) -> u32 {
        self.state_table
            .unpack((state * self.class_count + class) as usize)
    }

    /// Length of the character whose lead byte belongs to `class`.
    pub fn char_len(&self, class: u32) -> usize {
        self.char_len.get(class as usize).copied().unwrap_or(0) as usize
    }

    pub fn class_count(&self) -> u32 {
        self.class_count
    }

    /// Number of states addressable by the transition table.
    pub fn state_count(&self) -> u32 {
        (self.state_table.len() / self.class_count as usize) as u32
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Windows code page, or `-1` when the charset has none.
    pub fn code_page(&self) -> i32 {
        self.code_page
    }
}

/// Drives a [`StateModel`] one byte at a time.
///
/// ## Performance
/// A transition is two table lookups and no branches besides the START check,
/// so probers can afford to call it for every byte of every candidate.
#[derive(Debug, Clone)]
pub struct CodingStateMachine {
    model: &'static StateModel,
    current_state: u32,
    current_char_len: usize,
}

impl CodingStateMachine {
    pub fn new(model: &'static StateModel) -> Self {
        Self {
            model,
            current_state: START,
            current_char_len: 0,
        }
    }

    #[inline]
    pub fn next_state(&mut self, byte: u8) -> u32 {
        let class = self.model.class_of(byte);
        // Lengths are keyed by the class of the byte that opens a character.
        if self.current_state == START {
            self.current_char_len = self.model.char_len(class);
        }
        let next = self.model.transition(self.current_state, class);
        self.current_state = next;
        next
    }

    /// Length of the character just completed. Only meaningful right after
    /// [`next_state`](Self::next_state) returned [`START`].
    pub fn current_char_len(&self) -> usize {
        self.current_char_len
    }

    pub fn current_state(&self) -> u32 {
        self.current_state
    }

    pub fn reset(&mut self) {
        self.current_state = START;
    }

    pub fn model(&self) -> &'static StateModel {
        self.model
    }

    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    pub fn code_page(&self) -> i32 {
        self.model.code_page()
    }
}

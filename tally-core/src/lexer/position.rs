//! Source position tracking
//!
//! A line is scanned left to right, so a position is a pair of offsets:
//! - index: 0-based character count, used in error reports
//! - byte_offset: 0-based UTF-8 offset, used to slice the source

/// Position of a character within the line being scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SourcePosition {
    /// Character index, 0-based
    pub index: usize,
    /// Byte offset, 0-based
    pub byte_offset: usize,
}

impl SourcePosition {
    pub fn new(index: usize, byte_offset: usize) -> Self {
        Self { index, byte_offset }
    }

    /// Start of the line
    pub fn start() -> Self {
        Self::default()
    }

    /// 1-based column for human-readable messages
    pub fn column(&self) -> usize {
        self.index + 1
    }

    /// Step over one character
    pub fn advance(&mut self, c: char) {
        self.index += 1;
        self.byte_offset += c.len_utf8();
    }
}

/// A rewindable reader over the bytes of a string.
///
/// # Invariants
///
/// `pos <= bytes.len()`.
///
/// Every delimiter the parser stops at is ASCII, so a slice taken between
/// two positions the cursor stopped at never splits a UTF-8 sequence.
pub(crate) struct Cursor<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(s: &'a str) -> Self {
        Cursor { s, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn has_remaining(&self) -> bool {
        self.pos < self.s.len()
    }

    /// Returns the byte at the current position, or `None` at the end.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.pos).copied()
    }

    /// Consumes and returns the byte at the current position.
    pub(crate) fn next(&mut self) -> Option<u8> {
        let x = self.peek()?;
        // INVARIANT: A byte was present, so `pos < len` before the increment.
        self.pos += 1;
        Some(x)
    }

    /// Consumes the given byte if it is next.
    pub(crate) fn next_if_eq(&mut self, x: u8) -> bool {
        if self.peek() == Some(x) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Moves back by `n` bytes, stopping at the start.
    pub(crate) fn rewind(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    /// Consumes bytes up to, but not including, the first one matching `pred`.
    ///
    /// `pred` must only match ASCII bytes.
    pub(crate) fn take_until(&mut self, mut pred: impl FnMut(u8) -> bool) -> &'a str {
        let start = self.pos;
        let len = self.s.as_bytes()[start..]
            .iter()
            .position(|&x| pred(x))
            .unwrap_or(self.s.len() - start);
        self.pos += len;
        &self.s[start..self.pos]
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

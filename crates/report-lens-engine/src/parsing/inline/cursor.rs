/// A cursor for byte-by-byte inline scanning with position tracking.
///
/// All delimiters are ASCII, so every position the parser slices at is a
/// char boundary even when the line contains multi-byte text.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Finds the first occurrence of `pat` at or after byte index `from`.
    ///
    /// Returns the absolute index of the match start. Does not move the cursor.
    pub fn find_from(&self, from: usize, pat: &[u8]) -> Option<usize> {
        let hay = self.s.as_bytes().get(from..)?;
        if pat.is_empty() {
            return Some(from);
        }
        hay.windows(pat.len())
            .position(|w| w == pat)
            .map(|offset| from + offset)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves the cursor to an absolute byte position.
    pub fn jump_to(&mut self, pos: usize) {
        self.i = pos;
    }

    /// Returns the text between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

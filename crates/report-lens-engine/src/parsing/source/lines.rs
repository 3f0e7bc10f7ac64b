use super::span::LineSpan;

/// A reference to a single physical line of the report.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// 0-based line index.
    pub index: usize,
    /// The line text without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
}

impl LineRef<'_> {
    pub fn span(&self) -> LineSpan {
        LineSpan::single(self.index)
    }
}

/// Returns an iterator over the physical lines of `text` with their indices.
///
/// Splits on `\n` only, so a trailing newline yields a final empty line. That
/// empty line is meaningful: it renders as a separator. An empty text has no
/// lines at all.
pub fn lines_with_index(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let skip_all = text.is_empty();
    text.split('\n')
        .take_while(move |_| !skip_all)
        .enumerate()
        .map(|(index, line)| LineRef {
            index,
            text: line.strip_suffix('\r').unwrap_or(line),
        })
}

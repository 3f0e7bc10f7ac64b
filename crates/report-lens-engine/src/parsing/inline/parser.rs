use super::{
    cursor::Cursor,
    kinds::{Bold, Link},
    types::Span,
};

/// Which inline constructs a scan recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    /// Bold and links; used for headings, list items and paragraphs.
    Full,
    /// Links only; used for table body cells.
    LinksOnly,
}

/// Parses a line into a sequence of [`Span`]s.
///
/// Bold is tried before links at every position. Text between constructs and
/// any unmatched tail is emitted as [`Span::Text`]. Never fails: input with
/// unclosed delimiters comes back as text.
pub fn parse_inline(s: &str) -> Vec<Span> {
    scan(s, Syntax::Full)
}

/// Parses a line recognizing only `[label](url)` links.
///
/// `**` markers are left in the text untouched.
pub fn parse_links(s: &str) -> Vec<Span> {
    scan(s, Syntax::LinksOnly)
}

fn scan(s: &str, syntax: Syntax) -> Vec<Span> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<Span>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Span::Text(s[start..end].to_string()));
        }
    }

    // A construct that fails to close from one position cannot close from any
    // later one, so each is given up after its first failure.
    let mut bold_closable = syntax == Syntax::Full;
    let mut link_closable = true;

    while !cur.eof() {
        let start = cur.pos();
        let mut matched = None;
        if bold_closable && cur.starts_with(Bold::DELIM) {
            matched = try_parse_bold(&mut cur);
            bold_closable = matched.is_some();
        }
        if matched.is_none() && link_closable && cur.peek() == Some(Link::OPEN) {
            matched = try_parse_link(&mut cur);
            link_closable = matched.is_some();
        }
        if let Some(span) = matched {
            flush_text(&mut out, s, text_start, start);
            out.push(span);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos().min(s.len()));
    out
}

/// Attempts to parse bold text starting at the current position.
///
/// Returns `None` if not at `**` or if no closing `**` follows. The cursor
/// only moves on success.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<Span> {
    if !cur.starts_with(Bold::DELIM) {
        return None;
    }

    let inner_start = cur.pos() + Bold::DELIM.len();
    let inner_end = cur.find_from(inner_start, Bold::DELIM)?;

    cur.jump_to(inner_end + Bold::DELIM.len());
    Some(Span::Bold(cur.slice(inner_start, inner_end).to_string()))
}

/// Attempts to parse a `[label](url)` link starting at the current position.
///
/// Returns `None` if not at `[`, if no `](` follows, or if the url is never
/// closed. The cursor only moves on success.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let label_start = cur.pos() + 1;
    let label_end = cur.find_from(label_start, Link::MIDDLE)?;
    let url_start = label_end + Link::MIDDLE.len();
    let url_end = cur.find_from(url_start, &[Link::CLOSE])?;

    cur.jump_to(url_end + 1);
    Some(Span::Link {
        label: cur.slice(label_start, label_end).to_string(),
        url: cur.slice(url_start, url_end).to_string(),
    })
}

use serde::Serialize;

/// An inline fragment of a line, produced left to right without overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Span {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// Bold text, delimiters removed.
    Bold(String),
    /// A link with its visible label and target url.
    Link { label: String, url: String },
}

impl Span {
    /// The readable text of this span with markup removed.
    ///
    /// For links this is the label; the url is not part of the visible text.
    pub fn text(&self) -> &str {
        match self {
            Span::Text(s) | Span::Bold(s) => s,
            Span::Link { label, .. } => label,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Span::Link { .. })
    }
}

/// Concatenates the readable text of a span sequence.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

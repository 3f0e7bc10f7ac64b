/// Markdown link `[label](url)`.
///
/// Label and url are both matched as short as possible: the label ends at the
/// first `](` and the url at the first `)` after it. A label may therefore
/// contain a stray `]` that is not followed by `(`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const MIDDLE: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';
}

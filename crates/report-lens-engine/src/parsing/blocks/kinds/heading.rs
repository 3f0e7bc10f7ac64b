/// Heading prefixes `## ` to `#### `.
///
/// Prefixes are matched on the raw line (no trimming) and the most specific
/// prefix is tried first, so `#### ` is never read as a level-2 heading.
pub struct Heading;

impl Heading {
    pub const PREFIXES: [(&'static str, u8); 3] = [("#### ", 4), ("### ", 3), ("## ", 2)];

    /// Level-3 headings containing one of these words are rendered emphasized.
    pub const EMPHASIS_WORDS: [&'static str; 4] =
        ["limitations", "deficiencies", "weaknesses", "drawbacks"];

    /// Returns the heading level and the text after the prefix.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES.iter().find_map(|(prefix, level)| {
            line.strip_prefix(prefix).map(|content| (*level, content))
        })
    }

    /// Whether a heading is tagged for emphasized rendering.
    ///
    /// Only level 3 qualifies; the match is a case-insensitive substring
    /// search, so "Drawbacks:" and "Key Limitations & Deficiencies" both count.
    pub fn is_emphasized(level: u8, content: &str) -> bool {
        if level != 3 {
            return false;
        }
        let lower = content.to_lowercase();
        Self::EMPHASIS_WORDS.iter().any(|w| lower.contains(w))
    }
}

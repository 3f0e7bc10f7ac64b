use std::sync::OnceLock;

use regex::Regex;

/// Which kind of list marker opened an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `- item`
    Dash,
    /// `1. item`
    Numbered,
}

/// List item markers. Items are flat; indentation carries no nesting.
pub struct ListItem;

impl ListItem {
    pub const DASH: &'static str = "- ";

    fn ordered_marker() -> &'static Regex {
        static ORDERED_MARKER: OnceLock<Regex> = OnceLock::new();
        ORDERED_MARKER
            .get_or_init(|| Regex::new(r"^[0-9]+\.\s").expect("Invalid ordered list regex"))
    }

    /// Matches a list marker on the trimmed line and returns the item text.
    pub fn parse(line: &str) -> Option<(ListMarker, &str)> {
        let t = line.trim();
        if let Some(content) = t.strip_prefix(Self::DASH) {
            return Some((ListMarker::Dash, content));
        }
        let m = Self::ordered_marker().find(t)?;
        Some((ListMarker::Numbered, &t[m.end()..]))
    }
}

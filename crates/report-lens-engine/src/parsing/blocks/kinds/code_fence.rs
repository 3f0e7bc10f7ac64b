/// The opening or closing line of a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    /// Text after the backticks on the line, if any (e.g. `text` in ```` ```text ````).
    pub info: Option<&'a str>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Detects a fence line. Leading and trailing whitespace is ignored.
    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let t = line.trim();
        let rest = t.strip_prefix(Self::BACKTICKS)?;
        let info = rest.trim_start_matches('`').trim();
        Some(FenceSig {
            info: (!info.is_empty()).then_some(info),
        })
    }
}

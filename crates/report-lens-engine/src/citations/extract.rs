use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::types::{Citation, CitationId, CitationType, Status};

/// Extracted titles longer than this many characters are cut.
pub const TITLE_MAX_CHARS: usize = 70;

/// Appended to a cut title.
pub const TITLE_ELLIPSIS: &str = "...";

/// Only urls with this prefix are admitted (covers `https` too).
pub const URL_SCHEME_PREFIX: &str = "http";

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
}

/// Extracts the deduplicated citations of a report.
///
/// Links preceded by `!` (images) are skipped, as are urls not starting with
/// `http`. When a url repeats, the first occurrence and its label win.
/// Neither label nor url may span a line break.
pub fn extract(text: &str) -> Vec<Citation> {
    let re = link_regex();
    let mut found: Vec<Citation> = vec![];
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pos = 0;

    while let Some(caps) = re.captures_at(text, pos) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };

        if text[..whole.start()].ends_with('!') {
            // Image syntax: retry just past the bracket, the label may hold a link.
            pos = whole.start() + 1;
            continue;
        }
        pos = whole.end();

        let url = url.as_str();
        if url.starts_with(URL_SCHEME_PREFIX) && seen.insert(url) {
            found.push(Citation {
                id: CitationId::extracted(found.len()),
                title: truncate_title(label.as_str()),
                url: url.to_string(),
                kind: CitationType::Extracted,
                status: Status::Unknown,
                verified: false,
            });
        }
    }

    log::debug!("extracted {} citations", found.len());
    found
}

/// Cuts a title to [`TITLE_MAX_CHARS`] characters plus an ellipsis.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_MAX_CHARS {
        return title.to_string();
    }
    let mut cut: String = title.chars().take(TITLE_MAX_CHARS).collect();
    cut.push_str(TITLE_ELLIPSIS);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn urls(citations: &[Citation]) -> Vec<&str> {
        citations.iter().map(|c| c.url.as_str()).collect()
    }

    #[test]
    fn image_links_are_excluded() {
        let found = extract("![alt](http://img) and [real](http://site)");
        assert_eq!(urls(&found), vec!["http://site"]);
    }

    #[test]
    fn duplicate_urls_keep_first_label() {
        let found = extract("[first](https://a.example) then [second](https://a.example)");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "first");
    }

    #[test]
    fn non_http_urls_are_excluded() {
        let found = extract("[rel](/docs) [mail](mailto:x@y) [ftp](ftp://f) [ok](https://ok.example)");
        assert_eq!(urls(&found), vec!["https://ok.example"]);
    }

    #[test]
    fn ids_are_positional_among_accepted_links() {
        let found = extract("[a](/skip) [b](https://b.example) [c](https://c.example)");
        let ids: Vec<String> = found.iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids, vec!["cit-0", "cit-1"]);
    }

    #[test]
    fn new_citations_start_unverified() {
        let found = extract("[a](https://a.example)");
        assert_eq!(found[0].kind, CitationType::Extracted);
        assert_eq!(found[0].status, Status::Unknown);
        assert!(!found[0].verified);
    }

    #[test]
    fn long_titles_are_truncated_with_ellipsis() {
        let label = "x".repeat(80);
        let found = extract(&format!("[{label}](https://a.example)"));
        assert_eq!(found[0].title, format!("{}...", "x".repeat(70)));
    }

    #[test]
    fn title_at_limit_is_kept() {
        let label = "y".repeat(70);
        assert_eq!(truncate_title(&label), label);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let label = "é".repeat(71);
        assert_eq!(truncate_title(&label).chars().count(), 73);
    }

    #[test]
    fn links_do_not_span_lines() {
        assert!(extract("[broken\nlabel](https://a.example)").is_empty());
    }

    #[test]
    fn links_inside_table_cells_and_lists_are_found() {
        let md = "- see [a](https://a.example)\n| x | [b](https://b.example) |";
        assert_eq!(urls(&extract(md)), vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn bang_elsewhere_does_not_block_links() {
        let found = extract("Wow! [a](https://a.example)");
        assert_eq!(found.len(), 1);
    }
}

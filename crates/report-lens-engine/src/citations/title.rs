use url::Url;

const PAGE_SUFFIXES: [&str; 2] = [".html", ".htm"];

/// Guesses a readable title from a url.
///
/// Uses the last non-empty path segment, or the host when the path is empty.
/// Dashes and underscores become spaces, a trailing `.html`/`.htm` is dropped
/// and the result is sentence-cased. `None` when the url does not parse or
/// nothing readable is left.
pub fn infer_title(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let raw = parsed
        .path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
        .map(str::to_string)
        .or_else(|| parsed.host_str().map(str::to_string))?;

    let spaced = raw.replace(['-', '_'], " ");
    let stem = strip_page_suffix(&spaced).trim();
    sentence_case(stem)
}

/// Suffixes match lowercase only; `REPORT.HTML` keeps its extension.
fn strip_page_suffix(s: &str) -> &str {
    PAGE_SUFFIXES
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))
        .unwrap_or(s)
}

fn sentence_case(s: &str) -> Option<String> {
    let mut chars = s.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
}

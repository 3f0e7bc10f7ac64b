use std::fs;
use std::path::{Path, PathBuf};

use crate::research::{ResearchResult, split_response};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Report not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a report file: {0}")]
    NotAFile(PathBuf),
}

/// Resolves a report path given on the command line.
///
/// Absolute paths and paths that exist relative to the working directory are
/// used as given; anything else is looked up under `reports_dir` when one is
/// configured.
pub fn resolve_report_path(path: &Path, reports_dir: Option<&Path>) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    match reports_dir {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}

/// Read a report file and return its content
pub fn read_report(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(IoError::NotAFile(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Reads a report that may be raw generator output.
///
/// Files containing a scratchpad element are split; anything else is taken
/// as the report itself with no scratchpad.
pub fn load_report(path: &Path) -> Result<ResearchResult, IoError> {
    let text = read_report(path)?;
    Ok(if ResearchResult::looks_generated(&text) {
        split_response(&text)
    } else {
        ResearchResult::from_report(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn read_report_success() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "r.md", "## Title\n\nBody");
        assert_eq!(read_report(&path).unwrap(), "## Title\n\nBody");
    }

    #[test]
    fn read_report_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_report(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn read_report_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let result = read_report(dir.path());
        assert!(matches!(result, Err(IoError::NotAFile(_))));
    }

    #[test]
    fn relative_path_resolves_under_reports_dir() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_report_path(Path::new("weekly.md"), Some(dir.path()));
        assert_eq!(resolved, dir.path().join("weekly.md"));
    }

    #[test]
    fn absolute_path_ignores_reports_dir() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "abs.md", "x");
        let other = TempDir::new().unwrap();
        assert_eq!(resolve_report_path(&path, Some(other.path())), path);
    }

    #[test]
    fn load_report_splits_generated_output() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "raw.txt",
            "<scratchpad>thinking</scratchpad>\n## Findings\nText",
        );
        let result = load_report(&path).unwrap();
        assert_eq!(result.scratchpad, "thinking");
        assert_eq!(result.report, "## Findings\nText");
    }

    #[test]
    fn load_report_keeps_plain_report_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "plain.md", "## Findings\nText\n");
        let result = load_report(&path).unwrap();
        assert_eq!(result.report, "## Findings\nText\n");
        assert!(result.source_urls.is_empty());
    }
}

use std::fmt;

use serde::{Serialize, Serializer};

/// Where a citation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationType {
    /// Found in the report text.
    Extracted,
    /// Entered by the user through the intake form.
    Manual,
}

/// Reachability status of a citation's url.
///
/// `Unknown` at creation; every other transition is made by the ledger's
/// check operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Unknown,
    Checking,
    Live,
    Error,
}

impl Status {
    /// Short marker shown next to a citation; `Unknown` shows nothing.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Status::Unknown => None,
            Status::Checking => Some("[CHECKING]"),
            Status::Live => Some("[LIVE]"),
            Status::Error => Some("[UNREACHABLE]"),
        }
    }
}

/// Identifier of a citation, stable for the lifetime of a report.
///
/// Extracted ids are positional within one extraction pass (`cit-0`,
/// `cit-1`, ...) and are reused when the report is re-extracted; manual ids
/// (`man-0`, ...) are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CitationId {
    pub origin: CitationType,
    pub index: usize,
}

impl CitationId {
    pub fn extracted(index: usize) -> Self {
        Self {
            origin: CitationType::Extracted,
            index,
        }
    }

    pub fn manual(index: usize) -> Self {
        Self {
            origin: CitationType::Manual,
            index,
        }
    }
}

impl fmt::Display for CitationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.origin {
            CitationType::Extracted => "cit",
            CitationType::Manual => "man",
        };
        write!(f, "{prefix}-{}", self.index)
    }
}

impl Serialize for CitationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A tracked reference from the report or the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub id: CitationId,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: CitationType,
    pub status: Status,
    /// User-togglable. A reachable probe sets it; a failed probe never clears it.
    pub verified: bool,
}

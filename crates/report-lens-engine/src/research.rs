//! Splitting generator output into scratchpad and report, and tracking a
//! research request from query to result.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Serialize;

/// Shown in place of the scratchpad when the output has none.
pub const NO_SCRATCHPAD: &str = "No scratchpad generated.";

/// Error message used when a generator fails without saying why.
pub const GENERIC_FAILURE: &str = "Failed to generate research report.";

const SCRATCHPAD_OPEN: &str = "<scratchpad>";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Query is empty")]
    EmptyQuery,
    #[error("{0}")]
    Failed(String),
}

impl GenerationError {
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            GenerationError::Failed(GENERIC_FAILURE.to_string())
        } else {
            GenerationError::Failed(message)
        }
    }
}

/// A generated report with its planning notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchResult {
    pub scratchpad: String,
    pub report: String,
    /// Grounding sources reported by the generator, separate from in-text citations.
    pub source_urls: Vec<String>,
}

impl ResearchResult {
    /// A result for a report that was never wrapped in generator markup.
    pub fn from_report(report: impl Into<String>) -> Self {
        Self {
            scratchpad: NO_SCRATCHPAD.to_string(),
            report: report.into(),
            source_urls: vec![],
        }
    }

    /// Whether `text` carries a scratchpad element and should be split.
    pub fn looks_generated(text: &str) -> bool {
        text.contains(SCRATCHPAD_OPEN)
    }

    pub fn with_source_urls(mut self, urls: impl IntoIterator<Item = String>) -> Self {
        self.source_urls = urls.into_iter().filter(|u| !u.is_empty()).collect();
        self
    }
}

fn scratchpad_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<scratchpad>(.*?)</scratchpad>").expect("valid regex"))
}

fn leading_query_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\A<query>.*?</query>").expect("valid regex"))
}

/// Splits raw generator output into scratchpad and report.
///
/// The scratchpad is the trimmed body of the first scratchpad element. The
/// report is the rest of the text with that element removed, trimmed, and
/// with a leading echoed `<query>` element dropped.
pub fn split_response(full_text: &str) -> ResearchResult {
    let re = scratchpad_regex();
    let scratchpad = re
        .captures(full_text)
        .and_then(|c| c.get(1))
        .map_or_else(|| NO_SCRATCHPAD.to_string(), |m| m.as_str().trim().to_string());

    let without_scratchpad = re.replace(full_text, "");
    let trimmed = without_scratchpad.trim();
    let report = leading_query_regex().replace(trimmed, "").trim().to_string();

    ResearchResult {
        scratchpad,
        report,
        source_urls: vec![],
    }
}

/// A source of research reports.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, query: &str) -> Result<ResearchResult, GenerationError>;
}

/// Lifecycle of one research request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResearchState {
    #[default]
    Idle,
    Loading,
    Success(ResearchResult),
    Error(String),
}

impl ResearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResearchState::Loading)
    }

    pub fn result(&self) -> Option<&ResearchResult> {
        match self {
            ResearchState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ResearchState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Grounding sources of a successful result; empty otherwise.
    pub fn source_urls(&self) -> &[String] {
        self.result()
            .map(|r| r.source_urls.as_slice())
            .unwrap_or_default()
    }

    /// Enters `Loading` for a non-blank query and returns the trimmed query.
    pub fn begin<'q>(&mut self, query: &'q str) -> Option<&'q str> {
        let query = query.trim();
        if query.is_empty() || self.is_loading() {
            return None;
        }
        *self = ResearchState::Loading;
        Some(query)
    }

    pub fn finish(&mut self, outcome: Result<ResearchResult, GenerationError>) {
        *self = match outcome {
            Ok(result) => ResearchState::Success(result),
            Err(err) => {
                log::warn!("generation failed: {err}");
                ResearchState::Error(err.to_string())
            }
        };
    }

    /// Runs `query` through `generator`.
    ///
    /// A blank query, or one issued while another is loading, leaves the
    /// state untouched and returns false.
    pub async fn run(&mut self, generator: &dyn Generator, query: &str) -> bool {
        let Some(query) = self.begin(query) else {
            return false;
        };
        log::info!("generating report for query ({} chars)", query.len());
        self.finish(generator.generate(query).await);
        true
    }
}

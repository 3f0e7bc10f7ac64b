use super::{extract::URL_SCHEME_PREFIX, probe::ProbeOutcome, title::infer_title};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Title is required")]
    MissingTitle,
    #[error("URL is required")]
    MissingUrl,
}

/// Progress of the probe started when the url field is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlCheck {
    #[default]
    Idle,
    Checking,
    Found,
    Unreachable,
}

/// A probe requested by the form. Its `attempt` must match for the result to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeProbe {
    pub attempt: u64,
    pub url: String,
}

/// A validated form submission, ready to become a manual citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualCitation {
    pub title: String,
    pub url: String,
    /// Whether the url probe succeeded before submission.
    pub reachable: bool,
}

/// The manual citation form.
///
/// The host calls [`ManualIntake::commit_url`] when the url field loses
/// focus, runs the returned probe, and feeds the outcome back through
/// [`ManualIntake::complete_probe`]. Editing the url afterwards discards the
/// result, so a late answer for an old url is ignored.
#[derive(Debug, Default)]
pub struct ManualIntake {
    title: String,
    url: String,
    check: UrlCheck,
    attempt: u64,
}

impl ManualIntake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn check(&self) -> UrlCheck {
        self.check
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title_mut(&mut self) -> &mut String {
        &mut self.title
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        self.invalidate_check();
    }

    /// Mutable url access for hosts that edit in place. Resets any check.
    pub fn url_mut(&mut self) -> &mut String {
        self.invalidate_check();
        &mut self.url
    }

    fn invalidate_check(&mut self) {
        self.attempt += 1;
        self.check = UrlCheck::Idle;
    }

    /// Commits the url field and returns the probe to run, if any.
    ///
    /// Only urls starting with `http` are probed.
    pub fn commit_url(&mut self) -> Option<IntakeProbe> {
        let url = self.url.trim();
        if !url.starts_with(URL_SCHEME_PREFIX) {
            self.check = UrlCheck::Idle;
            return None;
        }
        self.attempt += 1;
        self.check = UrlCheck::Checking;
        Some(IntakeProbe {
            attempt: self.attempt,
            url: url.to_string(),
        })
    }

    /// Applies a probe result. Returns false if the form moved on since it was requested.
    ///
    /// On success an empty title is filled from the url when possible.
    pub fn complete_probe(&mut self, probe: &IntakeProbe, outcome: ProbeOutcome) -> bool {
        if probe.attempt != self.attempt || self.check != UrlCheck::Checking {
            log::debug!("discarding intake probe for {}", probe.url);
            return false;
        }

        if outcome.is_reachable() {
            self.check = UrlCheck::Found;
            if self.title.trim().is_empty() {
                if let Some(title) = infer_title(&probe.url) {
                    self.title = title;
                }
            }
        } else {
            self.check = UrlCheck::Unreachable;
        }
        true
    }

    /// Validates the form and resets it.
    ///
    /// The url is stored trimmed; the title as entered. A rejected form is
    /// left untouched.
    pub fn submit(&mut self) -> Result<ManualCitation, IntakeError> {
        if self.title.trim().is_empty() {
            return Err(IntakeError::MissingTitle);
        }
        let url = self.url.trim();
        if url.is_empty() {
            return Err(IntakeError::MissingUrl);
        }

        let draft = ManualCitation {
            title: self.title.clone(),
            url: url.to_string(),
            reachable: self.check == UrlCheck::Found,
        };
        let attempt = self.attempt;
        *self = Self {
            attempt: attempt + 1,
            ..Self::default()
        };
        Ok(draft)
    }
}

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;

use super::{
    extract::extract,
    intake::{IntakeError, ManualCitation, ManualIntake},
    probe::{Probe, ProbeCompletion, ProbeOutcome, spawn_check},
    types::{Citation, CitationId, CitationType, Status},
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("No citation with id {0}")]
    UnknownCitation(CitationId),
    #[error("Probe for {id} was issued against report generation {issued}, now {current}")]
    StaleTicket {
        id: CitationId,
        issued: u64,
        current: u64,
    },
}

/// Issued when a check starts; carries what the completion must be matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTicket {
    pub id: CitationId,
    pub url: String,
    /// Ledger generation at the time the check started.
    pub generation: u64,
}

/// Summary counts for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedgerStats {
    pub total: usize,
    pub verified: usize,
    pub manual: usize,
    /// `verified / total * 100`, or 0 for an empty ledger.
    pub completion_percent: f64,
}

/// The citations of the current report.
///
/// Extracted and manual citations are kept apart: re-extracting a changed
/// report replaces the extracted list wholesale and bumps the generation,
/// while manual citations survive untouched. Iteration yields extracted
/// citations first, then manual ones in the order they were added.
#[derive(Debug, Default)]
pub struct Ledger {
    generation: u64,
    extracted: Vec<Citation>,
    manual: Vec<Citation>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger holding the citations extracted from `report`.
    pub fn from_report(report: &str) -> Self {
        let mut ledger = Self::new();
        ledger.replace_extracted(report);
        ledger
    }

    /// Re-extracts citations from a changed report and returns the new generation.
    ///
    /// Checks still in flight for the old extracted citations become stale.
    pub fn replace_extracted(&mut self, report: &str) -> u64 {
        self.generation += 1;
        self.extracted = extract(report);
        log::info!(
            "ledger generation {}: {} extracted, {} manual",
            self.generation,
            self.extracted.len(),
            self.manual.len()
        );
        self.generation
    }

    pub fn iter(&self) -> impl Iterator<Item = &Citation> {
        self.extracted.iter().chain(self.manual.iter())
    }

    pub fn len(&self) -> usize {
        self.extracted.len() + self.manual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn extracted(&self) -> &[Citation] {
        &self.extracted
    }

    pub fn manual(&self) -> &[Citation] {
        &self.manual
    }

    pub fn get(&self, id: CitationId) -> Option<&Citation> {
        self.domain(id.origin).iter().find(|c| c.id == id)
    }

    /// Citation at a presentation position (extracted first, then manual).
    pub fn nth(&self, position: usize) -> Option<&Citation> {
        self.iter().nth(position)
    }

    fn domain(&self, origin: CitationType) -> &[Citation] {
        match origin {
            CitationType::Extracted => &self.extracted,
            CitationType::Manual => &self.manual,
        }
    }

    fn get_mut(&mut self, id: CitationId) -> Result<&mut Citation, LedgerError> {
        let domain = match id.origin {
            CitationType::Extracted => &mut self.extracted,
            CitationType::Manual => &mut self.manual,
        };
        domain
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(LedgerError::UnknownCitation(id))
    }

    /// Moves a citation to `Checking` and returns the ticket for its probe.
    ///
    /// Allowed from every status, including `Checking` (a re-probe while one
    /// is in flight; both completions will be applied in arrival order).
    pub fn begin_check(&mut self, id: CitationId) -> Result<ProbeTicket, LedgerError> {
        let generation = self.generation;
        let citation = self.get_mut(id)?;
        citation.status = Status::Checking;
        Ok(ProbeTicket {
            id,
            url: citation.url.clone(),
            generation,
        })
    }

    /// Starts a check for every citation and returns the tickets in ledger order.
    pub fn begin_check_all(&mut self) -> Vec<ProbeTicket> {
        let generation = self.generation;
        self.extracted
            .iter_mut()
            .chain(self.manual.iter_mut())
            .map(|c| {
                c.status = Status::Checking;
                ProbeTicket {
                    id: c.id,
                    url: c.url.clone(),
                    generation,
                }
            })
            .collect()
    }

    /// Applies a probe result and returns the resulting status.
    ///
    /// `Reachable` sets `Live` and forces `verified`; `Unreachable` sets
    /// `Error` and leaves `verified` alone. Tickets for extracted citations
    /// issued before the last re-extraction are rejected as stale, since the
    /// same id may now name a different citation.
    pub fn complete_check(
        &mut self,
        ticket: &ProbeTicket,
        outcome: ProbeOutcome,
    ) -> Result<Status, LedgerError> {
        if ticket.id.origin == CitationType::Extracted && ticket.generation != self.generation {
            return Err(LedgerError::StaleTicket {
                id: ticket.id,
                issued: ticket.generation,
                current: self.generation,
            });
        }

        let citation = self.get_mut(ticket.id)?;
        match outcome {
            ProbeOutcome::Reachable => {
                citation.status = Status::Live;
                citation.verified = true;
            }
            ProbeOutcome::Unreachable => citation.status = Status::Error,
        }
        Ok(citation.status)
    }

    /// Applies a completion delivered by [`super::probe::spawn_check`].
    pub fn apply(&mut self, completion: &ProbeCompletion) -> Result<Status, LedgerError> {
        self.complete_check(&completion.ticket, completion.outcome)
    }

    /// Flips the user verification mark and returns the new value.
    pub fn toggle_verified(&mut self, id: CitationId) -> Result<bool, LedgerError> {
        let citation = self.get_mut(id)?;
        citation.verified = !citation.verified;
        Ok(citation.verified)
    }

    /// Appends a manual citation built from a submitted intake form.
    pub fn add_manual(&mut self, draft: ManualCitation) -> &Citation {
        let id = CitationId::manual(self.manual.len());
        self.manual.push(Citation {
            id,
            title: draft.title,
            url: draft.url,
            kind: CitationType::Manual,
            // A failed or skipped probe reads as unverified, not as an error.
            status: if draft.reachable {
                Status::Live
            } else {
                Status::Unknown
            },
            verified: draft.reachable,
        });
        log::info!("added manual citation {id}");
        &self.manual[self.manual.len() - 1]
    }

    /// Submits an intake form and appends the resulting citation.
    ///
    /// A rejected form is left as it was.
    pub fn submit_manual(&mut self, intake: &mut ManualIntake) -> Result<&Citation, IntakeError> {
        let draft = intake.submit()?;
        Ok(self.add_manual(draft))
    }

    pub fn stats(&self) -> LedgerStats {
        let total = self.len();
        let verified = self.iter().filter(|c| c.verified).count();
        let completion_percent = if total == 0 {
            0.0
        } else {
            verified as f64 / total as f64 * 100.0
        };
        LedgerStats {
            total,
            verified,
            manual: self.manual.len(),
            completion_percent,
        }
    }
}

/// Checks every citation concurrently and applies the results as they arrive.
///
/// Returns the number of completions applied. For hosts without their own
/// event loop; interactive hosts drive [`spawn_check`] themselves.
pub async fn verify_all(ledger: &mut Ledger, probe: Arc<dyn Probe>) -> usize {
    let tickets = ledger.begin_check_all();
    let (tx, mut rx) = mpsc::unbounded_channel();
    for ticket in tickets {
        spawn_check(Arc::clone(&probe), ticket, tx.clone());
    }
    drop(tx);

    let mut applied = 0;
    while let Some(completion) = rx.recv().await {
        match ledger.apply(&completion) {
            Ok(_) => applied += 1,
            Err(err) => log::warn!("ignoring probe result: {err}"),
        }
    }
    applied
}

//! Citation tracking for a rendered report.
//!
//! - [`extract`] pulls `[title](http...)` references out of report text.
//! - [`Ledger`] owns the citations and applies status transitions.
//! - [`Probe`] implementations answer reachability checks off the host loop;
//!   [`spawn_check`] delivers their results back as [`ProbeCompletion`]s.
//! - [`ManualIntake`] is the form for user-supplied citations.

mod extract;
mod intake;
mod ledger;
mod probe;
mod title;
mod types;

pub use extract::{TITLE_MAX_CHARS, extract, truncate_title};
pub use intake::{IntakeError, IntakeProbe, ManualCitation, ManualIntake, UrlCheck};
pub use ledger::{Ledger, LedgerError, LedgerStats, ProbeTicket, verify_all};
pub use probe::{Probe, ProbeCompletion, ProbeOutcome, TcpProbe, spawn_check};
pub use title::infer_title;
pub use types::{Citation, CitationId, CitationType, Status};

//! Reachability probing.
//!
//! A probe answers one question: did a network round trip to the url's host
//! complete? It says nothing about whether the document exists, is valid, or
//! would return a success status. `Reachable` only means the network stack
//! got an answer.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::{net::TcpStream, sync::mpsc, task::JoinHandle};
use url::{Host, Url};

use super::ledger::ProbeTicket;

/// Result of a reachability probe. All failure modes collapse into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProbeOutcome {
    Reachable,
    Unreachable,
}

impl ProbeOutcome {
    pub fn is_reachable(self) -> bool {
        self == ProbeOutcome::Reachable
    }
}

/// The host-supplied reachability capability.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Probes by opening a TCP connection to the url's host and port.
///
/// Connecting is enough: nothing is sent. DNS failure, refusal, an
/// unparsable url and timeout all yield [`ProbeOutcome::Unreachable`].
#[derive(Debug, Clone)]
pub struct TcpProbe {
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Host and port a url would connect to; the scheme supplies the default port.
    pub fn target(url: &str) -> Option<(String, u16)> {
        let parsed = Url::parse(url).ok()?;
        let host = match parsed.host()? {
            Host::Domain(domain) => domain.to_string(),
            Host::Ipv4(ip) => ip.to_string(),
            Host::Ipv6(ip) => ip.to_string(),
        };
        let port = parsed.port_or_known_default()?;
        Some((host, port))
    }
}

#[async_trait]
impl Probe for TcpProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let Some((host, port)) = Self::target(url) else {
            log::debug!("probe {url}: no connectable host");
            return ProbeOutcome::Unreachable;
        };

        match tokio::time::timeout(self.timeout, TcpStream::connect((host.as_str(), port))).await
        {
            Ok(Ok(_stream)) => ProbeOutcome::Reachable,
            Ok(Err(err)) => {
                log::debug!("probe {url}: {err}");
                ProbeOutcome::Unreachable
            }
            Err(_) => {
                log::debug!("probe {url}: timed out after {:?}", self.timeout);
                ProbeOutcome::Unreachable
            }
        }
    }
}

/// A finished probe, ready to be applied to the ledger by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCompletion {
    pub ticket: ProbeTicket,
    pub outcome: ProbeOutcome,
}

/// Runs a probe on the runtime and delivers its completion to the host.
///
/// The ledger is not touched here; the host applies the completion on its own
/// loop so all mutations stay serialized.
pub fn spawn_check(
    probe: Arc<dyn Probe>,
    ticket: ProbeTicket,
    tx: mpsc::UnboundedSender<ProbeCompletion>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = probe.probe(&ticket.url).await;
        if tx.send(ProbeCompletion { ticket, outcome }).is_err() {
            log::debug!("probe finished after the host stopped listening");
        }
    })
}

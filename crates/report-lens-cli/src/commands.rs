use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use report_lens_config::Config;
use report_lens_engine::{
    BlockNode, Ledger, LedgerStats, ResearchResult,
    citations::{Citation, Probe, TcpProbe, verify_all},
    io::{load_report, resolve_report_path},
    parse_report,
};
use serde::Serialize;

use crate::plain::{render_blocks, render_ledger};

/// Loads a report, splitting generator output when present.
pub fn load(file: &Path, config: &Config) -> Result<ResearchResult> {
    let path = resolve_report_path(file, config.reports_dir.as_deref());
    log::debug!("reading report from {}", path.display());
    load_report(&path).with_context(|| format!("Failed to load report '{}'", file.display()))
}

pub fn probe_for(config: &Config) -> Arc<dyn Probe> {
    Arc::new(TcpProbe::new(config.probe_timeout()))
}

#[derive(Serialize)]
struct RenderJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    scratchpad: Option<&'a str>,
    blocks: &'a [BlockNode],
}

pub fn render(report: &ResearchResult, json: bool, scratchpad: bool) -> Result<String> {
    let parsed = parse_report(&report.report);
    let scratchpad = scratchpad.then_some(report.scratchpad.as_str());

    if json {
        let out = RenderJson {
            scratchpad,
            blocks: &parsed.blocks,
        };
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    let blocks: Vec<_> = parsed.iter_blocks().cloned().collect();
    let body = render_blocks(&blocks);
    Ok(match scratchpad {
        Some(notes) => format!("SCRATCHPAD\n{notes}\n\nREPORT\n{body}"),
        None => body,
    })
}

#[derive(Serialize)]
struct CitationsJson<'a> {
    citations: Vec<&'a Citation>,
    stats: LedgerStats,
}

pub async fn citations(
    report: &ResearchResult,
    check: bool,
    json: bool,
    probe: Arc<dyn Probe>,
) -> Result<String> {
    let mut ledger = Ledger::from_report(&report.report);
    if check {
        let applied = verify_all(&mut ledger, probe).await;
        log::info!("checked {applied} citations");
    }

    if json {
        let out = CitationsJson {
            citations: ledger.iter().collect(),
            stats: ledger.stats(),
        };
        return Ok(serde_json::to_string_pretty(&out)?);
    }
    Ok(render_ledger(&ledger))
}

pub mod citations;
pub mod io;
pub mod parsing;
pub mod research;

// Re-export key types for easier usage
pub use citations::{Citation, CitationId, CitationType, Ledger, LedgerStats, Status};
pub use io::{IoError, load_report, read_report, resolve_report_path};
pub use parsing::{
    ParsedReport,
    blocks::{Block, BlockNode},
    inline::Span,
    parse, parse_report,
    table::{Cell, Table},
};
pub use research::{ResearchResult, ResearchState, split_response};

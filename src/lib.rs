//! Parser for model-written lab report summaries.
//!
//! The narrative arrives as emoji-marked markdown; [`parse_summary`] turns it
//! into a [`ParsedSummary`] of typed [`TestRecord`]s plus a closing tip. The
//! parse is pure and infallible, so callers can run it on any thread.

pub mod config;
pub mod models;
pub mod pipeline;

pub use models::{Language, ModelError, ParsedSummary, TestRecord, TestStatus};
pub use pipeline::summary::{
    grammar_for, markers_for, parse_english_summary, parse_hindi_summary, parse_summary,
    FieldMarker, MarkerTable, StatusCues, SummaryDefaults, SummaryError, SummaryGrammar,
};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber used by the command-line tool.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

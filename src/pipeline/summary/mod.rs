//! Narrative lab-summary parsing.
//!
//! Turns the emoji-marked markdown a model writes about lab results into
//! [`ParsedSummary`](crate::models::ParsedSummary) values:
//! split into test sections, extract each field on its own, classify status,
//! assemble. One marker table per language drives the same pipeline.

pub mod defaults;
pub mod markers;
pub mod grammar;
pub mod splitter;
pub mod fields;
pub mod classify;
pub mod parser;


pub use defaults::*;
pub use markers::*;
pub use grammar::*;
pub use splitter::*;
pub use fields::*;
pub use classify::*;
pub use parser::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Invalid marker table field {field}: {reason}")]
    InvalidMarkerTable { field: &'static str, reason: String },

    #[error("Marker pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

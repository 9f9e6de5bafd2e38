//! Report models for the lexicon site.
//!
//! This crate turns the loaded vocabulary and models into the data each
//! page renders:
//!
//! - **Overview**: stat bar and one card per model
//! - **Lexicon**: field tables per definition and the vocabulary alignment
//!
//! Reports are plain serializable values; rendering is left to the caller.

#![deny(unsafe_code)]

mod lexicon_page;
mod overview;

pub use lexicon_page::{DefinitionTable, FieldRow, LexiconReport, LexiconStats, TocEntry};
pub use overview::{ModelCard, OverviewReport};

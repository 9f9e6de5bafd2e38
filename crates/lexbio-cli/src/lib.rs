//! CLI library components for the lexicon coverage site.

#![deny(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;

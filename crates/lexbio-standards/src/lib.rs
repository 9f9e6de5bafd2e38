#![deny(unsafe_code)]

pub mod error;
pub mod hash;
pub mod lexicons;
pub mod paths;
pub mod table;
pub mod vocabulary;

pub use crate::error::StandardsError;
pub use crate::lexicons::{MODEL_SPECS, ModelSpec, find_model, load_lexicon, load_models};
pub use crate::paths::SitePaths;
pub use crate::table::{TableOptions, TableRow, parse_table};
pub use crate::vocabulary::{
    BuildSummary, VocabularyLoad, build_term_catalog, extract_class_group, load_vocabulary,
    read_term_catalog, write_term_catalog,
};

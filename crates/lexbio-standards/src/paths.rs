//! Site directory path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the site root directory.
pub const ROOT_ENV_VAR: &str = "LEXBIO_ROOT";

/// Vocabulary table, relative to the site root.
pub const VOCABULARY_TABLE: &str = "schemas/dwc/term_versions.csv";

/// Directory holding the lexicon documents, relative to the site root.
pub const LEXICON_DIR: &str = "lexicons/bio/lexicons/temp";

/// Term catalog artifact, relative to the site root.
pub const TERM_ARTIFACT: &str = "site/src/data/dwc-terms.json";

/// Get the site root directory.
///
/// Resolution order:
/// 1. `LEXBIO_ROOT` environment variable
/// 2. the workspace root relative to this crate
pub fn site_root() -> PathBuf {
    if let Ok(root) = std::env::var(ROOT_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Input and output locations derived from a site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub root: PathBuf,
    pub vocabulary_table: PathBuf,
    pub lexicon_dir: PathBuf,
    pub term_artifact: PathBuf,
}

impl SitePaths {
    /// Default layout under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            vocabulary_table: root.join(VOCABULARY_TABLE),
            lexicon_dir: root.join(LEXICON_DIR),
            term_artifact: root.join(TERM_ARTIFACT),
            root,
        }
    }

    /// Layout under an explicit root, or under [`site_root`] when `None`.
    pub fn resolve(root: Option<&Path>) -> Self {
        match root {
            Some(root) => Self::new(root),
            None => Self::new(site_root()),
        }
    }
}

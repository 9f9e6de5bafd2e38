use std::fmt;

use serde::{Deserialize, Serialize};

/// Alignment status of a vocabulary term or lexicon field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentStatus {
    /// Term reached by a lexicon field.
    Mapped,
    /// Relevant term with no lexicon field.
    Missing,
    /// Lexicon field with no vocabulary term.
    Extension,
}

impl AlignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentStatus::Mapped => "mapped",
            AlignmentStatus::Missing => "missing",
            AlignmentStatus::Extension => "extension",
        }
    }
}

impl fmt::Display for AlignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// GBIF publishing requirement attached to a vocabulary term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GbifStatus {
    Required,
    Recommended,
}

impl GbifStatus {
    /// Badge text.
    pub fn as_str(&self) -> &'static str {
        match self {
            GbifStatus::Required => "gbif req",
            GbifStatus::Recommended => "gbif rec",
        }
    }
}

impl fmt::Display for GbifStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

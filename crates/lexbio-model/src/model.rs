use serde::Serialize;

use crate::lexicon::Lexicon;

/// A lexicon published on the site, with the vocabulary class groups its
/// coverage is measured against.
#[derive(Debug, Clone, Serialize)]
pub struct ModelConfig {
    pub name: String,
    /// Routing key, unique across models.
    pub slug: String,
    pub lexicon: Lexicon,
    /// Class groups, in display order.
    pub classes: Vec<String>,
    pub description: String,
}

impl ModelConfig {
    /// Published namespace id, e.g. `bio.lexicons.occurrence`.
    pub fn nsid(&self) -> String {
        format!("bio.lexicons.{}", self.slug)
    }
}

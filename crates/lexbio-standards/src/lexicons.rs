//! Lexicon documents and the model registry.

use std::path::Path;

use lexbio_model::{Lexicon, ModelConfig};
use tracing::info;

use crate::error::StandardsError;

/// Static description of a model published on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSpec {
    pub name: &'static str,
    pub slug: &'static str,
    /// Lexicon document file name inside the lexicon directory.
    pub file: &'static str,
    /// Vocabulary class groups the model's coverage is measured against.
    pub classes: &'static [&'static str],
    pub description: &'static str,
}

/// The models rendered by the site, in display order.
pub const MODEL_SPECS: &[ModelSpec] = &[
    ModelSpec {
        name: "Occurrence",
        slug: "occurrence",
        file: "occurrence.json",
        classes: &["Occurrence", "Event", "Location", "Record-level"],
        description: "A biodiversity observation — an organism at a place and time.",
    },
    ModelSpec {
        name: "Identification",
        slug: "identification",
        file: "identification.json",
        classes: &["Identification", "Taxon"],
        description: "A taxonomic determination for an observation.",
    },
];

/// Read a lexicon document.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, StandardsError> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| StandardsError::json(path, e))
}

impl ModelSpec {
    /// Load this model's lexicon from `lexicon_dir`.
    pub fn load(&self, lexicon_dir: &Path) -> Result<ModelConfig, StandardsError> {
        let lexicon = load_lexicon(&lexicon_dir.join(self.file))?;
        Ok(ModelConfig {
            name: self.name.to_string(),
            slug: self.slug.to_string(),
            lexicon,
            classes: self.classes.iter().map(|c| (*c).to_string()).collect(),
            description: self.description.to_string(),
        })
    }
}

/// Load every model in [`MODEL_SPECS`] from `lexicon_dir`.
pub fn load_models(lexicon_dir: &Path) -> Result<Vec<ModelConfig>, StandardsError> {
    let models = MODEL_SPECS
        .iter()
        .map(|spec| spec.load(lexicon_dir))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        lexicon_dir = %lexicon_dir.display(),
        models = models.len(),
        "lexicons loaded"
    );
    Ok(models)
}

/// Look up a model by slug.
pub fn find_model<'a>(models: &'a [ModelConfig], slug: &str) -> Option<&'a ModelConfig> {
    models.iter().find(|model| model.slug == slug)
}

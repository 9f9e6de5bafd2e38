//! Vocabulary (Darwin Core) term model.
//!
//! A [`TermCatalog`] maps a term's local name to its metadata. It is built
//! once from the vocabulary table, persisted as the `dwc-terms.json`
//! artifact and treated as immutable afterwards.
//!
//! ## Artifact format
//!
//! ```text
//! {
//!   "occurrenceID": {
//!     "name": "occurrenceID",
//!     "label": "Occurrence ID",
//!     "definition": "An identifier for the Occurrence ...",
//!     "term_iri": "http://rs.tdwg.org/dwc/terms/occurrenceID",
//!     "class": "Occurrence"
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Class group assigned to terms that are not organized in a class.
pub const DEFAULT_CLASS_GROUP: &str = "Record-level";

/// A single vocabulary term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyTerm {
    /// Term local name (e.g. `occurrenceID`). Unique within a catalog.
    pub name: String,

    /// Human-readable label.
    pub label: String,

    /// Normative definition text.
    pub definition: String,

    /// Term IRI (e.g. `http://rs.tdwg.org/dwc/terms/occurrenceID`).
    pub term_iri: String,

    /// Class group the term is organized in (e.g. `Occurrence`, `Record-level`).
    #[serde(rename = "class")]
    pub class_group: String,
}

/// Ordered mapping from term name to term.
///
/// Iteration follows insertion order, which is the order of the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermCatalog {
    terms: IndexMap<String, VocabularyTerm>,
}

impl TermCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term unless one with the same name is already present.
    ///
    /// Returns `false` when the name was taken; the existing term is kept.
    pub fn insert_first(&mut self, term: VocabularyTerm) -> bool {
        if self.terms.contains_key(&term.name) {
            return false;
        }
        self.terms.insert(term.name.clone(), term);
        true
    }

    pub fn get(&self, name: &str) -> Option<&VocabularyTerm> {
        self.terms.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.terms.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate terms in catalog order.
    pub fn terms(&self) -> impl Iterator<Item = &VocabularyTerm> {
        self.terms.values()
    }

    /// Terms organized in `class_group`, sorted by name ignoring case.
    pub fn terms_in_class(&self, class_group: &str) -> Vec<&VocabularyTerm> {
        let mut terms: Vec<&VocabularyTerm> = self
            .terms
            .values()
            .filter(|term| term.class_group == class_group)
            .collect();
        terms.sort_by_cached_key(|term| (term.name.to_lowercase(), term.name.clone()));
        terms
    }
}

impl FromIterator<VocabularyTerm> for TermCatalog {
    fn from_iter<I: IntoIterator<Item = VocabularyTerm>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for term in iter {
            catalog.insert_first(term);
        }
        catalog
    }
}

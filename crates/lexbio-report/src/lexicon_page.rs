//! Per-lexicon page.

use lexbio_map::{
    Alignment, align, compute_model_stats, constraints_label, field_count, flat_properties,
    term_for_field, type_label,
};
use lexbio_model::{LexiconDef, ModelConfig, ModelStats, TermCatalog, format_pct};
use serde::Serialize;
use tracing::debug;

/// Name of the primary definition in a lexicon document.
const MAIN_DEF: &str = "main";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub anchor: String,
    pub label: String,
}

/// One property row of a definition table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRow {
    pub field: String,
    pub required: bool,
    pub type_label: String,
    pub description: String,
    pub constraints: String,
    /// Aligned vocabulary term name.
    pub dwc_term: Option<String>,
    pub dwc_iri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinitionTable {
    pub anchor: String,
    pub label: String,
    pub description: String,
    pub rows: Vec<FieldRow>,
}

/// Stat bar of a lexicon page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LexiconStats {
    pub field_count: usize,
    #[serde(flatten)]
    pub coverage: ModelStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexiconReport {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub stats: LexiconStats,
    pub toc: Vec<TocEntry>,
    pub definitions: Vec<DefinitionTable>,
    pub alignment: Alignment,
}

impl LexiconReport {
    pub fn build(vocabulary: &TermCatalog, model: &ModelConfig) -> Self {
        let lexicon = &model.lexicon;
        let fields = flat_properties(lexicon);
        let stats = LexiconStats {
            field_count: field_count(&fields),
            coverage: compute_model_stats(vocabulary, &fields, &model.classes),
        };

        let definitions: Vec<DefinitionTable> = lexicon
            .defs
            .iter()
            .filter_map(|(name, def)| {
                let label = if name == MAIN_DEF {
                    lexicon.short_name()
                } else {
                    name.as_str()
                };
                definition_table(vocabulary, name, label, def)
            })
            .collect();
        let toc = definitions
            .iter()
            .map(|table| TocEntry {
                anchor: table.anchor.clone(),
                label: table.label.clone(),
            })
            .collect();

        let alignment = align(vocabulary, &fields, &model.classes);
        debug!(
            lexicon = %lexicon.id,
            definitions = definitions.len(),
            mapped = stats.coverage.mapped,
            total = stats.coverage.total,
            "lexicon report built"
        );

        Self {
            id: lexicon.id.clone(),
            name: model.name.clone(),
            slug: model.slug.clone(),
            description: model.description.clone(),
            stats,
            toc,
            definitions,
            alignment,
        }
    }

    pub fn pct_label(&self) -> String {
        format_pct(self.stats.coverage.pct)
    }
}

/// `None` for definitions without properties.
fn definition_table(
    vocabulary: &TermCatalog,
    name: &str,
    label: &str,
    def: &LexiconDef,
) -> Option<DefinitionTable> {
    let props = def.def_properties();
    if props.is_empty() {
        return None;
    }
    let rows = props
        .properties
        .iter()
        .map(|(field, prop)| {
            let term = term_for_field(vocabulary, field);
            FieldRow {
                field: field.clone(),
                required: props.is_required(field),
                type_label: type_label(prop),
                description: prop.description.clone().unwrap_or_default(),
                constraints: constraints_label(prop),
                dwc_term: term.map(|t| t.name.clone()),
                dwc_iri: term.map(|t| t.term_iri.clone()),
            }
        })
        .collect();
    Some(DefinitionTable {
        anchor: name.to_string(),
        label: label.to_string(),
        description: def.display_description().to_string(),
        rows,
    })
}

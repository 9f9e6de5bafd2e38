use lexbio_map::{compute_global_stats, compute_model_stats, field_count, flat_properties};
use lexbio_model::{FlatFields, GlobalStats, ModelConfig, ModelStats, TermCatalog, format_pct};
use serde::Serialize;
use tracing::debug;

/// One model on the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCard {
    pub nsid: String,
    pub title: String,
    pub description: String,
    pub slug: String,
    /// Non-protocol fields of the model.
    pub field_count: usize,
    pub stats: ModelStats,
    /// e.g. `12 fields · 67% DwC coverage`
    pub meta: String,
}

/// Landing page data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewReport {
    pub lexicon_count: usize,
    pub stats: GlobalStats,
    pub cards: Vec<ModelCard>,
}

impl OverviewReport {
    /// Compute the overview for `models`, in the order given.
    ///
    /// Global coverage is measured against the union of every model's
    /// class groups.
    pub fn build(vocabulary: &TermCatalog, models: &[ModelConfig]) -> Self {
        let field_sets: Vec<FlatFields> = models
            .iter()
            .map(|model| flat_properties(&model.lexicon))
            .collect();

        let mut classes: Vec<&str> = Vec::new();
        for model in models {
            for class in &model.classes {
                if !classes.contains(&class.as_str()) {
                    classes.push(class);
                }
            }
        }
        let stats = compute_global_stats(vocabulary, &field_sets, &classes);

        let cards = models
            .iter()
            .zip(&field_sets)
            .map(|(model, fields)| model_card(vocabulary, model, fields))
            .collect::<Vec<_>>();

        debug!(
            lexicons = models.len(),
            pct = stats.stats.pct,
            total_fields = stats.total_fields,
            "overview built"
        );
        Self {
            lexicon_count: models.len(),
            stats,
            cards,
        }
    }

    /// Global coverage rounded to a whole percentage.
    pub fn pct_label(&self) -> String {
        format_pct(self.stats.stats.pct)
    }
}

fn model_card(vocabulary: &TermCatalog, model: &ModelConfig, fields: &FlatFields) -> ModelCard {
    let stats = compute_model_stats(vocabulary, fields, &model.classes);
    let field_count = field_count(fields);
    ModelCard {
        nsid: model.nsid(),
        title: model.name.clone(),
        description: model.description.clone(),
        slug: model.slug.clone(),
        field_count,
        stats,
        meta: format!("{field_count} fields · {} DwC coverage", format_pct(stats.pct)),
    }
}

//! Coverage statistics.
//!
//! A vocabulary term is *relevant* to a model when its class group is one
//! of the model's classes, and *mapped* when some non-protocol field aligns
//! to it (directly or through an override).

use std::collections::BTreeSet;

use lexbio_model::{FlatFields, GlobalStats, ModelStats, TermCatalog};
use tracing::debug;

use crate::overrides::{aligned_term_name, is_protocol_field};

/// Coverage of the model's relevant terms by its flattened fields.
pub fn compute_model_stats<S: AsRef<str>>(
    vocabulary: &TermCatalog,
    fields: &FlatFields,
    classes: &[S],
) -> ModelStats {
    let reached = reached_terms(vocabulary, fields.keys().map(String::as_str));
    coverage(vocabulary, &reached, classes)
}

/// Coverage across several models.
///
/// Fields are unioned by name before alignment. `total_fields` sums each
/// model's own non-protocol field count, so a name shared by two models is
/// counted twice.
pub fn compute_global_stats<S: AsRef<str>>(
    vocabulary: &TermCatalog,
    field_sets: &[FlatFields],
    classes: &[S],
) -> GlobalStats {
    let mut all_fields = FlatFields::new();
    for fields in field_sets {
        all_fields.extend(fields.iter().map(|(name, field)| (name.clone(), field.clone())));
    }
    let reached = reached_terms(vocabulary, all_fields.keys().map(String::as_str));
    let stats = coverage(vocabulary, &reached, classes);
    let total_fields: usize = field_sets.iter().map(field_count).sum();
    debug!(
        models = field_sets.len(),
        mapped = stats.mapped,
        total = stats.total,
        total_fields,
        "global coverage computed"
    );
    GlobalStats {
        stats,
        total_fields,
    }
}

/// Number of fields that are not AT Protocol infrastructure.
pub fn field_count(fields: &FlatFields) -> usize {
    fields.keys().filter(|name| !is_protocol_field(name)).count()
}

fn reached_terms<'a>(
    vocabulary: &TermCatalog,
    field_names: impl Iterator<Item = &'a str>,
) -> BTreeSet<&'a str> {
    field_names
        .filter(|name| !is_protocol_field(name))
        .map(aligned_term_name)
        .filter(|term| vocabulary.contains(term))
        .collect()
}

fn coverage<S: AsRef<str>>(
    vocabulary: &TermCatalog,
    reached: &BTreeSet<&str>,
    classes: &[S],
) -> ModelStats {
    let class_set: BTreeSet<&str> = classes.iter().map(|class| class.as_ref()).collect();
    let mut mapped = 0;
    let mut total = 0;
    for term in vocabulary.terms() {
        if !class_set.contains(term.class_group.as_str()) {
            continue;
        }
        total += 1;
        if reached.contains(term.name.as_str()) {
            mapped += 1;
        }
    }
    ModelStats::from_counts(mapped, total)
}

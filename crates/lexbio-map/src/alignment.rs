//! Per-class alignment of vocabulary terms against a model's fields.

use std::collections::{BTreeMap, BTreeSet};

use lexbio_model::{AlignmentStatus, FlatField, FlatFields, GbifStatus, TermCatalog, VocabularyTerm};
use serde::Serialize;

use crate::labels::type_label;
use crate::overrides::{aligned_term_name, gbif_status, is_protocol_field};

/// One vocabulary term and the field aligned to it, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentRow {
    pub term: String,
    pub term_iri: String,
    pub definition: String,
    pub gbif: Option<GbifStatus>,
    pub field: Option<String>,
    pub required: bool,
    pub type_label: Option<String>,
    pub status: AlignmentStatus,
}

/// The terms of one class group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassAlignment {
    pub class_group: String,
    pub mapped: usize,
    pub total: usize,
    pub rows: Vec<AlignmentRow>,
}

/// A field that aligns to no vocabulary term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtensionRow {
    pub field: String,
    pub description: String,
    pub required: bool,
    pub type_label: String,
    pub status: AlignmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alignment {
    /// One entry per class group that has terms, in the model's class order.
    pub classes: Vec<ClassAlignment>,
    /// Lexicon-only fields, sorted by name.
    pub extensions: Vec<ExtensionRow>,
}

/// The vocabulary term a field aligns to, unless it is a protocol field.
pub fn term_for_field<'a>(vocabulary: &'a TermCatalog, field: &str) -> Option<&'a VocabularyTerm> {
    if is_protocol_field(field) {
        return None;
    }
    vocabulary.get(aligned_term_name(field))
}

/// Build the alignment tables for one model.
///
/// When several fields align to the same term, the last one in field order
/// is shown against it; none of them is listed as an extension.
pub fn align<S: AsRef<str>>(
    vocabulary: &TermCatalog,
    fields: &FlatFields,
    classes: &[S],
) -> Alignment {
    let mut by_term: BTreeMap<&str, (&str, &FlatField)> = BTreeMap::new();
    let mut aligned_fields: BTreeSet<&str> = BTreeSet::new();
    for (name, field) in fields {
        if let Some(term) = term_for_field(vocabulary, name) {
            by_term.insert(term.name.as_str(), (name.as_str(), field));
            aligned_fields.insert(name.as_str());
        }
    }

    let mut class_tables = Vec::new();
    for class_group in classes {
        let class_group = class_group.as_ref();
        let terms = vocabulary.terms_in_class(class_group);
        if terms.is_empty() {
            continue;
        }
        let rows: Vec<AlignmentRow> = terms
            .into_iter()
            .map(|term| alignment_row(term, by_term.get(term.name.as_str()).copied()))
            .collect();
        let mapped = rows
            .iter()
            .filter(|row| row.status == AlignmentStatus::Mapped)
            .count();
        class_tables.push(ClassAlignment {
            class_group: class_group.to_string(),
            mapped,
            total: rows.len(),
            rows,
        });
    }

    let mut extensions: Vec<ExtensionRow> = fields
        .iter()
        .filter(|(name, _)| !aligned_fields.contains(name.as_str()) && !is_protocol_field(name))
        .map(|(name, field)| ExtensionRow {
            field: name.clone(),
            description: field.property.description.clone().unwrap_or_default(),
            required: field.required,
            type_label: type_label(&field.property),
            status: AlignmentStatus::Extension,
        })
        .collect();
    extensions.sort_by_cached_key(|row| (row.field.to_lowercase(), row.field.clone()));

    Alignment {
        classes: class_tables,
        extensions,
    }
}

fn alignment_row(term: &VocabularyTerm, matched: Option<(&str, &FlatField)>) -> AlignmentRow {
    let (field, required, label, status) = match matched {
        Some((name, field)) => (
            Some(name.to_string()),
            field.required,
            Some(type_label(&field.property)),
            AlignmentStatus::Mapped,
        ),
        None => (None, false, None, AlignmentStatus::Missing),
    };
    AlignmentRow {
        term: term.name.clone(),
        term_iri: term.term_iri.clone(),
        definition: term.definition.clone(),
        gbif: gbif_status(&term.name),
        field,
        required,
        type_label: label,
        status,
    }
}

#![allow(dead_code)]

use lexbio_model::{FlatField, FlatFields, LexiconProperty, TermCatalog, VocabularyTerm};

pub fn term(name: &str, class_group: &str) -> VocabularyTerm {
    VocabularyTerm {
        name: name.to_string(),
        label: name.to_string(),
        definition: format!("Definition of {name}."),
        term_iri: format!("http://rs.tdwg.org/dwc/terms/{name}"),
        class_group: class_group.to_string(),
    }
}

pub fn catalog(terms: &[(&str, &str)]) -> TermCatalog {
    terms.iter().map(|(name, class)| term(name, class)).collect()
}

pub fn field(kind: &str, required: bool) -> FlatField {
    FlatField {
        property: LexiconProperty {
            kind: kind.to_string(),
            ..LexiconProperty::default()
        },
        required,
        def: "main".to_string(),
    }
}

pub fn fields(entries: &[(&str, bool)]) -> FlatFields {
    entries
        .iter()
        .map(|(name, required)| ((*name).to_string(), field("string", *required)))
        .collect()
}

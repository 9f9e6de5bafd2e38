//! Tests for lexbio-model types.

use lexbio_model::{Lexicon, ModelConfig, TermCatalog, VocabularyTerm};

const OCCURRENCE: &str = r##"{
    "lexicon": 1,
    "id": "bio.lexicons.temp.occurrence",
    "defs": {
        "main": {
            "type": "record",
            "description": "A biodiversity observation.",
            "key": "tid",
            "record": {
                "type": "object",
                "required": ["eventDate", "location"],
                "properties": {
                    "eventDate": { "type": "string", "format": "datetime" },
                    "location": { "type": "ref", "ref": "#location" },
                    "blobs": { "type": "array", "items": { "type": "ref", "ref": "#imageEmbed" } }
                }
            }
        },
        "location": {
            "type": "object",
            "required": ["decimalLatitude"],
            "properties": {
                "decimalLatitude": { "type": "string", "maxLength": 32 }
            }
        },
        "imageEmbed": {
            "type": "object",
            "properties": {
                "image": { "type": "blob", "accept": ["image/*"], "maxSize": 10000000 }
            }
        }
    }
}"##;

#[test]
fn lexicon_keeps_definition_order() {
    let lexicon: Lexicon = serde_json::from_str(OCCURRENCE).expect("parse lexicon");
    let names: Vec<&str> = lexicon.defs.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["main", "location", "imageEmbed"]);

    let main = lexicon.defs.get("main").expect("main def");
    let fields: Vec<&str> = main
        .def_properties()
        .properties
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(fields, vec!["eventDate", "location", "blobs"]);
}

#[test]
fn lexicon_ignores_unknown_keys() {
    let lexicon: Lexicon = serde_json::from_str(
        r#"{ "lexicon": 1, "id": "a.b.c", "revision": 3, "defs": { "main": { "type": "query", "parameters": {} } } }"#,
    )
    .expect("parse lexicon");
    assert!(lexicon.defs["main"].def_properties().is_empty());
}

#[test]
fn model_nsid_uses_slug() {
    let lexicon: Lexicon = serde_json::from_str(OCCURRENCE).expect("parse lexicon");
    let model = ModelConfig {
        name: "Occurrence".to_string(),
        slug: "occurrence".to_string(),
        lexicon,
        classes: vec!["Occurrence".to_string()],
        description: String::new(),
    };
    assert_eq!(model.nsid(), "bio.lexicons.occurrence");
}

#[test]
fn term_catalog_serializes_in_insertion_order() {
    let catalog: TermCatalog = vec![
        VocabularyTerm {
            name: "type".to_string(),
            label: "Type".to_string(),
            definition: "The nature or genre of the resource.".to_string(),
            term_iri: "http://purl.org/dc/terms/type".to_string(),
            class_group: "Record-level".to_string(),
        },
        VocabularyTerm {
            name: "eventDate".to_string(),
            label: "Event Date".to_string(),
            definition: "The date-time during which an Event occurred.".to_string(),
            term_iri: "http://rs.tdwg.org/dwc/terms/eventDate".to_string(),
            class_group: "Event".to_string(),
        },
    ]
    .into_iter()
    .collect();

    insta::assert_json_snapshot!(catalog, @r#"
    {
      "type": {
        "name": "type",
        "label": "Type",
        "definition": "The nature or genre of the resource.",
        "term_iri": "http://purl.org/dc/terms/type",
        "class": "Record-level"
      },
      "eventDate": {
        "name": "eventDate",
        "label": "Event Date",
        "definition": "The date-time during which an Event occurred.",
        "term_iri": "http://rs.tdwg.org/dwc/terms/eventDate",
        "class": "Event"
      }
    }
    "#);
}

#[test]
fn term_catalog_round_trips_through_json() {
    let json = r#"{"country":{"name":"country","label":"Country","definition":"","term_iri":"http://rs.tdwg.org/dwc/terms/country","class":"Location"}}"#;
    let catalog: TermCatalog = serde_json::from_str(json).expect("parse catalog");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("country").unwrap().class_group, "Location");
    assert_eq!(serde_json::to_string(&catalog).unwrap(), json);
}

//! AT Protocol lexicon documents.
//!
//! Only the subset of the lexicon format the site renders is modelled;
//! unknown keys are ignored on load. Definition and property maps keep the
//! document's key order.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A lexicon document (e.g. `bio.lexicons.temp.occurrence`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Lexicon format version.
    pub lexicon: u32,
    /// Namespaced identifier (NSID) of the document.
    pub id: String,
    /// Named definitions, in document order.
    #[serde(default)]
    pub defs: IndexMap<String, LexiconDef>,
}

impl Lexicon {
    /// Last dot-separated segment of the document id.
    pub fn short_name(&self) -> &str {
        self.id.rsplit('.').next().unwrap_or(&self.id)
    }
}

/// A named definition inside a lexicon document.
///
/// Record definitions carry their fields under `record`; object definitions
/// carry them directly in `properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconDef {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<LexiconObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, LexiconProperty>,
}

/// The field set of a definition together with its required names.
#[derive(Debug, Clone)]
pub struct DefProperties<'a> {
    pub properties: &'a IndexMap<String, LexiconProperty>,
    pub required: BTreeSet<&'a str>,
}

impl DefProperties<'_> {
    pub fn is_required(&self, field: &str) -> bool {
        self.required.contains(field)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl LexiconDef {
    /// Select the definition's field set.
    ///
    /// Uses the definition's own properties; when those are empty and a
    /// nested record is present, the record's properties and required list
    /// are used instead.
    pub fn def_properties(&self) -> DefProperties<'_> {
        if self.properties.is_empty()
            && let Some(record) = &self.record
        {
            return DefProperties {
                properties: &record.properties,
                required: record.required.iter().map(String::as_str).collect(),
            };
        }
        DefProperties {
            properties: &self.properties,
            required: self.required.iter().map(String::as_str).collect(),
        }
    }

    /// Description of the definition, falling back to the record's.
    pub fn display_description(&self) -> &str {
        self.description
            .as_deref()
            .or_else(|| self.record.as_ref().and_then(|r| r.description.as_deref()))
            .unwrap_or("")
    }
}

/// The object nested under a record definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconObject {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, LexiconProperty>,
}

/// A typed field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconProperty {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reference target (`#fragment` or an NSID, optionally with a fragment).
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Default value: string, number or boolean.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_values: Option<Vec<String>>,
    /// Element spec for `array` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<LexiconProperty>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub def: Option<String>,
}

/// A property lifted out of its definition by field flattening.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatField {
    pub property: LexiconProperty,
    /// Listed in the owning definition's required names.
    pub required: bool,
    /// Name of the owning definition.
    pub def: String,
}

/// Flattened fields of one lexicon, keyed by field name.
pub type FlatFields = IndexMap<String, FlatField>;

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_DEF: &str = r#"{
        "type": "record",
        "key": "tid",
        "record": {
            "type": "object",
            "description": "An observation record.",
            "required": ["eventDate"],
            "properties": {
                "eventDate": { "type": "string", "format": "datetime" },
                "notes": { "type": "string", "maxLength": 3000 }
            }
        }
    }"#;

    #[test]
    fn record_def_uses_nested_properties() {
        let def: LexiconDef = serde_json::from_str(RECORD_DEF).unwrap();
        let props = def.def_properties();
        let names: Vec<&str> = props.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["eventDate", "notes"]);
        assert!(props.is_required("eventDate"));
        assert!(!props.is_required("notes"));
        assert_eq!(def.display_description(), "An observation record.");
    }

    #[test]
    fn own_properties_take_precedence_over_record() {
        let def: LexiconDef = serde_json::from_str(
            r#"{
                "type": "object",
                "required": ["lat"],
                "properties": { "lat": { "type": "string" } },
                "record": { "type": "object", "properties": { "other": { "type": "string" } } }
            }"#,
        )
        .unwrap();
        let props = def.def_properties();
        assert_eq!(props.properties.len(), 1);
        assert!(props.properties.contains_key("lat"));
        assert!(props.is_required("lat"));
    }

    #[test]
    fn def_without_fields_is_empty() {
        let def: LexiconDef =
            serde_json::from_str(r#"{ "type": "string", "description": "token" }"#).unwrap();
        assert!(def.def_properties().is_empty());
    }

    #[test]
    fn property_reads_camel_case_keys() {
        let prop: LexiconProperty = serde_json::from_str(
            r##"{ "type": "string", "maxLength": 64, "knownValues": ["a", "b"], "default": true, "ref": "#x" }"##,
        )
        .unwrap();
        assert_eq!(prop.max_length, Some(Number::from(64)));
        assert_eq!(prop.known_values.as_deref(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(prop.default, Some(Value::Bool(true)));
        assert_eq!(prop.reference.as_deref(), Some("#x"));
    }

    #[test]
    fn short_name_is_last_segment() {
        let lexicon = Lexicon {
            lexicon: 1,
            id: "bio.lexicons.temp.occurrence".to_string(),
            defs: IndexMap::new(),
        };
        assert_eq!(lexicon.short_name(), "occurrence");
    }
}

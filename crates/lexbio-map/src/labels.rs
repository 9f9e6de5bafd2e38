//! Human-readable type and constraint labels.

use lexbio_model::LexiconProperty;
use serde_json::Value;

/// Known values are listed inline up to this many; beyond it only the count is shown.
const INLINE_KNOWN_VALUES: usize = 4;

/// Label for a property's type.
///
/// - `ref` renders its target: a local `#fragment` as-is, otherwise the last
///   dot-separated segment, or `ref` when the target has neither.
/// - `array` renders its element label with a `[]` suffix, one level deep.
/// - any other type renders its `format` when present, else the type name.
pub fn type_label(prop: &LexiconProperty) -> String {
    match prop.kind.as_str() {
        "ref" => ref_label(prop.reference.as_deref()),
        "array" => match prop.items.as_deref() {
            Some(items) if items.kind == "ref" => {
                format!("{}[]", ref_label(items.reference.as_deref()))
            }
            Some(items) if !items.kind.is_empty() => format!("{}[]", items.kind),
            _ => "array".to_string(),
        },
        kind => match prop.format.as_deref() {
            Some(format) if !format.is_empty() => format.to_string(),
            _ => kind.to_string(),
        },
    }
}

fn ref_label(reference: Option<&str>) -> String {
    let reference = reference.unwrap_or("");
    if reference.starts_with('#') {
        return reference.to_string();
    }
    match reference.rsplit_once('.') {
        Some((_, last)) => last.to_string(),
        None => "ref".to_string(),
    }
}

/// Comma-separated constraint summary, e.g. `max 5, default: x`.
///
/// Order: max length, minimum, maximum, default, known values. Absent
/// constraints are omitted; an empty known-values list counts as absent.
pub fn constraints_label(prop: &LexiconProperty) -> String {
    let mut parts = Vec::new();
    if let Some(max_length) = &prop.max_length {
        parts.push(format!("max {max_length}"));
    }
    if let Some(minimum) = &prop.minimum {
        parts.push(format!("min {minimum}"));
    }
    if let Some(maximum) = &prop.maximum {
        parts.push(format!("max {maximum}"));
    }
    if let Some(default) = &prop.default {
        parts.push(format!("default: {}", value_text(default)));
    }
    if let Some(values) = prop.known_values.as_deref().filter(|v| !v.is_empty()) {
        if values.len() <= INLINE_KNOWN_VALUES {
            parts.push(values.join(" | "));
        } else {
            parts.push(format!("{} values", values.len()));
        }
    }
    parts.join(", ")
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(json: &str) -> LexiconProperty {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn ref_targets() {
        assert_eq!(type_label(&prop(r##"{ "type": "ref", "ref": "#taxon" }"##)), "#taxon");
        assert_eq!(
            type_label(&prop(r#"{ "type": "ref", "ref": "com.atproto.repo.strongRef" }"#)),
            "strongRef"
        );
        assert_eq!(type_label(&prop(r#"{ "type": "ref", "ref": "local" }"#)), "ref");
        assert_eq!(type_label(&prop(r#"{ "type": "ref" }"#)), "ref");
    }

    #[test]
    fn arrays() {
        assert_eq!(
            type_label(&prop(r##"{ "type": "array", "items": { "type": "ref", "ref": "#taxon" } }"##)),
            "#taxon[]"
        );
        assert_eq!(
            type_label(&prop(r#"{ "type": "array", "items": { "type": "string" } }"#)),
            "string[]"
        );
        assert_eq!(
            type_label(&prop(
                r#"{ "type": "array", "items": { "type": "ref", "ref": "app.bsky.embed.images" } }"#
            )),
            "images[]"
        );
        assert_eq!(type_label(&prop(r#"{ "type": "array" }"#)), "array");
        assert_eq!(
            type_label(&prop(r#"{ "type": "array", "items": { "format": "uri" } }"#)),
            "array"
        );
    }

    #[test]
    fn nested_arrays_label_one_level() {
        assert_eq!(
            type_label(&prop(
                r#"{ "type": "array", "items": { "type": "array", "items": { "type": "string" } } }"#
            )),
            "array[]"
        );
    }

    #[test]
    fn format_wins_over_type() {
        assert_eq!(
            type_label(&prop(r#"{ "type": "string", "format": "datetime" }"#)),
            "datetime"
        );
        assert_eq!(type_label(&prop(r#"{ "type": "integer" }"#)), "integer");
        assert_eq!(type_label(&prop(r#"{ "type": "string", "format": "" }"#)), "string");
    }

    #[test]
    fn constraints_in_fixed_order() {
        assert_eq!(
            constraints_label(&prop(r#"{ "type": "string", "default": "x", "maxLength": 5 }"#)),
            "max 5, default: x"
        );
        assert_eq!(
            constraints_label(&prop(
                r#"{ "type": "integer", "maximum": 100, "minimum": 0, "default": 50 }"#
            )),
            "min 0, max 100, default: 50"
        );
        assert_eq!(
            constraints_label(&prop(r#"{ "type": "boolean", "default": false }"#)),
            "default: false"
        );
        assert_eq!(constraints_label(&prop(r#"{ "type": "string" }"#)), "");
    }

    #[test]
    fn known_values_inline_or_counted() {
        assert_eq!(
            constraints_label(&prop(
                r#"{ "type": "string", "knownValues": ["HumanObservation", "PreservedSpecimen"] }"#
            )),
            "HumanObservation | PreservedSpecimen"
        );
        assert_eq!(
            constraints_label(&prop(
                r#"{ "type": "string", "maxLength": 64, "knownValues": ["a", "b", "c", "d", "e"] }"#
            )),
            "max 64, 5 values"
        );
        assert_eq!(
            constraints_label(&prop(r#"{ "type": "string", "knownValues": [] }"#)),
            ""
        );
    }
}

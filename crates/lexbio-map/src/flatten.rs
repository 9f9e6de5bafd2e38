//! Field flattening.

use lexbio_model::{FlatField, FlatFields, Lexicon};

/// Collect every definition's fields into one map keyed by field name.
///
/// Definitions are visited in document order. A field name defined by more
/// than one definition keeps the entry of the last definition visited, at
/// the position where the name first appeared.
pub fn flat_properties(lexicon: &Lexicon) -> FlatFields {
    let mut fields = FlatFields::new();
    for (def_name, def) in &lexicon.defs {
        let def_props = def.def_properties();
        for (field_name, property) in def_props.properties {
            fields.insert(
                field_name.clone(),
                FlatField {
                    property: property.clone(),
                    required: def_props.is_required(field_name),
                    def: def_name.clone(),
                },
            );
        }
    }
    fields
}

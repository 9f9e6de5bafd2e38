//! Static alignment tables.
//!
//! These are fixed for the lifetime of the process and never written to.

use lexbio_model::GbifStatus;

/// Lexicon field name to Darwin Core term name, where the two differ.
pub const FIELD_TO_DWC: &[(&str, &str)] = &[
    ("notes", "occurrenceRemarks"),
    ("comment", "identificationRemarks"),
    ("blobs", "associatedMedia"),
    ("recordedBy", "recordedBy"),
];

/// AT Protocol infrastructure fields. These never align to a term and are
/// left out of field counts.
pub const ATPROTO_FIELDS: &[&str] = &[
    "subject",
    "subjectIndex",
    "isAgreement",
    "confidence",
    "taxonId",
    "taxon",
    "location",
    "image",
    "alt",
    "aspectRatio",
    "width",
    "height",
];

/// Terms GBIF requires of every published occurrence.
pub const GBIF_REQUIRED: &[&str] = &["occurrenceID", "basisOfRecord", "scientificName", "eventDate"];

/// Terms GBIF recommends publishing.
pub const GBIF_RECOMMENDED: &[&str] = &[
    "taxonRank",
    "kingdom",
    "decimalLatitude",
    "decimalLongitude",
    "geodeticDatum",
    "countryCode",
    "individualCount",
];

/// Term name a field aligns to: its override, else the field name itself.
pub fn aligned_term_name(field: &str) -> &str {
    FIELD_TO_DWC
        .iter()
        .find(|(name, _)| *name == field)
        .map_or(field, |(_, term)| *term)
}

pub fn is_protocol_field(field: &str) -> bool {
    ATPROTO_FIELDS.contains(&field)
}

/// GBIF publishing requirement for a term, if any.
pub fn gbif_status(term: &str) -> Option<GbifStatus> {
    if GBIF_REQUIRED.contains(&term) {
        Some(GbifStatus::Required)
    } else if GBIF_RECOMMENDED.contains(&term) {
        Some(GbifStatus::Recommended)
    } else {
        None
    }
}

//! Darwin Core term catalog builder.
//!
//! Reads the `term_versions.csv` vocabulary table and keeps the rows that
//! describe current, directly usable leaf terms:
//!
//! - `status` must equal `recommended`
//! - `rdf_type` containing `Class` marks a grouping node, not a term
//! - `organized_in` containing `UseWithIRI` marks an IRI-valued variant
//! - the first row for a `term_localName` wins; later rows are ignored
//!
//! The class group comes from the last segment of `organized_in`.

use std::path::Path;

use lexbio_model::{DEFAULT_CLASS_GROUP, TermCatalog, VocabularyTerm};
use tracing::{debug, info};

use crate::error::StandardsError;
use crate::hash::sha256_hex;
use crate::table::{TableOptions, TableRow, get_field, parse_table};

const COL_NAME: &str = "term_localName";
const COL_LABEL: &str = "label";
const COL_DEFINITION: &str = "definition";
const COL_IRI: &str = "term_iri";
const COL_STATUS: &str = "status";
const COL_RDF_TYPE: &str = "rdf_type";
const COL_ORGANIZED_IN: &str = "organized_in";

const STATUS_RECOMMENDED: &str = "recommended";
const CLASS_MARKER: &str = "Class";
const IRI_VARIANT_MARKER: &str = "UseWithIRI";

/// Path segments that name a namespace rather than a class.
const NAMESPACE_SEGMENTS: &[&str] = &["1.1", "terms"];

/// Row counts from one catalog build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub rows: usize,
    pub terms: usize,
    pub not_recommended: usize,
    pub class_rows: usize,
    pub iri_variants: usize,
    pub unnamed: usize,
    pub duplicates: usize,
}

/// A loaded vocabulary table.
#[derive(Debug, Clone)]
pub struct VocabularyLoad {
    pub catalog: TermCatalog,
    pub summary: BuildSummary,
    /// SHA-256 of the source table bytes.
    pub source_sha256: String,
}

/// Derive a term's class group from its `organized_in` path.
///
/// `http://rs.tdwg.org/dwc/terms/Occurrence` yields `Occurrence`. An empty
/// column and paths ending in a namespace segment (`terms`, `1.1`) yield
/// [`DEFAULT_CLASS_GROUP`]; any other last segment is returned as is.
pub fn extract_class_group(organized_in: &str) -> String {
    if organized_in.is_empty() {
        return DEFAULT_CLASS_GROUP.to_string();
    }
    let last = organized_in
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");
    if NAMESPACE_SEGMENTS.contains(&last) {
        return DEFAULT_CLASS_GROUP.to_string();
    }
    last.to_string()
}

/// Build the term catalog from parsed table rows.
pub fn build_term_catalog(rows: &[TableRow]) -> (TermCatalog, BuildSummary) {
    let mut catalog = TermCatalog::new();
    let mut summary = BuildSummary {
        rows: rows.len(),
        ..BuildSummary::default()
    };

    for row in rows {
        if get_field(row, COL_STATUS) != STATUS_RECOMMENDED {
            summary.not_recommended += 1;
            continue;
        }
        if get_field(row, COL_RDF_TYPE).contains(CLASS_MARKER) {
            summary.class_rows += 1;
            continue;
        }
        let organized_in = get_field(row, COL_ORGANIZED_IN);
        if organized_in.contains(IRI_VARIANT_MARKER) {
            summary.iri_variants += 1;
            continue;
        }
        let name = get_field(row, COL_NAME);
        if name.is_empty() {
            summary.unnamed += 1;
            continue;
        }

        let term = VocabularyTerm {
            name: name.to_string(),
            label: get_field(row, COL_LABEL).to_string(),
            definition: get_field(row, COL_DEFINITION).to_string(),
            term_iri: get_field(row, COL_IRI).to_string(),
            class_group: extract_class_group(organized_in),
        };
        if !catalog.insert_first(term) {
            debug!(term = %name, "duplicate term row ignored");
            summary.duplicates += 1;
        }
    }

    summary.terms = catalog.len();
    (catalog, summary)
}

/// Read the vocabulary table at `path` and build its term catalog.
pub fn load_vocabulary(
    path: &Path,
    options: &TableOptions,
) -> Result<VocabularyLoad, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    let source_sha256 = sha256_hex(&bytes);
    let text = String::from_utf8_lossy(&bytes);
    let rows = parse_table(&text, options).map_err(|source| StandardsError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let (catalog, summary) = build_term_catalog(&rows);
    info!(
        path = %path.display(),
        rows = summary.rows,
        terms = summary.terms,
        duplicates = summary.duplicates,
        sha256 = %source_sha256,
        "vocabulary loaded"
    );
    Ok(VocabularyLoad {
        catalog,
        summary,
        source_sha256,
    })
}

/// Write the term catalog artifact as pretty-printed JSON.
///
/// Parent directories are created as needed.
pub fn write_term_catalog(catalog: &TermCatalog, path: &Path) -> Result<(), StandardsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| StandardsError::write(parent, e))?;
    }
    let json =
        serde_json::to_string_pretty(catalog).map_err(|source| StandardsError::Serialize { source })?;
    std::fs::write(path, json).map_err(|e| StandardsError::write(path, e))?;
    info!(path = %path.display(), terms = catalog.len(), "term catalog written");
    Ok(())
}

/// Read a term catalog artifact written by [`write_term_catalog`].
pub fn read_term_catalog(path: &Path) -> Result<TermCatalog, StandardsError> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let catalog: TermCatalog =
        serde_json::from_str(&text).map_err(|e| StandardsError::json(path, e))?;
    debug!(path = %path.display(), terms = catalog.len(), "term catalog read");
    Ok(catalog)
}

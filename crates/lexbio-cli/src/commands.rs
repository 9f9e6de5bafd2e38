use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use lexbio_model::{ModelConfig, TermCatalog};
use lexbio_report::{LexiconReport, OverviewReport};
use lexbio_standards::{
    BuildSummary, SitePaths, TableOptions, find_model, load_models, load_vocabulary,
    read_term_catalog, write_term_catalog,
};

use crate::cli::{BuildTermsArgs, LexiconArgs, ModelsArgs, ReportArgs};

/// Outcome of `build-terms`.
#[derive(Debug, Clone)]
pub struct BuildTermsResult {
    pub source: PathBuf,
    pub output: PathBuf,
    pub source_sha256: String,
    pub summary: BuildSummary,
}

/// Page produced by the `lexicon` command.
#[derive(Debug, Clone)]
pub enum LexiconPage {
    Lexicon(Box<LexiconReport>),
    /// The slug named no model.
    Fallback(OverviewReport),
}

pub fn run_build_terms(args: &BuildTermsArgs, paths: &SitePaths) -> Result<BuildTermsResult> {
    let source = args
        .csv
        .clone()
        .unwrap_or_else(|| paths.vocabulary_table.clone());
    let output = args.out.clone().unwrap_or_else(|| paths.term_artifact.clone());
    let span = info_span!("build_terms", source = %source.display());
    let _guard = span.enter();

    let options = TableOptions::default().with_delimiter(args.delimiter);
    let load = load_vocabulary(&source, &options).context("load vocabulary table")?;
    write_term_catalog(&load.catalog, &output).context("write term catalog")?;
    info!(
        rows = load.summary.rows,
        terms = load.summary.terms,
        output = %output.display(),
        "term catalog built"
    );
    Ok(BuildTermsResult {
        source,
        output,
        source_sha256: load.source_sha256,
        summary: load.summary,
    })
}

pub fn run_overview(args: &ReportArgs, paths: &SitePaths) -> Result<OverviewReport> {
    let (vocabulary, models) = load_inputs(args, paths)?;
    Ok(OverviewReport::build(&vocabulary, &models))
}

/// Build one lexicon's report, or the overview when `slug` is unknown.
pub fn run_lexicon(args: &LexiconArgs, paths: &SitePaths) -> Result<LexiconPage> {
    let (vocabulary, models) = load_inputs(&args.report, paths)?;
    let span = info_span!("lexicon", slug = %args.slug);
    let _guard = span.enter();
    match find_model(&models, &args.slug) {
        Some(model) => Ok(LexiconPage::Lexicon(Box::new(LexiconReport::build(
            &vocabulary,
            model,
        )))),
        None => {
            warn!(slug = %args.slug, "unknown lexicon, showing overview");
            Ok(LexiconPage::Fallback(OverviewReport::build(
                &vocabulary,
                &models,
            )))
        }
    }
}

pub fn run_models(args: &ModelsArgs, paths: &SitePaths) -> Result<Vec<ModelConfig>> {
    let dir = lexicon_dir(args.lexicons.as_deref(), paths);
    load_models(dir).context("load lexicons")
}

fn load_inputs(args: &ReportArgs, paths: &SitePaths) -> Result<(TermCatalog, Vec<ModelConfig>)> {
    let terms = args.terms.as_deref().unwrap_or(&paths.term_artifact);
    let vocabulary = read_term_catalog(terms).context("read term catalog")?;
    let models = load_models(lexicon_dir(args.lexicons.as_deref(), paths)).context("load lexicons")?;
    Ok((vocabulary, models))
}

fn lexicon_dir<'a>(explicit: Option<&'a Path>, paths: &'a SitePaths) -> &'a Path {
    explicit.unwrap_or(&paths.lexicon_dir)
}

//! `lexbio` command-line entry point.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use lexbio_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use lexbio_cli::commands::{LexiconPage, run_build_terms, run_lexicon, run_models, run_overview};
use lexbio_cli::logging::{LogConfig, LogFormat, init_logging};
use lexbio_cli::summary::{print_build_summary, print_lexicon, print_models, print_overview};
use lexbio_standards::SitePaths;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let paths = SitePaths::resolve(cli.root.as_deref());
    match &cli.command {
        Command::BuildTerms(args) => {
            let result = run_build_terms(args, &paths)?;
            print_build_summary(&result);
        }
        Command::Overview(args) => {
            let report = run_overview(args, &paths)?;
            if args.json {
                print_json(&report)?;
            } else {
                print_overview(&report);
            }
        }
        Command::Lexicon(args) => match run_lexicon(args, &paths)? {
            LexiconPage::Lexicon(report) if args.report.json => print_json(&report)?,
            LexiconPage::Lexicon(report) => print_lexicon(&report),
            LexiconPage::Fallback(report) if args.report.json => print_json(&report)?,
            LexiconPage::Fallback(report) => print_overview(&report),
        },
        Command::Models(args) => {
            let models = run_models(args, &paths)?;
            print_models(&models);
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize report")?;
    println!("{json}");
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use tscat::args::substitute;
use tscat::{Catalog, CatalogConfig, translator};

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    /// Translation resource (.ts). Without it the locale is resolved through
    /// the configured translation directories.
    pub file: Option<PathBuf>,

    /// Locale to load from the translation directories.
    #[arg(long, conflicts_with = "file")]
    pub locale: Option<String>,

    /// Context (class or component) of the message.
    #[arg(short, long)]
    pub context: String,

    /// Source text as written in the application.
    #[arg(short, long)]
    pub source: String,

    /// Disambiguation comment.
    #[arg(short, long)]
    pub disambiguation: Option<String>,

    /// Positional argument for %1, %2, ... (repeatable).
    #[arg(short = 'a', long = "arg", value_name = "ARG")]
    pub args: Vec<String>,

    /// Count for numerus messages; replaces %n.
    #[arg(short = 'n', long)]
    pub count: Option<i64>,
}

pub fn run_lookup(args: &LookupArgs, config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let catalog = resolve_catalog(args, config)?;
    check_count(&catalog, args)?;
    let text = render(&catalog, args);
    writeln!(out, "{text}")?;
    Ok(())
}

/// The catalog a lookup runs against.
///
/// An explicitly requested locale that cannot be loaded is an error; a
/// locale that only comes from configuration or the environment falls back
/// to the source language like an application would.
fn resolve_catalog(args: &LookupArgs, config: &CatalogConfig) -> Result<Arc<Catalog>> {
    if let Some(file) = &args.file {
        return Ok(Arc::new(Catalog::from_ts_file(file)?));
    }

    let translator = translator();
    match args.locale.clone().or_else(|| config.effective_locale()) {
        Some(locale) => {
            let outcome = translator.switch_locale(&config.loader(), &locale);
            if args.locale.is_some() {
                outcome?;
            }
        }
        None => {
            translator.reset();
        }
    }
    Ok(translator.snapshot())
}

/// `--count` only applies to numerus entries; a missing entry falls back to
/// the source text and is accepted.
fn check_count(catalog: &Catalog, args: &LookupArgs) -> Result<()> {
    if args.count.is_some()
        && let Some(entry) =
            catalog.lookup(&args.context, &args.source, args.disambiguation.as_deref())
        && !entry.is_numerus()
    {
        return Err(CliError::invalid(format!(
            "--count given but \"{}\" in context {} is not a numerus message",
            args.source, args.context
        )));
    }
    Ok(())
}

fn render(catalog: &Catalog, args: &LookupArgs) -> String {
    let disambiguation = args.disambiguation.as_deref();
    match args.count {
        Some(count) => {
            let text = catalog.translate_plural(&args.context, &args.source, disambiguation, count);
            substitute(&text, &args.args)
        }
        None => catalog.translate_with_args(&args.context, &args.source, &args.args, disambiguation),
    }
}

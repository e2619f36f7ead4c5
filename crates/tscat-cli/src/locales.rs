use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tscat::{CatalogConfig, CatalogLoader};

use crate::error::Result;

#[derive(Debug, Clone, Args)]
pub struct LocalesArgs {
    /// Directories to scan. Defaults to the configured translation directories.
    pub dirs: Vec<PathBuf>,

    /// Resource file name prefix, e.g. `app_` for `app_pl.ts`.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Emit a JSON array.
    #[arg(long)]
    pub json: bool,
}

pub fn run_locales(args: &LocalesArgs, config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let loader = loader_for(args, config);
    let locales = loader.available_locales();
    tracing::debug!(
        dirs = ?loader.search_paths(),
        found = locales.len(),
        "scanned translation directories"
    );
    if args.json {
        serde_json::to_writer(&mut *out, &locales)?;
        writeln!(out)?;
    } else {
        for locale in &locales {
            writeln!(out, "{locale}")?;
        }
    }
    Ok(())
}

fn loader_for(args: &LocalesArgs, config: &CatalogConfig) -> CatalogLoader {
    let loader = if args.dirs.is_empty() {
        config.loader()
    } else {
        CatalogLoader::new(args.dirs.iter().cloned()).with_prefix(config.file_prefix.as_str())
    };
    match &args.prefix {
        Some(prefix) => loader.with_prefix(prefix.as_str()),
        None => loader,
    }
}

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tscat::Catalog;

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Args)]
pub struct NormalizeArgs {
    /// Translation resource (.ts).
    pub file: PathBuf,

    /// Write here instead of stdout. May name the input file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

pub fn run_normalize(args: &NormalizeArgs, out: &mut dyn Write) -> Result<()> {
    let catalog = Catalog::from_ts_file(&args.file)?;
    let text = catalog.to_ts_string();
    match &args.output {
        Some(path) => {
            std::fs::write(path, &text).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(
                path = %path.display(),
                messages = catalog.message_count(),
                "normalized resource written"
            );
        }
        None => out.write_all(text.as_bytes())?,
    }
    Ok(())
}

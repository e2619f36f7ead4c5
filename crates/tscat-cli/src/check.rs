use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tscat::{Catalog, PlaceholderIssue};

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Translation resource (.ts).
    pub file: PathBuf,

    /// Emit issues as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Print placeholder issues. Any issue makes the command exit with 1.
pub fn run_check(args: &CheckArgs, out: &mut dyn Write) -> Result<()> {
    let catalog = Catalog::from_ts_file(&args.file)?;
    let issues = catalog.placeholder_issues();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &issues)?;
        writeln!(out)?;
    } else {
        for issue in &issues {
            writeln!(out, "{}", describe(issue))?;
        }
    }

    if issues.is_empty() {
        tracing::info!(file = %args.file.display(), "no placeholder issues");
        Ok(())
    } else {
        Err(CliError::exit(
            1,
            format!(
                "{} placeholder issue(s) in {}",
                issues.len(),
                args.file.display()
            ),
        ))
    }
}

fn describe(issue: &PlaceholderIssue) -> String {
    let list = |indices: &[u8]| {
        indices
            .iter()
            .map(|i| format!("%{i}"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let mut line = format!("{}: {:?}", issue.context, issue.source);
    if !issue.missing.is_empty() {
        line.push_str(&format!(" missing {}", list(&issue.missing)));
    }
    if !issue.unexpected.is_empty() {
        line.push_str(&format!(" unexpected {}", list(&issue.unexpected)));
    }
    line
}

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tscat::{Catalog, CoverageReport};

use crate::error::Result;

#[derive(Debug, Clone, Args)]
pub struct StatsArgs {
    /// Translation resource (.ts).
    pub file: PathBuf,

    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run_stats(args: &StatsArgs, out: &mut dyn Write) -> Result<()> {
    let catalog = Catalog::from_ts_file(&args.file)?;
    let report = catalog.coverage_report();
    tracing::info!(
        file = %args.file.display(),
        contexts = report.contexts.len(),
        coverage = report.coverage_percent,
        "coverage computed"
    );
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write_table(&report, out)?;
    }
    Ok(())
}

fn write_table(report: &CoverageReport, out: &mut dyn Write) -> std::io::Result<()> {
    let totals = &report.totals;
    writeln!(
        out,
        "language: {}",
        report.language.as_deref().unwrap_or("(unspecified)")
    )?;
    writeln!(
        out,
        "messages: {} (finished {}, unfinished {}, retired {})",
        totals.active() + totals.retired,
        totals.finished,
        totals.unfinished,
        totals.retired
    )?;
    writeln!(out, "coverage: {:.1}%", report.coverage_percent)?;
    if report.contexts.is_empty() {
        return Ok(());
    }

    let width = report
        .contexts
        .iter()
        .map(|c| c.context.chars().count())
        .max()
        .unwrap_or(0)
        .max("CONTEXT".len());
    writeln!(out)?;
    writeln!(
        out,
        "{:<width$}  {:>8}  {:>10}  {:>7}  {:>8}",
        "CONTEXT", "FINISHED", "UNFINISHED", "RETIRED", "COVERAGE"
    )?;
    for context in &report.contexts {
        writeln!(
            out,
            "{:<width$}  {:>8}  {:>10}  {:>7}  {:>7.1}%",
            context.context,
            context.counts.finished,
            context.counts.unfinished,
            context.counts.retired,
            context.coverage_percent
        )?;
    }
    Ok(())
}

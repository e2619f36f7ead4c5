use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tscat::CatalogConfig;

use crate::check::{CheckArgs, run_check};
use crate::error::Result;
use crate::locales::{LocalesArgs, run_locales};
use crate::lookup::{LookupArgs, run_lookup};
use crate::normalize::{NormalizeArgs, run_normalize};
use crate::stats::{StatsArgs, run_stats};

#[derive(Debug, Parser)]
#[command(
    name = "tscat",
    about = "Inspect, query and normalize Qt Linguist translation catalogs",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML configuration with translation directories and locale.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translation coverage per context.
    Stats(StatsArgs),

    /// Resolve one message the way an application would.
    Lookup(LookupArgs),

    /// Report translations whose placeholders differ from the source.
    Check(CheckArgs),

    /// Parse a resource and write it back in canonical form.
    Normalize(NormalizeArgs),

    /// List locales that have a resource in the given directories.
    Locales(LocalesArgs),
}

impl Cli {
    /// Whether the selected command produces JSON output.
    #[must_use]
    pub fn wants_json(&self) -> bool {
        match &self.command {
            Commands::Stats(args) => args.json,
            Commands::Check(args) => args.json,
            Commands::Locales(args) => args.json,
            Commands::Lookup(_) | Commands::Normalize(_) => false,
        }
    }

    /// Configuration file (or defaults) with environment overrides applied.
    pub fn load_config(&self) -> Result<CatalogConfig> {
        let config = match &self.config {
            Some(path) => CatalogConfig::from_toml_file(path)?,
            None => CatalogConfig::default(),
        };
        Ok(config.with_env_overrides().validated()?)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

/// Dispatch `cli`, writing command output to `out`.
pub fn run_with_output(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config = cli.load_config()?;
    tracing::debug!(?config, "configuration loaded");
    match cli.command {
        Commands::Stats(args) => run_stats(&args, out),
        Commands::Lookup(args) => run_lookup(&args, &config, out),
        Commands::Check(args) => run_check(&args, out),
        Commands::Normalize(args) => run_normalize(&args, out),
        Commands::Locales(args) => run_locales(&args, &config, out),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use tempfile::tempdir;

    use super::{Cli, Commands, run_with_output};
    use crate::error::CliError;

    const DOC: &str = r#"<TS version="2.1" language="pl">
<context><name>Net</name>
<message><source>Request error %1</source><translation>Błąd zapytania %1</translation></message>
<message><source>Retry</source><translation type="unfinished"></translation></message>
</context></TS>"#;

    fn run_args(args: &[&str]) -> (Result<(), CliError>, String) {
        let cli = Cli::try_parse_from(args).expect("arguments parse");
        let mut out = Vec::new();
        let result = run_with_output(cli, &mut out);
        (result, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tscat", "stats", "pl.ts", "-vv", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.wants_json());
        assert!(matches!(cli.command, Commands::Stats(ref a) if a.file == PathBuf::from("pl.ts")));
    }

    #[test]
    fn lookup_requires_context_and_source() {
        assert!(Cli::try_parse_from(["tscat", "lookup", "pl.ts", "-s", "x"]).is_err());
        assert!(Cli::try_parse_from(["tscat", "lookup", "pl.ts", "-c", "X", "-s", "x"]).is_ok());
    }

    #[test]
    fn stats_command_dispatches() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("pl.ts");
        std::fs::write(&file, DOC).unwrap();
        let (result, out) = run_args(&["tscat", "stats", file.to_str().unwrap()]);
        result.unwrap();
        assert!(out.contains("Net"), "{out}");
        assert!(out.contains("50.0%"), "{out}");
    }

    #[test]
    fn lookup_command_dispatches() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("pl.ts");
        std::fs::write(&file, DOC).unwrap();
        let (result, out) = run_args(&[
            "tscat",
            "lookup",
            file.to_str().unwrap(),
            "-c",
            "Net",
            "-s",
            "Request error %1",
            "-a",
            "404",
        ]);
        result.unwrap();
        assert_eq!(out, "Błąd zapytania 404\n");
    }

    #[test]
    fn missing_resource_is_a_load_error() {
        let (result, _) = run_args(&["tscat", "stats", "/no/such/file.ts"]);
        let error = result.unwrap_err();
        assert!(matches!(error, CliError::Load(_)));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn bad_config_file_is_reported() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("tscat.toml");
        std::fs::write(&config, "translations_dirs = []").unwrap();
        let (result, _) = run_args(&[
            "tscat",
            "--config",
            config.to_str().unwrap(),
            "locales",
        ]);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}

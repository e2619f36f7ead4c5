#![forbid(unsafe_code)]

use clap::Parser;

fn main() {
    let cli = tscat_cli::Cli::parse();
    let json = cli.wants_json();
    tscat_cli::logging::init(cli.verbose);
    if let Err(error) = tscat_cli::run(cli) {
        if json {
            eprintln!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "error": error.to_string(),
                    "exit_code": error.exit_code(),
                })
            );
        } else {
            eprintln!("tscat: {error}");
        }
        std::process::exit(error.exit_code());
    }
}

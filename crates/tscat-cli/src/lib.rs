#![forbid(unsafe_code)]

pub mod check;
pub mod cli;
pub mod error;
pub mod locales;
pub mod logging;
pub mod lookup;
pub mod normalize;
pub mod stats;

pub use cli::{Cli, Commands, run, run_with_output};
pub use error::{CliError, Result};

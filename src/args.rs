use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Clone, Debug, Parser)]
#[clap(infer_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Validates the project configuration
    Check(ProjectArgs),

    /// Validates the configuration and writes the site manifest
    Resolve(ProjectArgs),
}

#[derive(Clone, Debug, Parser)]
pub struct ProjectArgs {
    #[clap(default_value = ".")]
    pub directory: PathBuf,
}

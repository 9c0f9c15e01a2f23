use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_INPUT_PATH: &str = "canon.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "src/bookContent.js";
pub const DEFAULT_MANIFEST_PATH: &str = "bookContent.manifest.json";

#[derive(Parser, Debug)]
#[command(
    name = "canon-reader",
    version,
    about = "Split a plain-text canon into titled chapters for the reader",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub build: BuildArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Build(BuildArgs),
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest_path: PathBuf,
}

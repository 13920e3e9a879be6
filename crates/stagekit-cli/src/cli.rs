//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stagekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy files matching a name suffix into a target directory
    Copy(CopyArgs),
    /// Pack a directory tree into a zip archive
    Pack(PackArgs),
}

#[derive(clap::Args)]
pub struct CopyArgs {
    /// Source directory to enumerate (direct children only)
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// File-name suffix to match (exact, case-sensitive; "" matches all)
    #[arg(value_name = "SUFFIX")]
    pub suffix: String,

    /// Target directory (created if absent)
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,
}

#[derive(clap::Args)]
pub struct PackArgs {
    /// Output zip file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Directory tree to pack
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Compression level (0 = stored, 1-9 = deflate)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,

    /// Overwrite output file if it exists
    #[arg(short = 'f', long)]
    pub force: bool,
}

use std::path::PathBuf;

use clap::Parser;

use crate::renamer::RenameMode;

/// Rename TV episodes or movies in place to canonical names using TMDB.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What the directory holds: tv or movie
    #[arg(long = "type", value_name = "TYPE")]
    pub mode: RenameMode,

    /// Directory to process (searched recursively)
    #[arg(long, value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Log the renames without performing them
    #[arg(long)]
    pub dry_run: bool,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long)]
    pub verbose: bool,
}

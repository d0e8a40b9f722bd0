use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Concatenate the files named by a .file_bundle_rc into a single bundle"
)]
pub struct Cli {
    /// Config file to use, or its name without the `.file_bundle_rc` extension
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Bundle file to write (overrides `output` from the config)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,

    /// Shrink mode: trim each line and collapse runs of blank lines
    #[arg(short = 's', long)]
    pub shrink: bool,

    /// Print every visited file and a summary at the end
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Write a starter `_.file_bundle_rc` and exit
    #[arg(long)]
    pub touch: bool,

    /// With --touch: create this directory and put the config and a Makefile in it
    #[arg(long, value_name = "DIR", requires = "touch")]
    pub dir: Option<PathBuf>,

    /// With --touch: overwrite files that already exist
    #[arg(long, requires = "touch")]
    pub force: bool,
}

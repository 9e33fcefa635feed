use clap::Parser;
use std::path::PathBuf;

/// CLI for generating a CUE sheet from a folder containing a disc image and audio tracks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder containing the .iso disc image and audio track files, defaults to the current directory
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,
}

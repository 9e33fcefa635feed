use crate::commands::Cli;
use crate::cue::{CueBuilder, file_name_string};
use anyhow::Result;
use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod cue;

pub mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    println!("{} v{}", built_info::PKG_NAME, built_info::PKG_VERSION);
    println!();

    match run(cli).await {
        Ok(cue_path) => {
            println!();
            println!("{} generated.", file_name_string(&cue_path));

            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");

            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<PathBuf> {
    let folder = match cli.folder {
        Some(folder) => folder,
        None => std::env::current_dir()?,
    };

    Ok(CueBuilder::new(folder).generate().await?)
}

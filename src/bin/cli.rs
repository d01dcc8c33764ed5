// src/bin/cli.rs
use clap::Parser;
use scout_viewer::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    scout_viewer::log::init_stderr();

    let args = Args::parse();
    cli::run(&args)?;
    Ok(())
}

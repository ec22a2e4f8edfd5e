// src/bin/cli.rs
use clap::Parser;
use tapwatch::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tapwatch::log::init(args.verbose, &args.options().store_path);
    cli::run(&args)?;
    Ok(())
}

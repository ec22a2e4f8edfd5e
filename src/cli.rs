// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::MENU_URL;
use crate::config::options::{RunOptions, SmtpOptions};
use crate::core::HttpSource;
use crate::error::Result;
use crate::notify::Notifier;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Check the Unit-9 tap list for added/removed beers.
#[derive(Debug, Parser)]
#[command(name = "tapwatch", version, about)]
pub struct Args {
    /// Whether to email the results.
    #[arg(short, long)]
    pub email: bool,

    /// Whether to not save results.
    #[arg(long)]
    pub no_save: bool,

    /// Menu page to check.
    #[arg(long, default_value = MENU_URL)]
    pub url: String,

    /// Snapshot file [default: .store/beer_list.json]
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Email credentials (JSON with username, password, recipient)
    /// [default: credentials.json]
    #[arg(long)]
    pub credentials: Option<PathBuf>,

    /// Debug-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> RunOptions {
        let mut opts = RunOptions {
            email: self.email,
            no_save: self.no_save,
            url: self.url.clone(),
            ..RunOptions::default()
        };
        if let Some(p) = &self.store { opts.store_path = p.clone(); }
        if let Some(p) = &self.credentials { opts.credentials_path = p.clone(); }
        opts
    }
}

/// Prints everything to stdout.
pub struct Console;

impl Progress for Console {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn report(&mut self, text: &str) {
        print!("{text}");
    }
}

pub fn run(args: &Args) -> Result<RunSummary> {
    let opts = args.options();
    let source = HttpSource::new(opts.url.clone());
    let notifier = Notifier::smtp(opts.credentials_path.clone(), SmtpOptions::default());
    runner::run(&opts, &source, &notifier, &mut Console)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse() {
        let args = Args::try_parse_from(["tapwatch", "-e", "--no-save"]).unwrap();
        let opts = args.options();
        assert!(opts.email);
        assert!(opts.no_save);
        assert_eq!(opts, RunOptions { email: true, no_save: true, ..RunOptions::default() });
    }

    #[test]
    fn no_flags_is_defaults() {
        let args = Args::try_parse_from(["tapwatch"]).unwrap();
        assert_eq!(args.options(), RunOptions::default());
    }

    #[test]
    fn positional_args_rejected() {
        assert!(Args::try_parse_from(["tapwatch", "extra"]).is_err());
    }

    #[test]
    fn path_overrides() {
        let argv = ["tapwatch", "--store", "x/s.json", "--credentials", "c.json"];
        let args = Args::try_parse_from(argv).unwrap();
        let opts = args.options();
        assert_eq!(opts.store_path, PathBuf::from("x/s.json"));
        assert_eq!(opts.credentials_path, PathBuf::from("c.json"));
    }
}

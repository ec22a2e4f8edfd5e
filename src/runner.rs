// src/runner.rs
use tracing::info;

use crate::{
    config::options::RunOptions,
    core::Source,
    diff::compare,
    error::Result,
    extract::extract,
    notify::{Notifier, Transport},
    progress::Progress,
    store::SnapshotStore,
};

/// What one run saw and did.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub report: String,
    pub changed: bool,
    /// `None` when emailing wasn't requested or there was nothing to send.
    pub emailed: Option<bool>,
    pub saved: bool,
}

/// One pass: fetch, extract, compare with the stored snapshot, optionally
/// email the report, then keep the new snapshot if anything changed.
///
/// Only fetch/extract/store failures come back as `Err`; email trouble is
/// reported through `progress` and the summary.
pub fn run<S, T>(
    opts: &RunOptions,
    source: &S,
    notifier: &Notifier<T>,
    progress: &mut dyn Progress,
) -> Result<RunSummary>
where
    S: Source + ?Sized,
    T: Transport,
{
    let doc = source.fetch()?;
    let beers = extract(&doc)?;
    info!("{} beers on the menu", beers.len());

    let store = SnapshotStore::new(&opts.store_path);
    let previous = store.load()?;

    let cmp = compare(&beers, previous.as_ref());
    if !cmp.report.is_empty() {
        progress.report(&cmp.report);
    }

    let mut emailed = None;
    if opts.email {
        if cmp.report.is_empty() {
            progress.log("No updates to email!");
        } else {
            let ok = notifier.send(&cmp.report, progress);
            progress.log(if ok { "Email sent." } else { "Something went wrong with the email." });
            emailed = Some(ok);
        }
    }

    let mut saved = false;
    if opts.no_save {
        info!("--no-save: leaving {} untouched", store.path().display());
    } else if cmp.changed {
        store.save(&beers)?;
        progress.log("Beer database written.");
        saved = true;
    } else {
        progress.log("Nothing changed.");
    }

    Ok(RunSummary { report: cmp.report, changed: cmp.changed, emailed, saved })
}

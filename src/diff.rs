// src/diff.rs
// Snapshot comparison. Every line a comparison emits is appended to one
// report buffer, in emission order.

use crate::model::Snapshot;

/// Result of comparing a fresh snapshot with the stored one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Comparison {
    /// Everything emitted during the comparison; empty when nothing changed.
    pub report: String,
    pub changed: bool,
}

/// Report the beers in `to` whose names are not in `from_keys`, under
/// `"Some beers were {label}:"`. Returns whether there were any.
pub fn difference<'a, K>(from_keys: K, to: &Snapshot, label: &str, log: &mut String) -> bool
where
    K: IntoIterator<Item = &'a String>,
{
    let from: std::collections::BTreeSet<&String> = from_keys.into_iter().collect();
    let mut missing = to.iter().filter(|(name, _)| !from.contains(name)).peekable();

    if missing.peek().is_none() {
        return false;
    }

    log.push_str(&format!("Some beers were {label}:\n"));
    for (_, beer) in missing {
        log.push_str(&format!("{beer}\n"));
    }
    true
}

/// Compare `new` against `previous` (`None` on the first ever run).
pub fn compare(new: &Snapshot, previous: Option<&Snapshot>) -> Comparison {
    let mut report = s!();

    let changed = match previous {
        None => {
            report.push_str("No previous record found! Beers are:\n");
            for beer in new.values() {
                report.push_str(&format!("{beer}\n"));
            }
            true
        }
        Some(previous) => {
            // In `previous` but gone from `new`, rendered as they were.
            let removed = difference(new.keys(), previous, "removed", &mut report);
            // In `new` but not in `previous`, rendered as they are now.
            let added = difference(previous.keys(), new, "added", &mut report);
            removed || added
        }
    };

    Comparison { report, changed }
}

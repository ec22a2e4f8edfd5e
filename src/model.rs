// src/model.rs
use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// All beers seen at one point in time, keyed by normalized name.
/// Ordered so every rendering of a snapshot comes out sorted by name.
pub type Snapshot = BTreeMap<String, Beer>;

/// One entry on the tap list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub name: String,
    pub description: String,
    /// Supplementary note (serving size, "collab with ...", etc.)
    pub qualifier: Option<String>,
    /// ABV, in percent.
    pub strength: f64,
}

impl Beer {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        qualifier: Option<String>,
        strength: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            qualifier,
            strength,
        }
    }
}

/// `Name\n\t"Description"\n\t5.0%[ - qualifier]\n`
impl fmt::Display for Beer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\t\"{}\"\n\t{:.1}%", self.name, self.description, self.strength)?;
        if let Some(q) = &self.qualifier {
            write!(f, " - {q}")?;
        }
        writeln!(f)
    }
}

//! Manual name corrections applied after normalization
//!
//! Some Meetup members register under handles that survive normalization
//! unrecognisable. The correction table maps those normalized names to the
//! real display name. It can be built in code or loaded from a JSON object.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Exact-match replacements keyed by normalized (title-cased) name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameCorrections {
    entries: BTreeMap<String, String>,
}

impl Default for NameCorrections {
    /// The built-in table of known bad handles
    fn default() -> Self {
        let mut corrections = Self::empty();
        corrections.insert("Dave.Grohl.1011", "Dave Grohl");
        corrections.insert("Anya.Tay.J", "Anya Taylor-Joy");
        corrections
    }
}

impl NameCorrections {
    /// Create a table with no entries
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace a correction
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.entries.insert(from.into(), to.into());
    }

    /// Number of corrections in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the replacement for a normalized name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Load a correction table from a JSON object of `"from": "to"` pairs
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::CorrectionsFile {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the correction table as JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content).map_err(|e| Error::CorrectionsFile {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }
}

impl Extend<(String, String)> for NameCorrections {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<(String, String)> for NameCorrections {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

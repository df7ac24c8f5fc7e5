//! Known-institution lookup table.
//!
//! Some schools print their name in ways the text heuristics cannot recover.
//! The directory maps such schools to a fixed name, keyed by modular code or
//! by marker phrases that must all appear in the page text. It is loaded from
//! JSON so the extraction core carries no institution-specific knowledge.
//!
//! ```json
//! {
//!   "institutions": [
//!     {
//!       "name": "27 SANTA LUCIA FE Y ALEGRIA",
//!       "modular_codes": ["0227900"],
//!       "text_markers": [["SANTA LUCIA", "ALEGRIA"]]
//!     }
//!   ]
//! }
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One known institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownInstitution {
    /// Name assigned when the entry matches
    pub name: String,
    /// Modular codes belonging to this institution
    #[serde(default)]
    pub modular_codes: Vec<String>,
    /// Groups of uppercase phrases; a group matches when all its phrases occur
    #[serde(default)]
    pub text_markers: Vec<Vec<String>>,
}

impl KnownInstitution {
    fn matches_code(&self, modular_code: &str, text_upper: &str) -> bool {
        self.modular_codes
            .iter()
            .filter(|code| !code.is_empty())
            .any(|code| modular_code.contains(code.as_str()) || text_upper.contains(code.as_str()))
    }

    fn matches_markers(&self, text_upper: &str) -> bool {
        self.text_markers.iter().any(|group| {
            !group.is_empty()
                && group
                    .iter()
                    .all(|marker| text_upper.contains(marker.to_uppercase().as_str()))
        })
    }
}

/// Lookup table of known institutions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionDirectory {
    /// Entries, checked in order
    #[serde(default)]
    pub institutions: Vec<KnownInstitution>,
}

impl InstitutionDirectory {
    /// Create a directory from entries.
    pub fn new(institutions: Vec<KnownInstitution>) -> Self {
        Self { institutions }
    }

    /// Parse a directory from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a directory from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let directory = Self::from_json(&contents)?;
        log::info!(
            "loaded {} known institution(s) from {}",
            directory.institutions.len(),
            path.as_ref().display()
        );
        Ok(directory)
    }

    /// Whether the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }

    /// Find the institution for a page.
    ///
    /// Modular codes are checked across all entries first, then marker groups.
    pub fn lookup(&self, modular_code: &str, text_upper: &str) -> Option<&str> {
        self.institutions
            .iter()
            .find(|entry| entry.matches_code(modular_code, text_upper))
            .or_else(|| {
                self.institutions
                    .iter()
                    .find(|entry| entry.matches_markers(text_upper))
            })
            .map(|entry| entry.name.as_str())
    }
}

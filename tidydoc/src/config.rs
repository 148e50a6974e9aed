// src/config.rs
//! Settings read from a `tidydoc.toml` file.
//!
//! Every field is optional; anything left out keeps its built-in default and
//! command-line flags override the file.

pub mod loader;

pub use loader::{CONFIG_FILE_NAME, load_config, load_config_file};

use crate::core::sorter::{DEFAULT_DEPTH, DEFAULT_SECTIONS, SortPolicy};
use anyhow::{Result, ensure};
use serde::Deserialize;

/// Header marker used when nothing else is configured.
pub const DEFAULT_MARKER: char = '#';

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Parent section names whose children get sorted.
    pub sections: Option<Vec<String>>,
    /// Depth of the sections whose children get sorted.
    pub depth: Option<usize>,
    /// Character that introduces a header.
    pub marker: Option<char>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn marker(&self) -> char {
        self.marker.unwrap_or(DEFAULT_MARKER)
    }

    /// Builds the sort policy, preferring `cli_sections` when non-empty.
    #[must_use]
    pub fn policy(&self, cli_sections: &[String]) -> SortPolicy {
        let policy = if !cli_sections.is_empty() {
            SortPolicy::new(cli_sections.iter().cloned())
        } else if let Some(sections) = &self.sections {
            SortPolicy::new(sections.iter().cloned())
        } else {
            SortPolicy::new(DEFAULT_SECTIONS.iter().copied())
        };
        policy.with_depth(self.depth.unwrap_or(DEFAULT_DEPTH))
    }

    /// Checks the values serde cannot: a depth of at least one and a marker
    /// that can start a header.
    ///
    /// # Errors
    ///
    /// Returns an error if `depth` is zero or `marker` is whitespace.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.depth != Some(0), "depth must be at least 1");
        if let Some(marker) = self.marker {
            ensure!(
                !marker.is_whitespace(),
                "marker must not be whitespace, got {marker:?}"
            );
        }
        Ok(())
    }
}

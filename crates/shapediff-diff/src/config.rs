use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// Default recursion bound: deep enough for any realistic document, shallow
/// enough to stop well before the stack runs out.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What to do with an unequal pair whose kind has no comparison rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnsupportedKinds {
    /// Treat the pair as equal: no node is produced.
    #[default]
    Ignore,
    /// Produce an `unsupported-kind` node carrying both values.
    Report,
}

/// Configuration for a [`Comparator`](crate::Comparator).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Maximum number of nested levels to descend below the root.
    /// Sequences and records deeper than this are not expanded.
    /// `None` removes the bound.
    pub max_depth: Option<usize>,
    /// Policy for kinds outside the supported set.
    pub unsupported: UnsupportedKinds,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            unsupported: UnsupportedKinds::Ignore,
        }
    }
}

impl CompareConfig {
    /// Parse a configuration from TOML text. Missing keys take their
    /// default values.
    pub fn from_toml_str(s: &str) -> DiffResult<Self> {
        toml::from_str(s).map_err(|e| DiffError::Config(e.to_string()))
    }

    /// Serialize as TOML. An unbounded depth is omitted, so it reads back
    /// as the default bound.
    pub fn to_toml_string(&self) -> DiffResult<String> {
        toml::to_string(self).map_err(|e| DiffError::Config(e.to_string()))
    }

    /// Set the depth bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Remove the depth bound.
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Report unequal values of unsupported kinds instead of ignoring them.
    pub fn report_unsupported(mut self) -> Self {
        self.unsupported = UnsupportedKinds::Report;
        self
    }
}

//! Configuration for [`Trie`](crate::Trie) behavior.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Label printed for the root node when no other label is configured.
pub const DEFAULT_ROOT_LABEL: &str = "root";

/// How [`Trie::valid_prefix`](crate::Trie::valid_prefix) treats a prefix that
/// is itself a stored word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PrefixMode {
    /// A prefix ending on a terminal node is not a valid prefix.
    ///
    /// With this mode `list_words_prefix("car")` is empty even when `"car"`
    /// and `"cars"` are both stored.
    ExcludeTerminal,

    /// Any fully matched prefix is valid, terminal or not.
    IncludeTerminal,
}

impl Default for PrefixMode {
    fn default() -> Self {
        PrefixMode::ExcludeTerminal
    }
}

impl PrefixMode {
    /// Returns the canonical name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixMode::ExcludeTerminal => "exclude-terminal",
            PrefixMode::IncludeTerminal => "include-terminal",
        }
    }
}

impl fmt::Display for PrefixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrefixMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclude-terminal" => Ok(PrefixMode::ExcludeTerminal),
            "include-terminal" => Ok(PrefixMode::IncludeTerminal),
            _ => Err(Error::InvalidPrefixMode(s.to_string())),
        }
    }
}

/// Configuration options for a [`Trie`](crate::Trie).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrieConfig {
    /// Whether terminal nodes count as valid prefixes
    pub prefix_mode: PrefixMode,

    /// Label printed for the root node when rendering the trie
    pub root_label: String,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            prefix_mode: PrefixMode::default(),
            root_label: DEFAULT_ROOT_LABEL.to_string(),
        }
    }
}

impl TrieConfig {
    /// Sets the prefix mode, consuming and returning the config.
    pub fn prefix_mode(mut self, mode: PrefixMode) -> Self {
        self.prefix_mode = mode;
        self
    }

    /// Sets the root label, consuming and returning the config.
    pub fn root_label<S: Into<String>>(mut self, label: S) -> Self {
        self.root_label = label.into();
        self
    }

    /// Checks that the configuration can be used to build a trie.
    pub fn validate(&self) -> Result<()> {
        if self.root_label.is_empty() {
            return Err(Error::EmptyRootLabel);
        }
        Ok(())
    }
}

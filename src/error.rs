//! Error types for trie configuration.
//!
//! Trie operations themselves are total and never fail; errors only arise
//! while building or parsing a [`TrieConfig`](crate::TrieConfig).

/// Result type for fallible configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a trie.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A prefix mode name did not match any known mode.
    #[error("unknown prefix mode '{0}', expected 'exclude-terminal' or 'include-terminal'")]
    InvalidPrefixMode(String),

    /// The label used to render the root node was empty.
    #[error("root label must not be empty")]
    EmptyRootLabel,
}

//! # Word Trie
//!
//! A mutable prefix tree for sets of words.
//!
//! This crate provides a character trie that stores words, answers exact
//! and prefix queries, lists words by prefix, and deletes words while pruning
//! branches that no longer lead to any stored word.
//!
//! ## Features
//!
//! - **Character keys**: words are split into `char`s, any alphabet works
//! - **Deterministic listing**: words come out in lexicographic `char` order
//! - **Pruning deletion**: deleting a word removes nodes it alone used
//! - **Iterative traversal**: no recursion, so deep words cannot overflow the stack
//!
//! ## Example
//!
//! ```rust
//! use word_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert_word("car");
//! trie.insert_word("cars");
//! trie.insert_word("boat");
//!
//! assert!(trie.search_word("car"));
//! assert!(!trie.search_word("ca"));
//! assert_eq!(trie.list_words_prefix("ca"), vec!["car", "cars"]);
//!
//! trie.delete_word("cars");
//! assert_eq!(trie.list_words(), vec!["boat", "car"]);
//! ```

mod config;
mod error;
mod iter;
pub mod node;
mod trie;

// Re-export public types
pub use crate::config::{PrefixMode, TrieConfig, DEFAULT_ROOT_LABEL};
pub use crate::error::{Error, Result};
pub use crate::iter::Words;
pub use crate::node::TrieNode;
pub use crate::trie::Trie;

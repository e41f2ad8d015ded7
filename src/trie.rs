//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! storing, finding, listing and deleting words.

use std::fmt;

use tracing::{debug, trace};

use crate::config::{PrefixMode, TrieConfig};
use crate::error::Result;
use crate::iter::Words;
use crate::node::TrieNode;

/// A mutable prefix tree over the characters of stored words.
///
/// Each edge is labeled by one `char`. Nodes are created lazily on insertion
/// and pruned on deletion, so the tree never holds a childless node that does
/// not end a word.
#[derive(Debug, Clone)]
pub struct Trie {
    /// The root node of the trie, never terminal
    root: TrieNode,

    /// The number of words stored in the trie
    size: usize,

    /// Configuration options
    config: TrieConfig,
}

impl Trie {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new, empty trie with the given configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        if config != TrieConfig::default() {
            debug!(
                prefix_mode = %config.prefix_mode,
                root_label = %config.root_label,
                "creating trie with custom configuration"
            );
        }

        Trie {
            root: TrieNode::root(),
            size: 0,
            config,
        }
    }

    /// Creates a new, empty trie after validating the configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::{Error, Trie, TrieConfig};
    ///
    /// let err = Trie::try_with_config(TrieConfig::default().root_label("")).unwrap_err();
    /// assert_eq!(err, Error::EmptyRootLabel);
    /// ```
    pub fn try_with_config(config: TrieConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns the number of words stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert_word("hello");
    /// trie.insert_word("hello");
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no words.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts a word, returning `true` if it was not already stored.
    ///
    /// Missing nodes along the path are created. Inserting the empty string
    /// has no effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.insert_word("car"));
    /// assert!(!trie.insert_word("car"));
    /// assert!(!trie.insert_word(""));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert_word(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.insert_child(ch);
        }

        if node.is_end_of_word() {
            return false;
        }

        node.set_end_of_word(true);
        self.size += 1;
        trace!(word = %word, size = self.size, "inserted word");
        true
    }

    /// Returns `true` if `word` is stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert_word("cars");
    ///
    /// assert!(trie.search_word("cars"));
    /// assert!(!trie.search_word("car"));
    /// ```
    pub fn search_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        self.find_node(word).map_or(false, TrieNode::is_end_of_word)
    }

    /// Returns the node reached by walking `prefix`, if it is a valid prefix.
    ///
    /// Under [`PrefixMode::ExcludeTerminal`] (the default) a prefix that is
    /// itself a stored word is not valid. Under
    /// [`PrefixMode::IncludeTerminal`] every fully matched prefix is. The
    /// empty prefix always yields the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::{PrefixMode, Trie, TrieConfig};
    ///
    /// let mut trie = Trie::new();
    /// trie.insert_word("car");
    /// trie.insert_word("cars");
    ///
    /// assert!(trie.valid_prefix("ca").is_some());
    /// assert!(trie.valid_prefix("car").is_none());
    /// assert!(trie.valid_prefix("cat").is_none());
    ///
    /// let mut inclusive = Trie::with_config(
    ///     TrieConfig::default().prefix_mode(PrefixMode::IncludeTerminal),
    /// );
    /// inclusive.insert_word("car");
    /// assert!(inclusive.valid_prefix("car").is_some());
    /// ```
    pub fn valid_prefix(&self, prefix: &str) -> Option<&TrieNode> {
        let node = self.find_node(prefix)?;

        match self.config.prefix_mode {
            PrefixMode::ExcludeTerminal if node.is_end_of_word() => None,
            _ => Some(node),
        }
    }

    /// Returns the words that extend a valid prefix.
    ///
    /// Words come out in lexicographic `char` order. If `prefix` is not a
    /// valid prefix (see [`Trie::valid_prefix`]) the result is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let trie: Trie = vec!["boar", "boars", "boat", "boats"].into_iter().collect();
    ///
    /// assert_eq!(trie.list_words_prefix("boa"), vec!["boar", "boars", "boat", "boats"]);
    /// assert!(trie.list_words_prefix("x").is_empty());
    /// ```
    pub fn list_words_prefix(&self, prefix: &str) -> Vec<String> {
        self.words_with_prefix(prefix).collect()
    }

    /// Returns every stored word in lexicographic `char` order.
    pub fn list_words(&self) -> Vec<String> {
        if self.size == 0 {
            return Vec::new();
        }

        self.words().collect()
    }

    /// Returns a lazy iterator over every stored word.
    pub fn words(&self) -> Words<'_> {
        if self.size == 0 {
            return Words::empty();
        }

        Words::new(&self.root, String::new(), false, self.size)
    }

    /// Returns a lazy iterator over the words extending a valid prefix.
    ///
    /// The iterator reports its exact length, which costs one extra walk of
    /// the prefix subtree to count its words before iteration starts.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        let node = match self.valid_prefix(prefix) {
            Some(node) => node,
            None => return Words::empty(),
        };

        let include_start = self.config.prefix_mode == PrefixMode::IncludeTerminal;
        let mut count = node.subtree_size();
        if node.is_end_of_word() && !include_start {
            count -= 1;
        }

        Words::new(node, prefix.to_string(), include_start, count)
    }

    /// Deletes a word, returning `true` if it was stored.
    ///
    /// Nodes left without children and without a word of their own are
    /// pruned, walking back towards the root until a node that ends another
    /// word or still has other children is reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::Trie;
    ///
    /// let mut trie: Trie = vec!["problem", "problems"].into_iter().collect();
    ///
    /// assert!(trie.delete_word("problems"));
    /// assert!(!trie.delete_word("problems"));
    /// assert!(trie.search_word("problem"));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn delete_word(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return false;
        }

        // Walk the path and remember the deepest node that must survive
        // pruning: the root, a terminal node, or a node with other children.
        // Everything below it on the path is a single chain.
        let mut node = &self.root;
        let mut keep_depth = 0;
        for (depth, &ch) in chars.iter().enumerate() {
            if depth == 0 || node.is_end_of_word() || node.child_count() > 1 {
                keep_depth = depth;
            }
            node = match node.get_child(ch) {
                Some(child) => child,
                None => return false,
            };
        }

        if !node.is_end_of_word() {
            return false;
        }

        // A leaf target takes the whole single-child chain below the kept
        // node with it; otherwise only the terminal mark goes.
        let (path, pruned) = if node.is_leaf() {
            (&chars[..keep_depth], chars.len() - keep_depth)
        } else {
            (&chars[..], 0)
        };

        let node = match self.find_node_mut(path) {
            Some(node) => node,
            None => return false,
        };
        if pruned > 0 {
            node.delete_child(chars[keep_depth]);
        } else {
            node.set_end_of_word(false);
        }

        self.size -= 1;
        trace!(word = %word, size = self.size, pruned = pruned, "deleted word");
        true
    }

    // Walks `key` from the root, returning the node it ends on.
    fn find_node(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in key.chars() {
            node = node.get_child(ch)?;
        }
        Some(node)
    }

    fn find_node_mut(&mut self, path: &[char]) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for &ch in path {
            node = node.get_child_mut(ch)?;
        }
        Some(node)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

// Renders every node depth-first, one tab of indentation per level.
impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_with_label(f, &self.config.root_label)?;
        f.write_str("\n")?;

        let mut stack: Vec<(&TrieNode, usize)> =
            self.root.children_list().rev().map(|child| (child, 1)).collect();

        while let Some((node, level)) = stack.pop() {
            for _ in 0..level {
                f.write_str("\t")?;
            }
            writeln!(f, "{}", node)?;
            stack.extend(node.children_list().rev().map(|child| (child, level + 1)));
        }

        Ok(())
    }
}

// Two tries are equal when they store the same words. Pruning keeps the
// node structure canonical, so comparing the trees is enough.
impl PartialEq for Trie {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.root == other.root
    }
}

impl Eq for Trie {}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert_word(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> std::iter::FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

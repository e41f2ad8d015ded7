//! Node implementation for the word trie.
//!
//! This module contains the `TrieNode` structure that forms the backbone of
//! the trie. Each node owns its children outright, so the whole structure is a
//! strict tree rooted at the trie's root node.

use std::collections::btree_map::{BTreeMap, Iter, Values};
use std::fmt;
use std::mem;

use crate::config::DEFAULT_ROOT_LABEL;

/// A single vertex of the trie.
///
/// Each node holds the character on the edge leading into it, a flag telling
/// whether the path from the root to this node spells a stored word, and its
/// children keyed by their character.
///
/// `Clone`, `PartialEq` and `Drop` walk the subtree with an explicit stack,
/// so a node chain as long as any word can be copied, compared and freed.
pub struct TrieNode {
    /// The character this node represents, `None` for the root
    character: Option<char>,

    /// Whether the path from the root to this node spells a stored word
    is_end_of_word: bool,

    /// Child nodes indexed by their character
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates the root node, which carries no character.
    pub(crate) fn root() -> Self {
        TrieNode {
            character: None,
            is_end_of_word: false,
            children: BTreeMap::new(),
        }
    }

    /// Creates a new non-terminal node for the given character.
    pub(crate) fn new(character: char) -> Self {
        TrieNode {
            character: Some(character),
            is_end_of_word: false,
            children: BTreeMap::new(),
        }
    }

    /// Returns the character of this node, or `None` for the root.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Returns whether this node ends a stored word.
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    pub(crate) fn set_end_of_word(&mut self, is_end_of_word: bool) {
        self.is_end_of_word = is_end_of_word;
    }

    /// Returns the child for `ch`, creating a non-terminal one if none exists.
    pub(crate) fn insert_child(&mut self, ch: char) -> &mut TrieNode {
        self.children.entry(ch).or_insert_with(|| TrieNode::new(ch))
    }

    /// Returns the child keyed by `ch`, if any.
    pub fn get_child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    pub(crate) fn get_child_mut(&mut self, ch: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&ch)
    }

    /// Removes the child keyed by `ch`, returning the detached subtree.
    pub(crate) fn delete_child(&mut self, ch: char) -> Option<TrieNode> {
        self.children.remove(&ch)
    }

    /// Returns an iterator over the children in ascending character order.
    pub fn children_list(&self) -> Values<'_, char, TrieNode> {
        self.children.values()
    }

    /// Returns the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of stored words in this subtree, this node included.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_end_of_word {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }
}

impl TrieNode {
    /// Writes the one-line rendering of this node, using `root_label` when
    /// this is the root.
    pub(crate) fn fmt_with_label(
        &self,
        f: &mut fmt::Formatter<'_>,
        root_label: &str,
    ) -> fmt::Result {
        match self.character {
            Some(ch) => write!(f, "{}", ch)?,
            None => f.write_str(root_label)?,
        }
        write!(f, ", is_end_of_word: {}", self.is_end_of_word)
    }
}

/// Renders the node as `"{character}, is_end_of_word: {flag}"`.
///
/// The root has no character of its own and is always rendered with
/// [`DEFAULT_ROOT_LABEL`]; the `Display` of [`Trie`](crate::Trie) uses the
/// configured label instead.
impl fmt::Display for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_label(f, DEFAULT_ROOT_LABEL)
    }
}

// Shallow: lists child keys rather than nesting whole subtrees.
impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("character", &self.character)
            .field("is_end_of_word", &self.is_end_of_word)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        // Each frame is a node being copied: its key, its source, the source
        // children not yet visited and the copies finished so far.
        let mut stack: Vec<(char, &TrieNode, Iter<'_, char, TrieNode>, BTreeMap<char, TrieNode>)> =
            Vec::new();
        let mut pending = self.children.iter();
        let mut children = BTreeMap::new();

        loop {
            let next = match stack.last_mut() {
                Some((_, _, iter, _)) => iter.next(),
                None => pending.next(),
            };

            if let Some((&ch, child)) = next {
                stack.push((ch, child, child.children.iter(), BTreeMap::new()));
                continue;
            }

            let (ch, source, _, copied) = match stack.pop() {
                Some(frame) => frame,
                None => break,
            };
            let node = TrieNode {
                character: source.character,
                is_end_of_word: source.is_end_of_word,
                children: copied,
            };
            match stack.last_mut() {
                Some((_, _, _, siblings)) => siblings.insert(ch, node),
                None => children.insert(ch, node),
            };
        }

        TrieNode {
            character: self.character,
            is_end_of_word: self.is_end_of_word,
            children,
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            if a.character != b.character
                || a.is_end_of_word != b.is_end_of_word
                || a.children.len() != b.children.len()
            {
                return false;
            }
            for ((ka, ca), (kb, cb)) in a.children.iter().zip(b.children.iter()) {
                if ka != kb {
                    return false;
                }
                stack.push((ca, cb));
            }
        }

        true
    }
}

impl Eq for TrieNode {}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach every descendant before it is dropped, so each drop only
        // ever sees an empty child map.
        let mut stack: Vec<TrieNode> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(mem::take(&mut node.children).into_values());
        }
    }
}

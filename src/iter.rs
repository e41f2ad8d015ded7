//! Word iteration over a trie subtree.
//!
//! This module provides the `Words` iterator, which walks a subtree
//! depth-first with an explicit stack and yields every stored word in it.

use std::iter::FusedIterator;

use crate::node::TrieNode;

/// An iterator over the words stored below a trie node.
///
/// Words are yielded in depth-first order with children visited in ascending
/// character order, so the output is lexicographic by `char`.
///
/// # Examples
///
/// ```
/// use word_trie::Trie;
///
/// let trie: Trie = vec!["boat", "boar", "bond"].into_iter().collect();
///
/// let words: Vec<String> = trie.words().collect();
/// assert_eq!(words, vec!["boar", "boat", "bond"]);
/// ```
#[derive(Debug, Clone)]
pub struct Words<'a> {
    /// Nodes still to visit, each with the byte length of `buffer` before
    /// that node's character is appended
    stack: Vec<(&'a TrieNode, usize)>,

    /// The word spelled by the path to the node last visited
    buffer: String,

    /// The start node's own word, when it should be yielded
    pending: Option<String>,

    /// Number of words not yet yielded
    remaining: usize,
}

impl<'a> Words<'a> {
    /// Creates an iterator over the words below `start`.
    ///
    /// `prefix` is the word spelled by the path to `start`. When
    /// `include_start` is set and `start` is terminal, `prefix` itself is the
    /// first word yielded. `count` must be the number of words the iterator
    /// will produce.
    pub(crate) fn new(
        start: &'a TrieNode,
        prefix: String,
        include_start: bool,
        count: usize,
    ) -> Self {
        let pending = if include_start && start.is_end_of_word() {
            Some(prefix.clone())
        } else {
            None
        };

        let base = prefix.len();
        let stack = start.children_list().rev().map(|child| (child, base)).collect();

        Words {
            stack,
            buffer: prefix,
            pending,
            remaining: count,
        }
    }

    /// Creates an iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Words {
            stack: Vec::new(),
            buffer: String::new(),
            pending: None,
            remaining: 0,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(word) = self.pending.take() {
            self.remaining -= 1;
            return Some(word);
        }

        while let Some((node, len)) = self.stack.pop() {
            self.buffer.truncate(len);
            if let Some(ch) = node.character() {
                self.buffer.push(ch);
            }

            // Reverse so the smallest child is popped first
            let next_len = self.buffer.len();
            self.stack
                .extend(node.children_list().rev().map(|child| (child, next_len)));

            if node.is_end_of_word() {
                self.remaining -= 1;
                return Some(self.buffer.clone());
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Words<'a> {}

impl<'a> FusedIterator for Words<'a> {}

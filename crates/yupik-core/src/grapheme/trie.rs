use std::collections::HashMap;
use std::sync::OnceLock;

use super::inventory::{CYRILLIC_GRAPHEMES, LATIN_GRAPHEMES};

struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            terminal: false,
        }
    }
}

/// Character trie over a grapheme inventory.
///
/// A reversed trie stores every entry back to front so the Latin tokenizer
/// can match suffixes while scanning right to left.
pub struct GraphemeTrie {
    root: Node,
}

impl GraphemeTrie {
    pub fn forward(entries: &[&str]) -> Self {
        let mut trie = GraphemeTrie { root: Node::new() };
        for entry in entries {
            trie.insert(entry.chars());
        }
        trie
    }

    pub fn reversed(entries: &[&str]) -> Self {
        let mut trie = GraphemeTrie { root: Node::new() };
        for entry in entries {
            trie.insert(entry.chars().rev());
        }
        trie
    }

    /// Latin inventory, keyed by reversed grapheme.
    pub fn latin() -> &'static GraphemeTrie {
        static INSTANCE: OnceLock<GraphemeTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| GraphemeTrie::reversed(LATIN_GRAPHEMES))
    }

    pub fn cyrillic() -> &'static GraphemeTrie {
        static INSTANCE: OnceLock<GraphemeTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| GraphemeTrie::forward(CYRILLIC_GRAPHEMES))
    }

    /// Length in code points of the deepest entry the sequence starts with.
    pub fn longest_match(&self, chars: impl Iterator<Item = char>) -> Option<usize> {
        let mut node = &self.root;
        let mut best = None;
        for (depth, c) in chars.enumerate() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if node.terminal {
                best = Some(depth + 1);
            }
        }
        best
    }

    fn insert(&mut self, chars: impl Iterator<Item = char>) {
        let mut node = &mut self.root;
        for c in chars {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        node.terminal = true;
    }
}

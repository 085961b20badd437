use crate::index::node::{Arena, Leaves, NodeId};
use crate::index::SuffixTree;
use crate::util::alphabet::SENTINEL;

/// Occurrences of a pattern, in leaf traversal order of the matching subtree.
///
/// Each call to [`SuffixTree::search`] starts over from the root; the tree is
/// never touched, so the iterator can be re-created or cloned freely.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    leaves: Leaves<'a>,
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.leaves.next()
    }
}

/// Walks `pattern` (already encoded) down from `root`. Returns the node at or
/// just below the point where the pattern runs out, or `None` on a mismatch.
fn locate(arena: &Arena, root: NodeId, pattern: &[u8]) -> Option<NodeId> {
    // the sentinel only ends suffixes; a pattern carrying it cannot match
    if pattern.contains(&SENTINEL) {
        return None;
    }
    let mut v = root;
    let mut rest = pattern;
    while let Some(&a) = rest.first() {
        let w = arena.child(v, a)?;
        let edge = arena.edge(w).as_slice();
        let k = edge.len().min(rest.len());
        if edge[1..k] != rest[1..k] {
            return None;
        }
        rest = &rest[k..];
        v = w;
    }
    Some(v)
}

impl SuffixTree {
    /// Does `pattern` occur in the indexed text?
    pub fn contains(&self, pattern: &[u8]) -> bool {
        match self.alphabet().encode_pattern(pattern) {
            Some(p) => self.contains_mapped(&p),
            None => false,
        }
    }

    /// [`SuffixTree::contains`] for a pattern already encoded with [`SuffixTree::alphabet`].
    pub fn contains_mapped(&self, pattern: &[u8]) -> bool {
        locate(&self.arena, self.root, pattern).is_some()
    }

    /// 0-based start positions of every occurrence of `pattern`.
    ///
    /// The empty pattern matches at every position `0..=len()`. Symbols outside
    /// the alphabet simply give no matches.
    pub fn search(&self, pattern: &[u8]) -> Matches<'_> {
        match self.alphabet().encode_pattern(pattern) {
            Some(p) => self.search_mapped(&p),
            None => Matches { leaves: Leaves::empty(&self.arena) },
        }
    }

    /// [`SuffixTree::search`] for a pattern already encoded with [`SuffixTree::alphabet`].
    pub fn search_mapped(&self, pattern: &[u8]) -> Matches<'_> {
        let leaves = match locate(&self.arena, self.root, pattern) {
            Some(v) => Leaves::new(&self.arena, v),
            None => Leaves::empty(&self.arena),
        };
        Matches { leaves }
    }
}

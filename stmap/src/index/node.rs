//! 后缀树节点模型：节点存放在 arena 中，以整数 id 互相引用。
//!
//! 叶子记录后缀起点；内部节点按边首字母（升序）保存孩子，
//! 并带有只在构建期使用的后缀链接。

use std::collections::BTreeMap;

use crate::error::{Result, StError};
use crate::util::subseq::SubSeq;

pub type NodeId = usize;

#[derive(Debug, Clone)]
pub enum Node {
    Leaf {
        suffix_start: usize,
        edge: SubSeq<u8>,
        parent: Option<NodeId>,
    },
    Inner {
        edge: SubSeq<u8>,
        parent: Option<NodeId>,
        children: BTreeMap<u8, NodeId>,
        suffix_link: Option<NodeId>,
    },
}

impl Node {
    #[inline]
    pub fn edge(&self) -> &SubSeq<u8> {
        match self {
            Node::Leaf { edge, .. } | Node::Inner { edge, .. } => edge,
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Leaf { parent, .. } | Node::Inner { parent, .. } => *parent,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Single owner of every node of a tree.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self { nodes: Vec::with_capacity(n) }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub(crate) fn new_leaf(&mut self, suffix_start: usize, edge: SubSeq<u8>) -> NodeId {
        self.nodes.push(Node::Leaf { suffix_start, edge, parent: None });
        self.nodes.len() - 1
    }

    pub(crate) fn new_inner(&mut self, edge: SubSeq<u8>) -> NodeId {
        self.nodes.push(Node::Inner {
            edge,
            parent: None,
            children: BTreeMap::new(),
            suffix_link: None,
        });
        self.nodes.len() - 1
    }

    #[inline]
    pub fn edge(&self, id: NodeId) -> &SubSeq<u8> {
        self.nodes[id].edge()
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent()
    }

    /// Child of `id` whose edge starts with `a`. Leaves have no children.
    #[inline]
    pub fn child(&self, id: NodeId, a: u8) -> Option<NodeId> {
        match &self.nodes[id] {
            Node::Inner { children, .. } => children.get(&a).copied(),
            Node::Leaf { .. } => None,
        }
    }

    pub fn suffix_link(&self, id: NodeId) -> Option<NodeId> {
        match &self.nodes[id] {
            Node::Inner { suffix_link, .. } => *suffix_link,
            Node::Leaf { .. } => None,
        }
    }

    /// Only inner nodes carry suffix links, and only to inner nodes.
    pub(crate) fn set_suffix_link(&mut self, id: NodeId, target: NodeId) -> Result<()> {
        if self.nodes[target].is_leaf() {
            return Err(StError::TreeInvariant { reason: "suffix link points to a leaf" });
        }
        match &mut self.nodes[id] {
            Node::Inner { suffix_link, .. } => {
                *suffix_link = Some(target);
                Ok(())
            }
            Node::Leaf { .. } => Err(StError::TreeInvariant { reason: "leaves carry no suffix link" }),
        }
    }

    /// First symbol a node with edge `edge` would be keyed by below an inner `parent`.
    fn child_key(&self, parent: NodeId, edge: &SubSeq<u8>) -> Result<u8> {
        if self.nodes[parent].is_leaf() {
            return Err(StError::TreeInvariant { reason: "a leaf cannot have children" });
        }
        edge.first()
            .copied()
            .ok_or(StError::TreeInvariant { reason: "child edges must be non-empty" })
    }

    /// Hangs `child` below `parent`, keyed by the first symbol of its edge.
    /// Nothing is modified when the parent is a leaf or the edge is empty.
    pub(crate) fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let key = self.child_key(parent, self.nodes[child].edge())?;
        if let Node::Inner { children, .. } = &mut self.nodes[parent] {
            children.insert(key, child);
        }
        match &mut self.nodes[child] {
            Node::Leaf { parent: p, .. } | Node::Inner { parent: p, .. } => *p = Some(parent),
        }
        Ok(())
    }

    fn set_edge(&mut self, id: NodeId, new_edge: SubSeq<u8>) {
        match &mut self.nodes[id] {
            Node::Leaf { edge, .. } | Node::Inner { edge, .. } => *edge = new_edge,
        }
    }

    /// Splits the edge into `id` after `k` symbols (`0 < k < edge.len()`),
    /// inserting a new inner node that becomes the parent of `id`.
    pub(crate) fn split_edge(&mut self, id: NodeId, k: usize) -> Result<NodeId> {
        let edge = self.edge(id).clone();
        if k == 0 || k >= edge.len() {
            return Err(StError::IndexOutOfRange { start: k, stop: k, len: edge.len() });
        }
        let parent = self
            .parent(id)
            .ok_or(StError::TreeInvariant { reason: "the root edge cannot be split" })?;
        let (upper, lower) = (edge.prefix(k)?, edge.suffix(k)?);

        let mid = self.new_inner(upper);
        self.set_edge(id, lower);
        // replaces `id` under the same first symbol
        self.add_child(parent, mid)?;
        self.add_child(mid, id)?;
        Ok(mid)
    }

    /// Attaches a new leaf for `suffix_start` labelled `edge` below `parent`.
    pub(crate) fn attach_leaf(&mut self, parent: NodeId, suffix_start: usize, edge: SubSeq<u8>) -> Result<NodeId> {
        self.child_key(parent, &edge)?;
        let leaf = self.new_leaf(suffix_start, edge);
        self.add_child(parent, leaf)?;
        Ok(leaf)
    }

    pub fn node_ref(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { arena: self, id }
    }
}

/// Borrowed handle to a node; compares structurally.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    arena: &'a Arena,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &'a Node {
        self.arena.node(self.id)
    }

    pub fn edge(&self) -> &'a SubSeq<u8> {
        self.arena.edge(self.id)
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    pub fn suffix_start(&self) -> Option<usize> {
        match self.node() {
            Node::Leaf { suffix_start, .. } => Some(*suffix_start),
            Node::Inner { .. } => None,
        }
    }

    /// Children in ascending order of their edge's first symbol.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let arena = self.arena;
        let ids: Box<dyn Iterator<Item = NodeId> + 'a> = match arena.node(self.id) {
            Node::Inner { children, .. } => Box::new(children.values().copied()),
            Node::Leaf { .. } => Box::new(std::iter::empty()),
        };
        ids.map(move |id| NodeRef { arena, id })
    }

    /// Leaves below this node, depth first, smallest first symbol first.
    pub fn leaves(&self) -> Leaves<'a> {
        Leaves::new(self.arena, self.id)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self.id, other.id)];
        while let Some((a, b)) = stack.pop() {
            match (self.arena.node(a), other.arena.node(b)) {
                (
                    Node::Leaf { suffix_start: i, edge: x, .. },
                    Node::Leaf { suffix_start: j, edge: y, .. },
                ) => {
                    if i != j || x != y {
                        return false;
                    }
                }
                (
                    Node::Inner { edge: x, children: ca, .. },
                    Node::Inner { edge: y, children: cb, .. },
                ) => {
                    if x != y || ca.len() != cb.len() {
                        return false;
                    }
                    for ((ka, &va), (kb, &vb)) in ca.iter().zip(cb) {
                        if ka != kb {
                            return false;
                        }
                        stack.push((va, vb));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for NodeRef<'_> {}

/// Lazy depth-first leaf traversal yielding `suffix_start` values.
///
/// Visiting children in ascending order of first symbol yields suffixes in
/// lexicographic order, the sentinel-only suffix first.
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    arena: &'a Arena,
    stack: Vec<NodeId>,
}

impl<'a> Leaves<'a> {
    pub fn new(arena: &'a Arena, from: NodeId) -> Self {
        Self { arena, stack: vec![from] }
    }

    pub fn empty(arena: &'a Arena) -> Self {
        Self { arena, stack: Vec::new() }
    }
}

impl Iterator for Leaves<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(id) = self.stack.pop() {
            match self.arena.node(id) {
                Node::Leaf { suffix_start, .. } => return Some(*suffix_start),
                Node::Inner { children, .. } => self.stack.extend(children.values().rev().copied()),
            }
        }
        None
    }
}

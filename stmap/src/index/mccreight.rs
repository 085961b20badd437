//! McCreight 线性时间构建。
//!
//! 后缀按从长到短插入。插入后缀 i 时不再从根出发，而是利用上一次插入的
//! 头节点（新叶子挂载的位置）的后缀链接跳到已知祖先：
//!
//! 1. 头节点为根：直接从根慢扫描（逐字符比较）。
//! 2. 头节点已有后缀链接：跳过去，从那里慢扫描。
//! 3. 否则退到父节点 p，沿 p 的后缀链接（p 为根时留在根）下降，按边长
//!    快扫描（skip/count，只看每条边的首字符）补齐 p 与头节点之间的标签；
//!    落在边中间时劈开该边。得到的节点即头节点的后缀链接目标，然后慢扫描。
//!
//! 每个新建的内部节点在处理下一个后缀之前都已拿到后缀链接。

use crate::error::{Result, StError};
use crate::index::node::{Arena, NodeId};
use crate::util::subseq::SubSeq;

/// 构建后缀树。`x` 必须以唯一的哨兵结尾。返回 (arena, root)。
pub fn build(x: &SubSeq<u8>) -> Result<(Arena, NodeId)> {
    let n = x.len();
    let mut arena = Arena::with_capacity(2 * n);
    let root = arena.new_inner(x.prefix(0)?);
    arena.attach_leaf(root, 0, x.clone())?;

    // head of the previous suffix and its string depth
    let mut head = root;
    let mut head_depth = 0usize;

    for i in 1..n {
        let (start, depth) = if head == root {
            (root, 0)
        } else {
            let target = head_depth - 1;
            let link = match arena.suffix_link(head) {
                Some(w) => w,
                None => {
                    let w = link_target(&mut arena, root, x, i, head, head_depth)?;
                    arena.set_suffix_link(head, w)?;
                    w
                }
            };
            (link, target)
        };
        (head, head_depth) = scan(&mut arena, x, i, start, depth)?;
    }

    Ok((arena, root))
}

/// Finds (creating if needed) the node for `path(head)` minus its first symbol.
fn link_target(
    arena: &mut Arena,
    root: NodeId,
    x: &SubSeq<u8>,
    i: usize,
    head: NodeId,
    head_depth: usize,
) -> Result<NodeId> {
    let parent = arena
        .parent(head)
        .ok_or(StError::TreeInvariant { reason: "the head of a non-root insertion has a parent" })?;
    let parent_depth = head_depth - arena.edge(head).len();
    let (from, from_depth) = if parent == root {
        (root, 0)
    } else {
        let link = arena
            .suffix_link(parent)
            .ok_or(StError::TreeInvariant { reason: "ancestors of the head carry suffix links" })?;
        (link, parent_depth - 1)
    };
    rescan(arena, x, i, from, from_depth, head_depth - 1)
}

/// Skip/count descent along `x[i + depth .. i + target]`, a path known to exist.
/// Only the first symbol of each edge is looked at.
fn rescan(
    arena: &mut Arena,
    x: &SubSeq<u8>,
    i: usize,
    mut v: NodeId,
    mut depth: usize,
    target: usize,
) -> Result<NodeId> {
    while depth < target {
        let w = arena
            .child(v, *x.get(i + depth)?)
            .ok_or(StError::TreeInvariant { reason: "rescanned path exists in the tree" })?;
        let edge_len = arena.edge(w).len();
        let remaining = target - depth;
        if edge_len > remaining {
            return arena.split_edge(w, remaining);
        }
        v = w;
        depth += edge_len;
    }
    Ok(v)
}

/// Symbol-by-symbol descent from `v` (at string depth `depth`) matching
/// suffix `i`, then attaches its leaf. Returns the new head and its depth.
fn scan(
    arena: &mut Arena,
    x: &SubSeq<u8>,
    i: usize,
    mut v: NodeId,
    mut depth: usize,
) -> Result<(NodeId, usize)> {
    loop {
        let y = x.suffix(i + depth)?;
        let Some(w) = arena.child(v, *y.get(0)?) else {
            arena.attach_leaf(v, i, y)?;
            return Ok((v, depth));
        };
        let edge_len = arena.edge(w).len();
        let k = arena.edge(w).common_prefix_len(y.as_slice());
        if k == edge_len {
            v = w;
            depth += k;
            continue;
        }
        let u = arena.split_edge(w, k)?;
        arena.attach_leaf(u, i, y.suffix(k)?)?;
        return Ok((u, depth + k));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::naive;
    use crate::index::node::Node;
    use crate::util::alphabet::map_sequence;

    fn path_label(arena: &Arena, mut id: NodeId) -> Vec<u8> {
        let mut parts = Vec::new();
        while let Some(p) = arena.parent(id) {
            parts.push(arena.edge(id).as_slice().to_vec());
            id = p;
        }
        parts.into_iter().rev().flatten().collect()
    }

    #[test]
    fn suffix_links_drop_the_first_symbol() {
        for text in [&b"mississippi"[..], b"abcabxabcd", b"aaaaaaaa", b"acacacgtacgt"] {
            let (x, _) = map_sequence(text).unwrap();
            let (arena, root) = build(&x).unwrap();
            let mut linked = 0;
            for id in 0..arena.len() {
                if id == root || arena.node(id).is_leaf() {
                    continue;
                }
                if let Some(w) = arena.suffix_link(id) {
                    let label = path_label(&arena, id);
                    assert_eq!(path_label(&arena, w), label[1..].to_vec());
                    linked += 1;
                }
            }
            let inner = (0..arena.len())
                .filter(|&id| id != root && !arena.node(id).is_leaf())
                .count();
            // only the very last head may still be unlinked
            assert!(linked + 1 >= inner, "{} of {} linked", linked, inner);
        }
    }

    #[test]
    fn matches_naive_on_small_inputs() {
        for text in [&b""[..], b"a", b"ab", b"aab", b"banana", b"abracadabra", b"mississippi"] {
            let (x, _) = map_sequence(text).unwrap();
            let (a, ra) = build(&x).unwrap();
            let (b, rb) = naive::build(&x).unwrap();
            assert_eq!(a.node_ref(ra), b.node_ref(rb), "trees differ for {:?}", text);
            assert_eq!(a.len(), b.len());
        }
    }

    #[test]
    fn every_leaf_spells_its_suffix() {
        let (x, _) = map_sequence(b"abcabxabcd").unwrap();
        let (arena, _) = build(&x).unwrap();
        let mut leaves = 0;
        for id in 0..arena.len() {
            if let Node::Leaf { suffix_start, .. } = arena.node(id) {
                assert_eq!(path_label(&arena, id), x.as_slice()[*suffix_start..].to_vec());
                leaves += 1;
            }
        }
        assert_eq!(leaves, x.len());
    }
}

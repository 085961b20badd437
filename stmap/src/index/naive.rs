use crate::error::Result;
use crate::index::node::{Arena, NodeId};
use crate::util::subseq::SubSeq;

/// 朴素构建：每个后缀都从根开始向下匹配，最坏 O(n²)。
/// `x` 必须以唯一的哨兵结尾。返回 (arena, root)。
pub fn build(x: &SubSeq<u8>) -> Result<(Arena, NodeId)> {
    let mut arena = Arena::with_capacity(2 * x.len());
    let root = arena.new_inner(x.prefix(0)?);
    for i in 0..x.len() {
        insert(&mut arena, root, x, i)?;
    }
    Ok((arena, root))
}

fn insert(arena: &mut Arena, root: NodeId, x: &SubSeq<u8>, i: usize) -> Result<()> {
    let mut v = root;
    let mut y = x.suffix(i)?;
    loop {
        // the sentinel is unique, so `y` never runs out before a mismatch
        let Some(w) = arena.child(v, *y.get(0)?) else {
            arena.attach_leaf(v, i, y)?;
            return Ok(());
        };
        let edge_len = arena.edge(w).len();
        let k = arena.edge(w).common_prefix_len(y.as_slice());
        if k == edge_len {
            v = w;
            y = y.suffix(k)?;
            continue;
        }
        let u = arena.split_edge(w, k)?;
        arena.attach_leaf(u, i, y.suffix(k)?)?;
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::node::Node;
    use crate::util::alphabet::map_sequence;

    #[test]
    fn single_symbol_tree() {
        let (x, _) = map_sequence(b"a").unwrap();
        let (arena, root) = build(&x).unwrap();
        // root, leaf "a$", leaf "$"
        assert_eq!(arena.len(), 3);
        let kids: Vec<_> = arena.node_ref(root).children().map(|c| c.suffix_start()).collect();
        assert_eq!(kids, vec![Some(1), Some(0)]);
    }

    #[test]
    fn repeated_symbol_builds_a_spine() {
        let (x, _) = map_sequence(b"aaa").unwrap();
        let (arena, root) = build(&x).unwrap();
        let inner = (0..arena.len())
            .filter(|&id| matches!(arena.node(id), Node::Inner { .. }))
            .count();
        // root plus "a" and "aa"
        assert_eq!(inner, 3);
        let leaves: Vec<usize> = arena.node_ref(root).leaves().collect();
        assert_eq!(leaves, vec![3, 2, 1, 0]);
    }

    #[test]
    fn inner_nodes_branch() {
        let (x, _) = map_sequence(b"mississippi").unwrap();
        let (arena, root) = build(&x).unwrap();
        for id in 0..arena.len() {
            if let Node::Inner { children, .. } = arena.node(id) {
                if id != root {
                    assert!(children.len() >= 2, "inner node {} has {} children", id, children.len());
                }
            }
        }
    }
}

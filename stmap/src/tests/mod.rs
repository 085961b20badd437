
use crate::index::{Algorithm, SuffixTree};

pub(crate) const ALGOS: [Algorithm; 2] = [Algorithm::Naive, Algorithm::McCreight];

/// Fibonacci word: f1 = "b", f2 = "a", fn = fn-1 fn-2.
pub(crate) fn fibonacci_string(n: usize) -> String {
    let (mut a, mut b) = ("b".to_string(), "a".to_string());
    for _ in 1..n {
        let next = format!("{}{}", b, a);
        a = b;
        b = next;
    }
    a
}

/// Every start position of `p` in `x`; the empty pattern matches at `0..=len`.
pub(crate) fn brute_force(x: &[u8], p: &[u8]) -> Vec<usize> {
    if p.is_empty() {
        return (0..=x.len()).collect();
    }
    if p.len() > x.len() {
        return Vec::new();
    }
    x.windows(p.len())
        .enumerate()
        .filter(|(_, w)| *w == p)
        .map(|(i, _)| i)
        .collect()
}

/// Suffix starts of `x` sorted lexicographically, the sentinel-only suffix first.
pub(crate) fn sorted_suffixes(x: &[u8]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..=x.len()).collect();
    // a proper prefix sorts first, which is what the sentinel gives
    idx.sort_by(|&i, &j| x[i..].cmp(&x[j..]));
    idx
}

pub(crate) fn sorted_hits(st: &SuffixTree, p: &[u8]) -> Vec<usize> {
    let mut v: Vec<usize> = st.search(p).collect();
    v.sort_unstable();
    v
}

fn structured_inputs() -> Vec<String> {
    let mut inputs: Vec<String> = (1..14).map(fibonacci_string).collect();
    inputs.extend((1..50).map(|n| "a".repeat(n)));
    inputs.extend((1..20).map(|n| "ab".repeat(n)));
    inputs.push("abcabxabcd".to_string());
    inputs.push("mississippi".to_string());
    inputs
}

#[test]
fn fibonacci_words() {
    assert_eq!(fibonacci_string(1), "b");
    assert_eq!(fibonacci_string(2), "a");
    assert_eq!(fibonacci_string(5), "abaab");
    assert_eq!(fibonacci_string(6), "abaababa");
}

#[test]
fn structured_inputs_build_identical_trees() {
    for x in structured_inputs() {
        let naive = SuffixTree::naive(x.as_bytes()).unwrap();
        let linear = SuffixTree::mccreight(x.as_bytes()).unwrap();
        assert!(naive == linear, "constructions differ on {:?}", x);
        assert_eq!(naive.node_count(), linear.node_count());
    }
}

#[test]
fn structured_inputs_have_sorted_leaves() {
    for x in structured_inputs() {
        for algo in ALGOS {
            let st = SuffixTree::build(x.as_bytes(), algo).unwrap();
            let leaves: Vec<usize> = st.leaves().collect();
            assert_eq!(leaves, sorted_suffixes(x.as_bytes()), "{} on {:?}", algo, x);
        }
    }
}

#[test]
fn structured_inputs_find_every_occurrence() {
    for x in structured_inputs() {
        let xb = x.as_bytes();
        for algo in ALGOS {
            let st = SuffixTree::build(xb, algo).unwrap();
            for i in 0..xb.len() {
                for j in i..=xb.len().min(i + 6) {
                    assert_eq!(sorted_hits(&st, &xb[i..j]), brute_force(xb, &xb[i..j]));
                }
            }
        }
    }
}

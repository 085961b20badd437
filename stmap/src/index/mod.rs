//! 后缀树索引：朴素构建（正确性基准）与 McCreight 线性构建，以及模式查找。

pub mod mccreight;
pub mod naive;
pub mod node;
pub mod search;

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::util::alphabet::{map_sequence_with_limit, Alphabet, MAX_SYMBOLS};
use crate::util::subseq::SubSeq;
use node::{Arena, Leaves, NodeId, NodeRef};

pub use search::Matches;

/// Construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    Naive,
    #[default]
    McCreight,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Algorithm::Naive),
            "mccreight" | "linear" => Ok(Algorithm::McCreight),
            other => Err(format!("unknown construction algorithm '{}' (expected naive or mccreight)", other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Naive => f.write_str("naive"),
            Algorithm::McCreight => f.write_str("mccreight"),
        }
    }
}

/// 不可变的后缀树：节点 arena、根、带哨兵的编码序列及其字母表。
#[derive(Debug, Clone)]
pub struct SuffixTree {
    arena: Arena,
    root: NodeId,
    source: SubSeq<u8>,
    alphabet: Alphabet,
}

impl SuffixTree {
    pub fn build(text: &[u8], algorithm: Algorithm) -> Result<Self> {
        Self::build_with_limit(text, algorithm, MAX_SYMBOLS)
    }

    /// Like [`SuffixTree::build`], rejecting texts with more than `max_symbols` distinct bytes.
    pub fn build_with_limit(text: &[u8], algorithm: Algorithm, max_symbols: usize) -> Result<Self> {
        let (source, alphabet) = map_sequence_with_limit(text, max_symbols)?;
        let (arena, root) = match algorithm {
            Algorithm::Naive => naive::build(&source)?,
            Algorithm::McCreight => mccreight::build(&source)?,
        };
        Ok(Self { arena, root, source, alphabet })
    }

    pub fn naive(text: &[u8]) -> Result<Self> {
        Self::build(text, Algorithm::Naive)
    }

    pub fn mccreight(text: &[u8]) -> Result<Self> {
        Self::build(text, Algorithm::McCreight)
    }

    /// Length of the indexed text, excluding the sentinel.
    pub fn len(&self) -> usize {
        self.source.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The sentinel-terminated mapped text.
    pub fn source(&self) -> &SubSeq<u8> {
        &self.source
    }

    pub fn root(&self) -> NodeRef<'_> {
        self.arena.node_ref(self.root)
    }

    /// Suffix starts in lexicographic order of the suffixes (the suffix array).
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(&self.arena, self.root)
    }
}

impl PartialEq for SuffixTree {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl Eq for SuffixTree {}

//! # stmap
//!
//! 基于后缀树的精确匹配 read 比对器。
//!
//! 本 crate 提供：
//!
//! - **字母表映射**：把参考序列压缩为稠密编码并追加唯一哨兵
//! - **常数时间切片**：所有边标签都是共享底层序列的 [`util::subseq::SubSeq`] 视图
//! - **后缀树构建**：朴素 O(n²) 构建（正确性基准）与 McCreight 线性构建
//! - **模式查找**：包含判断与全部出现位置的惰性枚举
//! - **比对驱动**：FASTA 参考 + simple FASTQ reads → simple-SAM 输出
//!
//! ## 快速示例
//!
//! ```rust
//! use stmap::index::{Algorithm, SuffixTree};
//!
//! let st = SuffixTree::build(b"mississippi", Algorithm::McCreight).unwrap();
//! assert!(st.contains(b"iss"));
//! assert!(!st.contains(b"sss"));
//!
//! let mut hits: Vec<usize> = st.search(b"ssi").collect();
//! hits.sort_unstable();
//! assert_eq!(hits, vec![2, 5]);
//!
//! // 两种构建得到结构相同的树
//! assert_eq!(st, SuffixTree::build(b"mississippi", Algorithm::Naive).unwrap());
//! ```
//!
//! ## 模块说明
//!
//! - [`util`] — 字母表映射与 `SubSeq` 视图
//! - [`index`] — 后缀树节点模型、两种构建算法与查找
//! - [`io`] — FASTA / simple FASTQ 解析与 simple-SAM 输出
//! - [`map`] — 参考索引与 reads 比对驱动
//! - [`error`] — 引擎错误类型

pub mod error;
pub mod index;
pub mod io;
pub mod map;
pub mod util;

#[cfg(test)]
mod tests;

pub use error::StError;
pub use index::{Algorithm, SuffixTree};

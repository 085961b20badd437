//! 演示如何在 library 模式下用后缀树做精确匹配。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_map
//! ```

use stmap::index::{Algorithm, SuffixTree};
use stmap::io::sam;

fn main() {
    // 1. 参考序列
    let reference = b"ACGTACGTAGCTGATCGTAGCTAGCTAGCTGATCGTAGCTAGCTAGCTGAT";
    println!("参考序列: {}", String::from_utf8_lossy(reference));
    println!("参考长度: {} bp", reference.len());

    // 2. 构建后缀树（两种算法结果一致）
    let st = SuffixTree::build(reference, Algorithm::McCreight).expect("reference has no NUL bytes");
    let oracle = SuffixTree::build(reference, Algorithm::Naive).expect("reference has no NUL bytes");
    println!("后缀树构建完成：{} 个节点，字母表大小 {}", st.node_count(), st.alphabet().len());
    println!("与朴素构建一致: {}", st == oracle);

    // 3. 包含判断
    for p in [&b"GCTGATC"[..], b"GGGG", b"ACGTN"] {
        println!("contains('{}') = {}", String::from_utf8_lossy(p), st.contains(p));
    }

    // 4. 所有出现位置，按 simple-SAM 输出
    let read = b"TAGCTAGC";
    let mut hits: Vec<usize> = st.search(read).collect();
    hits.sort_unstable();
    println!("\n'{}' 出现 {} 次:", String::from_utf8_lossy(read), hits.len());
    let mut out = std::io::stdout();
    for pos in hits {
        sam::write_record(&mut out, "read1", "ref1", pos, &sam::exact_cigar(read.len()), read)
            .expect("stdout is writable");
    }

    // 5. 前 5 个最小后缀（即后缀数组前缀）
    let first: Vec<usize> = st.leaves().take(5).collect();
    println!("\n最小的 5 个后缀起点: {:?}", first);
}

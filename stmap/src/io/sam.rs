use anyhow::Result;
use std::io::Write;

/// CIGAR of an exact, gap-free match of `len` bases.
pub fn exact_cigar(len: usize) -> String {
    format!("{}M", len)
}

/// Writes one simple-SAM line: read name, reference name, 1-based position,
/// CIGAR and the read sequence, tab separated. `pos` is 0-based.
pub fn write_record<W: Write>(
    out: &mut W,
    qname: &str,
    rname: &str,
    pos: usize,
    cigar: &str,
    seq: &[u8],
) -> Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}",
        qname,
        rname,
        pos + 1,
        cigar,
        String::from_utf8_lossy(seq),
    )?;
    Ok(())
}

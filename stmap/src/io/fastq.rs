use anyhow::{anyhow, Result};
use std::io::BufRead;

/// A read from a simple FASTQ file. `qual` is only present for four-line records.
#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub id: String,
    pub seq: Vec<u8>,
    pub qual: Option<Vec<u8>>,
}

/// Reader for "simple FASTQ": `@name` followed by the sequence line.
/// A `+` line right after the sequence pulls in the quality line as well,
/// so regular four-line FASTQ works too.
pub struct FastqReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    line_no: usize,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), done: false, line_no: 0 }
    }

    fn read_line(&mut self) -> Result<usize> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        if n > 0 { self.line_no += 1; }
        Ok(n)
    }

    pub fn next_record(&mut self) -> Result<Option<FastqRecord>> {
        if self.done { return Ok(None); }

        // header line starting with '@', blank lines in between are skipped
        loop {
            if self.read_line()? == 0 { self.done = true; return Ok(None); }
            if !self.buf.trim().is_empty() { break; }
        }
        let Some(header) = self.buf.trim().strip_prefix('@') else {
            return Err(anyhow!("line {}: FASTQ header not starting with '@'", self.line_no));
        };
        let id = header.split_whitespace().next().unwrap_or("").to_string();

        // sequence line
        if self.read_line()? == 0 {
            return Err(anyhow!("line {}: unexpected EOF after header of '{}'", self.line_no, id));
        }
        let seq = self.buf.trim().as_bytes().to_vec();

        // optional plus + quality lines
        let mut qual = None;
        if self.reader.fill_buf()?.first() == Some(&b'+') {
            self.read_line()?;
            if self.read_line()? == 0 {
                return Err(anyhow!("line {}: missing quality line for '{}'", self.line_no, id));
            }
            let q = self.buf.trim_end().as_bytes().to_vec();
            if q.len() != seq.len() {
                return Err(anyhow!("line {}: seq/qual length mismatch for '{}'", self.line_no, id));
            }
            qual = Some(q);
        }

        Ok(Some(FastqRecord { id, seq, qual }))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

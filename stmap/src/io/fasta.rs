use anyhow::Result;
use log::warn;
use std::io::BufRead;

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

/// Reader over `>`-headed records. Lines are handled as raw bytes; anything
/// before the first header is ignored.
pub struct FastaReader<R: BufRead> {
    reader: R,
    line: Vec<u8>,
    /// header of the next record, already consumed while reading the previous one
    pending: Option<Vec<u8>>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: Vec::new(), pending: None }
    }

    /// Loads the next line without its line terminator; `false` at EOF.
    fn next_line(&mut self) -> Result<bool> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }
        while matches!(self.line.last(), Some(b'\n' | b'\r')) {
            self.line.pop();
        }
        Ok(true)
    }

    fn header_of_line(&self) -> Option<Vec<u8>> {
        self.line.strip_prefix(b">").map(<[u8]>::to_vec)
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        let header = match self.pending.take() {
            Some(h) => h,
            None => loop {
                if !self.next_line()? {
                    return Ok(None);
                }
                if let Some(h) = self.header_of_line() {
                    break h;
                }
            },
        };
        let (id, desc) = parse_header(&header);

        let mut seq = Vec::new();
        while self.next_line()? {
            if let Some(h) = self.header_of_line() {
                self.pending = Some(h);
                break;
            }
            seq.extend(self.line.iter().copied().filter(|b| !b.is_ascii_whitespace()));
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

/// Splits a header into its name (first token) and optional description.
fn parse_header(header: &[u8]) -> (String, Option<String>) {
    let text = String::from_utf8_lossy(header);
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((id, rest)) => {
            let desc = rest.trim();
            (id.to_string(), (!desc.is_empty()).then(|| desc.to_string()))
        }
        None => (text.to_string(), None),
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Reads every record, in file order. A repeated name replaces the earlier sequence.
pub fn read_genome<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>> {
    let mut genome: Vec<FastaRecord> = Vec::new();
    for rec in FastaReader::new(reader) {
        let rec = rec?;
        match genome.iter().position(|r| r.id == rec.id) {
            Some(i) => {
                warn!("duplicate reference name '{}', keeping the later sequence", rec.id);
                genome[i] = rec;
            }
            None => genome.push(rec),
        }
    }
    Ok(genome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_simple_fasta() {
        let data = b">chr1 first\nACgTNN\n>chr2\nAAA\n";
        let cursor = Cursor::new(&data[..]);
        let mut r = FastaReader::new(cursor);

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc.as_deref(), Some("first"));
        assert_eq!(r1.seq, b"ACgTNN");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "chr2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, b"AAA");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_crlf_and_whitespace() {
        let data = b">chr1 desc\r\nAC g t n\r\n acgt\r\n>chr2 \r\n N N N \r\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc.as_deref(), Some("desc"));
        assert_eq!(r1.seq, b"ACgtnacgt");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "chr2");
        assert_eq!(r2.seq, b"NNN");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_leading_junk() {
        let data = b"\nnot a record\n>chr1\nACGT\n";
        let recs: Vec<FastaRecord> = FastaReader::new(Cursor::new(&data[..]))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, "chr1");
        assert_eq!(recs[0].seq, b"ACGT");
    }

    #[test]
    fn headers_and_raw_bytes() {
        assert_eq!(parse_header(b" chr3  some  words "), ("chr3".to_string(), Some("some  words".to_string())));
        assert_eq!(parse_header(b"chrM\t"), ("chrM".to_string(), None));
        assert_eq!(parse_header(b""), (String::new(), None));

        // sequence bytes need not be UTF-8
        let data = b">x\nA\xffC\n>y";
        let recs: Vec<FastaRecord> = FastaReader::new(Cursor::new(&data[..]))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(recs[0].seq, vec![b'A', 0xff, b'C']);
        assert_eq!(recs[1].id, "y");
        assert!(recs[1].seq.is_empty());
    }

    #[test]
    fn genome_keeps_file_order_and_last_duplicate() {
        let data = b">b\nGG\n>a\nCC\n>b\nTT\n>empty\n";
        let genome = read_genome(Cursor::new(&data[..])).unwrap();
        let names: Vec<&str> = genome.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "empty"]);
        assert_eq!(genome[0].seq, b"TT");
        assert!(genome[2].seq.is_empty());
    }
}

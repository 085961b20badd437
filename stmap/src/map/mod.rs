use anyhow::{Context, Result};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::io::{BufRead, Write};
use std::time::Instant;

use crate::index::{Algorithm, SuffixTree};
use crate::io::fasta::{read_genome, FastaRecord};
use crate::io::fastq::FastqReader;
use crate::io::sam;
use crate::util::alphabet::MAX_SYMBOLS;

/// Mapping options collected from the command line.
#[derive(Debug, Clone, Copy)]
pub struct MapOpt {
    pub algorithm: Algorithm,
    /// Threads used to index references; 0 lets rayon decide.
    pub threads: usize,
    pub max_symbols: usize,
}

impl Default for MapOpt {
    fn default() -> Self {
        Self { algorithm: Algorithm::McCreight, threads: 1, max_symbols: MAX_SYMBOLS }
    }
}

/// One indexed reference sequence.
#[derive(Debug)]
pub struct Reference {
    pub name: String,
    pub tree: SuffixTree,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MapStats {
    pub reads: usize,
    /// Reads with at least one exact hit.
    pub mapped_reads: usize,
    pub records: usize,
    /// Empty reads; each one is reported at every reference position.
    pub empty_reads: usize,
}

/// Builds one suffix tree per reference. Trees are built concurrently, each
/// one sequentially; references that fail alphabet mapping are skipped.
/// The result keeps the input order.
pub fn index_genome(records: Vec<FastaRecord>, opt: &MapOpt) -> Result<Vec<Reference>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opt.threads)
        .build()
        .context("cannot start indexing thread pool")?;
    let built: Vec<Option<Reference>> =
        pool.install(|| records.into_par_iter().map(|rec| index_reference(rec, opt)).collect());
    Ok(built.into_iter().flatten().collect())
}

fn index_reference(rec: FastaRecord, opt: &MapOpt) -> Option<Reference> {
    let t0 = Instant::now();
    match SuffixTree::build_with_limit(&rec.seq, opt.algorithm, opt.max_symbols) {
        Ok(tree) => {
            info!(
                "indexed '{}': {} bp, {} nodes, {} symbols ({}, {:.3}s)",
                rec.id,
                tree.len(),
                tree.node_count(),
                tree.alphabet().len(),
                opt.algorithm,
                t0.elapsed().as_secs_f64(),
            );
            Some(Reference { name: rec.id, tree })
        }
        Err(e) => {
            warn!("skipping reference '{}': {}", rec.id, e);
            None
        }
    }
}

/// Streams reads and writes one simple-SAM line per exact occurrence:
/// reads in file order, then references in genome order, then positions ascending.
pub fn map_reads<R: BufRead, W: Write>(refs: &[Reference], reads: R, out: &mut W) -> Result<MapStats> {
    let mut stats = MapStats::default();

    for rec in FastqReader::new(reads) {
        let rec = rec?;
        stats.reads += 1;
        if rec.seq.is_empty() {
            // the empty pattern occurs at every position, sentinel included
            warn!("read '{}' is empty and matches every position", rec.id);
            stats.empty_reads += 1;
        }

        let cigar = sam::exact_cigar(rec.seq.len());
        let mut hits = 0usize;
        for r in refs {
            let mut positions: Vec<usize> = r.tree.search(&rec.seq).collect();
            positions.sort_unstable();
            for pos in positions {
                sam::write_record(out, &rec.id, &r.name, pos, &cigar, &rec.seq)?;
                hits += 1;
            }
        }
        debug!("read '{}': {} hits", rec.id, hits);
        if hits > 0 {
            stats.mapped_reads += 1;
        }
        stats.records += hits;
    }

    out.flush()?;
    Ok(stats)
}

/// Indexes `genome_path` and maps every read of `reads_path` against it.
pub fn map_files(genome_path: &str, reads_path: &str, out_path: Option<&str>, opt: MapOpt) -> Result<MapStats> {
    let fh = std::fs::File::open(genome_path)
        .with_context(|| format!("cannot open reference FASTA '{}'", genome_path))?;
    let records = read_genome(std::io::BufReader::new(fh))
        .with_context(|| format!("cannot parse reference FASTA '{}'", genome_path))?;
    if records.is_empty() {
        anyhow::bail!("FASTA file '{}' contains no sequences", genome_path);
    }

    let t0 = Instant::now();
    let refs = index_genome(records, &opt)?;
    if refs.is_empty() {
        anyhow::bail!("no reference in '{}' could be indexed", genome_path);
    }
    info!("indexed {} references in {:.3}s", refs.len(), t0.elapsed().as_secs_f64());

    let fq = std::fs::File::open(reads_path)
        .with_context(|| format!("cannot open reads file '{}'", reads_path))?;
    let reads = std::io::BufReader::new(fq);

    let mut out: Box<dyn Write> = if let Some(p) = out_path {
        let f = std::fs::File::create(p).with_context(|| format!("cannot create output '{}'", p))?;
        Box::new(std::io::BufWriter::new(f))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };

    let t1 = Instant::now();
    let stats = map_reads(&refs, reads, &mut out)
        .with_context(|| format!("mapping reads from '{}' failed", reads_path))?;
    info!(
        "mapped {}/{} reads, {} records written ({:.3}s)",
        stats.mapped_reads,
        stats.reads,
        stats.records,
        t1.elapsed().as_secs_f64(),
    );
    if stats.empty_reads > 0 {
        warn!("{} empty reads were reported at every position", stats.empty_reads);
    }
    Ok(stats)
}

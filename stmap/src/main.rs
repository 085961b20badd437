use anyhow::Result;
use chrono::Local;
use clap::{ArgAction, Parser};
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

use stmap::index::Algorithm;
use stmap::map::{self, MapOpt};
use stmap::util::alphabet::MAX_SYMBOLS;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "stmap", author, version, about = "Exact read mapping with suffix trees", arg_required_else_help = true)]
struct Cli {
    /// Reference FASTA file
    genome: String,
    /// Reads file (simple FASTQ; four-line FASTQ also accepted)
    reads: String,
    /// Output simple-SAM path (stdout if omitted)
    #[arg(short, long)]
    out: Option<String>,
    /// Suffix tree construction: mccreight or naive
    #[arg(short = 'a', long, default_value_t = Algorithm::McCreight)]
    algorithm: Algorithm,
    /// Threads used to index references (0 = all cores)
    #[arg(short = 't', long = "threads", default_value_t = 1)]
    threads: usize,
    /// Largest number of distinct symbols accepted in a reference
    #[arg(long = "max-symbols", default_value_t = MAX_SYMBOLS)]
    max_symbols: usize,
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_log(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Warn,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_log(cli.verbose, cli.quiet);
    log::debug!("{:?}", cli);

    let opt = MapOpt {
        algorithm: cli.algorithm,
        threads: cli.threads,
        max_symbols: cli.max_symbols,
    };
    map::map_files(&cli.genome, &cli.reads, cli.out.as_deref(), opt)?;
    Ok(())
}

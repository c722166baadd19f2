//! vmsim command-line interface.
//!
//! Translates every logical address in an address file against a backing
//! store image, printing one line per access and a statistics summary.
//!
//! ```text
//! vmsim BACKING_STORE.bin addresses.txt --tlb-policy fifo --frames 64
//! ```

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vmsim::common::config::{DEFAULT_FRAME_COUNT, DEFAULT_TLB_ENTRIES};
use vmsim::input::AddressReader;
use vmsim::{EvictionPolicy, FileBackingStore, Result, SimConfig, Translator};

#[derive(Parser, Debug)]
#[command(
    name = "vmsim",
    version,
    about = "Paged virtual-memory translation simulator",
    long_about = "Translate 16-bit logical addresses through a TLB and page table, \
                  demand-paging from a backing store image.\n\n\
                  Logging goes to stderr and is controlled by RUST_LOG (default: warn)."
)]
struct Cli {
    /// Backing store image (256 pages of 256 bytes).
    backing_store: PathBuf,

    /// Logical addresses to translate, one integer per line.
    addresses: PathBuf,

    /// Number of physical frames.
    #[arg(long, default_value_t = DEFAULT_FRAME_COUNT)]
    frames: usize,

    /// Number of TLB entries.
    #[arg(long, default_value_t = DEFAULT_TLB_ENTRIES)]
    tlb_entries: usize,

    /// TLB replacement policy (fifo or lru).
    #[arg(long, default_value_t = EvictionPolicy::Lru)]
    tlb_policy: EvictionPolicy,

    /// Frame replacement policy (fifo or lru).
    #[arg(long, default_value_t = EvictionPolicy::Lru)]
    frame_policy: EvictionPolicy,

    /// Only print the final statistics.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vmsim: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SimConfig::new()
        .with_frame_count(cli.frames)
        .with_tlb_entries(cli.tlb_entries)
        .with_tlb_policy(cli.tlb_policy)
        .with_frame_policy(cli.frame_policy);
    config.validate()?;

    // Both sources are opened before any translation happens
    let backing_store = FileBackingStore::open(&cli.backing_store)?;
    let addresses = AddressReader::open(&cli.addresses)?;

    let mut translator = Translator::new(config, backing_store)?;
    info!(config = ?translator.config(), "starting simulation");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for address in addresses.skip_malformed() {
        let access = translator.translate(address?)?;
        if !cli.quiet {
            writeln!(out, "{}", access)?;
        }
    }

    let stats = translator.stats();
    writeln!(out)?;
    writeln!(out, "{}", stats)?;
    out.flush()?;

    info!(
        frame_evictions = stats.frame_evictions,
        tlb_invalidations = stats.tlb_invalidations,
        "simulation finished"
    );
    Ok(())
}

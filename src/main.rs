mod bam_input;
mod block;
mod cli;
mod decompose;
mod pipeline;
mod types;
mod window;

use anyhow::Result;
use clap::Parser;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // Initialize tracing subscriber
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.quiet {
            EnvFilter::new("warn")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut bam = bam_input::open_bam(&args.in_bam)?;
    let stats = pipeline::run(&args, &mut bam)?;
    tracing::info!(
        total_reads = stats.total_reads,
        unmapped_reads = stats.unmapped_reads,
        total_blocks = stats.total_blocks,
        windowed_reads = stats.windowed_reads,
        "cleaver-rs: processing complete"
    );
    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cleaver-rs",
    about = "Decompose spliced BAM alignments into coordinate-annotated read blocks",
    version
)]
pub struct Args {
    /// Input BAM with aligned reads
    pub in_bam: PathBuf,

    /// Output TSV path (stdout if omitted)
    #[arg(short = 'o', long = "out", value_name = "TSV")]
    pub out_tsv: Option<PathBuf>,

    /// Read bases consumed before the window opens
    #[arg(long, default_value_t = 0, value_name = "POS")]
    pub from: u32,

    /// Emit only a window of this many read bases per alignment
    #[arg(long, value_name = "LEN")]
    pub window: Option<u32>,

    /// Set logging level to WARN
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

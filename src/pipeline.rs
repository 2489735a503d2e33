// pipeline.rs is used only by the binary.
#![allow(dead_code)]
use crate::bam_input::{self, BamInput};
use crate::block::{op_char, to_cigar_string};
use crate::cli::Args;
use crate::decompose::read_blocks;
use crate::types::{HashMap, HashMapExt};
use crate::window::window_blocks;
use anyhow::Result;
use rust_htslib::bam::Read as HtsRead;
use std::fs::File;
use std::io::{self, BufWriter, Write};

#[derive(Debug, Default)]
pub struct Stats {
    pub total_reads: u64,
    pub unmapped_reads: u64,
    pub total_blocks: u64,
    pub windowed_reads: u64,
}

/// Decompose every mapped record in the input into read blocks and emit one
/// TSV row per block. With `--window`, each alignment is first reduced to
/// the requested read-coordinate window.
pub fn run(args: &Args, bam: &mut BamInput) -> Result<Stats> {
    let mut out: Box<dyn Write> = match &args.out_tsv {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    writeln!(
        out,
        "read\treference\top\tlength\tread_start\tref_start\tref_stop\tref_len"
    )?;

    let mut stats = Stats::default();
    let mut blocks_by_op: HashMap<char, u64> = HashMap::new();

    let mut record = rust_htslib::bam::Record::new();
    while let Some(result) = bam.reader.read(&mut record) {
        result?;
        stats.total_reads += 1;
        if record.is_unmapped() || record.pos() < 0 {
            stats.unmapped_reads += 1;
            continue;
        }

        let name = bam_input::read_name(&record);
        let ops = bam_input::record_ops(&record);
        let mut blocks = read_blocks(&ops, bam_input::alignment_start(&record), &name)?;

        if let Some(window) = args.window {
            blocks = window_blocks(&blocks, args.from, window);
            stats.windowed_reads += 1;
        }

        tracing::debug!(read = %name, cigar = %to_cigar_string(&blocks), "decomposed");

        let refname = usize::try_from(record.tid())
            .ok()
            .and_then(|tid| bam.target_names.get(tid))
            .map(String::as_str)
            .unwrap_or("*");

        for block in &blocks {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                name,
                refname,
                op_char(block.kind()),
                block.length(),
                block.read_start(),
                block.reference_start(),
                block.reference_stop(),
                block.reference_length(),
            )?;
            *blocks_by_op.entry(op_char(block.kind())).or_insert(0) += 1;
            stats.total_blocks += 1;
        }
    }
    out.flush()?;

    let mut per_op: Vec<(char, u64)> = blocks_by_op.into_iter().collect();
    per_op.sort_unstable();
    for (op, count) in per_op {
        tracing::info!(op = %op, count, "blocks by operation");
    }

    Ok(stats)
}

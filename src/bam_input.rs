// bam_input.rs is used only by the binary (BAM I/O path).
#![allow(dead_code)]
use anyhow::Result;
use noodles::sam::alignment::record::cigar::op::Kind;
use rust_htslib::bam;
use rust_htslib::bam::Read as HtsRead;
use std::path::Path;

pub struct BamInput {
    /// Reference sequence names, indexable by the record's target id.
    pub target_names: Vec<String>,
    pub reader: bam::Reader,
}

pub fn open_bam(path: &Path) -> Result<BamInput> {
    let reader = bam::Reader::from_path(path)?;
    let target_names = {
        let header = reader.header();
        header
            .target_names()
            .iter()
            .map(|n| String::from_utf8_lossy(n).to_string())
            .collect()
    };
    Ok(BamInput {
        target_names,
        reader,
    })
}

/// A record's CIGAR as `(length, op kind)` pairs in the noodles vocabulary.
pub fn record_ops(record: &bam::Record) -> Vec<(u32, Kind)> {
    use rust_htslib::bam::record::Cigar;
    record
        .cigar()
        .iter()
        .map(|op| match op {
            Cigar::Match(n) => (*n, Kind::Match),
            Cigar::Ins(n) => (*n, Kind::Insertion),
            Cigar::Del(n) => (*n, Kind::Deletion),
            Cigar::RefSkip(n) => (*n, Kind::Skip),
            Cigar::SoftClip(n) => (*n, Kind::SoftClip),
            Cigar::HardClip(n) => (*n, Kind::HardClip),
            Cigar::Pad(n) => (*n, Kind::Pad),
            Cigar::Equal(n) => (*n, Kind::SequenceMatch),
            Cigar::Diff(n) => (*n, Kind::SequenceMismatch),
        })
        .collect()
}

/// 1-based alignment start matching the block builder's coordinate
/// convention. `pos()` is 0-based.
pub fn alignment_start(record: &bam::Record) -> u32 {
    (record.pos() + 1) as u32
}

pub fn read_name(record: &bam::Record) -> String {
    String::from_utf8_lossy(record.qname()).to_string()
}

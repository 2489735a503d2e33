use cleaver_rs::{read_blocks, to_cigar_string, window_blocks, ReadBlock};
use noodles::sam::alignment::record::cigar::op::Kind;

fn spliced() -> Vec<ReadBlock> {
    let ops = [(10, Kind::Match), (20, Kind::Skip), (10, Kind::Match)];
    read_blocks(&ops, 1, "r1").unwrap()
}

/// A window opened mid-exon and spanning the junction keeps the whole skip
/// and spends its budget on read bases only.
#[test]
fn window_spans_a_skip_junction() {
    let windowed = window_blocks(&spliced(), 5, 8);

    assert_eq!(to_cigar_string(&windowed), "5M20N3M");
    assert_eq!(
        (windowed[0].read_start(), windowed[0].reference_start()),
        (1, 6)
    );
    assert_eq!(
        (windowed[1].read_start(), windowed[1].reference_start()),
        (6, 11)
    );
    assert_eq!(
        (windowed[2].read_start(), windowed[2].reference_start()),
        (6, 31)
    );
}

/// A budget that runs out exactly at the exon boundary stops before the
/// skip.
#[test]
fn window_stops_at_exon_boundary() {
    let windowed = window_blocks(&spliced(), 0, 10);
    assert_eq!(to_cigar_string(&windowed), "10M");
}

#[test]
fn window_within_one_block() {
    let windowed = window_blocks(&spliced(), 0, 4);

    assert_eq!(to_cigar_string(&windowed), "4M");
    assert_eq!(windowed[0].reference_start(), 1);
}

/// A skip with no read bases after it inside the window is dropped.
#[test]
fn trailing_skip_is_not_emitted() {
    let blocks = read_blocks(&[(10, Kind::Match), (20, Kind::Skip)], 1, "r1").unwrap();
    let windowed = window_blocks(&blocks, 0, 15);

    assert_eq!(to_cigar_string(&windowed), "10M");
}

/// Blocks wholly before the window are passed over; here the window opens
/// right after a 5-base soft clip.
#[test]
fn window_opens_after_a_soft_clip() {
    let blocks = read_blocks(&[(5, Kind::SoftClip), (10, Kind::Match)], 100, "r1").unwrap();
    let windowed = window_blocks(&blocks, 5, 10);

    assert_eq!(to_cigar_string(&windowed), "10M");
    assert_eq!(windowed[0].read_start(), 1);
    assert_eq!(windowed[0].reference_start(), 100);
}

#[test]
fn window_larger_than_alignment_takes_everything() {
    let windowed = window_blocks(&spliced(), 0, 100);
    assert_eq!(to_cigar_string(&windowed), "10M20N10M");
}

use crate::block::{op_char, ReadBlock};
use anyhow::{anyhow, Result};
use noodles::sam::alignment::record::cigar::op::Kind;

/// Decompose a CIGAR into one block per operation.
///
/// Walks the ops left to right with two 1-based cursors: `read_base`
/// (starting at 1) and `ref_base` (starting at `alignment_start`). Each
/// block is stamped with the cursor values before its own advancement, then
/// the cursors move by the op's length:
///
/// - SoftClip, Insertion consume read bases only
/// - Skip, Deletion consume reference bases only
/// - Match, `=`, `X` consume both
///
/// Blocks are emitted 1:1 with the input ops, never merged or split. An
/// empty op list yields an empty sequence.
///
/// HardClip and Pad have no advancement rule here and abort the build;
/// `name` identifies the offending read in the error.
pub fn read_blocks(
    ops: &[(u32, Kind)],
    alignment_start: u32,
    name: &str,
) -> Result<Vec<ReadBlock>> {
    let mut blocks = Vec::with_capacity(ops.len());
    let mut read_base: u32 = 1;
    let mut ref_base: u32 = alignment_start;

    for &(length, kind) in ops {
        blocks.push(ReadBlock::new(read_base, ref_base, length, kind));

        match kind {
            Kind::SoftClip | Kind::Insertion => {
                read_base = read_base.saturating_add(length);
            }
            Kind::Skip | Kind::Deletion => {
                ref_base = ref_base.saturating_add(length);
            }
            Kind::Match | Kind::SequenceMatch | Kind::SequenceMismatch => {
                read_base = read_base.saturating_add(length);
                ref_base = ref_base.saturating_add(length);
            }
            Kind::HardClip | Kind::Pad => {
                return Err(anyhow!(
                    "no advancement rule for cigar op {} in read [{}]",
                    op_char(kind),
                    name
                ));
            }
        }
    }

    Ok(blocks)
}

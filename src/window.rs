use crate::block::ReadBlock;
use noodles::sam::alignment::record::cigar::op::Kind;

fn consumes_read(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::Match
            | Kind::Insertion
            | Kind::SoftClip
            | Kind::SequenceMatch
            | Kind::SequenceMismatch
    )
}

/// Extract a read-coordinate window from a block sequence.
///
/// `position_in_read` counts read bases consumed before the window opens;
/// `max_length` bounds the read bases the window may contain. Blocks wholly
/// before the window are passed over, as is any Skip or Deletion block the
/// window would otherwise open inside: a window is anchored to read bases,
/// never to the middle of an intron or deletion. From the first covered
/// block onward each block contributes its [`ReadBlock::sub_block`]
/// remainder; Skip and Deletion pass through whole and spend no budget.
/// A trailing Skip or Deletion with no read bases after it inside the
/// window is dropped.
pub fn window_blocks(
    blocks: &[ReadBlock],
    position_in_read: u32,
    max_length: u32,
) -> Vec<ReadBlock> {
    let mut out: Vec<ReadBlock> = Vec::new();
    let mut accumulated: u32 = 0;
    let mut remaining = max_length;

    for block in blocks {
        if remaining == 0 {
            break;
        }

        let position_in_block =
            (position_in_read + accumulated + 1).saturating_sub(block.read_start());
        if consumes_read(block.kind()) {
            if position_in_block >= block.length() {
                // wholly before the window
                continue;
            }
        } else if out.is_empty() {
            continue;
        }

        let sub = block.sub_block(accumulated, position_in_read, remaining);
        if consumes_read(sub.kind()) {
            accumulated += sub.length();
            remaining -= sub.length();
        }
        out.push(sub);
    }

    while out.last().map_or(false, |b| !consumes_read(b.kind())) {
        out.pop();
    }

    out
}

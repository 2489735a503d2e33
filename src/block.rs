use noodles::sam::alignment::record::cigar::op::Kind;

/// One contiguous run of a single CIGAR operation within an alignment.
/// A CIGAR of `15M5I30M` decomposes into three blocks.
///
/// `read_start` and `reference_start` are 1-based and stamped with the
/// builder's cursor values at the time the block was emitted. For operations
/// that consume no read bases (Skip, Deletion) `read_start` repeats the
/// position of the next read base rather than advancing through the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadBlock {
    read_start: u32,
    reference_start: u32,
    length: u32,
    kind: Kind,
}

impl ReadBlock {
    pub fn new(read_start: u32, reference_start: u32, length: u32, kind: Kind) -> Self {
        Self {
            read_start,
            reference_start,
            length,
            kind,
        }
    }

    /// 1-based position in read coordinates where this block begins.
    pub fn read_start(&self) -> u32 {
        self.read_start
    }

    /// 1-based position in reference coordinates where this block begins.
    pub fn reference_start(&self) -> u32 {
        self.reference_start
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Last reference position covered by this block.
    ///
    /// Computed as `reference_start + length - 1`, which is not reliable for
    /// Deletion blocks. Kept as-is: downstream consumers expect this exact
    /// formula.
    pub fn reference_stop(&self) -> u32 {
        self.reference_start + self.length - 1
    }

    /// Reference bases contributed by this block: zero for a Deletion, the
    /// block length otherwise.
    ///
    /// Note this is a reporting convention, not an advancement rule; the
    /// builder still moves its reference cursor across deletions.
    pub fn reference_length(&self) -> u32 {
        if self.kind == Kind::Deletion {
            0
        } else {
            self.length
        }
    }

    /// Extract the remainder of this block starting at a given position in
    /// the read, clamped to `max_length` read bases.
    ///
    /// `position_in_read` counts read bases consumed before the requested
    /// start and `accumulated_length` counts read bases already emitted into
    /// the sub-alignment under construction; together they locate the target
    /// position inside this block's span.
    ///
    /// Skip and Deletion blocks come back whole from the offset and
    /// `max_length` does not apply to them: an intron or deletion is never
    /// truncated mid-span. Soft-clipped bases carry no reference position, so
    /// a SoftClip sub-block keeps `reference_start` untouched (by convention
    /// it holds the next block's eventual reference start).
    ///
    /// Requesting a position beyond the block's span is not checked; the
    /// result clamps to a zero-length block and is meaningless. Callers that
    /// need safety must keep their requests within `length`.
    pub fn sub_block(
        &self,
        accumulated_length: u32,
        position_in_read: u32,
        max_length: u32,
    ) -> ReadBlock {
        // How far into this block's span the target falls, 1-based read
        // arithmetic applied uniformly across kinds; the branches below
        // compensate for ops whose read_start does not track read space.
        let position_in_block =
            (position_in_read + accumulated_length + 1).saturating_sub(self.read_start);

        match self.kind {
            Kind::Skip | Kind::Deletion => ReadBlock::new(
                accumulated_length + 1,
                self.reference_start + position_in_block,
                self.length.saturating_sub(position_in_block),
                self.kind,
            ),
            Kind::SoftClip => ReadBlock::new(
                accumulated_length + 1,
                self.reference_start,
                max_length.min(self.length.saturating_sub(position_in_block)),
                self.kind,
            ),
            _ => ReadBlock::new(
                accumulated_length + 1,
                self.reference_start + position_in_block,
                max_length.min(self.length.saturating_sub(position_in_block)),
                self.kind,
            ),
        }
    }
}

/// Render a block sequence back into compact CIGAR notation, e.g. `15M5I30M`.
pub fn to_cigar_string(blocks: &[ReadBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str(&block.length().to_string());
        out.push(op_char(block.kind()));
    }
    out
}

pub(crate) fn op_char(kind: Kind) -> char {
    match kind {
        Kind::Match => 'M',
        Kind::Insertion => 'I',
        Kind::Deletion => 'D',
        Kind::Skip => 'N',
        Kind::SoftClip => 'S',
        Kind::HardClip => 'H',
        Kind::Pad => 'P',
        Kind::SequenceMatch => '=',
        Kind::SequenceMismatch => 'X',
    }
}

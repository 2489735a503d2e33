//! cleaver-rs: decompose spliced BAM alignments into coordinate-annotated
//! read blocks.
//!
//! A CIGAR is walked into one [`ReadBlock`] per operation, each stamped with
//! the 1-based read and reference positions where it begins. Blocks support
//! length-bounded sub-block extraction, the primitive downstream tools use
//! to split a read at a splice junction or truncate it to a fixed window.
//!
//! # Library usage
//!
//! ```
//! use cleaver_rs::{read_blocks, to_cigar_string, window_blocks};
//! use noodles::sam::alignment::record::cigar::op::Kind;
//!
//! let ops = [(15, Kind::Match), (5, Kind::Insertion), (30, Kind::Match)];
//! let blocks = read_blocks(&ops, 100, "read1")?;
//! assert_eq!(to_cigar_string(&blocks), "15M5I30M");
//!
//! // First 20 read bases of the alignment:
//! let head = window_blocks(&blocks, 0, 20);
//! assert_eq!(to_cigar_string(&head), "15M5I");
//! # Ok::<(), anyhow::Error>(())
//! ```

// Internal modules — not part of the public API.
pub(crate) mod bam_input;
pub(crate) mod cli;
pub(crate) mod pipeline;
pub(crate) mod types;

// Public modules — stable API surface.
pub mod block;
pub mod decompose;
pub mod window;

// Flat re-exports for the most commonly used items.
pub use block::{to_cigar_string, ReadBlock};
pub use decompose::read_blocks;
pub use window::window_blocks;

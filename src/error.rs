//! Error types for the UF2 parser and Thumb disassembler.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DisasmError>;

/// Everything that can go wrong while reading a UF2 image.
///
/// `TruncatedInstruction` and `UnknownEncoding` are deliberately absent:
/// the decoder treats both as observable, non-fatal outcomes folded into
/// the normal `Instruction` return value rather than an error.
#[derive(Debug, Error)]
pub enum DisasmError {
    #[error("could not open input file: {0}")]
    InputOpen(#[from] std::io::Error),

    #[error("input length {len} is not a multiple of 512")]
    SizeUnaligned { len: usize },

    #[error("bad {which} magic: expected {expected:#010X}, observed {observed:#010X}")]
    BadMagic {
        which: &'static str,
        expected: u32,
        observed: u32,
    },

    #[error("region overlap at address {at:#010X}")]
    Overlap { at: u32 },
}

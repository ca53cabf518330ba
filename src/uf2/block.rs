//! Parsing of a single 512-byte UF2 block.

use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::{DisasmError, Result};
use crate::uf2::flags::FlagSet;

pub const BLOCK_SIZE: usize = 512;
pub const PAYLOAD_MAX: usize = 476;

const MAGIC1: u32 = 0x0A32_4655;
const MAGIC2: u32 = 0x9E5D_5157;
const MAGIC3: u32 = 0x0AB1_6F30;

/// One parsed UF2 block. `payload` borrows from the block's 512-byte
/// input slice; nothing is copied until regions are joined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block<'a> {
    pub flags: FlagSet,
    pub target_address: u32,
    pub payload_size: usize,
    pub seq_index: u32,
    pub total_blocks: u32,
    pub family_or_tag: u32,
    #[serde(skip)]
    pub payload: &'a [u8],
}

/// Parse exactly one 512-byte block. `data` must be `BLOCK_SIZE` bytes;
/// the caller (the driver) is responsible for chunking the input.
pub fn parse_block(data: &[u8]) -> Result<Block<'_>> {
    let mut cursor = ByteCursor::new(data);

    let (magic1, _) = cursor.read_u32_le();
    if magic1 != MAGIC1 {
        return Err(DisasmError::BadMagic {
            which: "magic1",
            expected: MAGIC1,
            observed: magic1,
        });
    }
    let (magic2, _) = cursor.read_u32_le();
    if magic2 != MAGIC2 {
        return Err(DisasmError::BadMagic {
            which: "magic2",
            expected: MAGIC2,
            observed: magic2,
        });
    }

    let (raw_flags, _) = cursor.read_u32_le();
    let (target_address, _) = cursor.read_u32_le();
    let (payload_size_raw, _) = cursor.read_u32_le();
    let (seq_index, _) = cursor.read_u32_le();
    let (total_blocks, _) = cursor.read_u32_le();
    let (family_or_tag, _) = cursor.read_u32_le();

    let payload_size = (payload_size_raw as usize).min(PAYLOAD_MAX);
    let payload_start = cursor.position() as usize;
    let payload = &data[payload_start..payload_start + payload_size];

    cursor.skip(PAYLOAD_MAX as u64);

    let (magic3, _) = cursor.read_u32_le();
    if magic3 != MAGIC3 {
        return Err(DisasmError::BadMagic {
            which: "magic3",
            expected: MAGIC3,
            observed: magic3,
        });
    }

    Ok(Block {
        flags: FlagSet::decode(raw_flags),
        target_address,
        payload_size,
        seq_index,
        total_blocks,
        family_or_tag,
        payload,
    })
}

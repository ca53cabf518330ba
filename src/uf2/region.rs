//! Coalescing blocks into maximal contiguous memory regions.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{DisasmError, Result};
use crate::uf2::block::Block;

/// A maximal contiguous run of block payloads in target-address space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub base_address: u32,
    pub bytes: Vec<u8>,
}

/// Sort blocks by address and coalesce adjacent ones into regions.
///
/// Two blocks sharing an address are a tie: the first one (post stable
/// sort) wins and the duplicate's payload is dropped, regardless of
/// whether the shared address is the region's start or a block boundary
/// further in. A block that starts strictly inside the span of an
/// already-absorbed block (not on one of its boundaries) is rejected as
/// an overlap.
pub fn join_regions(blocks: &[Block<'_>]) -> Result<Vec<Region>> {
    if blocks.is_empty() {
        return Ok(Vec::new());
    }

    let mut ordered: Vec<&Block<'_>> = blocks.iter().collect();
    ordered.sort_by_key(|b| b.target_address);

    let mut regions = Vec::new();
    let mut current = Region {
        base_address: ordered[0].target_address,
        bytes: ordered[0].payload.to_vec(),
    };
    let mut seen_addresses: HashSet<u32> = HashSet::new();
    seen_addresses.insert(ordered[0].target_address);

    for block in &ordered[1..] {
        let current_end = current.base_address + current.bytes.len() as u32;
        if block.target_address == current_end {
            current.bytes.extend_from_slice(block.payload);
            seen_addresses.insert(block.target_address);
        } else if block.target_address < current_end {
            if seen_addresses.contains(&block.target_address) {
                // duplicate of a block address already absorbed into this
                // region: keep the first, drop this one.
                continue;
            }
            return Err(DisasmError::Overlap {
                at: block.target_address,
            });
        } else {
            regions.push(current);
            current = Region {
                base_address: block.target_address,
                bytes: block.payload.to_vec(),
            };
            seen_addresses.clear();
            seen_addresses.insert(block.target_address);
        }
    }
    regions.push(current);

    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uf2::flags::FlagSet;

    fn block(addr: u32, payload: &'static [u8]) -> Block<'static> {
        Block {
            flags: FlagSet::empty(),
            target_address: addr,
            payload_size: payload.len(),
            seq_index: 0,
            total_blocks: 1,
            family_or_tag: 0,
            payload,
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(join_regions(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn contiguous_blocks_in_any_order_join_into_one_region() {
        let a = block(0x1000_0000, &[1, 2, 3, 4]);
        let b = block(0x1000_0004, &[5, 6]);
        let c = block(0x1000_0006, &[7, 8, 9]);

        for perm in [[0, 1, 2], [2, 1, 0], [1, 0, 2]] {
            let all = [a.clone(), b.clone(), c.clone()];
            let permuted: Vec<Block<'static>> = perm.iter().map(|&i| all[i].clone()).collect();
            let regions = join_regions(&permuted).unwrap();
            assert_eq!(regions.len(), 1);
            assert_eq!(regions[0].base_address, 0x1000_0000);
            assert_eq!(regions[0].bytes, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        }
    }

    #[test]
    fn gap_between_blocks_produces_two_regions() {
        let a = block(0x1000_0000, &[0u8; 256]);
        let b = block(0x1000_0200, &[0u8; 256]);
        let regions = join_regions(&[a, b]).unwrap();
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn adjacent_blocks_produce_one_region_s7() {
        let a = block(0x1000_0000, &[0xAAu8; 256]);
        let b = block(0x1000_0100, &[0xBBu8; 256]);
        let regions = join_regions(&[a, b]).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].base_address, 0x1000_0000);
        assert_eq!(regions[0].bytes.len(), 512);
    }

    #[test]
    fn duplicate_address_keeps_first() {
        let a = block(0x2000, &[1, 2]);
        let dup = block(0x2000, &[9, 9]);
        let regions = join_regions(&[a, dup]).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bytes, vec![1, 2]);
    }

    #[test]
    fn duplicate_of_non_initial_block_keeps_first() {
        let a = block(0x1000, &[1, 2, 3, 4]);
        let b = block(0x1004, &[5, 6]);
        let dup_of_b = block(0x1004, &[9, 9]);
        let c = block(0x1006, &[7, 8, 9]);

        let regions = join_regions(&[a, b, dup_of_b, c]).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].base_address, 0x1000);
        assert_eq!(regions[0].bytes, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn overlap_is_rejected() {
        let a = block(0x2000, &[1, 2, 3, 4]);
        let overlapping = block(0x2001, &[9, 9]);
        let err = join_regions(&[a, overlapping]).unwrap_err();
        assert!(matches!(err, DisasmError::Overlap { at: 0x2001 }));
    }
}

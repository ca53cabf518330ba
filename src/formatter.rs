//! Rendering of block headers, hex dumps, and per-region disassembly.

use crate::thumb::Instruction;
use crate::uf2::{Block, Region};

/// Renders the three per-block output sections. A default `format_block`
/// concatenates them, mirroring the way the teacher's payload formatter
/// composes its own per-field methods.
pub trait BlockFormatter {
    fn format_header(&self, block: &Block<'_>) -> String;
    fn format_hex_dump(&self, block: &Block<'_>) -> String;

    fn format_block(&self, block: &Block<'_>) -> String {
        format!(
            "{}\n{}",
            self.format_header(block),
            self.format_hex_dump(block)
        )
    }
}

/// Renders a region's disassembly section.
pub trait RegionFormatter {
    fn format_region_banner(&self, region: &Region) -> String;
    fn format_instruction_line(&self, addr: u32, instruction: &Instruction) -> String;

    fn format_region(&self, region: &Region, instructions: &[(u32, Instruction)]) -> String {
        let mut out = self.format_region_banner(region);
        out.push('\n');
        for (addr, inst) in instructions {
            out.push_str(&self.format_instruction_line(*addr, inst));
            out.push('\n');
        }
        out
    }
}

/// The sole concrete formatter: spec.md's literal plain-text line shapes.
pub struct PlainFormatter;

impl BlockFormatter for PlainFormatter {
    fn format_header(&self, block: &Block<'_>) -> String {
        format!(
            "flags={} family/tag={:#010X} size={} addr={:#010X} seq={}/{}",
            block.flags,
            block.family_or_tag,
            block.payload_size,
            block.target_address,
            block.seq_index + 1,
            block.total_blocks
        )
    }

    fn format_hex_dump(&self, block: &Block<'_>) -> String {
        hex_dump(block.payload)
    }
}

impl RegionFormatter for PlainFormatter {
    fn format_region_banner(&self, region: &Region) -> String {
        format!(
            "----------- REGION {:#06X}  {} bytes-----------",
            region.base_address,
            region.bytes.len()
        )
    }

    fn format_instruction_line(&self, addr: u32, instruction: &Instruction) -> String {
        let raw_width = if instruction.size == 2 { 4 } else { 8 };
        format!(
            "{:08X} {:0width$X} \t{}",
            addr,
            instruction.raw,
            instruction.text,
            width = raw_width
        )
    }
}

/// Two bytes per group, 16 bytes per row, tab-indented, matching the
/// original tool's hex dump convention.
fn hex_dump(payload: &[u8]) -> String {
    let mut out = String::new();
    for row in payload.chunks(16) {
        out.push('\t');
        for pair in row.chunks(2) {
            let encoded = hex::encode_upper(pair);
            out.push_str(&encoded);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

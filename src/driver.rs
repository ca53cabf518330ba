//! Orchestration: file bytes → blocks → regions → disassembly → stdout.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::cursor::ByteCursor;
use crate::error::{DisasmError, Result};
use crate::formatter::{BlockFormatter, PlainFormatter, RegionFormatter};
use crate::thumb::decode_one;
use crate::uf2::block::{parse_block, BLOCK_SIZE};
use crate::uf2::region::join_regions;

/// Read `path`, parse it as a UF2 image, and print the full block and
/// disassembly report to `out`. Returns `Err` only for the fatal error
/// kinds (`InputOpen`, `SizeUnaligned`); a `BadMagic` block halts
/// iteration but is reported through `out`, not as an `Err`.
pub fn run(path: &Path, out: &mut impl std::io::Write) -> Result<()> {
    info!(path = %path.display(), "reading UF2 image");
    let data = fs::read(path)?;

    if data.len() % BLOCK_SIZE != 0 {
        return Err(DisasmError::SizeUnaligned { len: data.len() });
    }

    let formatter = PlainFormatter;
    let mut blocks = Vec::new();

    for (index, chunk) in data.chunks(BLOCK_SIZE).enumerate() {
        match parse_block(chunk) {
            Ok(block) => {
                debug!(index, addr = %format!("{:#010X}", block.target_address), "parsed block");
                writeln!(out, "{}", formatter.format_block(&block))?;
                blocks.push(block);
            }
            Err(err @ DisasmError::BadMagic { .. }) => {
                warn!(index, %err, "bad magic, halting block iteration");
                writeln!(out, "ERROR: {err}")?;
                break;
            }
            Err(err) => return Err(err),
        }
    }

    info!(blocks = blocks.len(), "joining regions");
    let regions = join_regions(&blocks)?;
    info!(regions = regions.len(), "disassembling regions");

    for region in &regions {
        debug!(base = %format!("{:#010X}", region.base_address), len = region.bytes.len(), "region");
        let mut cursor = ByteCursor::new(&region.bytes);
        let mut lines = Vec::new();
        let mut addr = region.base_address;
        while let Some(instruction) = decode_one(&mut cursor) {
            if instruction.text == "???" {
                warn!(addr = %format!("{addr:#010X}"), "unknown encoding");
            }
            let size = instruction.size as u32;
            lines.push((addr, instruction));
            addr += size;
        }
        writeln!(out, "{}", formatter.format_region(region, &lines))?;
    }

    info!("finished disassembling UF2 image");
    Ok(())
}

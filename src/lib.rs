//! UF2 firmware image parsing and ARMv6-M Thumb disassembly.
//!
//! Two coupled subsystems make up the core: the [`uf2`] container parser
//! (block codec, flag decoding, region reassembly) and the [`thumb`]
//! instruction decoder. [`driver::run`] wires both together into the
//! behavior of the bundled CLI; [`formatter`] owns the output line shapes.

pub mod cursor;
pub mod driver;
pub mod error;
pub mod formatter;
pub mod thumb;
pub mod uf2;

pub use error::{DisasmError, Result};
pub use thumb::Instruction;
pub use uf2::{Block, FlagSet, Region};

//! Decoding of the UF2 block flags word.

use bitflags::bitflags;
use serde::Serialize;
use std::fmt;

bitflags! {
    /// The five flag bits the format defines. Unlisted bits are ignored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct FlagSet: u32 {
        const NOT_MAIN_FLASH        = 0x0000_0001;
        const FILE_CONTAINER        = 0x0000_1000;
        const FAMILY_ID_PRESENT     = 0x0000_2000;
        const CHECKSUM_PRESENT      = 0x0000_4000;
        const EXTENSION_TAGS_PRESENT = 0x0000_8000;
    }
}

impl FlagSet {
    /// Decode a raw 32-bit flags word. Total and idempotent: unrelated
    /// bits never change the result of a later decode.
    pub fn decode(raw: u32) -> FlagSet {
        FlagSet::from_bits_truncate(raw)
    }
}

impl fmt::Display for FlagSet {
    /// One character per set flag, in the fixed order `N,F,I,5,X`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(FlagSet::NOT_MAIN_FLASH) {
            write!(f, "N")?;
        }
        if self.contains(FlagSet::FILE_CONTAINER) {
            write!(f, "F")?;
        }
        if self.contains(FlagSet::FAMILY_ID_PRESENT) {
            write!(f, "I")?;
        }
        if self.contains(FlagSet::CHECKSUM_PRESENT) {
            write!(f, "5")?;
        }
        if self.contains(FlagSet::EXTENSION_TAGS_PRESENT) {
            write!(f, "X")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_bit_toggles_its_own_flag_only() {
        assert_eq!(FlagSet::decode(0x0000_0001), FlagSet::NOT_MAIN_FLASH);
        assert_eq!(FlagSet::decode(0x0000_1000), FlagSet::FILE_CONTAINER);
        assert_eq!(FlagSet::decode(0x0000_2000), FlagSet::FAMILY_ID_PRESENT);
        assert_eq!(FlagSet::decode(0x0000_4000), FlagSet::CHECKSUM_PRESENT);
        assert_eq!(
            FlagSet::decode(0x0000_8000),
            FlagSet::EXTENSION_TAGS_PRESENT
        );
    }

    #[test]
    fn unrelated_bits_are_ignored() {
        let decoded = FlagSet::decode(0xFFFF_0000 | 0x0000_1000);
        assert!(decoded.contains(FlagSet::FILE_CONTAINER));
        assert!(!decoded.contains(FlagSet::NOT_MAIN_FLASH));
    }

    #[test]
    fn display_order_is_nfi5x() {
        let all = FlagSet::all();
        assert_eq!(all.to_string(), "NFI5X");
    }

    #[test]
    fn display_empty_is_blank() {
        assert_eq!(FlagSet::empty().to_string(), "");
    }
}

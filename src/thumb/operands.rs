//! Register, condition-code, and register-list rendering.

/// Register name table: `r0..r12`, then the special names `sp/lr/pc`.
pub mod register {
    pub fn name(r: u32) -> String {
        match r {
            13 => "sp".to_string(),
            14 => "lr".to_string(),
            15 => "pc".to_string(),
            n => format!("r{n}"),
        }
    }
}

/// Condition-code mnemonic table for the 4-bit `cond` field.
pub mod condition {
    pub const MNEMONICS: [&str; 14] = [
        "EQ", "NE", "CS", "CC", "MI", "PL", "VS", "VC", "HI", "LS", "GE", "LT", "GT", "LE",
    ];

    pub fn name(cond: u32) -> Option<&'static str> {
        MNEMONICS.get(cond as usize).copied()
    }
}

/// Render a register-list bitmask (bit `n` set ⇒ register `n` present) as
/// `{r0, r1, ...}` in ascending order.
pub fn register_list(mask: u32, count: u32) -> String {
    let mut names = Vec::new();
    for bit in 0..count {
        if mask & (1 << bit) != 0 {
            names.push(register::name(bit));
        }
    }
    format!("{{{}}}", names.join(", "))
}

//! Deterministic opcode assignment table for the Quartet-1 ISA.
//!
//! An instruction word is 8 bits: high nibble opcode, low nibble operand.
//! All 16 opcode values are assigned, so classification is total and no
//! illegal-encoding path exists.

/// Mask selecting one 4-bit field of an instruction word or register.
pub const NIBBLE_MASK: u8 = 0x0F;

/// Number of assigned opcodes (every high-nibble value).
pub const OPCODE_COUNT: usize = 16;

/// Canonical assigned opcode values (`OP` field, bits 7..4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Opcode {
    Nop = 0x0,
    Ldi = 0x1,
    Add = 0x2,
    Sub = 0x3,
    And = 0x4,
    Or = 0x5,
    Xor = 0x6,
    Not = 0x7,
    Shl = 0x8,
    Shr = 0x9,
    Jmp = 0xA,
    Jz = 0xB,
    Jc = 0xC,
    Jnz = 0xD,
    In = 0xE,
    Hlt = 0xF,
}

/// Single source-of-truth opcode/mnemonic table in encoding order.
pub const OPCODE_TABLE: &[(u8, Opcode, &str)] = &[
    (0x0, Opcode::Nop, "NOP"),
    (0x1, Opcode::Ldi, "LDI"),
    (0x2, Opcode::Add, "ADD"),
    (0x3, Opcode::Sub, "SUB"),
    (0x4, Opcode::And, "AND"),
    (0x5, Opcode::Or, "OR"),
    (0x6, Opcode::Xor, "XOR"),
    (0x7, Opcode::Not, "NOT"),
    (0x8, Opcode::Shl, "SHL"),
    (0x9, Opcode::Shr, "SHR"),
    (0xA, Opcode::Jmp, "JMP"),
    (0xB, Opcode::Jz, "JZ"),
    (0xC, Opcode::Jc, "JC"),
    (0xD, Opcode::Jnz, "JNZ"),
    (0xE, Opcode::In, "IN"),
    (0xF, Opcode::Hlt, "HLT"),
];

impl Opcode {
    /// Ordered list of all assigned opcodes.
    pub const ALL: [Self; OPCODE_COUNT] = [
        Self::Nop,
        Self::Ldi,
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::Shl,
        Self::Shr,
        Self::Jmp,
        Self::Jz,
        Self::Jc,
        Self::Jnz,
        Self::In,
        Self::Hlt,
    ];

    /// Classifies a 4-bit opcode field. Total: only the low nibble is
    /// considered, and every nibble value has an assignment.
    #[must_use]
    pub const fn from_nibble(bits: u8) -> Self {
        match bits & NIBBLE_MASK {
            0x0 => Self::Nop,
            0x1 => Self::Ldi,
            0x2 => Self::Add,
            0x3 => Self::Sub,
            0x4 => Self::And,
            0x5 => Self::Or,
            0x6 => Self::Xor,
            0x7 => Self::Not,
            0x8 => Self::Shl,
            0x9 => Self::Shr,
            0xA => Self::Jmp,
            0xB => Self::Jz,
            0xC => Self::Jc,
            0xD => Self::Jnz,
            0xE => Self::In,
            _ => Self::Hlt,
        }
    }

    /// Returns the stable 4-bit encoding value for this opcode.
    #[must_use]
    pub const fn nibble(self) -> u8 {
        self as u8
    }

    /// Returns the assembler mnemonic for this opcode.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Ldi => "LDI",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
            Self::Jmp => "JMP",
            Self::Jz => "JZ",
            Self::Jc => "JC",
            Self::Jnz => "JNZ",
            Self::In => "IN",
            Self::Hlt => "HLT",
        }
    }

    /// Returns true for the branch family (`JMP`, `JZ`, `JC`, `JNZ`).
    #[must_use]
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::Jmp | Self::Jz | Self::Jc | Self::Jnz)
    }

    /// Returns true when the operand nibble carries meaning (immediate
    /// value or absolute branch target).
    #[must_use]
    pub const fn uses_operand(self) -> bool {
        matches!(
            self,
            Self::Ldi | Self::Add | Self::Sub | Self::And | Self::Or | Self::Xor
        ) || self.is_branch()
    }

    /// Returns true when executing this opcode rewrites the carry/zero
    /// flags. Branches, `NOP`, and `HLT` hold both flags across the step.
    #[must_use]
    pub const fn updates_flags(self) -> bool {
        !matches!(self, Self::Nop | Self::Hlt) && !self.is_branch()
    }
}

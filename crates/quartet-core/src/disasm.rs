//! Instruction disassembly for trace and harness output.

use crate::decoder::decode;

/// Renders one instruction word as assembler text.
///
/// The operand nibble is printed only when the opcode consumes it, as an
/// immediate (`LDI 0x3`) or absolute branch target (`JMP 0xE`).
#[must_use]
pub fn disassemble(word: u8) -> String {
    let instruction = decode(word);
    if instruction.opcode.uses_operand() {
        format!("{} 0x{:X}", instruction.opcode.mnemonic(), instruction.operand)
    } else {
        instruction.opcode.mnemonic().to_owned()
    }
}

/// Renders a program image as one line of assembler text per word.
#[must_use]
pub fn disassemble_program(image: &[u8]) -> Vec<String> {
    image.iter().map(|word| disassemble(*word)).collect()
}

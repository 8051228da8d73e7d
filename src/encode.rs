//! Bit-level packing of decoded fields into 32-bit machine words.
//!
//! Both functions are total: fields are masked to their width before
//! shifting, so out-of-range values wrap instead of failing.

/// R-type layout: `rs<<21 | rt<<16 | rd<<11 | shamt<<6 | funct` (opcode 0).
pub fn encode_r(rs: u32, rt: u32, rd: u32, shamt: u32, funct: u32) -> u32 {
    ((rs & 0x1F) << 21) | ((rt & 0x1F) << 16) | ((rd & 0x1F) << 11) | ((shamt & 0x1F) << 6) | (funct & 0x3F)
}

/// I-type layout: `opcode<<26 | rs<<21 | rt<<16 | imm16`. The immediate is
/// truncated to its low 16 bits (two's complement for negative values).
pub fn encode_i(opcode: u32, rs: u32, rt: u32, imm: i32) -> u32 {
    ((opcode & 0x3F) << 26) | ((rs & 0x1F) << 21) | ((rt & 0x1F) << 16) | (imm as u32 & 0xFFFF)
}

use serde::{Deserialize, Serialize};

/// Operand shape of a mnemonic: which fields its tokens populate, in order.
///
/// `Addr` is an absolute jump target (patched with the raw instruction
/// index); `RsAddr`/`RsRtAddr` end in a branch label resolved to a signed
/// PC-relative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstrFormat {
    Rs,
    Rd,
    RsRt,
    RdRs,
    RdRtShamt,
    RdRsRt,
    Addr,
    RsAddr,
    RsRtAddr,
    RtRsImm,
    RtImmRs,
}

impl InstrFormat {
    /// Exact number of operand tokens this format requires (mnemonic excluded).
    pub fn arity(self) -> usize {
        match self {
            InstrFormat::Rs | InstrFormat::Rd | InstrFormat::Addr => 1,
            InstrFormat::RsRt | InstrFormat::RdRs | InstrFormat::RsAddr => 2,
            InstrFormat::RdRtShamt
            | InstrFormat::RdRsRt
            | InstrFormat::RsRtAddr
            | InstrFormat::RtRsImm
            | InstrFormat::RtImmRs => 3,
        }
    }
}

/// Whether the 6-bit code lands in the opcode field (I-type) or the funct
/// field (R-type, opcode 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodingKind {
    Opcode,
    Funct,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub mnemonic: &'static str,
    pub kind: EncodingKind,
    pub code: u32,
    pub format: InstrFormat,
}

const fn funct(mnemonic: &'static str, code: u32, format: InstrFormat) -> CatalogEntry {
    CatalogEntry { mnemonic, kind: EncodingKind::Funct, code, format }
}

const fn opcode(mnemonic: &'static str, code: u32, format: InstrFormat) -> CatalogEntry {
    CatalogEntry { mnemonic, kind: EncodingKind::Opcode, code, format }
}

/// R-type instructions, keyed by funct value.
pub const FUNCT_TABLE: &[CatalogEntry] = &[
    funct("ADD", 0b100000, InstrFormat::RdRsRt),
    funct("AND", 0b100100, InstrFormat::RdRsRt),
    funct("DIV", 0b011010, InstrFormat::RsRt),
    funct("JR", 0b001000, InstrFormat::Rs),
    funct("JALR", 0b001001, InstrFormat::RdRs),
    funct("MFHI", 0b010000, InstrFormat::Rd),
    funct("MFLO", 0b010010, InstrFormat::Rd),
    funct("MULT", 0b011001, InstrFormat::RsRt),
    funct("OR", 0b100101, InstrFormat::RdRsRt),
    funct("SLL", 0b000000, InstrFormat::RdRtShamt),
    funct("SLT", 0b101010, InstrFormat::RdRsRt),
    funct("SLTU", 0b101011, InstrFormat::RdRsRt),
    funct("SRL", 0b000010, InstrFormat::RdRtShamt),
    funct("SUB", 0b100010, InstrFormat::RdRsRt),
    funct("XOR", 0b100110, InstrFormat::RdRsRt),
];

/// I-type instructions, keyed by opcode value.
pub const OPCODE_TABLE: &[CatalogEntry] = &[
    opcode("ADDI", 0b001000, InstrFormat::RtRsImm),
    opcode("ANDI", 0b001100, InstrFormat::RtRsImm),
    opcode("BEQ", 0b000100, InstrFormat::RsRtAddr),
    opcode("BGEZ", 0b001100, InstrFormat::RsAddr),
    opcode("BGTZ", 0b000111, InstrFormat::RsAddr),
    opcode("BLEZ", 0b000110, InstrFormat::RsAddr),
    opcode("BNE", 0b000101, InstrFormat::RsRtAddr),
    opcode("LW", 0b100011, InstrFormat::RtImmRs),
    opcode("SW", 0b101011, InstrFormat::RtImmRs),
    opcode("ORI", 0b001101, InstrFormat::RtRsImm),
    opcode("XORI", 0b001110, InstrFormat::RtRsImm),
    opcode("J", 0b000010, InstrFormat::Addr),
    opcode("JAL", 0b000011, InstrFormat::Addr),
];

/// Look up a normalized (uppercase) mnemonic: funct table first, then
/// opcode table. A mnemonic belongs to exactly one of the two.
pub fn lookup(mnemonic: &str) -> Option<&'static CatalogEntry> {
    FUNCT_TABLE
        .iter()
        .chain(OPCODE_TABLE.iter())
        .find(|e| e.mnemonic == mnemonic)
}

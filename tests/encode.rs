use mips_asm_rs::catalog::{EncodingKind, FUNCT_TABLE, OPCODE_TABLE};
use mips_asm_rs::encode::{encode_i, encode_r};
use mips_asm_rs::{assemble, InstrFormat};

// Expected layouts, written out longhand so a table bug can't hide in both
// sides of the assertion.
fn r_word(rs: u32, rt: u32, rd: u32, shamt: u32, funct: u32) -> u32 {
    (rs << 21) | (rt << 16) | (rd << 11) | (shamt << 6) | funct
}

fn i_word(opcode: u32, rs: u32, rt: u32, imm: u32) -> u32 {
    (opcode << 26) | (rs << 21) | (rt << 16) | (imm & 0xFFFF)
}

#[test]
fn r_type_layout_over_register_range() {
    for &(rs, rt, rd, shamt) in &[(0, 0, 0, 0), (1, 2, 3, 4), (31, 31, 31, 31), (16, 8, 4, 2)] {
        for entry in FUNCT_TABLE {
            assert_eq!(
                encode_r(rs, rt, rd, shamt, entry.code),
                r_word(rs, rt, rd, shamt, entry.code),
                "{} rs={rs} rt={rt} rd={rd} shamt={shamt}",
                entry.mnemonic
            );
        }
    }
}

#[test]
fn i_type_layout_over_register_range() {
    for &(rs, rt, imm) in &[(0u32, 0u32, 0i32), (1, 2, 100), (31, 31, 32767), (5, 9, -1)] {
        for entry in OPCODE_TABLE {
            assert_eq!(
                encode_i(entry.code, rs, rt, imm),
                i_word(entry.code, rs, rt, imm as u32),
                "{} rs={rs} rt={rt} imm={imm}",
                entry.mnemonic
            );
        }
    }
}

#[test]
fn add_line_encodes_rd_rs_rt() {
    // ADD rd rs rt -> funct 0b100000
    let words = assemble("ADD 1 2 3").unwrap();
    assert_eq!(words, vec![r_word(2, 3, 1, 0, 0b100000)]);
}

#[test]
fn sll_line_encodes_shift_amount() {
    let words = assemble("SLL 4 5 12").unwrap();
    assert_eq!(words, vec![r_word(0, 5, 4, 12, 0b000000)]);
}

#[test]
fn jr_and_mfhi_single_register_forms() {
    let words = assemble("JR 31\nMFHI 7").unwrap();
    assert_eq!(words[0], r_word(31, 0, 0, 0, 0b001000));
    assert_eq!(words[1], r_word(0, 0, 7, 0, 0b010000));
}

#[test]
fn addi_line_encodes_rt_rs_imm() {
    // ADDI rt rs imm -> opcode 0b001000
    let words = assemble("ADDI 8 9 -4").unwrap();
    assert_eq!(words, vec![i_word(0b001000, 9, 8, 0xFFFC)]);
}

#[test]
fn lw_and_sw_take_rt_imm_rs_order() {
    let words = assemble("LW 4 100 29\nSW 4 -8 29").unwrap();
    assert_eq!(words[0], i_word(0b100011, 29, 4, 100));
    assert_eq!(words[1], i_word(0b101011, 29, 4, 0xFFF8));
}

#[test]
fn mnemonics_are_case_insensitive() {
    assert_eq!(assemble("add 1 2 3").unwrap(), assemble("ADD 1 2 3").unwrap());
    assert_eq!(assemble("Sw 4 8 29").unwrap(), assemble("SW 4 8 29").unwrap());
}

#[test]
fn every_catalog_entry_round_trips_through_assemble() {
    // one representative line per mnemonic, derived from its format
    for entry in FUNCT_TABLE.iter().chain(OPCODE_TABLE.iter()) {
        let line = match entry.format {
            InstrFormat::Rs | InstrFormat::Rd => format!("{} 3", entry.mnemonic),
            InstrFormat::RsRt | InstrFormat::RdRs => format!("{} 3 4", entry.mnemonic),
            InstrFormat::RdRtShamt | InstrFormat::RdRsRt | InstrFormat::RtRsImm | InstrFormat::RtImmRs => {
                format!("{} 3 4 5", entry.mnemonic)
            }
            InstrFormat::Addr => format!("start\n{} start", entry.mnemonic),
            InstrFormat::RsAddr => format!("start\n{} 3 start", entry.mnemonic),
            InstrFormat::RsRtAddr => format!("start\n{} 3 4 start", entry.mnemonic),
        };
        let words = assemble(&line).unwrap_or_else(|e| panic!("{}: {e:?}", entry.mnemonic));
        assert_eq!(words.len(), 1, "{}", entry.mnemonic);
        match entry.kind {
            EncodingKind::Funct => {
                assert_eq!(words[0] >> 26, 0, "{} has nonzero opcode", entry.mnemonic);
                assert_eq!(words[0] & 0x3F, entry.code, "{} funct", entry.mnemonic);
            }
            EncodingKind::Opcode => {
                assert_eq!(words[0] >> 26, entry.code, "{} opcode", entry.mnemonic);
            }
        }
    }
}

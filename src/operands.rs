use serde::{Deserialize, Serialize};

use crate::catalog::InstrFormat;
use crate::error::AsmError;

/// A label operand left for the resolver: absolute jump target or
/// PC-relative branch target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRef {
    pub label: String,
    pub relative: bool,
}

/// Field values decoded from one instruction line. Fields a format does
/// not populate stay 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operands {
    pub rs: u32,
    pub rt: u32,
    pub rd: u32,
    pub shamt: u32,
    pub imm: i32,
    pub target: Option<LabelRef>,
}

/// Assign operand tokens to fields per the positional mapping of `format`.
///
/// Arity is validated before any token is parsed. Register numbers and
/// shift amounts parse as unsigned decimal, immediates as signed decimal;
/// the label token of an address-bearing format is stored verbatim.
pub fn decode(mnemonic: &str, format: InstrFormat, args: &[&str]) -> Result<Operands, AsmError> {
    if args.len() != format.arity() {
        return Err(AsmError::ArityMismatch {
            mnemonic: mnemonic.to_string(),
            expected: format.arity(),
            actual: args.len(),
        });
    }

    let reg = |tok: &str| -> Result<u32, AsmError> {
        tok.parse::<u32>().map_err(|_| AsmError::MalformedOperand {
            mnemonic: mnemonic.to_string(),
            token: tok.to_string(),
        })
    };
    let imm = |tok: &str| -> Result<i32, AsmError> {
        tok.parse::<i32>().map_err(|_| AsmError::MalformedOperand {
            mnemonic: mnemonic.to_string(),
            token: tok.to_string(),
        })
    };
    let label = |tok: &str, relative: bool| LabelRef { label: tok.to_string(), relative };

    let mut ops = Operands::default();
    match format {
        InstrFormat::Rs => {
            ops.rs = reg(args[0])?;
        }
        InstrFormat::Rd => {
            ops.rd = reg(args[0])?;
        }
        InstrFormat::RsRt => {
            ops.rs = reg(args[0])?;
            ops.rt = reg(args[1])?;
        }
        InstrFormat::RdRs => {
            ops.rd = reg(args[0])?;
            ops.rs = reg(args[1])?;
        }
        InstrFormat::RdRtShamt => {
            ops.rd = reg(args[0])?;
            ops.rt = reg(args[1])?;
            ops.shamt = reg(args[2])?;
        }
        InstrFormat::RdRsRt => {
            ops.rd = reg(args[0])?;
            ops.rs = reg(args[1])?;
            ops.rt = reg(args[2])?;
        }
        InstrFormat::Addr => {
            ops.target = Some(label(args[0], false));
        }
        InstrFormat::RsAddr => {
            ops.rs = reg(args[0])?;
            ops.target = Some(label(args[1], true));
        }
        InstrFormat::RsRtAddr => {
            ops.rs = reg(args[0])?;
            ops.rt = reg(args[1])?;
            ops.target = Some(label(args[2], true));
        }
        InstrFormat::RtRsImm => {
            ops.rt = reg(args[0])?;
            ops.rs = reg(args[1])?;
            ops.imm = imm(args[2])?;
        }
        InstrFormat::RtImmRs => {
            ops.rt = reg(args[0])?;
            ops.imm = imm(args[1])?;
            ops.rs = reg(args[2])?;
        }
    }
    Ok(ops)
}

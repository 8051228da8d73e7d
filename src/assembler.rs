use crate::catalog::{self, EncodingKind};
use crate::encode::{encode_i, encode_r};
use crate::error::AsmError;
use crate::labels::LabelTable;
use crate::operands;
use crate::resolve::{resolve, PendingRef};
use crate::tokenizer::tokenize;

/// Assemble a whole source text into its machine-word sequence.
///
/// Pass 1 walks the lines: blank lines are skipped, single-token lines
/// declare a label at the next instruction index, longer lines are decoded
/// and encoded into a provisional word. Any structural error (unknown
/// mnemonic, operand count, malformed operand) aborts the run right away.
/// Pass 2 patches every label-referencing word against the completed
/// table, reporting all unresolved labels at once. On any error, no words
/// are produced.
pub fn assemble(source: &str) -> Result<Vec<u32>, Vec<AsmError>> {
    let mut words: Vec<u32> = Vec::new();
    let mut pending: Vec<PendingRef> = Vec::new();
    let mut labels = LabelTable::new();

    for line in source.lines() {
        let tokens = tokenize(line);
        match tokens.as_slice() {
            [] => {}
            [name] => {
                // label binds to the next instruction line
                labels.declare(name, words.len());
            }
            [mnemonic, args @ ..] => {
                let mnemonic = mnemonic.to_ascii_uppercase();
                let Some(entry) = catalog::lookup(&mnemonic) else {
                    return Err(vec![AsmError::UnknownMnemonic { mnemonic }]);
                };
                let ops = operands::decode(&mnemonic, entry.format, args).map_err(|e| vec![e])?;
                let word = match entry.kind {
                    EncodingKind::Funct => encode_r(ops.rs, ops.rt, ops.rd, ops.shamt, entry.code),
                    EncodingKind::Opcode => encode_i(entry.code, ops.rs, ops.rt, ops.imm),
                };
                if let Some(target) = ops.target {
                    pending.push(PendingRef {
                        index: words.len(),
                        label: target.label,
                        relative: target.relative,
                    });
                }
                tracing::trace!(index = words.len(), %mnemonic, word, "encoded");
                words.push(word);
            }
        }
    }

    tracing::debug!(
        instructions = words.len(),
        labels = labels.len(),
        pending = pending.len(),
        "pass 1 complete"
    );

    resolve(&pending, &labels, &mut words)?;
    Ok(words)
}

use serde::{Deserialize, Serialize};

use crate::error::AsmError;
use crate::labels::LabelTable;

/// One instruction whose address bits are still zero and await a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRef {
    /// Index of the instruction in the word sequence.
    pub index: usize,
    pub label: String,
    /// Absolute jump target (false) or PC-relative branch offset (true).
    pub relative: bool,
}

/// Second pass: patch every pending word against the completed label table.
///
/// Missing labels do not stop the walk; every unresolved reference is
/// collected and the whole resolution fails if any were found. Relative
/// targets use the delay-slot convention: `target - index - 1`, encoded as
/// 16-bit two's complement.
pub fn resolve(
    pending: &[PendingRef],
    labels: &LabelTable,
    words: &mut [u32],
) -> Result<(), Vec<AsmError>> {
    let mut errors = Vec::new();
    for p in pending {
        let Some(target) = labels.get(&p.label) else {
            errors.push(AsmError::UnresolvedLabel { label: p.label.clone(), index: p.index });
            continue;
        };
        let bits = if p.relative {
            let offset = target as i64 - p.index as i64 - 1;
            (offset as u32) & 0xFFFF
        } else {
            target as u32
        };
        tracing::trace!(index = p.index, label = %p.label, relative = p.relative, bits, "patched");
        words[p.index] |= bits;
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Everything that can go wrong while assembling one program.
///
/// Structural errors (unknown mnemonic, arity, malformed operand) abort
/// pass 1 immediately; `UnresolvedLabel` is accumulated across the whole
/// program by the resolver before the run fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic { mnemonic: String },
    #[error("`{mnemonic}` expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        mnemonic: String,
        expected: usize,
        actual: usize,
    },
    #[error("malformed operand `{token}` for `{mnemonic}`")]
    MalformedOperand { mnemonic: String, token: String },
    #[error("unresolved label `{label}` referenced by instruction {index}")]
    UnresolvedLabel { label: String, index: usize },
}

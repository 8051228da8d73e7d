pub mod assembler;
pub mod catalog;
pub mod encode;
pub mod error;
pub mod labels;
pub mod operands;
pub mod resolve;
pub mod tokenizer;

pub use assembler::assemble;
pub use catalog::{lookup, CatalogEntry, EncodingKind, InstrFormat};
pub use error::AsmError;
pub use labels::LabelTable;
pub use resolve::PendingRef;

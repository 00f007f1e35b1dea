// Text preparation: loading documents into normalized form and splitting
// them into word tokens.

pub mod loader;
pub mod tokenize;

pub use loader::{normalize, DocumentLoader, FsLoader, MemoryLoader, NormalizedText};
pub use tokenize::text_to_list;

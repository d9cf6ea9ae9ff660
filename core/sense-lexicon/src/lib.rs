//! Lexical knowledge base and rule-based sense selection.

pub mod disambiguate;
pub mod error;
pub mod knowledge;

pub use disambiguate::{disambiguate, Disambiguator, TriggerMatching, TriggerRule};
pub use error::LexiconError;
pub use knowledge::{compile_lexicon, KnowledgeBase};

pub mod error;
pub mod frame;
pub mod parser;
pub mod structural;
pub mod tagger;
pub mod tokenizer;

pub use error::RelationParseError;
pub use frame::extract_frame;
pub use parser::{parse_relation, parse_relations};
pub use structural::{detect_structural_ambiguity, StructuralDetector, StructuralRule};
pub use tagger::{tag, TagRule, Tagger};
pub use tokenizer::{tokenize, Tokenizer};

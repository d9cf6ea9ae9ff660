use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationParseError {
    #[error("line {line}: malformed relation '{text}' (expected pred(arg1,arg2))")]
    Malformed { line: usize, text: String },
}

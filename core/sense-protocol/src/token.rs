use alloc::string::String;

use crate::pos::PartOfSpeech;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Byte range of a token inside the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A lowercase word with its position in the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Token {
    pub text: String,
    /// Position in the token sequence (0-based).
    pub index: usize,
    pub span: Span,
}

impl Token {
    pub fn new(text: impl Into<String>, index: usize, span: Span) -> Self {
        Self {
            text: text.into(),
            index,
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct TaggedToken {
    pub token: Token,
    pub pos: PartOfSpeech,
}

impl TaggedToken {
    pub fn new(token: Token, pos: PartOfSpeech) -> Self {
        Self { token, pos }
    }

    pub fn text(&self) -> &str {
        &self.token.text
    }
}

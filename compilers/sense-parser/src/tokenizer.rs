use serde::{Deserialize, Serialize};
use sense_protocol::{Span, Token};

use crate::parser::{is_word_char, scan_words};

/// Tokenization strategy for the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tokenizer {
    /// Maximal runs of word characters; everything else separates.
    #[default]
    Word,
    /// Whitespace-separated chunks with leading/trailing punctuation
    /// trimmed. Inner punctuation is kept (`don't`, `e-mail`).
    Whitespace,
}

impl Tokenizer {
    /// Text → lowercase tokens. Spans point into `input`.
    ///
    /// Boundaries are found on the original text and each token is then
    /// lowercased on its own, so a character whose lowercase form grows
    /// (`İ` → `i̇`) never shifts spans or splits a word.
    pub fn tokenize(self, input: &str) -> Vec<Token> {
        let pieces = match self {
            Tokenizer::Word => scan_words(input),
            Tokenizer::Whitespace => split_chunks(input),
        };

        pieces
            .into_iter()
            .enumerate()
            .map(|(index, (span, text))| Token::new(text.to_lowercase(), index, span))
            .collect()
    }
}

fn split_chunks(input: &str) -> Vec<(Span, &str)> {
    input
        .split_whitespace()
        .filter_map(|chunk| {
            let chunk_start = chunk.as_ptr() as usize - input.as_ptr() as usize;
            let leading = chunk.len() - chunk.trim_start_matches(|c| !is_word_char(c)).len();
            let text = chunk.trim_matches(|c| !is_word_char(c));
            if text.is_empty() {
                return None;
            }
            let start = chunk_start + leading;
            Some((Span::new(start, start + text.len()), text))
        })
        .collect()
}

/// Tokenizes with the default word-boundary strategy.
pub fn tokenize(sentence: &str) -> Vec<Token> {
    Tokenizer::Word.tokenize(sentence)
}
